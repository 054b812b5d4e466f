//! Encounters - the resolvers a run dispatches to.
//!
//! - **combat**: the single scripted monster fight
//! - **challenge**: puzzle and trap rooms
//! - **discovery**: finding and consuming artifacts
//! - **library**: clue rooms
//!
//! Resolvers mutate the player, inventory and ledger they are handed in
//! place and record what happened in the run's chronicle.

mod challenge;
mod combat;
mod discovery;
mod library;

pub use challenge::*;
pub use combat::*;
pub use discovery::*;
pub use library::*;
