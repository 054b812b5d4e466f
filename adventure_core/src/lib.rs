//! # Adventure Core
//!
//! The resolution engine of Delve. This crate takes the data defined in
//! `dungeon_rules`, plays a run against it, and reports what happened.
//!
//! ## Core Components
//!
//! - **encounters**: Combat, puzzle/trap, artifact and library resolvers
//! - **traversal**: The run orchestrator, its configuration and report
//! - **clues**: The ledger of discovered clues
//! - **chronicle**: Narrative events emitted at every step
//!
//! ## Design Philosophy
//!
//! - **Owned State**: A run owns its player, inventory, ledger and catalog; resolvers borrow them
//! - **Injected Randomness**: Every draw goes through a caller-supplied `RandomSource`
//! - **Silent Engine**: Nothing is printed; the caller renders the chronicle and report

pub mod chronicle;
pub mod clues;
pub mod encounters;
pub mod error;
pub mod traversal;

pub use chronicle::*;
pub use clues::*;
pub use encounters::*;
pub use error::*;
pub use traversal::*;
