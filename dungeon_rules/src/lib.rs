//! # Dungeon Rules
//!
//! The rules crate for Delve - player state, inventory, room and artifact
//! definitions, the dungeon layout, and the random source every stochastic
//! decision flows through. This crate holds data and mechanics only; the
//! resolution engine lives in `adventure_core`.

pub mod dungeon;
pub mod entities;
pub mod error;
pub mod mechanics;

pub use dungeon::*;
pub use entities::*;
pub use error::*;
pub use mechanics::*;
