//! Clues module - what the player has learned during a run.
//!
//! - **ClueLedger**: the set of distinct clues discovered so far
//! - **ClueOutcome**: whether recording a clue added anything

mod ledger;

pub use ledger::*;
