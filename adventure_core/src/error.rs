//! Errors that abort a run.
//!
//! Defeat and collapse are not errors: they end the run normally and show
//! up in the report. Only a malformed dungeon or an impossible fight stops
//! a run without one.

use dungeon_rules::StructuralError;
use thiserror::Error;

/// A fight that can never finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CombatError {
    #[error("player attack must be positive to fight, got {attack}")]
    NonPositiveAttack { attack: i32 },
}

/// Fatal run errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError {
    #[error("combat precondition failed: {0}")]
    Combat(#[from] CombatError),

    #[error("malformed dungeon: {0}")]
    Structure(#[from] StructuralError),
}

pub type RunResult<T> = std::result::Result<T, RunError>;
