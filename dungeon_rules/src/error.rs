//! Error types for dungeon data.

use thiserror::Error;

use crate::mechanics::ChallengeKind;

/// A piece of dungeon data violates its required shape.
///
/// These are fatal: a run never starts from a layout that fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    #[error("room #{index} has an empty name")]
    EmptyRoomName { index: usize },

    #[error("room '{room}' grants an item with an empty name")]
    EmptyItemName { room: String },

    #[error("room '{room}' is a {kind} room but carries a challenge outcome")]
    UnexpectedOutcome { room: String, kind: ChallengeKind },

    #[error("room '{room}' has a negative health penalty ({penalty})")]
    NegativePenalty { room: String, penalty: i32 },

    #[error("artifact id must not be empty")]
    EmptyArtifactId,

    #[error("artifact '{id}' has negative power ({power})")]
    NegativePower { id: String, power: i32 },

    #[error("artifact '{id}' is defined more than once")]
    DuplicateArtifact { id: String },

    #[error("library clue pool needs at least {required} clues, found {found}")]
    ClueShortage { required: usize, found: usize },

    #[error("library clue '{clue}' appears more than once")]
    DuplicateClue { clue: String },
}

/// Errors raised while loading a dungeon layout.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("layout parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid layout: {0}")]
    Structure(#[from] StructuralError),
}

pub type LayoutResult<T> = std::result::Result<T, LayoutError>;
