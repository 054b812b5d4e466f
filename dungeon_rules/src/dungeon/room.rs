//! Room definitions.

use serde::{Deserialize, Serialize};

use crate::error::StructuralError;
use crate::mechanics::ChallengeKind;

/// The two possible narrations of a puzzle or trap, and what it costs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomOutcome {
    pub success: String,
    pub failure: String,
    /// Health lost on entering the challenge, whichever way it goes.
    pub penalty: i32,
}

impl RoomOutcome {
    pub fn new(success: impl Into<String>, failure: impl Into<String>, penalty: i32) -> Self {
        Self {
            success: success.into(),
            failure: failure.into(),
            penalty,
        }
    }
}

/// One room of the dungeon. Rooms are immutable configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    #[serde(default)]
    pub granted_item: Option<String>,
    #[serde(default)]
    pub challenge: ChallengeKind,
    /// Only meaningful for puzzles and traps.
    #[serde(default)]
    pub outcome: Option<RoomOutcome>,
}

impl Room {
    /// Create an empty room with no item and no challenge.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            granted_item: None,
            challenge: ChallengeKind::None,
            outcome: None,
        }
    }

    /// Set the item granted on entry.
    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.granted_item = Some(item.into());
        self
    }

    /// Make this a puzzle room.
    pub fn with_puzzle(mut self, outcome: RoomOutcome) -> Self {
        self.challenge = ChallengeKind::Puzzle;
        self.outcome = Some(outcome);
        self
    }

    /// Make this a trap room.
    pub fn with_trap(mut self, outcome: RoomOutcome) -> Self {
        self.challenge = ChallengeKind::Trap;
        self.outcome = Some(outcome);
        self
    }

    /// Set the challenge kind without touching the outcome.
    pub fn with_challenge(mut self, challenge: ChallengeKind) -> Self {
        self.challenge = challenge;
        self
    }

    /// Make this a library room.
    pub fn library(name: impl Into<String>) -> Self {
        Self::new(name).with_challenge(ChallengeKind::Library)
    }

    /// Check the room's shape. `index` is its position in the sequence.
    ///
    /// A puzzle or trap without an outcome is allowed (it narrates and
    /// costs nothing); an outcome on any other kind is not.
    pub fn validate(&self, index: usize) -> Result<(), StructuralError> {
        if self.name.trim().is_empty() {
            return Err(StructuralError::EmptyRoomName { index });
        }

        if matches!(&self.granted_item, Some(item) if item.trim().is_empty()) {
            return Err(StructuralError::EmptyItemName {
                room: self.name.clone(),
            });
        }

        match (&self.outcome, self.challenge.is_hazard()) {
            (Some(_), false) => Err(StructuralError::UnexpectedOutcome {
                room: self.name.clone(),
                kind: self.challenge,
            }),
            (Some(outcome), true) if outcome.penalty < 0 => Err(StructuralError::NegativePenalty {
                room: self.name.clone(),
                penalty: outcome.penalty,
            }),
            _ => Ok(()),
        }
    }
}

/// Validate a whole room sequence, stopping at the first bad room.
pub fn validate_rooms(rooms: &[Room]) -> Result<(), StructuralError> {
    rooms
        .iter()
        .enumerate()
        .try_for_each(|(index, room)| room.validate(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_builder() {
        let room = Room::new("Dusty Library")
            .with_item("key")
            .with_puzzle(RoomOutcome::new("Solved puzzle!", "Puzzle unsolved.", 5));

        assert_eq!(room.granted_item.as_deref(), Some("key"));
        assert_eq!(room.challenge, ChallengeKind::Puzzle);
        assert_eq!(room.outcome.as_ref().map(|o| o.penalty), Some(5));
        assert!(room.validate(0).is_ok());
    }

    #[test]
    fn test_hazard_without_outcome_is_valid() {
        let room = Room::new("Empty Pit").with_challenge(ChallengeKind::Trap);
        assert!(room.validate(0).is_ok());
    }

    #[test]
    fn test_outcome_on_library_is_rejected() {
        let mut room = Room::library("Cryptic Library");
        room.outcome = Some(RoomOutcome::new("a", "b", 1));

        assert_eq!(
            room.validate(4),
            Err(StructuralError::UnexpectedOutcome {
                room: "Cryptic Library".to_string(),
                kind: ChallengeKind::Library,
            })
        );
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let room = Room::new("   ");
        assert_eq!(room.validate(2), Err(StructuralError::EmptyRoomName { index: 2 }));
    }

    #[test]
    fn test_empty_item_is_rejected() {
        let room = Room::new("Hall").with_item("");
        assert!(matches!(
            room.validate(0),
            Err(StructuralError::EmptyItemName { .. })
        ));
    }

    #[test]
    fn test_negative_penalty_is_rejected() {
        let room = Room::new("Dusty Library")
            .with_puzzle(RoomOutcome::new("Solved puzzle!", "Puzzle unsolved.", -5));
        assert!(matches!(
            room.validate(0),
            Err(StructuralError::NegativePenalty { penalty: -5, .. })
        ));
    }

    #[test]
    fn test_validate_rooms_reports_position() {
        let rooms = vec![Room::new("Hall"), Room::new("")];
        assert_eq!(
            validate_rooms(&rooms),
            Err(StructuralError::EmptyRoomName { index: 1 })
        );
    }
}
