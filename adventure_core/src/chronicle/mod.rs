//! Chronicle - the narrative of a run, one event per thing that happened.
//!
//! The engine never prints. Each step records a [`NarrativeEvent`] and the
//! caller decides how to render the [`Chronicle`].

use dungeon_rules::{ArtifactEffect, ChallengeKind};
use serde::{Deserialize, Serialize};

/// Something worth telling the player about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NarrativeEvent {
    /// Current stats, shown at the start and after an artifact roll.
    Status { health: i32, attack: i32 },

    PlayerStrikes,
    MonsterRetaliates { damage: i32 },
    MonsterDefeated,
    PlayerDefeated,

    ItemAcquired { item: String },
    RoomEntered { room: String },

    /// A puzzle or trap played out; `message` is the narration picked.
    ChallengeResolved {
        kind: ChallengeKind,
        message: String,
        penalty: i32,
    },

    /// A puzzle or trap room with nothing configured behind it.
    ChallengeWithoutData { kind: ChallengeKind },

    ArtifactFound { id: String, description: String },
    EffectApplied { effect: ArtifactEffect, power: i32 },
    NothingOfInterest,

    ClueDiscovered { clue: String },
    ClueAlreadyKnown { clue: String },

    /// Flavor text when the staff of wisdom is carried into a library.
    StaffInsight,

    /// Traversal stopped because the player went down in this room.
    Collapse { room: String },
}

impl std::fmt::Display for NarrativeEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NarrativeEvent::Status { health, attack } => {
                write!(f, "Player Status: Health = {}, Attack = {}", health, attack)
            }
            NarrativeEvent::PlayerStrikes => write!(f, "You attack the monster!"),
            NarrativeEvent::MonsterRetaliates { .. } => write!(f, "The monster fights back!"),
            NarrativeEvent::MonsterDefeated => write!(f, "You defeated the monster!"),
            NarrativeEvent::PlayerDefeated => write!(f, "You have been defeated..."),
            NarrativeEvent::ItemAcquired { item } => write!(f, "You acquired a {}!", item),
            NarrativeEvent::RoomEntered { room } => write!(f, "Entering {}", room),
            NarrativeEvent::ChallengeResolved {
                kind,
                message,
                penalty,
            } => {
                write!(f, "Encountered a {}: {}", kind, message)?;
                if *penalty > 0 {
                    write!(f, " You lose {} health.", penalty)?;
                }
                Ok(())
            }
            NarrativeEvent::ChallengeWithoutData { kind } => {
                write!(f, "Encountered a {}, but no challenge data.", kind)
            }
            NarrativeEvent::ArtifactFound { id, description } => {
                write!(f, "You found {}: {}", id, description)
            }
            NarrativeEvent::EffectApplied { effect, power } => match effect {
                ArtifactEffect::IncreasesHealth => {
                    write!(f, "Your health increases by {}!", power)
                }
                ArtifactEffect::EnhancesAttack => {
                    write!(f, "Your attack increases by {}!", power)
                }
                ArtifactEffect::SolvesPuzzles => {
                    write!(f, "You sense the artifact's wisdom, but nothing changes.")
                }
            },
            NarrativeEvent::NothingOfInterest => write!(f, "You found nothing of interest."),
            NarrativeEvent::ClueDiscovered { clue } => {
                write!(f, "You discovered a new clue: {}", clue)
            }
            NarrativeEvent::ClueAlreadyKnown { .. } => write!(f, "You already know this clue."),
            NarrativeEvent::StaffInsight => write!(
                f,
                "With the Staff of Wisdom, you understand the meaning of the clues \
                 and can bypass a puzzle challenge!"
            ),
            NarrativeEvent::Collapse { room } => {
                write!(f, "You collapse in {}, too wounded to go on.", room)
            }
        }
    }
}

/// Ordered narrative of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chronicle {
    events: Vec<NarrativeEvent>,
}

impl Chronicle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn record(&mut self, event: NarrativeEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[NarrativeEvent] {
        &self.events
    }

    /// Render every event as a line of text.
    pub fn lines(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }

    /// Count events matching a predicate.
    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&NarrativeEvent) -> bool,
    {
        self.events.iter().filter(|e| predicate(e)).count()
    }

    pub fn last(&self) -> Option<&NarrativeEvent> {
        self.events.last()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_challenge_narration() {
        let event = NarrativeEvent::ChallengeResolved {
            kind: ChallengeKind::Trap,
            message: "Triggered trap!".to_string(),
            penalty: 10,
        };
        assert_eq!(
            event.to_string(),
            "Encountered a trap: Triggered trap! You lose 10 health."
        );

        let free = NarrativeEvent::ChallengeResolved {
            kind: ChallengeKind::Puzzle,
            message: "Solved puzzle!".to_string(),
            penalty: 0,
        };
        assert_eq!(free.to_string(), "Encountered a puzzle: Solved puzzle!");
    }

    #[test]
    fn test_no_data_narration() {
        let event = NarrativeEvent::ChallengeWithoutData {
            kind: ChallengeKind::Puzzle,
        };
        assert_eq!(event.to_string(), "Encountered a puzzle, but no challenge data.");
    }

    #[test]
    fn test_artifact_narration() {
        let found = NarrativeEvent::ArtifactFound {
            id: "ring_of_strength".to_string(),
            description: "A powerful ring.".to_string(),
        };
        assert_eq!(found.to_string(), "You found ring_of_strength: A powerful ring.");

        let effect = NarrativeEvent::EffectApplied {
            effect: ArtifactEffect::EnhancesAttack,
            power: 10,
        };
        assert_eq!(effect.to_string(), "Your attack increases by 10!");
    }

    #[test]
    fn test_chronicle_lines() {
        let mut chronicle = Chronicle::new();
        chronicle.record(NarrativeEvent::RoomEntered {
            room: "Grand Hall".to_string(),
        });
        chronicle.record(NarrativeEvent::ItemAcquired {
            item: "healing potion".to_string(),
        });

        assert_eq!(
            chronicle.lines(),
            vec!["Entering Grand Hall", "You acquired a healing potion!"]
        );
        assert_eq!(
            chronicle.count(|e| matches!(e, NarrativeEvent::ItemAcquired { .. })),
            1
        );
    }
}
