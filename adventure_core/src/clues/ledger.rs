//! The clue ledger.

use serde::{Deserialize, Serialize};

use crate::chronicle::{Chronicle, NarrativeEvent};

/// Result of offering a clue to the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClueOutcome {
    Discovered,
    AlreadyKnown,
}

/// Distinct clues discovered during a run, in discovery order.
///
/// Adding is idempotent and nothing is ever removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClueLedger {
    clues: Vec<String>,
}

impl ClueLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a clue unless it is already known. Mutates in place.
    pub fn add(&mut self, clue: &str) -> ClueOutcome {
        if self.contains(clue) {
            return ClueOutcome::AlreadyKnown;
        }
        self.clues.push(clue.to_string());
        ClueOutcome::Discovered
    }

    /// Add a clue and narrate the result.
    pub fn record(&mut self, clue: &str, chronicle: &mut Chronicle) -> ClueOutcome {
        let outcome = self.add(clue);
        let event = match outcome {
            ClueOutcome::Discovered => {
                tracing::debug!(clue, "clue discovered");
                NarrativeEvent::ClueDiscovered {
                    clue: clue.to_string(),
                }
            }
            ClueOutcome::AlreadyKnown => {
                tracing::debug!(clue, "clue already known");
                NarrativeEvent::ClueAlreadyKnown {
                    clue: clue.to_string(),
                }
            }
        };
        chronicle.record(event);
        outcome
    }

    pub fn contains(&self, clue: &str) -> bool {
        self.clues.iter().any(|known| known == clue)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.clues.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.clues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clues.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_idempotent() {
        let mut once = ClueLedger::new();
        once.add("Beware the shadows.");

        let mut twice = once.clone();
        assert_eq!(twice.add("Beware the shadows."), ClueOutcome::AlreadyKnown);

        assert_eq!(once, twice);
        assert_eq!(twice.len(), 1);
    }

    #[test]
    fn test_discovery_order() {
        let mut ledger = ClueLedger::new();
        ledger.add("The key lies with the gnome.");
        ledger.add("Beware the shadows.");
        ledger.add("The key lies with the gnome.");

        let clues: Vec<_> = ledger.iter().collect();
        assert_eq!(clues, ["The key lies with the gnome.", "Beware the shadows."]);
    }

    #[test]
    fn test_record_narrates() {
        let mut ledger = ClueLedger::new();
        let mut chronicle = Chronicle::new();

        assert_eq!(ledger.record("Beware the shadows.", &mut chronicle), ClueOutcome::Discovered);
        assert_eq!(ledger.record("Beware the shadows.", &mut chronicle), ClueOutcome::AlreadyKnown);

        assert_eq!(
            chronicle.lines(),
            vec![
                "You discovered a new clue: Beware the shadows.",
                "You already know this clue.",
            ]
        );
    }
}
