//! The end-of-run report.

use dungeon_rules::{Inventory, PlayerState, RunId};
use serde::{Deserialize, Serialize};

use crate::chronicle::Chronicle;
use crate::clues::ClueLedger;
use crate::encounters::CombatOutcome;

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    /// Every room was visited.
    Completed,
    /// The player went down in `room` and the rest were skipped.
    Collapsed { room: String },
    /// The monster won; no room was entered.
    Defeated,
}

/// Final state of a run, handed back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub run_id: RunId,
    pub outcome: RunOutcome,
    pub combat: Option<CombatOutcome>,
    pub player: PlayerState,
    pub inventory: Inventory,
    pub clues: ClueLedger,
    /// Artifact ids never found, in ascending order.
    pub remaining_artifacts: Vec<String>,
    pub chronicle: Chronicle,
}

impl RunReport {
    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl std::fmt::Display for RunReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "--- Game End ---")?;
        writeln!(f, "{}", self.player)?;

        writeln!(f, "Final Inventory:")?;
        if self.inventory.is_empty() {
            writeln!(f, "Your inventory is empty.")?;
        } else {
            writeln!(f, "Your inventory:")?;
            for (index, item) in self.inventory.iter().enumerate() {
                writeln!(f, "{}. {}", index + 1, item)?;
            }
        }

        writeln!(f, "Clues:")?;
        if self.clues.is_empty() {
            write!(f, "No clues.")
        } else {
            let lines: Vec<String> = self.clues.iter().map(|clue| format!("- {}", clue)).collect();
            write!(f, "{}", lines.join("\n"))
        }
    }
}
