//! Game mechanics: challenge kinds, artifact effects and randomness.

mod random;

pub use random::*;

use serde::{Deserialize, Serialize};

/// Fixed damage the monster deals each time it survives a strike.
pub const MONSTER_RETALIATION: i32 = 10;

/// Chance that an artifact turns up after a won fight.
pub const ARTIFACT_DISCOVERY_CHANCE: f64 = 0.3;

/// Number of distinct clues drawn per library visit.
pub const CLUES_PER_LIBRARY_VISIT: usize = 2;

/// The category of obstacle waiting in a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChallengeKind {
    #[default]
    None,
    Puzzle,
    Trap,
    /// Reveals clues instead of costing health.
    Library,
}

impl ChallengeKind {
    /// Check if this kind resolves through a success/fail outcome.
    pub fn is_hazard(&self) -> bool {
        matches!(self, ChallengeKind::Puzzle | ChallengeKind::Trap)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChallengeKind::None => "none",
            ChallengeKind::Puzzle => "puzzle",
            ChallengeKind::Trap => "trap",
            ChallengeKind::Library => "library",
        }
    }
}

impl std::fmt::Display for ChallengeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What an artifact does to the player when it is discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactEffect {
    IncreasesHealth,
    EnhancesAttack,
    /// Flavor only. Has no mechanical effect.
    SolvesPuzzles,
}

impl ArtifactEffect {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactEffect::IncreasesHealth => "increases health",
            ArtifactEffect::EnhancesAttack => "enhances attack",
            ArtifactEffect::SolvesPuzzles => "solves puzzles",
        }
    }
}

impl std::fmt::Display for ArtifactEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
