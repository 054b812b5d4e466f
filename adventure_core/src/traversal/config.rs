//! Run configuration.

use dungeon_rules::{PlayerState, ARTIFACT_DISCOVERY_CHANCE, MONSTER_RETALIATION};
use serde::{Deserialize, Serialize};

/// Everything about a run that is not dungeon data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Stats the player starts with.
    pub player: PlayerState,

    /// Starting health of the monster guarding the entrance.
    pub monster_health: i32,

    /// Whether the monster guards treasure. `None` flips a fair coin when
    /// the run starts.
    pub treasure_if_won: Option<bool>,

    /// Damage the monster deals each time it survives a strike.
    pub retaliation_damage: i32,

    /// Chance (0.0-1.0) of an artifact roll after a won fight.
    pub artifact_chance: f64,

    /// Stop traversing as soon as the player is down after a room.
    pub halt_on_collapse: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            player: PlayerState::default(),
            monster_health: 70,
            treasure_if_won: None,
            retaliation_damage: MONSTER_RETALIATION,
            artifact_chance: ARTIFACT_DISCOVERY_CHANCE,
            halt_on_collapse: true,
        }
    }
}

impl RunConfig {
    pub fn with_player(mut self, player: PlayerState) -> Self {
        self.player = player;
        self
    }

    pub fn with_monster_health(mut self, monster_health: i32) -> Self {
        self.monster_health = monster_health;
        self
    }

    /// Fix the treasure flag instead of flipping for it.
    pub fn with_treasure(mut self, treasure_if_won: bool) -> Self {
        self.treasure_if_won = Some(treasure_if_won);
        self
    }

    pub fn with_retaliation_damage(mut self, damage: i32) -> Self {
        self.retaliation_damage = damage;
        self
    }

    /// Set the artifact chance, clamped to `[0, 1]`.
    pub fn with_artifact_chance(mut self, chance: f64) -> Self {
        self.artifact_chance = chance.clamp(0.0, 1.0);
        self
    }

    pub fn with_halt_on_collapse(mut self, halt: bool) -> Self {
        self.halt_on_collapse = halt;
        self
    }
}
