//! The monster fight.

use dungeon_rules::{PlayerState, MONSTER_RETALIATION};
use serde::{Deserialize, Serialize};

use crate::chronicle::{Chronicle, NarrativeEvent};
use crate::error::CombatError;

/// How the fight ended.
///
/// Losing is its own variant: a victory without treasure is not a defeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatOutcome {
    Victory { treasure: bool },
    Defeat,
}

impl CombatOutcome {
    pub fn is_victory(&self) -> bool {
        matches!(self, CombatOutcome::Victory { .. })
    }

    /// Check if the fight was won and the monster guarded treasure.
    pub fn treasure_won(&self) -> bool {
        matches!(self, CombatOutcome::Victory { treasure: true })
    }
}

/// Resolves the fight: the player strikes first, and the monster hits back
/// only while it is still alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombatResolver {
    retaliation: i32,
}

impl Default for CombatResolver {
    fn default() -> Self {
        Self::new(MONSTER_RETALIATION)
    }
}

impl CombatResolver {
    /// Create a resolver where the monster deals `retaliation` per hit.
    pub fn new(retaliation: i32) -> Self {
        Self { retaliation }
    }

    /// Fight until one side drops. Mutates the player's health in place.
    ///
    /// # Errors
    ///
    /// Returns [`CombatError::NonPositiveAttack`] before any exchange if the
    /// player cannot damage the monster.
    pub fn resolve(
        &self,
        player: &mut PlayerState,
        monster_health: i32,
        treasure_if_won: bool,
        chronicle: &mut Chronicle,
    ) -> Result<CombatOutcome, CombatError> {
        if player.attack <= 0 {
            return Err(CombatError::NonPositiveAttack {
                attack: player.attack,
            });
        }

        let mut monster_health = monster_health;
        let mut rounds = 0u32;

        while player.is_standing() && monster_health > 0 {
            rounds += 1;
            chronicle.record(NarrativeEvent::PlayerStrikes);
            monster_health = monster_health.saturating_sub(player.attack);

            if monster_health > 0 {
                chronicle.record(NarrativeEvent::MonsterRetaliates {
                    damage: self.retaliation,
                });
                player.take_damage(self.retaliation);
            }

            tracing::debug!(
                round = rounds,
                monster_health,
                player_health = player.health,
                "combat exchange"
            );
        }

        let outcome = if player.is_standing() {
            chronicle.record(NarrativeEvent::MonsterDefeated);
            CombatOutcome::Victory {
                treasure: treasure_if_won,
            }
        } else {
            chronicle.record(NarrativeEvent::PlayerDefeated);
            CombatOutcome::Defeat
        };

        tracing::info!(?outcome, rounds, "combat resolved");
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strikes(chronicle: &Chronicle) -> usize {
        chronicle.count(|e| matches!(e, NarrativeEvent::PlayerStrikes))
    }

    fn retaliations(chronicle: &Chronicle) -> usize {
        chronicle.count(|e| matches!(e, NarrativeEvent::MonsterRetaliates { .. }))
    }

    #[test]
    fn test_weak_player_is_defeated() {
        for treasure in [true, false] {
            let mut player = PlayerState::new(100, 5);
            let mut chronicle = Chronicle::new();

            let outcome = CombatResolver::default()
                .resolve(&mut player, 70, treasure, &mut chronicle)
                .unwrap();

            assert_eq!(outcome, CombatOutcome::Defeat);
            // Ten exchanges, each answered, before the player drops.
            assert_eq!(strikes(&chronicle), 10);
            assert_eq!(retaliations(&chronicle), 10);
            assert_eq!(player.health, 0);
            assert_eq!(chronicle.last(), Some(&NarrativeEvent::PlayerDefeated));
        }
    }

    #[test]
    fn test_no_retaliation_on_killing_blow() {
        let mut player = PlayerState::new(100, 15);
        let mut chronicle = Chronicle::new();

        let outcome = CombatResolver::default()
            .resolve(&mut player, 70, true, &mut chronicle)
            .unwrap();

        // 70 -> 55 -> 40 -> 25 -> 10 -> dead; four answers.
        assert_eq!(outcome, CombatOutcome::Victory { treasure: true });
        assert_eq!(strikes(&chronicle), 5);
        assert_eq!(retaliations(&chronicle), 4);
        assert_eq!(player.health, 60);
    }

    #[test]
    fn test_victory_without_treasure_is_not_defeat() {
        let mut player = PlayerState::new(100, 100);
        let outcome = CombatResolver::default()
            .resolve(&mut player, 70, false, &mut Chronicle::new())
            .unwrap();

        assert_eq!(outcome, CombatOutcome::Victory { treasure: false });
        assert!(outcome.is_victory());
        assert!(!outcome.treasure_won());
        assert_ne!(outcome, CombatOutcome::Defeat);
        assert_eq!(player.health, 100);
    }

    #[test]
    fn test_non_positive_attack_fails_fast() {
        for attack in [0, -3] {
            let mut player = PlayerState::new(100, attack);
            let mut chronicle = Chronicle::new();

            let result = CombatResolver::default().resolve(&mut player, 70, true, &mut chronicle);

            assert_eq!(result, Err(CombatError::NonPositiveAttack { attack }));
            assert_eq!(player.health, 100);
            assert!(chronicle.is_empty());
        }
    }

    #[test]
    fn test_player_already_down() {
        let mut player = PlayerState::new(0, 5);
        let mut chronicle = Chronicle::new();

        let outcome = CombatResolver::default()
            .resolve(&mut player, 70, true, &mut chronicle)
            .unwrap();

        assert_eq!(outcome, CombatOutcome::Defeat);
        assert_eq!(strikes(&chronicle), 0);
    }

    #[test]
    fn test_custom_retaliation() {
        let mut player = PlayerState::new(10, 5);
        let outcome = CombatResolver::new(3)
            .resolve(&mut player, 12, true, &mut Chronicle::new())
            .unwrap();

        // 12 -> 7 -> 2 -> dead; two answers of 3.
        assert_eq!(outcome, CombatOutcome::Victory { treasure: true });
        assert_eq!(player.health, 4);
    }
}
