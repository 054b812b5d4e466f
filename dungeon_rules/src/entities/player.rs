//! Player state.

use serde::{Deserialize, Serialize};

/// Health and attack of the player for the duration of a run.
///
/// Health has no floor: combat and room penalties may push it below zero,
/// and a non-positive value is how the rest of the engine recognises that
/// the player is down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerState {
    pub health: i32,
    pub attack: i32,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            health: 100,
            attack: 5,
        }
    }
}

impl PlayerState {
    /// Create a player with the given stats.
    pub fn new(health: i32, attack: i32) -> Self {
        Self { health, attack }
    }

    /// Check if the player still has health left.
    pub fn is_standing(&self) -> bool {
        self.health > 0
    }

    /// Subtract `amount` from health. Mutates in place; never clamps.
    pub fn take_damage(&mut self, amount: i32) {
        self.health = self.health.saturating_sub(amount);
    }

    /// Add `amount` to health. Mutates in place.
    pub fn heal(&mut self, amount: i32) {
        self.health = self.health.saturating_add(amount);
    }

    /// Add `amount` to attack. Mutates in place.
    pub fn empower(&mut self, amount: i32) {
        self.attack = self.attack.saturating_add(amount);
    }
}

impl std::fmt::Display for PlayerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Player Status: Health = {}, Attack = {}",
            self.health, self.attack
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_player() {
        let player = PlayerState::default();
        assert_eq!(player.health, 100);
        assert_eq!(player.attack, 5);
        assert!(player.is_standing());
    }

    #[test]
    fn test_health_goes_negative() {
        let mut player = PlayerState::new(5, 1);
        player.take_damage(12);
        assert_eq!(player.health, -7);
        assert!(!player.is_standing());
    }

    #[test]
    fn test_zero_health_is_down() {
        let player = PlayerState::new(0, 5);
        assert!(!player.is_standing());
    }

    #[test]
    fn test_heal_and_empower() {
        let mut player = PlayerState::new(40, 5);
        player.heal(15);
        player.empower(10);
        assert_eq!(player, PlayerState::new(55, 15));
    }

    #[test]
    fn test_status_line() {
        let player = PlayerState::new(90, 15);
        assert_eq!(player.to_string(), "Player Status: Health = 90, Attack = 15");
    }
}
