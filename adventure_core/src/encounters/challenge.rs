//! Puzzle and trap rooms.

use dungeon_rules::{ChallengeKind, PlayerState, RandomSource, RoomOutcome};
use serde::{Deserialize, Serialize};

use crate::chronicle::{Chronicle, NarrativeEvent};

/// What a puzzle or trap did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChallengeResolution {
    /// The coin picked the narration; the penalty was paid either way.
    Resolved { succeeded: bool, penalty: i32 },
    /// No outcome configured: narrated, nothing changed.
    NoChallengeData,
}

/// Resolves puzzles and traps.
///
/// Success only chooses which message is told. The health penalty is paid
/// on every attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoomChallengeResolver;

impl RoomChallengeResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve one challenge. Mutates the player's health in place.
    pub fn resolve<R: RandomSource>(
        &self,
        kind: ChallengeKind,
        player: &mut PlayerState,
        outcome: Option<&RoomOutcome>,
        rng: &mut R,
        chronicle: &mut Chronicle,
    ) -> ChallengeResolution {
        let Some(outcome) = outcome else {
            tracing::debug!(%kind, "challenge has no outcome data");
            chronicle.record(NarrativeEvent::ChallengeWithoutData { kind });
            return ChallengeResolution::NoChallengeData;
        };

        let succeeded = rng.coin_flip(0.5);
        let message = if succeeded {
            &outcome.success
        } else {
            &outcome.failure
        };

        player.take_damage(outcome.penalty);
        tracing::debug!(
            %kind,
            succeeded,
            penalty = outcome.penalty,
            health = player.health,
            "challenge resolved"
        );

        chronicle.record(NarrativeEvent::ChallengeResolved {
            kind,
            message: message.clone(),
            penalty: outcome.penalty,
        });

        ChallengeResolution::Resolved {
            succeeded,
            penalty: outcome.penalty,
        }
    }
}
