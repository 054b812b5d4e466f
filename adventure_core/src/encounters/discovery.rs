//! Artifact discovery.

use dungeon_rules::{Artifact, ArtifactCatalog, ArtifactEffect, PlayerState, RandomSource};
use serde::{Deserialize, Serialize};

use crate::chronicle::{Chronicle, NarrativeEvent};

/// Result of looking for an artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Discovery {
    /// The artifact was consumed and its effect applied.
    Found(Artifact),
    NothingOfInterest,
}

impl Discovery {
    pub fn artifact(&self) -> Option<&Artifact> {
        match self {
            Discovery::Found(artifact) => Some(artifact),
            Discovery::NothingOfInterest => None,
        }
    }
}

/// Look up `id`, apply its effect and remove it from the catalog.
///
/// Mutates the player and the catalog in place. An unknown id changes
/// nothing. The catalog loses the entry even when the effect is inert.
pub fn discover_artifact(
    catalog: &mut ArtifactCatalog,
    id: &str,
    player: &mut PlayerState,
    chronicle: &mut Chronicle,
) -> Discovery {
    let Some(artifact) = catalog.take(id) else {
        tracing::debug!(id, "no artifact under this id");
        chronicle.record(NarrativeEvent::NothingOfInterest);
        return Discovery::NothingOfInterest;
    };

    chronicle.record(NarrativeEvent::ArtifactFound {
        id: artifact.id.clone(),
        description: artifact.description.clone(),
    });

    artifact.apply_to(player);
    chronicle.record(NarrativeEvent::EffectApplied {
        effect: artifact.effect,
        power: artifact.power,
    });

    tracing::debug!(
        id = %artifact.id,
        effect = %artifact.effect,
        inert = artifact.effect == ArtifactEffect::SolvesPuzzles,
        remaining = catalog.len(),
        "artifact discovered"
    );

    Discovery::Found(artifact)
}

/// Roll for an artifact after a won fight.
///
/// With an empty catalog nothing is drawn. Otherwise a coin with the given
/// chance decides whether a search happens at all, and a uniform pick over
/// the remaining ids chooses what is found. Returns `None` when no search
/// happened.
pub fn seek_artifact<R: RandomSource>(
    catalog: &mut ArtifactCatalog,
    player: &mut PlayerState,
    chance: f64,
    rng: &mut R,
    chronicle: &mut Chronicle,
) -> Option<Discovery> {
    if catalog.is_empty() || !rng.coin_flip(chance) {
        return None;
    }

    let ids: Vec<&str> = catalog.ids().collect();
    let id = rng.uniform_choice(&ids)?.to_string();

    Some(discover_artifact(catalog, &id, player, chronicle))
}
