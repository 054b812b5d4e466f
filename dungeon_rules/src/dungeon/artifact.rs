//! Artifacts and the catalog they are discovered from.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::entities::PlayerState;
use crate::error::StructuralError;
use crate::mechanics::ArtifactEffect;

/// A single-use item that changes the player's stats when found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    pub id: String,
    pub description: String,
    pub power: i32,
    pub effect: ArtifactEffect,
}

impl Artifact {
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        power: i32,
        effect: ArtifactEffect,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            power,
            effect,
        }
    }

    /// Apply the effect to the player. Mutates in place.
    ///
    /// Returns `false` when the effect is inert.
    pub fn apply_to(&self, player: &mut PlayerState) -> bool {
        match self.effect {
            ArtifactEffect::IncreasesHealth => {
                player.heal(self.power);
                true
            }
            ArtifactEffect::EnhancesAttack => {
                player.empower(self.power);
                true
            }
            ArtifactEffect::SolvesPuzzles => false,
        }
    }
}

/// Artifacts still waiting to be found, keyed by id.
///
/// Ordered by id so that a seeded uniform pick lands on the same artifact
/// every time. The catalog only ever shrinks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtifactCatalog {
    artifacts: BTreeMap<String, Artifact>,
}

impl ArtifactCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog, rejecting empty or repeated ids and negative power.
    pub fn from_artifacts(
        artifacts: impl IntoIterator<Item = Artifact>,
    ) -> Result<Self, StructuralError> {
        let mut catalog = Self::new();
        for artifact in artifacts {
            if artifact.id.trim().is_empty() {
                return Err(StructuralError::EmptyArtifactId);
            }
            if artifact.power < 0 {
                return Err(StructuralError::NegativePower {
                    id: artifact.id,
                    power: artifact.power,
                });
            }
            if catalog.contains(&artifact.id) {
                return Err(StructuralError::DuplicateArtifact { id: artifact.id });
            }
            catalog.artifacts.insert(artifact.id.clone(), artifact);
        }
        Ok(catalog)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.artifacts.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Artifact> {
        self.artifacts.get(id)
    }

    /// Remove and return an artifact. Once taken it is gone for the run.
    pub fn take(&mut self, id: &str) -> Option<Artifact> {
        self.artifacts.remove(id)
    }

    /// Remaining ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.artifacts.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Artifact> {
        self.artifacts.values()
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}
