//! The dungeon layout: the fixed room sequence, the artifact catalog and
//! the pool of library clues a run is played against.
//!
//! Layouts are validated as a whole when built, so a run never starts from
//! data with a bad shape. They can be loaded from TOML:
//!
//! ```toml
//! library_clues = ["Beware the shadows.", "The key lies with the gnome."]
//!
//! [[rooms]]
//! name = "Narrow Passage"
//! granted_item = "torch"
//! challenge = "trap"
//! outcome = { success = "Avoided trap!", failure = "Triggered trap!", penalty = 10 }
//!
//! [[artifacts]]
//! id = "ring_of_strength"
//! description = "A powerful ring that boosts your attack damage."
//! power = 10
//! effect = "enhances_attack"
//! ```

mod artifact;
mod room;

pub use artifact::*;
pub use room::*;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::{LayoutResult, StructuralError};
use crate::mechanics::CLUES_PER_LIBRARY_VISIT;

/// TOML source of the bundled dungeon.
pub const CANONICAL_LAYOUT: &str = include_str!("../../data/canonical.toml");

/// A validated dungeon: rooms in traversal order, the artifact catalog and
/// the library clue pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DungeonLayout {
    rooms: Vec<Room>,
    artifacts: ArtifactCatalog,
    library_clues: Vec<String>,
}

/// On-disk shape of a layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LayoutFile {
    #[serde(default)]
    library_clues: Vec<String>,
    #[serde(default)]
    rooms: Vec<Room>,
    #[serde(default)]
    artifacts: Vec<Artifact>,
}

impl DungeonLayout {
    /// Build a layout, validating every room, the catalog and the clue pool.
    pub fn new(
        rooms: Vec<Room>,
        artifacts: impl IntoIterator<Item = Artifact>,
        library_clues: Vec<String>,
    ) -> Result<Self, StructuralError> {
        validate_rooms(&rooms)?;
        let artifacts = ArtifactCatalog::from_artifacts(artifacts)?;
        validate_clue_pool(&library_clues)?;

        Ok(Self {
            rooms,
            artifacts,
            library_clues,
        })
    }

    /// Parse and validate a layout from a TOML document.
    pub fn from_toml_str(source: &str) -> LayoutResult<Self> {
        let file: LayoutFile = toml::from_str(source)?;
        Ok(Self::new(file.rooms, file.artifacts, file.library_clues)?)
    }

    /// Read, parse and validate a layout file.
    pub fn load(path: impl AsRef<Path>) -> LayoutResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// The bundled five-room dungeon with its three artifacts and four clues.
    pub fn canonical() -> LayoutResult<Self> {
        Self::from_toml_str(CANONICAL_LAYOUT)
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn artifacts(&self) -> &ArtifactCatalog {
        &self.artifacts
    }

    pub fn library_clues(&self) -> &[String] {
        &self.library_clues
    }

    /// Split into owned parts so a run can consume the catalog.
    pub fn into_parts(self) -> (Vec<Room>, ArtifactCatalog, Vec<String>) {
        (self.rooms, self.artifacts, self.library_clues)
    }
}

/// A library visit draws distinct clues, so the pool must be large enough
/// and free of repeats.
pub fn validate_clue_pool(clues: &[String]) -> Result<(), StructuralError> {
    if clues.len() < CLUES_PER_LIBRARY_VISIT {
        return Err(StructuralError::ClueShortage {
            required: CLUES_PER_LIBRARY_VISIT,
            found: clues.len(),
        });
    }

    let mut seen = HashSet::new();
    for clue in clues {
        if !seen.insert(clue.as_str()) {
            return Err(StructuralError::DuplicateClue { clue: clue.clone() });
        }
    }
    Ok(())
}
