//! Traversal - the orchestrator that plays one run from the monster fight
//! through the last room.
//!
//! A run proceeds as follows:
//! 1. **Treasure**: settle whether the monster guards treasure
//! 2. **Combat**: fight the monster; a loss ends the run
//! 3. **Spoils**: take the treasure, then roll for an artifact
//! 4. **Rooms**: visit each room in order, granting its item and resolving
//!    its challenge
//! 5. **Report**: hand the final state back as a [`RunReport`]

mod config;
mod report;

pub use config::*;
pub use report::*;

use dungeon_rules::{
    validate_rooms, ArtifactCatalog, ChallengeKind, DungeonLayout, Inventory, LayoutResult,
    PlayerState, RandomSource, Room, RunId,
};

use crate::chronicle::{Chronicle, NarrativeEvent};
use crate::clues::ClueLedger;
use crate::encounters::{
    seek_artifact, CombatOutcome, CombatResolver, Discovery, LibraryEncounterHandler,
    RoomChallengeResolver,
};
use crate::error::RunResult;

/// Item granted for beating a monster that guards treasure.
pub const TREASURE: &str = "treasure";

/// How the room phase ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraversalOutcome {
    Completed,
    Collapsed { room: String },
}

/// One run through the dungeon. Owns all mutable state for its duration.
#[derive(Debug, Clone)]
pub struct DungeonRun {
    id: RunId,
    config: RunConfig,
    rooms: Vec<Room>,
    library_clues: Vec<String>,
    player: PlayerState,
    inventory: Inventory,
    clues: ClueLedger,
    artifacts: ArtifactCatalog,
    chronicle: Chronicle,
}

impl DungeonRun {
    /// Prepare a run. The layout is consumed: its catalog shrinks as the
    /// run finds artifacts.
    pub fn new(config: RunConfig, layout: DungeonLayout) -> Self {
        let (rooms, artifacts, library_clues) = layout.into_parts();
        Self {
            id: RunId::new(),
            player: config.player,
            config,
            rooms,
            library_clues,
            inventory: Inventory::new(),
            clues: ClueLedger::new(),
            artifacts,
            chronicle: Chronicle::new(),
        }
    }

    /// Prepare a run of the bundled dungeon with default settings.
    pub fn with_defaults() -> LayoutResult<Self> {
        Ok(Self::new(RunConfig::default(), DungeonLayout::canonical()?))
    }

    /// Replace the generated run id.
    pub fn with_id(mut self, id: RunId) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> RunId {
        self.id
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn clues(&self) -> &ClueLedger {
        &self.clues
    }

    pub fn artifacts(&self) -> &ArtifactCatalog {
        &self.artifacts
    }

    pub fn chronicle(&self) -> &Chronicle {
        &self.chronicle
    }

    /// Play the whole run and report how it went.
    ///
    /// # Errors
    ///
    /// Fails without a report if the player cannot fight (non-positive
    /// attack).
    pub fn execute<R: RandomSource>(mut self, rng: &mut R) -> RunResult<RunReport> {
        let span = tracing::info_span!("dungeon_run", run_id = %self.id);
        let _guard = span.enter();

        self.record_status();

        let combat = self.fight(rng)?;
        let outcome = if combat.is_victory() {
            if self.explore_for_artifact(rng).is_some() {
                self.record_status();
            }

            // Victory leaves health above zero and artifact power is never negative.
            let rooms = std::mem::take(&mut self.rooms);
            let traversal = self.traverse(&rooms, rng);
            self.rooms = rooms;
            match traversal? {
                TraversalOutcome::Completed => RunOutcome::Completed,
                TraversalOutcome::Collapsed { room } => RunOutcome::Collapsed { room },
            }
        } else {
            RunOutcome::Defeated
        };

        tracing::info!(
            ?outcome,
            health = self.player.health,
            items = self.inventory.len(),
            clues = self.clues.len(),
            "run finished"
        );

        Ok(self.into_report(Some(combat), outcome))
    }

    /// Fight the monster, taking the treasure if it was guarded.
    ///
    /// An unset treasure flag is settled by a fair coin before the fight.
    pub fn fight<R: RandomSource>(&mut self, rng: &mut R) -> RunResult<CombatOutcome> {
        let treasure = match self.config.treasure_if_won {
            Some(treasure) => treasure,
            None => rng.coin_flip(0.5),
        };

        let outcome = CombatResolver::new(self.config.retaliation_damage).resolve(
            &mut self.player,
            self.config.monster_health,
            treasure,
            &mut self.chronicle,
        )?;

        if outcome.treasure_won() {
            self.acquire(TREASURE);
        }
        Ok(outcome)
    }

    /// Roll for an artifact. `None` means no search happened.
    pub fn explore_for_artifact<R: RandomSource>(&mut self, rng: &mut R) -> Option<Discovery> {
        seek_artifact(
            &mut self.artifacts,
            &mut self.player,
            self.config.artifact_chance,
            rng,
            &mut self.chronicle,
        )
    }

    /// Visit `rooms` in order.
    ///
    /// The whole sequence is validated before anything changes. With
    /// `halt_on_collapse` set, traversal stops after the first room that
    /// leaves the player down.
    ///
    /// # Errors
    ///
    /// Returns a structural error, with no state touched, if any room is
    /// malformed.
    pub fn traverse<R: RandomSource>(
        &mut self,
        rooms: &[Room],
        rng: &mut R,
    ) -> RunResult<TraversalOutcome> {
        validate_rooms(rooms)?;

        for room in rooms {
            self.visit(room, rng);

            if self.config.halt_on_collapse && !self.player.is_standing() {
                tracing::warn!(
                    room = %room.name,
                    health = self.player.health,
                    "player collapsed, halting traversal"
                );
                self.chronicle.record(NarrativeEvent::Collapse {
                    room: room.name.clone(),
                });
                return Ok(TraversalOutcome::Collapsed {
                    room: room.name.clone(),
                });
            }
        }

        Ok(TraversalOutcome::Completed)
    }

    /// Hand back the final state.
    pub fn into_report(self, combat: Option<CombatOutcome>, outcome: RunOutcome) -> RunReport {
        RunReport {
            run_id: self.id,
            outcome,
            combat,
            player: self.player,
            inventory: self.inventory,
            clues: self.clues,
            remaining_artifacts: self.artifacts.ids().map(String::from).collect(),
            chronicle: self.chronicle,
        }
    }

    fn visit<R: RandomSource>(&mut self, room: &Room, rng: &mut R) {
        self.chronicle.record(NarrativeEvent::RoomEntered {
            room: room.name.clone(),
        });

        if let Some(item) = &room.granted_item {
            self.acquire(item);
        }

        match room.challenge {
            ChallengeKind::Puzzle | ChallengeKind::Trap => {
                RoomChallengeResolver::new().resolve(
                    room.challenge,
                    &mut self.player,
                    room.outcome.as_ref(),
                    rng,
                    &mut self.chronicle,
                );
            }
            ChallengeKind::Library => {
                LibraryEncounterHandler::new(&self.library_clues).resolve(
                    &mut self.clues,
                    &self.inventory,
                    rng,
                    &mut self.chronicle,
                );
            }
            ChallengeKind::None => {}
        }

        tracing::debug!(
            room = %room.name,
            health = self.player.health,
            "room visited"
        );
    }

    fn acquire(&mut self, item: &str) {
        self.inventory.acquire(item);
        tracing::debug!(item, held = self.inventory.len(), "item acquired");
        self.chronicle.record(NarrativeEvent::ItemAcquired {
            item: item.to_string(),
        });
    }

    fn record_status(&mut self) {
        self.chronicle.record(NarrativeEvent::Status {
            health: self.player.health,
            attack: self.player.attack,
        });
    }
}
