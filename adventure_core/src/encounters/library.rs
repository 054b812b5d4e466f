//! Library rooms.

use dungeon_rules::{Inventory, RandomSource, CLUES_PER_LIBRARY_VISIT};

use crate::chronicle::{Chronicle, NarrativeEvent};
use crate::clues::{ClueLedger, ClueOutcome};

/// Item that earns the library's flavor text.
pub const STAFF_OF_WISDOM: &str = "staff_of_wisdom";

/// Draws clues from a fixed pool on each library visit.
///
/// Sampling is per visit: a later library can draw a clue the ledger
/// already holds, in which case the ledger does not grow for it.
#[derive(Debug, Clone, Copy)]
pub struct LibraryEncounterHandler<'a> {
    clue_pool: &'a [String],
}

impl<'a> LibraryEncounterHandler<'a> {
    pub fn new(clue_pool: &'a [String]) -> Self {
        Self { clue_pool }
    }

    /// Draw two distinct clues into the ledger. Mutates the ledger in place.
    ///
    /// Carrying the staff of wisdom only adds a line of narration.
    pub fn resolve<R: RandomSource>(
        &self,
        ledger: &mut ClueLedger,
        inventory: &Inventory,
        rng: &mut R,
        chronicle: &mut Chronicle,
    ) -> Vec<ClueOutcome> {
        let outcomes: Vec<ClueOutcome> = rng
            .sample_without_replacement(self.clue_pool, CLUES_PER_LIBRARY_VISIT)
            .into_iter()
            .map(|clue| ledger.record(clue, chronicle))
            .collect();

        if inventory.contains(STAFF_OF_WISDOM) {
            chronicle.record(NarrativeEvent::StaffInsight);
        }

        tracing::debug!(
            drawn = outcomes.len(),
            known = ledger.len(),
            "library visited"
        );
        outcomes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dungeon_rules::{DungeonLayout, ScriptedRandom, SeededRandom};

    fn pool() -> Vec<String> {
        DungeonLayout::canonical().unwrap().library_clues().to_vec()
    }

    #[test]
    fn test_two_distinct_clues_per_visit() {
        let pool = pool();
        let handler = LibraryEncounterHandler::new(&pool);

        for seed in 0..25 {
            let mut ledger = ClueLedger::new();
            let mut rng = SeededRandom::seeded(seed);

            let outcomes =
                handler.resolve(&mut ledger, &Inventory::new(), &mut rng, &mut Chronicle::new());

            assert_eq!(outcomes, vec![ClueOutcome::Discovered; 2]);
            assert_eq!(ledger.len(), 2);
            assert!(ledger.iter().all(|clue| pool.iter().any(|p| p == clue)));
        }
    }

    #[test]
    fn test_repeat_visit_grows_by_new_clues_only() {
        let pool = pool();
        let handler = LibraryEncounterHandler::new(&pool);
        let mut ledger = ClueLedger::new();
        let mut chronicle = Chronicle::new();
        // First visit draws clues 0 and 1, second draws 1 and 3.
        let mut rng = ScriptedRandom::new().with_indices([0, 1, 1, 3]);

        handler.resolve(&mut ledger, &Inventory::new(), &mut rng, &mut chronicle);
        let outcomes = handler.resolve(&mut ledger, &Inventory::new(), &mut rng, &mut chronicle);

        assert_eq!(outcomes, vec![ClueOutcome::AlreadyKnown, ClueOutcome::Discovered]);
        assert_eq!(ledger.len(), 3);
        assert_eq!(
            chronicle.count(|e| matches!(e, NarrativeEvent::ClueAlreadyKnown { .. })),
            1
        );
    }

    #[test]
    fn test_staff_is_cosmetic() {
        let pool = pool();
        let handler = LibraryEncounterHandler::new(&pool);

        let mut inventory = Inventory::new();
        inventory.acquire(STAFF_OF_WISDOM);

        let mut with_staff = ClueLedger::new();
        let mut without_staff = ClueLedger::new();
        let mut chronicle = Chronicle::new();

        handler.resolve(&mut with_staff, &inventory, &mut SeededRandom::seeded(9), &mut chronicle);
        handler.resolve(
            &mut without_staff,
            &Inventory::new(),
            &mut SeededRandom::seeded(9),
            &mut Chronicle::new(),
        );

        assert_eq!(with_staff, without_staff);
        assert_eq!(chronicle.last(), Some(&NarrativeEvent::StaffInsight));
        assert_eq!(inventory.len(), 1);
    }
}
