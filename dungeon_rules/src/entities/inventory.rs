//! The player's inventory.

use serde::{Deserialize, Serialize};

/// Items picked up during a run, in the order they were acquired.
///
/// Duplicates are legal (a run can collect "treasure" twice) and nothing is
/// ever removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: Vec<String>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item. Mutates in place.
    pub fn acquire(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    /// Check if at least one item with this name is held.
    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|held| held == item)
    }

    /// Count how many copies of an item are held.
    pub fn count(&self, item: &str) -> usize {
        self.items.iter().filter(|held| *held == item).count()
    }

    /// All items in acquisition order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
