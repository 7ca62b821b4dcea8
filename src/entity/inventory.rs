//! Items and the bag that holds them

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Item {
    /// Capture item, thrown at a beaten wild creature
    Pokeball,
}

impl Item {
    pub fn name(&self) -> &'static str {
        match self {
            Item::Pokeball => "Pokeball",
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unordered multiset of items
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn has(&self, item: Item) -> bool {
        self.items.contains(&item)
    }

    pub fn get(&self, item: Item) -> Option<&Item> {
        self.items.iter().find(|i| **i == item)
    }

    /// Remove the first matching item. Returns false if there was none.
    pub fn toss(&mut self, item: Item) -> bool {
        match self.items.iter().position(|i| *i == item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn count(&self, item: Item) -> usize {
        self.items.iter().filter(|i| **i == item).count()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// (name, count) per distinct item, in order of first appearance
    pub fn summary(&self) -> Vec<(&'static str, usize)> {
        let mut out: Vec<(&'static str, usize)> = Vec::new();
        for item in &self.items {
            match out.iter_mut().find(|(name, _)| *name == item.name()) {
                Some((_, count)) => *count += 1,
                None => out.push((item.name(), 1)),
            }
        }
        out
    }
}
