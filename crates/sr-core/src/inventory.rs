use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::item::Item;

/// The items the player carries, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: BTreeMap<String, Item>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an item with this name is carried.
    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    /// Look up a carried item.
    pub fn get(&self, name: &str) -> Option<&Item> {
        self.items.get(name)
    }

    /// Look up a carried item mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Item> {
        self.items.get_mut(name)
    }

    /// Put an item into the inventory, keyed by its name.
    pub fn insert(&mut self, item: Item) {
        self.items.insert(item.name.clone(), item);
    }

    /// Take an item out of the inventory.
    pub fn remove(&mut self, name: &str) -> Option<Item> {
        self.items.remove(name)
    }

    /// Names of all carried items, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    /// All carried items, in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Number of carried items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is carried.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<Item> for Inventory {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        let mut inventory = Self::new();
        for item in iter {
            inventory.insert(item);
        }
        inventory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_remove() {
        let mut inv = Inventory::new();
        assert!(inv.is_empty());

        inv.insert(Item::new("scarf", "Silky."));
        assert!(inv.contains("scarf"));
        assert_eq!(inv.len(), 1);

        // Same name replaces rather than duplicates
        inv.insert(Item::new("scarf", "Still silky."));
        assert_eq!(inv.len(), 1);

        let scarf = inv.remove("scarf").unwrap();
        assert_eq!(scarf.description, "Still silky.");
        assert!(inv.remove("scarf").is_none());
    }

    #[test]
    fn names_are_sorted() {
        let inv: Inventory = ["umbrella", "candle", "scarf"]
            .into_iter()
            .map(|n| Item::new(n, ""))
            .collect();
        let names: Vec<_> = inv.names().collect();
        assert_eq!(names, ["candle", "scarf", "umbrella"]);
    }

    #[test]
    fn serializes_as_plain_map() {
        let inv: Inventory = std::iter::once(Item::new("thread", "A spool.")).collect();
        let json = serde_json::to_value(&inv).unwrap();
        assert_eq!(json["thread"]["description"], "A spool.");
    }
}
