use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::item::Item;

/// An item the player must carry to leave a room, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExitBlocker {
    /// Name of the required item.
    pub item: String,
    /// Shown as "You cannot leave because {reason}."
    pub reason: String,
}

/// A node in the house graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique name, also the display key.
    pub name: String,
    /// Case-insensitive regex for alternate spellings of the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Shown on the first visit and by `look`.
    pub long_description: String,
    /// Shown on later visits.
    pub description: String,
    /// Items owned by this room.
    #[serde(default, with = "item_list")]
    pub items: BTreeMap<String, Item>,
    /// Set on first entry and never cleared.
    #[serde(default)]
    pub visited: bool,
    /// Rooms reachable directly from here. Not necessarily symmetric.
    #[serde(default)]
    pub exits: Vec<String>,
    /// Optional item requirement for leaving.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_blocker: Option<ExitBlocker>,
}

impl Room {
    /// Create an empty room with no exits.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            long_description: String::new(),
            description: String::new(),
            items: BTreeMap::new(),
            visited: false,
            exits: Vec::new(),
            exit_blocker: None,
        }
    }

    /// Set the long and short descriptions.
    pub fn with_descriptions(
        mut self,
        long_description: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.long_description = long_description.into();
        self.description = description.into();
        self
    }

    /// Set the alias pattern.
    pub fn with_alias(mut self, pattern: impl Into<String>) -> Self {
        self.alias = Some(pattern.into());
        self
    }

    /// Add an exit.
    pub fn with_exit(mut self, room: impl Into<String>) -> Self {
        self.exits.push(room.into());
        self
    }

    /// Add an item.
    pub fn with_item(mut self, item: Item) -> Self {
        self.put_item(item);
        self
    }

    /// Require an item to leave.
    pub fn with_blocker(mut self, item: impl Into<String>, reason: impl Into<String>) -> Self {
        self.exit_blocker = Some(ExitBlocker {
            item: item.into(),
            reason: reason.into(),
        });
        self
    }

    /// Look up an item in this room, discovered or not.
    pub fn item(&self, name: &str) -> Option<&Item> {
        self.items.get(name)
    }

    /// Look up an item in this room mutably.
    pub fn item_mut(&mut self, name: &str) -> Option<&mut Item> {
        self.items.get_mut(name)
    }

    /// Give ownership of an item to this room.
    pub fn put_item(&mut self, item: Item) {
        self.items.insert(item.name.clone(), item);
    }

    /// Take ownership of an item away from this room.
    pub fn remove_item(&mut self, name: &str) -> Option<Item> {
        self.items.remove(name)
    }

    /// Items the player can see, in name order.
    pub fn visible_items(&self) -> impl Iterator<Item = &Item> {
        self.items.values().filter(|item| item.discovered)
    }

    /// Whether `room` is listed as an exit.
    pub fn has_exit(&self, room: &str) -> bool {
        self.exits.iter().any(|e| e == room)
    }
}

/// Room files list items as an array; in memory they are keyed by name.
mod item_list {
    use std::collections::BTreeMap;

    use serde::{Deserialize, Deserializer, Serializer};

    use crate::item::Item;

    pub fn serialize<S: Serializer>(
        items: &BTreeMap<String, Item>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(items.values())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeMap<String, Item>, D::Error> {
        let items = Vec::<Item>::deserialize(deserializer)?;
        Ok(items
            .into_iter()
            .map(|item| (item.name.clone(), item))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pantry() -> Room {
        Room::new("Pantry")
            .with_descriptions("Shelves tower above you.", "The pantry.")
            .with_exit("Kitchen")
            .with_item(Item::new("paper towels", "A stack.").feature())
            .with_item(Item::new("cornflakes", "A box.").edible().undiscovered())
    }

    #[test]
    fn visible_items_skip_undiscovered() {
        let room = pantry();
        let names: Vec<_> = room.visible_items().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["paper towels"]);
    }

    #[test]
    fn put_and_remove_item() {
        let mut room = pantry();
        let towels = room.remove_item("paper towels").unwrap();
        assert!(room.item("paper towels").is_none());
        room.put_item(towels);
        assert!(room.item("paper towels").is_some());
    }

    #[test]
    fn exits_are_one_way_data() {
        let room = pantry();
        assert!(room.has_exit("Kitchen"));
        assert!(!room.has_exit("Attic"));
    }

    #[test]
    fn parse_room_json() {
        let json = r#"{
            "name": "Garage",
            "alias": "garage|car ?port",
            "long_description": "Oil stains everywhere.",
            "description": "The garage.",
            "exits": ["Yard"],
            "exit_blocker": {"item": "flashlight", "reason": "it is pitch black"},
            "items": [
                {"name": "workbench", "description": "Cluttered.", "is_feature": true, "discovered": true}
            ]
        }"#;
        let room: Room = serde_json::from_str(json).unwrap();
        assert_eq!(room.alias.as_deref(), Some("garage|car ?port"));
        assert!(!room.visited);
        assert_eq!(room.exit_blocker.as_ref().unwrap().item, "flashlight");
        assert!(room.item("workbench").unwrap().is_feature);
    }

    #[test]
    fn items_round_trip_as_array() {
        let room = pantry();
        let json = serde_json::to_value(&room).unwrap();
        assert!(json["items"].is_array());
        let back: Room = serde_json::from_value(json).unwrap();
        assert_eq!(back, room);
    }
}
