use serde::{Deserialize, Serialize};

/// A link from one item to a companion that looking at it reveals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiddenObject {
    /// Name of the companion item, expected in the same room.
    pub name: String,
    /// Text printed once when the companion is revealed.
    pub statement: String,
}

/// A portable object or a fixed feature of a room.
///
/// Both kinds share description and discovery behavior. Features never
/// enter the inventory; portable items move between a room and the
/// inventory, keeping their own flags as they go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique name, also the key the player types.
    pub name: String,
    /// Text shown by `look at`.
    pub description: String,
    /// Fixed part of the room; never enters the inventory.
    #[serde(default)]
    pub is_feature: bool,
    /// Portable, but needs shrinking before it can be taken.
    #[serde(default)]
    pub too_big: bool,
    /// Whether the player can see, take, or list this item.
    #[serde(default)]
    pub discovered: bool,
    /// Whether `eat` consumes it.
    #[serde(default)]
    pub is_edible: bool,
    /// Pending reveal; cleared after the first successful look.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden_object: Option<HiddenObject>,
}

impl Item {
    /// Create a discovered, portable item.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            is_feature: false,
            too_big: false,
            discovered: true,
            is_edible: false,
            hidden_object: None,
        }
    }

    /// Mark this item as a fixed feature.
    pub fn feature(mut self) -> Self {
        self.is_feature = true;
        self
    }

    /// Mark this item as too big to pick up until shrunk.
    pub fn too_big(mut self) -> Self {
        self.too_big = true;
        self
    }

    /// Mark this item as not yet discovered.
    pub fn undiscovered(mut self) -> Self {
        self.discovered = false;
        self
    }

    /// Mark this item as edible.
    pub fn edible(mut self) -> Self {
        self.is_edible = true;
        self
    }

    /// Attach a one-shot reveal of a companion item.
    pub fn hiding(mut self, name: impl Into<String>, statement: impl Into<String>) -> Self {
        self.hidden_object = Some(HiddenObject {
            name: name.into(),
            statement: statement.into(),
        });
        self
    }

    /// Whether this item can go into the inventory right now.
    pub fn is_portable(&self) -> bool {
        !self.is_feature && !self.too_big
    }
}
