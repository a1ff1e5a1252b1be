//! Configuration for a game session.

use std::collections::BTreeSet;

use sr_core::LoadLimits;

use crate::house;

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Room the player wakes up in.
    pub start_room: String,
    /// Room where the win condition is checked on entry.
    pub terminal_room: String,
    /// Items that must all be carried to win.
    pub required_items: BTreeSet<String>,
    /// Minimum world size accepted at load time.
    pub limits: LoadLimits,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_room: house::ATTIC.to_string(),
            terminal_room: house::BASEMENT_LAB.to_string(),
            required_items: house::REQUIRED_ITEMS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            limits: LoadLimits::default(),
        }
    }
}

impl GameConfig {
    /// Set the starting room.
    pub fn with_start_room(mut self, room: impl Into<String>) -> Self {
        self.start_room = room.into();
        self
    }

    /// Set the room where the win condition is checked.
    pub fn with_terminal_room(mut self, room: impl Into<String>) -> Self {
        self.terminal_room = room.into();
        self
    }

    /// Replace the set of items needed to win.
    pub fn with_required_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_items = items.into_iter().map(Into::into).collect();
        self
    }

    /// Set the load limits.
    pub fn with_limits(mut self, limits: LoadLimits) -> Self {
        self.limits = limits;
        self
    }
}
