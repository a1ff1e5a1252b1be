use std::collections::BTreeMap;
use std::fmt;

use regex::{Regex, RegexBuilder};

use crate::error::{LoadError, LoadResult, WorldError, WorldResult};
use crate::inventory::Inventory;
use crate::item::Item;
use crate::room::{ExitBlocker, Room};

/// What the player sees of a room: a description and the visible items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomView<'a> {
    /// Long or short description, depending on how the room was entered.
    pub description: &'a str,
    /// Names of discovered items, in name order.
    pub items: Vec<&'a str>,
}

impl fmt::Display for RoomView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description)?;
        if !self.items.is_empty() {
            write!(f, "\nSome of the things that you see include:")?;
            for item in &self.items {
                write!(f, "\n{item}")?;
            }
        }
        Ok(())
    }
}

/// Result of looking at an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Examination {
    /// The item's description.
    pub description: String,
    /// Discovery statement, if this look revealed a hidden companion.
    pub revealed: Option<String>,
}

impl fmt::Display for Examination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description)?;
        if let Some(statement) = &self.revealed {
            write!(f, "\n{statement}")?;
        }
        Ok(())
    }
}

/// The whole world: every room, the player's inventory, and where the
/// player stands.
///
/// Each item is owned by exactly one room or by the inventory. Every
/// mutator moves owned values, so an item can never be in two places.
#[derive(Debug, Clone)]
pub struct World {
    /// Rooms in name order.
    rooms: Vec<Room>,
    index: BTreeMap<String, usize>,
    aliases: Vec<(Regex, String)>,
    inventory: Inventory,
    /// Position of the player's room in `rooms`.
    current: usize,
}

impl World {
    /// Build a world from its rooms, starting the player in `start`.
    pub fn new(rooms: impl IntoIterator<Item = Room>, start: &str) -> LoadResult<Self> {
        let mut map = BTreeMap::new();
        for room in rooms {
            if map.contains_key(&room.name) {
                return Err(LoadError::DuplicateRoom(room.name));
            }
            map.insert(room.name.clone(), room);
        }
        Self::from_parts(map, Inventory::new(), start)
    }

    /// Reassemble a world from previously extracted parts.
    pub fn from_parts(
        rooms: BTreeMap<String, Room>,
        inventory: Inventory,
        current: &str,
    ) -> LoadResult<Self> {
        let current = rooms
            .keys()
            .position(|name| name == current)
            .ok_or_else(|| LoadError::MissingStartRoom(current.to_string()))?;

        let mut aliases = Vec::new();
        for room in rooms.values() {
            if let Some(pattern) = &room.alias {
                let regex = RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|source| LoadError::BadAlias {
                        room: room.name.clone(),
                        source,
                    })?;
                aliases.push((regex, room.name.clone()));
            }
        }

        let mut index = BTreeMap::new();
        let mut list = Vec::with_capacity(rooms.len());
        for (position, (name, room)) in rooms.into_iter().enumerate() {
            index.insert(name, position);
            list.push(room);
        }

        Ok(Self {
            rooms: list,
            index,
            aliases,
            inventory,
            current,
        })
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// The room the player is in.
    pub fn current_room(&self) -> &Room {
        &self.rooms[self.current]
    }

    fn current_room_mut(&mut self) -> &mut Room {
        &mut self.rooms[self.current]
    }

    /// Name of the room the player is in.
    pub fn current_room_name(&self) -> &str {
        &self.current_room().name
    }

    /// Look up a room by exact name.
    pub fn room(&self, name: &str) -> Option<&Room> {
        self.index.get(name).map(|&i| &self.rooms[i])
    }

    /// Look up a room mutably by exact name.
    pub fn room_mut(&mut self, name: &str) -> Option<&mut Room> {
        let i = *self.index.get(name)?;
        Some(&mut self.rooms[i])
    }

    /// Whether a room with this exact name exists.
    pub fn is_room(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All rooms, in name order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// The player's inventory.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Whether the player carries an item.
    pub fn has_item(&self, name: &str) -> bool {
        self.inventory.contains(name)
    }

    /// Total number of items owned by rooms and the inventory.
    pub fn item_count(&self) -> usize {
        self.rooms.iter().map(|r| r.items.len()).sum::<usize>() + self.inventory.len()
    }

    /// Split into rooms, inventory, and current room name.
    pub fn into_parts(self) -> (BTreeMap<String, Room>, Inventory, String) {
        let current = self.current_room_name().to_string();
        let rooms = self.index.into_keys().zip(self.rooms).collect();
        (rooms, self.inventory, current)
    }

    // -----------------------------------------------------------------------
    // Looking
    // -----------------------------------------------------------------------

    /// The current room's long description and visible items.
    pub fn look_at_room(&self) -> RoomView<'_> {
        let room = self.current_room();
        RoomView {
            description: &room.long_description,
            items: room.visible_items().map(|i| i.name.as_str()).collect(),
        }
    }

    /// Describe an item in the inventory or the current room.
    ///
    /// Looking at an item with a hidden companion reveals the companion once
    /// it sits undiscovered in the current room, then clears the link. A
    /// link whose companion is already discovered is cleared silently. A
    /// companion elsewhere leaves the link pending.
    pub fn look_at_item(&mut self, name: &str) -> WorldResult<Examination> {
        let item = if let Some(item) = self.inventory.get(name) {
            item
        } else if let Some(item) = self.current_room().item(name) {
            if !item.discovered {
                return Err(WorldError::NotVisible(name.to_string()));
            }
            item
        } else {
            return Err(WorldError::NotFound(name.to_string()));
        };
        let description = item.description.clone();
        let companion = item.hidden_object.as_ref().map(|h| h.name.clone());

        let revealed = match companion {
            Some(companion) => self.reveal(name, &companion),
            None => None,
        };

        Ok(Examination {
            description,
            revealed,
        })
    }

    /// Resolve the hidden link on `holder`, returning the discovery
    /// statement if `companion` was revealed by this call.
    fn reveal(&mut self, holder: &str, companion: &str) -> Option<String> {
        let here = self.current_room().item(companion).map(|item| item.discovered);
        let hidden_here = match here {
            Some(false) => {
                if let Some(item) = self.current_room_mut().item_mut(companion) {
                    item.discovered = true;
                }
                true
            }
            Some(true) => false,
            None if self.companion_discovered(companion) => false,
            None => return None,
        };

        let link = match self.inventory.get_mut(holder) {
            Some(item) => item.hidden_object.take(),
            None => self
                .current_room_mut()
                .item_mut(holder)
                .and_then(|item| item.hidden_object.take()),
        };
        if !hidden_here {
            return None;
        }
        tracing::debug!(item = holder, companion, "hidden object revealed");
        link.map(|hidden| hidden.statement)
    }

    fn companion_discovered(&self, companion: &str) -> bool {
        self.inventory.contains(companion)
            || self
                .rooms
                .iter()
                .any(|room| room.item(companion).is_some_and(|i| i.discovered))
    }

    // -----------------------------------------------------------------------
    // Item transfer
    // -----------------------------------------------------------------------

    /// Move a discovered, portable item from the current room into the
    /// inventory.
    pub fn take_item(&mut self, name: &str) -> WorldResult<()> {
        let room = self.current_room_mut();
        match room.item(name) {
            Some(item) if item.discovered => {
                if item.is_feature {
                    return Err(WorldError::Fixed(name.to_string()));
                }
                if item.too_big {
                    return Err(WorldError::TooBig(name.to_string()));
                }
            }
            _ => return Err(WorldError::NotFound(name.to_string())),
        }

        if let Some(item) = room.remove_item(name) {
            self.inventory.insert(item);
        }
        Ok(())
    }

    /// Move an item from the inventory into the current room.
    pub fn drop_item(&mut self, name: &str) -> WorldResult<()> {
        let item = self
            .inventory
            .remove(name)
            .ok_or_else(|| WorldError::NotFound(name.to_string()))?;
        self.current_room_mut().put_item(item);
        Ok(())
    }

    /// Names of carried items, sorted.
    pub fn list_inventory(&self) -> Vec<&str> {
        self.inventory.names().collect()
    }

    /// Eat an inventory item. Returns `false`, leaving it in place, if the
    /// item is not edible.
    pub fn eat_item(&mut self, name: &str) -> WorldResult<bool> {
        let item = self
            .inventory
            .get(name)
            .ok_or_else(|| WorldError::NotFound(name.to_string()))?;
        if !item.is_edible {
            return Ok(false);
        }
        self.inventory.remove(name);
        Ok(true)
    }

    // -----------------------------------------------------------------------
    // Item state
    // -----------------------------------------------------------------------

    fn visible_room_item_mut(&mut self, name: &str) -> WorldResult<&mut Item> {
        self.current_room_mut()
            .item_mut(name)
            .filter(|item| item.discovered)
            .ok_or_else(|| WorldError::NotFound(name.to_string()))
    }

    /// Clear `too_big` on a discovered item in the current room. Returns
    /// `false` if it was already small enough.
    pub fn shrink_item(&mut self, name: &str) -> WorldResult<bool> {
        let item = self.visible_room_item_mut(name)?;
        if item.is_feature {
            return Err(WorldError::Fixed(name.to_string()));
        }
        Ok(std::mem::replace(&mut item.too_big, false))
    }

    /// Turn a discovered feature of the current room into a portable item.
    pub fn detach_item(&mut self, name: &str) -> WorldResult<()> {
        let item = self.visible_room_item_mut(name)?;
        item.is_feature = false;
        item.too_big = false;
        Ok(())
    }

    /// Set `discovered` on an item in the current room. Returns `false` if
    /// there is no such item.
    pub fn discover_item(&mut self, name: &str) -> bool {
        self.set_discovered(name, true)
    }

    /// Clear `discovered` on an item in the current room. Returns `false` if
    /// there is no such item.
    pub fn conceal_item(&mut self, name: &str) -> bool {
        self.set_discovered(name, false)
    }

    fn set_discovered(&mut self, name: &str, discovered: bool) -> bool {
        match self.current_room_mut().item_mut(name) {
            Some(item) => {
                item.discovered = discovered;
                true
            }
            None => false,
        }
    }

    /// Whether an item in the current room is discovered.
    pub fn is_discovered(&self, name: &str) -> bool {
        self.current_room().item(name).is_some_and(|i| i.discovered)
    }

    // -----------------------------------------------------------------------
    // Movement
    // -----------------------------------------------------------------------

    /// The blocker that keeps the player in the current room, if its
    /// required item is not carried.
    pub fn exit_blocker(&self) -> Option<&ExitBlocker> {
        self.current_room()
            .exit_blocker
            .as_ref()
            .filter(|blocker| !self.inventory.contains(&blocker.item))
    }

    /// Map an alternate spelling to its room name.
    ///
    /// Exact room names win; otherwise aliases are tried in room-name order.
    pub fn resolve_alias(&self, requested: &str) -> String {
        if self.is_room(requested) {
            return requested.to_string();
        }
        self.aliases
            .iter()
            .find(|(pattern, _)| pattern.is_match(requested))
            .map(|(_, room)| room.clone())
            .unwrap_or_else(|| requested.to_string())
    }

    /// Check that `room` is a known exit of the current room.
    pub fn validate_exit(&self, room: &str) -> WorldResult<()> {
        if self.current_room().has_exit(room) && self.is_room(room) {
            Ok(())
        } else {
            Err(WorldError::UnknownRoom(room.to_string()))
        }
    }

    /// Walk into `room`. The first visit shows the long description and
    /// marks the room visited; later visits show the short one.
    pub fn enter(&mut self, room: &str) -> WorldResult<RoomView<'_>> {
        self.current = self.position(room)?;
        let target = self.current_room_mut();
        let first_visit = !target.visited;
        target.visited = true;

        let room = self.current_room();
        let description = if first_visit {
            &room.long_description
        } else {
            &room.description
        };
        Ok(RoomView {
            description,
            items: room.visible_items().map(|i| i.name.as_str()).collect(),
        })
    }

    /// Put the player in `room` without going through an exit, as scripted
    /// scenes do. Always shows the long description.
    pub fn relocate(&mut self, room: &str) -> WorldResult<RoomView<'_>> {
        self.current = self.position(room)?;
        self.current_room_mut().visited = true;
        Ok(self.look_at_room())
    }

    fn position(&self, room: &str) -> WorldResult<usize> {
        self.index
            .get(room)
            .copied()
            .ok_or_else(|| WorldError::UnknownRoom(room.to_string()))
    }
}
