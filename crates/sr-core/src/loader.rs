//! Reading room definitions from a directory of JSON files.

use std::path::{Path, PathBuf};

use crate::error::{LoadError, LoadResult};
use crate::room::Room;
use crate::world::World;

/// Minimum amount of content a world must define to be playable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadLimits {
    /// Fewest rooms accepted.
    pub min_rooms: usize,
    /// Fewest items accepted, counted across all rooms.
    pub min_items: usize,
}

impl Default for LoadLimits {
    fn default() -> Self {
        Self {
            min_rooms: 15,
            min_items: 8,
        }
    }
}

impl LoadLimits {
    /// No minimums. Handy for small test worlds.
    pub fn none() -> Self {
        Self {
            min_rooms: 0,
            min_items: 0,
        }
    }
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> LoadError {
    let path = path.to_path_buf();
    move |source| LoadError::Io { path, source }
}

/// Read every `*.json` room file in `dir`, sorted by path.
pub fn read_rooms(dir: &Path) -> LoadResult<Vec<Room>> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
        .map_err(io_err(dir))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();

    // Sort for deterministic ordering
    paths.sort();

    let mut rooms = Vec::with_capacity(paths.len());
    for path in paths {
        let content = std::fs::read_to_string(&path).map_err(io_err(&path))?;
        let room: Room = serde_json::from_str(&content)
            .map_err(|source| LoadError::Json {
                path: path.clone(),
                source,
            })?;
        tracing::debug!(room = %room.name, path = %path.display(), "loaded room");
        rooms.push(room);
    }
    Ok(rooms)
}

/// Load a playable world from `dir`, starting the player in `start`.
///
/// Fails if the directory cannot be read, a file is malformed, or the
/// world is smaller than `limits` allows. Exits that name unknown rooms
/// are not checked here; they fail when the player tries them.
pub fn load_rooms(dir: &Path, start: &str, limits: LoadLimits) -> LoadResult<World> {
    let rooms = read_rooms(dir)?;

    if rooms.len() < limits.min_rooms {
        return Err(LoadError::TooFewRooms {
            min: limits.min_rooms,
            found: rooms.len(),
        });
    }

    let items: usize = rooms.iter().map(|r| r.items.len()).sum();
    if items < limits.min_items {
        return Err(LoadError::TooFewItems {
            min: limits.min_items,
            found: items,
        });
    }

    let world = World::new(rooms, start)?;
    tracing::info!(
        rooms = world.rooms().len(),
        items,
        dir = %dir.display(),
        "world loaded"
    );
    Ok(world)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;
    use std::fs;
    use tempfile::TempDir;

    fn write_room(dir: &Path, room: &Room) {
        let file = format!("{}.json", room.name.to_lowercase().replace(' ', "_"));
        fs::write(dir.join(file), serde_json::to_string_pretty(room).unwrap()).unwrap();
    }

    fn small_house() -> TempDir {
        let dir = TempDir::new().unwrap();
        write_room(
            dir.path(),
            &Room::new("Attic")
                .with_descriptions("Dusty.", "The attic.")
                .with_exit("Upstairs Hallway")
                .with_item(Item::new("shrink ray", "Zap.")),
        );
        write_room(
            dir.path(),
            &Room::new("Upstairs Hallway")
                .with_descriptions("Long.", "The hallway.")
                .with_exit("Attic")
                .with_item(Item::new("rug", "Soft.").feature()),
        );
        fs::write(dir.path().join("notes.txt"), "not a room").unwrap();
        dir
    }

    #[test]
    fn loads_json_files_only() {
        let dir = small_house();
        let world = load_rooms(dir.path(), "Attic", LoadLimits::none()).unwrap();
        assert_eq!(world.rooms().len(), 2);
        assert_eq!(world.item_count(), 2);
        assert_eq!(world.current_room_name(), "Attic");
    }

    #[test]
    fn too_few_rooms_is_fatal() {
        let dir = small_house();
        let err = load_rooms(dir.path(), "Attic", LoadLimits::default()).unwrap_err();
        assert!(matches!(err, LoadError::TooFewRooms { min: 15, found: 2 }));
    }

    #[test]
    fn too_few_items_is_fatal() {
        let dir = small_house();
        let limits = LoadLimits {
            min_rooms: 2,
            min_items: 8,
        };
        let err = load_rooms(dir.path(), "Attic", limits).unwrap_err();
        assert!(matches!(err, LoadError::TooFewItems { min: 8, found: 2 }));
    }

    #[test]
    fn malformed_room_is_fatal() {
        let dir = small_house();
        fs::write(dir.path().join("broken.json"), "{ \"name\": 7 }").unwrap();
        let err = load_rooms(dir.path(), "Attic", LoadLimits::none()).unwrap_err();
        assert!(matches!(err, LoadError::Json { .. }));
    }

    #[test]
    fn missing_directory_is_fatal() {
        let err = load_rooms(Path::new("/no/such/rooms"), "Attic", LoadLimits::none()).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn dangling_exit_is_not_checked() {
        let dir = small_house();
        write_room(
            dir.path(),
            &Room::new("Closet")
                .with_descriptions("Cramped.", "The closet.")
                .with_exit("Narnia"),
        );
        let world = load_rooms(dir.path(), "Closet", LoadLimits::none()).unwrap();
        assert!(world.validate_exit("Narnia").is_err());
    }
}
