//! Whole-state save files.
//!
//! A [`Snapshot`] captures everything needed to resume a session: every
//! room (with its items and visited flag), the inventory, the current room,
//! and the elevation flag. Snapshots are versioned and validated before
//! they are turned back into a [`World`], so a bad file never replaces live
//! state.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::inventory::Inventory;
use crate::room::Room;
use crate::world::World;

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Alias for `Result<T, SnapshotError>`.
pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Errors while saving or restoring a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Filesystem failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a valid snapshot.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// No snapshot with this name.
    #[error("File '{0}' not found!")]
    NotFound(String),

    /// Written by an incompatible version.
    #[error("Incompatible save version: expected {expected}, found {found}")]
    IncompatibleVersion {
        /// Version this build understands.
        expected: u32,
        /// Version found in the file.
        found: u32,
    },

    /// The saved current room is not among the saved rooms.
    #[error("Save file is incomplete: room '{0}' is missing")]
    UnknownCurrentRoom(String),

    /// The saved rooms do not form a valid world.
    #[error("Save file is invalid: {0}")]
    Invalid(String),
}

/// Complete, versioned game state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Format version, checked on restore.
    pub version: u32,
    /// When the snapshot was taken.
    pub saved_at: DateTime<Utc>,
    /// Name of the room the player was in.
    pub current_room: String,
    /// Every room, keyed by name.
    pub rooms: BTreeMap<String, Room>,
    /// The player's inventory.
    pub inventory: Inventory,
    /// Feature the player was standing on, if any.
    #[serde(default)]
    pub elevated_on: Option<String>,
}

impl Snapshot {
    /// Capture the world and session flags.
    pub fn capture(world: &World, elevated_on: Option<&str>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            saved_at: Utc::now(),
            current_room: world.current_room_name().to_string(),
            rooms: world
                .rooms()
                .iter()
                .map(|room| (room.name.clone(), room.clone()))
                .collect(),
            inventory: world.inventory().clone(),
            elevated_on: elevated_on.map(str::to_string),
        }
    }

    /// Check the version and that the current room is present.
    pub fn validate(&self) -> SnapshotResult<()> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::IncompatibleVersion {
                expected: SNAPSHOT_VERSION,
                found: self.version,
            });
        }
        if !self.rooms.contains_key(&self.current_room) {
            return Err(SnapshotError::UnknownCurrentRoom(self.current_room.clone()));
        }
        Ok(())
    }

    /// Validate and rebuild the world, relinking the current room.
    ///
    /// Returns the world together with the saved elevation flag.
    pub fn into_world(self) -> SnapshotResult<(World, Option<String>)> {
        self.validate()?;
        let world = World::from_parts(self.rooms, self.inventory, &self.current_room)
            .map_err(|e| SnapshotError::Invalid(e.to_string()))?;
        Ok((world, self.elevated_on))
    }
}

/// Somewhere snapshots can be written to and read back from by name.
pub trait SnapshotStore: std::fmt::Debug {
    /// Persist a snapshot under a fresh, unique name and return that name.
    fn save(&mut self, snapshot: &Snapshot) -> SnapshotResult<String>;

    /// Read back the snapshot with the given name.
    fn load(&self, name: &str) -> SnapshotResult<Snapshot>;
}

fn snapshot_name(prefix: &str, at: DateTime<Utc>, attempt: usize) -> String {
    let stamp = at.format("%Y%m%d-%H%M%S-%3f");
    if attempt == 0 {
        format!("{prefix}-{stamp}.json")
    } else {
        format!("{prefix}-{stamp}-{attempt}.json")
    }
}

/// Saves snapshots as pretty-printed JSON files in a directory.
#[derive(Debug, Clone)]
pub struct DirStore {
    dir: PathBuf,
    prefix: String,
}

impl DirStore {
    /// Store snapshots in `dir` as `shrinkray-<timestamp>.json`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            prefix: "shrinkray".to_string(),
        }
    }

    /// Change the file name prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Directory snapshots are written to.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl SnapshotStore for DirStore {
    fn save(&mut self, snapshot: &Snapshot) -> SnapshotResult<String> {
        let mut attempt = 0;
        let name = loop {
            let name = snapshot_name(&self.prefix, snapshot.saved_at, attempt);
            if !self.dir.join(&name).exists() {
                break name;
            }
            attempt += 1;
        };

        let file = File::create(self.dir.join(&name))?;
        serde_json::to_writer_pretty(BufWriter::new(file), snapshot)?;
        tracing::info!(name = %name, dir = %self.dir.display(), "snapshot saved");
        Ok(name)
    }

    fn load(&self, name: &str) -> SnapshotResult<Snapshot> {
        let file =
            File::open(self.dir.join(name)).map_err(|_| SnapshotError::NotFound(name.to_string()))?;
        let snapshot: Snapshot = serde_json::from_reader(BufReader::new(file))?;
        snapshot.validate()?;
        Ok(snapshot)
    }
}

/// Keeps serialized snapshots in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    saves: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of stored snapshots, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.saves.keys().map(String::as_str)
    }

    /// Store raw JSON under a name, bypassing serialization.
    pub fn insert_raw(&mut self, name: impl Into<String>, json: impl Into<String>) {
        self.saves.insert(name.into(), json.into());
    }
}

impl SnapshotStore for MemoryStore {
    fn save(&mut self, snapshot: &Snapshot) -> SnapshotResult<String> {
        let name = snapshot_name("shrinkray", snapshot.saved_at, self.saves.len());
        self.saves
            .insert(name.clone(), serde_json::to_string(snapshot)?);
        Ok(name)
    }

    fn load(&self, name: &str) -> SnapshotResult<Snapshot> {
        let json = self
            .saves
            .get(name)
            .ok_or_else(|| SnapshotError::NotFound(name.to_string()))?;
        let snapshot: Snapshot = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }
}
