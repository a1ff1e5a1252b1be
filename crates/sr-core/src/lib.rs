//! Core types for Shrink Ray: rooms, items, the inventory, and the world.
//!
//! This crate owns the data model and its invariant-preserving mutators.
//! It knows nothing about verbs or narration; the fiction crate drives it.
//! Worlds come from a directory of JSON room files ([`loader`]) and can be
//! captured to and restored from versioned [`snapshot`]s.

/// Error types used throughout the crate.
pub mod error;
/// The player's inventory.
pub mod inventory;
/// Portable objects and fixed features.
pub mod item;
pub mod loader;
/// Rooms and their exits.
pub mod room;
pub mod snapshot;
/// The world model that owns every room and item.
pub mod world;

/// Re-export error types.
pub use error::{LoadError, LoadResult, WorldError, WorldResult};
pub use inventory::Inventory;
pub use item::{HiddenObject, Item};
pub use loader::{LoadLimits, load_rooms};
pub use room::{ExitBlocker, Room};
pub use snapshot::{DirStore, MemoryStore, Snapshot, SnapshotError, SnapshotStore};
/// Re-export world model types.
pub use world::{Examination, RoomView, World};
