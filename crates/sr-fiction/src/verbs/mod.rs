//! Standard verb handlers.

mod gadgets;
mod items;
mod look;
mod movement;
mod system;

pub use gadgets::{Call, Enter, Taunt, Use, Whistle};
pub use items::{Cut, DropItem, Eat, ShowInventory, Shrink, Take};
pub use look::Look;
pub use movement::{Climb, Go, Goto, Jump, Slide};
pub use system::{Exit, GiveUp, Help, LoadGame, SaveGame};
