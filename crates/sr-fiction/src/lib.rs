//! Interactive fiction engine for Shrink Ray.
//!
//! Turns lines of player input into changes to an [`sr_core::World`]:
//! a tokenizer that finds the verb and its argument, a dispatcher that hands
//! each verb to its handler, scripted scenes bound to room-to-room moves,
//! and the win/loss check. [`Session`] ties them together.

/// Session configuration.
pub mod config;
/// Verb dispatch.
pub mod dispatch;
/// Error types for the fiction engine.
pub mod error;
/// Game state shared by the verb handlers.
pub mod game;
pub mod house;
/// Win and loss evaluation.
pub mod outcome;
/// Command parsing.
pub mod parser;
/// Interactive fiction session management.
pub mod session;
/// Scripted transition scenes.
pub mod trigger;
/// Standard verb handlers.
pub mod verbs;

pub use config::GameConfig;
pub use dispatch::{Action, Dispatcher};
pub use error::{FictionError, FictionResult};
pub use game::Game;
pub use outcome::{Status, have_all_items};
pub use parser::{Command, Verb, parse_command};
pub use session::Session;
pub use trigger::{TransitionTriggers, TriggerOutcome};
