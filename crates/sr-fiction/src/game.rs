//! Session state shared by every verb handler.

use sr_core::{Snapshot, SnapshotStore, World};

use crate::config::GameConfig;
use crate::error::{FictionError, FictionResult};
use crate::outcome::{self, Status};
use crate::trigger::TransitionTriggers;

/// A snapshot read from disk, waiting for the player to confirm.
#[derive(Debug)]
struct PendingLoad {
    name: String,
    snapshot: Snapshot,
}

/// Everything one playthrough owns: the world, the session flags, and the
/// collaborators the verbs need.
#[derive(Debug)]
pub struct Game {
    world: World,
    config: GameConfig,
    triggers: TransitionTriggers,
    store: Box<dyn SnapshotStore>,
    elevated_on: Option<String>,
    status: Status,
    pending_load: Option<PendingLoad>,
}

impl Game {
    /// Start a game in an already loaded world, with the house's scenes.
    pub fn new(world: World, config: GameConfig, store: Box<dyn SnapshotStore>) -> Self {
        Self {
            world,
            config,
            triggers: TransitionTriggers::house(),
            store,
            elevated_on: None,
            status: Status::Ongoing,
            pending_load: None,
        }
    }

    /// Replace the transition scenes.
    pub fn with_triggers(mut self, triggers: TransitionTriggers) -> Self {
        self.triggers = triggers;
        self
    }

    /// The world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The world, mutably.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// The session configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Where the session stands.
    pub fn status(&self) -> Status {
        self.status
    }

    /// The feature the player is standing on, if any.
    pub fn elevated_on(&self) -> Option<&str> {
        self.elevated_on.as_deref()
    }

    /// Name of the snapshot awaiting confirmation, if any.
    pub fn pending_load(&self) -> Option<&str> {
        self.pending_load.as_ref().map(|p| p.name.as_str())
    }

    /// Whether the player is in `room`.
    pub fn is_in(&self, room: &str) -> bool {
        self.world.current_room_name() == room
    }

    // -----------------------------------------------------------------------
    // Elevation
    // -----------------------------------------------------------------------

    /// Stand on a feature. Fails if already standing on something.
    pub fn elevate(&mut self, feature: &str) -> FictionResult<()> {
        if let Some(current) = &self.elevated_on {
            return Err(climb_down_first(current));
        }
        self.elevated_on = Some(feature.to_string());
        Ok(())
    }

    /// Step down, returning what the player was standing on.
    pub fn descend(&mut self) -> Option<String> {
        self.elevated_on.take()
    }

    // -----------------------------------------------------------------------
    // Movement
    // -----------------------------------------------------------------------

    /// Walk through an exit of the current room.
    ///
    /// Checks, in order: elevation, the room's exit blocker, alias
    /// resolution, and that the destination is a known exit. Then fires the
    /// transition scene, enters the room, and checks for a win if the room
    /// is the terminal one.
    pub fn move_to_room(&mut self, requested: &str) -> FictionResult<String> {
        if let Some(feature) = &self.elevated_on {
            return Err(climb_down_first(feature));
        }
        if let Some(blocker) = self.world.exit_blocker() {
            return Err(FictionError::precondition(format!(
                "You cannot leave because {}.",
                blocker.reason
            )));
        }

        let destination = self.world.resolve_alias(requested);
        self.world.validate_exit(&destination)?;

        let from = self.world.current_room_name().to_string();
        tracing::debug!(from = %from, to = %destination, "moving");
        let scene = self
            .triggers
            .fire(&from, &destination, &mut self.world)
            .unwrap_or_default();

        let mut out = scene.narration;
        if let Some(detour) = scene.redirect {
            let view = self.world.relocate(&detour)?;
            push_paragraph(&mut out, &view.to_string());
            return Ok(out);
        }

        let view = self.world.enter(&destination)?;
        push_paragraph(&mut out, &view.to_string());

        if self.is_in(&self.config.terminal_room) && self.has_all_items() {
            push_paragraph(&mut out, &self.finish(Status::Won));
        }
        Ok(out)
    }

    /// Fail if the player is standing on something.
    pub fn stay_grounded(&self) -> FictionResult<()> {
        match &self.elevated_on {
            Some(feature) => Err(climb_down_first(feature)),
            None => Ok(()),
        }
    }

    /// Put the player in `room` outside the exit graph, as the dog, the
    /// eagle, and the chutes do. Refused while elevated; never checks for a
    /// win.
    pub fn relocate(&mut self, room: &str) -> FictionResult<String> {
        self.stay_grounded()?;
        let view = self.world.relocate(room)?;
        tracing::debug!(room, "relocated");
        Ok(view.to_string())
    }

    // -----------------------------------------------------------------------
    // Outcome
    // -----------------------------------------------------------------------

    /// Whether every required item is carried.
    pub fn has_all_items(&self) -> bool {
        outcome::have_all_items(&self.config.required_items, self.world.inventory())
    }

    /// End the session by giving up: a win if everything is carried,
    /// otherwise a loss.
    pub fn give_up(&mut self) -> String {
        let status = if self.has_all_items() {
            Status::Won
        } else {
            Status::Lost
        };
        self.finish(status)
    }

    /// End the session and return the closing narration.
    pub fn finish(&mut self, status: Status) -> String {
        self.status = status;
        match status {
            Status::Won => {
                tracing::info!(room = %self.world.current_room_name(), "game won");
                outcome::WIN_NARRATION.to_string()
            }
            Status::Lost => {
                let missing =
                    outcome::missing_items(&self.config.required_items, self.world.inventory());
                tracing::info!(?missing, "game lost");
                outcome::LOSS_NARRATION.to_string()
            }
            Status::Exited => {
                tracing::info!("game exited");
                "Goodbye!".to_string()
            }
            Status::Ongoing => String::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Snapshots
    // -----------------------------------------------------------------------

    /// Write a snapshot of the whole session.
    pub fn save(&mut self) -> FictionResult<String> {
        let snapshot = Snapshot::capture(&self.world, self.elevated_on.as_deref());
        let name = self.store.save(&snapshot)?;
        Ok(format!("Saved game {name}"))
    }

    /// Read and validate a snapshot, then ask the player to confirm.
    ///
    /// Nothing changes until [`Game::confirm_load`] sees a `y`.
    pub fn stage_load(&mut self, name: &str) -> FictionResult<String> {
        let snapshot = self.store.load(name)?;
        self.pending_load = Some(PendingLoad {
            name: name.to_string(),
            snapshot,
        });
        Ok(format!("Load game '{name}'. Are you sure? ('y' or 'n')"))
    }

    /// Answer a pending load confirmation.
    ///
    /// `y` replaces the world and elevation flag in one step, `n` cancels,
    /// a blank line keeps waiting, and anything else asks again.
    pub fn confirm_load(&mut self, answer: &str) -> FictionResult<String> {
        let Some(pending) = self.pending_load.take() else {
            return Err(FictionError::precondition("There is no saved game waiting to load."));
        };
        match answer.split_whitespace().next() {
            Some("y") => {
                let (world, elevated_on) = pending.snapshot.into_world()?;
                self.world = world;
                self.elevated_on = elevated_on;
                tracing::info!(name = %pending.name, "snapshot loaded");
                Ok(format!(
                    "Loaded game '{}'.\n\n{}",
                    pending.name,
                    self.world.look_at_room()
                ))
            }
            Some("n") => Ok("Load cancelled.".to_string()),
            None => {
                self.pending_load = Some(pending);
                Ok(String::new())
            }
            Some(_) => {
                self.pending_load = Some(pending);
                Ok("Please type 'y' or 'n'.".to_string())
            }
        }
    }
}

fn climb_down_first(feature: &str) -> FictionError {
    FictionError::precondition(format!("You need to CLIMB DOWN from the {feature} first."))
}

fn push_paragraph(out: &mut String, text: &str) {
    if !out.is_empty() && !text.is_empty() {
        out.push_str("\n\n");
    }
    out.push_str(text);
}

#[cfg(test)]
mod tests {
    use super::*;
    use sr_core::{Item, LoadLimits, MemoryStore, Room};

    fn config() -> GameConfig {
        GameConfig::default()
            .with_start_room("Porch")
            .with_terminal_room("Lab")
            .with_required_items(["key"])
            .with_limits(LoadLimits::none())
    }

    fn game() -> Game {
        let rooms = [
            Room::new("Porch")
                .with_descriptions("A wide porch.", "The porch.")
                .with_exit("Lab")
                .with_exit("Shed")
                .with_item(Item::new("key", "A brass key."))
                .with_item(Item::new("bench", "A bench.").feature()),
            Room::new("Lab")
                .with_descriptions("A humming lab.", "The lab.")
                .with_exit("Porch"),
            Room::new("Shed")
                .with_descriptions("A dark shed.", "The shed.")
                .with_exit("Porch")
                .with_blocker("lamp", "it is too dark to find the door"),
        ];
        let world = World::new(rooms, "Porch").unwrap();
        Game::new(world, config(), Box::new(MemoryStore::new()))
            .with_triggers(TransitionTriggers::new())
    }

    #[test]
    fn elevation_blocks_movement() {
        let mut g = game();
        g.elevate("bench").unwrap();
        let err = g.move_to_room("Lab").unwrap_err();
        assert_eq!(err.to_string(), "You need to CLIMB DOWN from the bench first.");
        assert!(g.is_in("Porch"));

        assert!(g.elevate("bench").is_err());
        assert_eq!(g.descend().as_deref(), Some("bench"));
        assert!(g.move_to_room("Lab").is_ok());
    }

    #[test]
    fn exit_blocker_keeps_player_in() {
        let mut g = game();
        g.move_to_room("Shed").unwrap();
        let err = g.move_to_room("Porch").unwrap_err();
        assert_eq!(
            err.to_string(),
            "You cannot leave because it is too dark to find the door."
        );
        assert!(g.is_in("Shed"));

        g.world_mut()
            .room_mut("Shed")
            .unwrap()
            .put_item(Item::new("lamp", "A lamp."));
        g.world_mut().take_item("lamp").unwrap();
        assert!(g.move_to_room("Porch").is_ok());
    }

    #[test]
    fn invalid_exit_reported() {
        let mut g = game();
        let err = g.move_to_room("Moon").unwrap_err();
        assert_eq!(err.to_string(), "Moon is not a valid exit");
    }

    #[test]
    fn terminal_room_wins_only_with_items() {
        let mut g = game();
        let out = g.move_to_room("Lab").unwrap();
        assert_eq!(out, "A humming lab.");
        assert_eq!(g.status(), Status::Ongoing);

        g.move_to_room("Porch").unwrap();
        g.world_mut().take_item("key").unwrap();
        let out = g.move_to_room("Lab").unwrap();
        assert!(out.starts_with("The lab."));
        assert!(out.contains("YOU WIN!"));
        assert_eq!(g.status(), Status::Won);
    }

    #[test]
    fn relocation_skips_the_win_check() {
        let mut g = game();
        g.world_mut().take_item("key").unwrap();
        let out = g.relocate("Lab").unwrap();
        assert_eq!(out, "A humming lab.");
        assert_eq!(g.status(), Status::Ongoing);
    }

    #[test]
    fn relocation_refused_while_elevated() {
        let mut g = game();
        g.elevate("bench").unwrap();
        let err = g.relocate("Lab").unwrap_err();
        assert_eq!(err.to_string(), "You need to CLIMB DOWN from the bench first.");
        assert!(g.is_in("Porch"));
        assert_eq!(g.elevated_on(), Some("bench"));
    }

    #[test]
    fn trigger_redirect_overrides_destination() {
        let triggers = TransitionTriggers::new().on("Porch", "Lab", |_| {
            crate::trigger::TriggerOutcome::redirect("A gust blows you away.", "Shed")
        });
        let mut g = game().with_triggers(triggers);
        let out = g.move_to_room("Lab").unwrap();
        assert_eq!(out, "A gust blows you away.\n\nA dark shed.");
        assert!(g.is_in("Shed"));
    }

    #[test]
    fn give_up_outcomes() {
        let mut g = game();
        assert!(g.give_up().contains("GAME OVER"));
        assert_eq!(g.status(), Status::Lost);

        let mut g = game();
        g.world_mut().take_item("key").unwrap();
        assert!(g.give_up().contains("YOU WIN!"));
        assert_eq!(g.status(), Status::Won);
    }

    #[test]
    fn load_waits_for_confirmation() {
        let mut g = game();
        g.elevate("bench").unwrap();
        let saved = g.save().unwrap();
        let name = saved.trim_start_matches("Saved game ").to_string();

        g.descend();
        g.world_mut().take_item("key").unwrap();
        g.move_to_room("Lab").unwrap();

        let prompt = g.stage_load(&name).unwrap();
        assert!(prompt.contains("Are you sure?"));
        assert_eq!(g.pending_load(), Some(name.as_str()));
        assert!(g.is_in("Lab"));

        assert_eq!(g.confirm_load("maybe").unwrap(), "Please type 'y' or 'n'.");
        assert_eq!(g.confirm_load("   ").unwrap(), "");
        assert!(g.pending_load().is_some());

        let out = g.confirm_load("y").unwrap();
        assert!(out.contains("A wide porch."));
        assert!(g.is_in("Porch"));
        assert!(!g.world().has_item("key"));
        assert_eq!(g.elevated_on(), Some("bench"));
        assert!(g.pending_load().is_none());
    }

    #[test]
    fn load_can_be_cancelled() {
        let mut g = game();
        let saved = g.save().unwrap();
        let name = saved.trim_start_matches("Saved game ").to_string();
        g.move_to_room("Lab").unwrap();

        g.stage_load(&name).unwrap();
        assert_eq!(g.confirm_load("n").unwrap(), "Load cancelled.");
        assert!(g.is_in("Lab"));
        assert!(g.confirm_load("y").is_err());
    }

    #[test]
    fn missing_snapshot_changes_nothing() {
        let mut g = game();
        let err = g.stage_load("nope.json").unwrap_err();
        assert_eq!(err.to_string(), "File 'nope.json' not found!");
        assert!(g.pending_load().is_none());
    }
}
