//! Interactive fiction session management.

use std::path::Path;

use sr_core::{LoadResult, SnapshotStore, World, load_rooms};

use crate::config::GameConfig;
use crate::dispatch::Dispatcher;
use crate::error::{FictionError, FictionResult};
use crate::game::Game;
use crate::house;
use crate::outcome::Status;
use crate::parser::{Command, parse_command};

/// A playthrough: the game state plus the verb table that drives it.
#[derive(Debug)]
pub struct Session {
    game: Game,
    dispatcher: Dispatcher,
}

impl Session {
    /// Start a session in an already built world.
    pub fn new(world: World, config: GameConfig, store: Box<dyn SnapshotStore>) -> Self {
        Self {
            game: Game::new(world, config, store),
            dispatcher: Dispatcher::standard(),
        }
    }

    /// Load the rooms in `dir` and start a session in the configured start
    /// room.
    pub fn load(dir: &Path, config: GameConfig, store: Box<dyn SnapshotStore>) -> LoadResult<Self> {
        let world = load_rooms(dir, &config.start_room, config.limits)?;
        Ok(Self::new(world, config, store))
    }

    /// Replace the verb table.
    pub fn with_dispatcher(mut self, dispatcher: Dispatcher) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    /// Text shown before the first prompt.
    pub fn opening(&self) -> &'static str {
        house::OPENING
    }

    /// The game state.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The game state, mutably.
    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    /// Where the session stands.
    pub fn status(&self) -> Status {
        self.game.status()
    }

    /// Whether the session has ended.
    pub fn is_over(&self) -> bool {
        self.game.status().is_over()
    }

    /// Process one line of player input and return the response.
    ///
    /// While a load is waiting for confirmation the line is taken as the
    /// answer. Otherwise it is parsed and dispatched.
    pub fn process(&mut self, input: &str) -> FictionResult<String> {
        if self.is_over() {
            return Err(FictionError::precondition("The game is over."));
        }
        if self.game.pending_load().is_some() {
            return self.game.confirm_load(&input.to_lowercase());
        }

        let world = self.game.world();
        let command = parse_command(input, |name| world.is_room(name));
        tracing::debug!(?command, "parsed");
        self.execute(command)
    }

    /// Execute a parsed command.
    pub fn execute(&mut self, command: Command) -> FictionResult<String> {
        match command {
            Command::Empty => Ok(String::new()),
            Command::GoTo { room } => self.game.move_to_room(&room),
            Command::Act { verb, argument } => {
                self.dispatcher
                    .dispatch(&mut self.game, verb, argument.as_deref())
            }
            Command::Missing { verb } => Ok(verb.prompt()),
            Command::Unknown { input } => Err(FictionError::InvalidCommand(input)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sr_core::{Item, LoadLimits, MemoryStore, Room};

    fn session() -> Session {
        let rooms = [
            Room::new(house::ATTIC)
                .with_descriptions(
                    "A vast, dusty attic. Cardboard boxes loom like skyscrapers.",
                    "The attic.",
                )
                .with_exit(house::UPSTAIRS_HALLWAY)
                .with_item(Item::new(house::SHRINK_RAY, "Makes things smaller."))
                .with_item(Item::new("trunk", "A steamer trunk.").too_big())
                .with_item(
                    Item::new("sewing box", "A wicker sewing box.")
                        .feature()
                        .hiding(house::THREAD, "A spool of thread rolls out of the box!"),
                )
                .with_item(Item::new(house::THREAD, "A spool of thread.").undiscovered()),
            Room::new(house::UPSTAIRS_HALLWAY)
                .with_alias("^(upstairs )?hall(way)?$")
                .with_descriptions(
                    "A hallway stretching off like a highway.",
                    "The upstairs hallway.",
                )
                .with_exit(house::ATTIC)
                .with_exit(house::BASEMENT_LAB),
            Room::new(house::BASEMENT_LAB)
                .with_descriptions("Your parents' lab, humming quietly.", "The basement lab.")
                .with_exit(house::UPSTAIRS_HALLWAY)
                .with_item(Item::new(house::SOFTWARE, "A disk.")),
        ];
        let world = World::new(rooms, house::ATTIC).unwrap();
        let config = GameConfig::default()
            .with_required_items([house::SHRINK_RAY, house::SOFTWARE])
            .with_limits(LoadLimits::none());
        Session::new(world, config, Box::new(MemoryStore::new()))
    }

    #[test]
    fn long_then_short_description() {
        let mut s = session();
        s.process("take shrink ray").unwrap();
        let first = s.process("go Upstairs Hallway").unwrap();
        assert!(first.contains("A hallway stretching off like a highway."));
        s.process("go to attic").unwrap();
        let second = s.process("upstairs hallway").unwrap();
        assert!(second.ends_with("The upstairs hallway."));
        assert!(!second.contains("highway"));
    }

    #[test]
    fn alias_resolves_for_go() {
        let mut s = session();
        s.process("go hall").unwrap();
        assert!(s.game().is_in(house::UPSTAIRS_HALLWAY));
    }

    #[test]
    fn shrink_scenario() {
        let mut s = session();
        s.process("take shrink ray").unwrap();
        assert!(s.process("take trunk").is_err());
        assert!(s.process("shrink trunk").unwrap().contains("SHRINKING!"));
        assert!(s.process("take trunk").is_ok());
        s.process("drop trunk").unwrap();
        let err = s.process("shrink trunk").unwrap_err();
        assert!(err.to_string().starts_with("I don't think that can get any smaller"));
    }

    #[test]
    fn discovery_is_idempotent() {
        let mut s = session();
        assert!(s.process("take thread").is_err());
        let first = s.process("look at sewing box").unwrap();
        assert!(first.contains("rolls out"));
        let second = s.process("look at sewing box").unwrap();
        assert!(!second.contains("rolls out"));
        assert!(s.process("take thread").is_ok());
    }

    #[test]
    fn terminal_room_without_items_then_give_up() {
        let mut s = session();
        s.process("go upstairs hallway").unwrap();
        s.process("basement lab").unwrap();
        assert_eq!(s.status(), Status::Ongoing);
        assert!(!s.is_over());

        let out = s.process("give up").unwrap();
        assert!(out.contains("GAME OVER"));
        assert_eq!(s.status(), Status::Lost);
        assert!(s.process("look").is_err());
    }

    #[test]
    fn terminal_room_with_items_wins() {
        let mut s = session();
        s.process("take shrink ray").unwrap();
        s.process("go upstairs hallway").unwrap();
        s.process("go basement lab").unwrap();
        s.process("take software").unwrap();
        s.process("go upstairs hallway").unwrap();
        let out = s.process("Basement Lab").unwrap();
        assert!(out.contains("YOU WIN!"));
        assert_eq!(s.status(), Status::Won);
    }

    #[test]
    fn prompts_and_unknown_commands() {
        let mut s = session();
        assert_eq!(s.process("").unwrap(), "");
        assert_eq!(s.process("look at").unwrap(), "What would you like to look at?");
        assert_eq!(s.process("go to").unwrap(), "Go where?");
        assert_eq!(s.process("take").unwrap(), "Take what?");
        let err = s.process("Dance wildly").unwrap_err();
        assert_eq!(err.to_string(), "Not a valid command: dance wildly");
    }

    #[test]
    fn pending_load_consumes_the_next_line() {
        let mut s = session();
        let saved = s.process("savegame").unwrap();
        let name = saved.trim_start_matches("Saved game ").to_string();
        s.process("take shrink ray").unwrap();

        s.process(&format!("loadgame {name}")).unwrap();
        assert_eq!(s.process("look").unwrap(), "Please type 'y' or 'n'.");
        s.process("Y").unwrap();
        assert!(!s.game().world().has_item(house::SHRINK_RAY));
        assert!(s.process("look").unwrap().contains("dusty attic"));
    }

    #[test]
    fn quit_ends_the_session() {
        let mut s = session();
        let out = s.process("quit").unwrap();
        assert!(out.ends_with("Goodbye!"));
        assert_eq!(s.status(), Status::Exited);
    }
}
