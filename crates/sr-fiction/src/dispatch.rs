//! Verb dispatch.

use std::collections::HashMap;
use std::fmt;

use crate::error::{FictionError, FictionResult};
use crate::game::Game;
use crate::parser::Verb;
use crate::verbs;

/// A verb handler.
///
/// Handlers get the argument phrase (already normalized by the parser) and
/// return the text to show. Recoverable problems come back as
/// [`FictionError`]s whose `Display` is the player-facing message.
pub trait Action {
    /// Run the verb against the game.
    fn execute(&self, game: &mut Game, argument: Option<&str>) -> FictionResult<String>;
}

/// Maps each [`Verb`] to its handler.
#[derive(Default)]
pub struct Dispatcher {
    actions: HashMap<Verb, Box<dyn Action>>,
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut verbs: Vec<_> = self.actions.keys().map(Verb::name).collect();
        verbs.sort_unstable();
        f.debug_struct("Dispatcher").field("verbs", &verbs).finish()
    }
}

impl Dispatcher {
    /// A dispatcher with no handlers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a handler to a verb, replacing any existing one.
    pub fn register(&mut self, verb: Verb, action: impl Action + 'static) {
        self.actions.insert(verb, Box::new(action));
    }

    /// Every verb bound to its standard handler.
    pub fn standard() -> Self {
        let mut d = Self::new();
        d.register(Verb::Look, verbs::Look);
        d.register(Verb::Go, verbs::Go);
        d.register(Verb::Goto, verbs::Goto);
        d.register(Verb::Take, verbs::Take);
        d.register(Verb::Drop, verbs::DropItem);
        d.register(Verb::Inventory, verbs::ShowInventory);
        d.register(Verb::Eat, verbs::Eat);
        d.register(Verb::Use, verbs::Use);
        d.register(Verb::Climb, verbs::Climb);
        d.register(Verb::Shrink, verbs::Shrink);
        d.register(Verb::Whistle, verbs::Whistle);
        d.register(Verb::Call, verbs::Call);
        d.register(Verb::Enter, verbs::Enter);
        d.register(Verb::Taunt, verbs::Taunt);
        d.register(Verb::Jump, verbs::Jump);
        d.register(Verb::Slide, verbs::Slide);
        d.register(Verb::Cut, verbs::Cut);
        d.register(Verb::SaveGame, verbs::SaveGame);
        d.register(Verb::LoadGame, verbs::LoadGame);
        d.register(Verb::GiveUp, verbs::GiveUp);
        d.register(Verb::Exit, verbs::Exit);
        d.register(Verb::Help, verbs::Help);
        d
    }

    /// Whether a handler is bound to `verb`.
    pub fn handles(&self, verb: Verb) -> bool {
        self.actions.contains_key(&verb)
    }

    /// Run the handler for `verb`.
    pub fn dispatch(
        &self,
        game: &mut Game,
        verb: Verb,
        argument: Option<&str>,
    ) -> FictionResult<String> {
        let action = self
            .actions
            .get(&verb)
            .ok_or_else(|| FictionError::InvalidCommand(verb.name().to_string()))?;
        tracing::debug!(verb = %verb, argument = ?argument, "dispatching");
        action.execute(game, argument)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use sr_core::{MemoryStore, Room, World};

    struct Echo;

    impl Action for Echo {
        fn execute(&self, _game: &mut Game, argument: Option<&str>) -> FictionResult<String> {
            Ok(argument.unwrap_or("nothing").to_string())
        }
    }

    fn game() -> Game {
        let world = World::new([Room::new("Attic")], "Attic").unwrap();
        Game::new(world, GameConfig::default(), Box::new(MemoryStore::new()))
    }

    #[test]
    fn standard_covers_every_verb() {
        let d = Dispatcher::standard();
        for token in [
            "look", "go", "goto", "take", "drop", "inventory", "eat", "use", "climb", "shrink",
            "whistle", "call", "enter", "taunt", "jump", "slide", "cut", "savegame", "loadgame",
            "giveup", "exit", "help",
        ] {
            let verb = Verb::parse(token).unwrap();
            assert!(d.handles(verb), "{token} has no handler");
        }
    }

    #[test]
    fn unbound_verb_is_invalid() {
        let d = Dispatcher::new();
        let err = d.dispatch(&mut game(), Verb::Call, None).unwrap_err();
        assert_eq!(err.to_string(), "Not a valid command: call");
    }

    #[test]
    fn custom_handler() {
        let mut d = Dispatcher::new();
        d.register(Verb::Call, Echo);
        let mut g = game();
        assert_eq!(d.dispatch(&mut g, Verb::Call, Some("mom")).unwrap(), "mom");
        assert_eq!(d.dispatch(&mut g, Verb::Call, None).unwrap(), "nothing");
    }
}
