use crate::dispatch::Action;
use crate::error::FictionResult;
use crate::game::Game;
use crate::house;
use crate::outcome::Status;
use crate::parser::Verb;

/// `help`.
pub struct Help;

impl Action for Help {
    fn execute(&self, _game: &mut Game, _argument: Option<&str>) -> FictionResult<String> {
        Ok(house::HELP.to_string())
    }
}

/// `savegame`.
pub struct SaveGame;

impl Action for SaveGame {
    fn execute(&self, game: &mut Game, _argument: Option<&str>) -> FictionResult<String> {
        game.save()
    }
}

/// `loadgame <name>`: stages the snapshot and asks for confirmation.
pub struct LoadGame;

impl Action for LoadGame {
    fn execute(&self, game: &mut Game, argument: Option<&str>) -> FictionResult<String> {
        match argument {
            Some(name) => game.stage_load(name),
            None => Ok(Verb::LoadGame.prompt()),
        }
    }
}

/// `give up`, `giveup`, `surrender`.
pub struct GiveUp;

impl Action for GiveUp {
    fn execute(&self, game: &mut Game, _argument: Option<&str>) -> FictionResult<String> {
        Ok(game.give_up())
    }
}

/// `exit`, `quit`: save, then end the session.
///
/// A failed save is reported but does not keep the player in the game.
pub struct Exit;

impl Action for Exit {
    fn execute(&self, game: &mut Game, _argument: Option<&str>) -> FictionResult<String> {
        let saved = game.save().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "save on exit failed");
            format!("Could not save the game: {e}")
        });
        let farewell = game.finish(Status::Exited);
        Ok(format!("{saved}\n{farewell}"))
    }
}
