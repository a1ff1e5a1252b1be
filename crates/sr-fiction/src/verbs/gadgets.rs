use crate::dispatch::Action;
use crate::error::{FictionError, FictionResult};
use crate::game::Game;
use crate::house;
use crate::parser::Verb;

/// `whistle`: with the dog whistle, the dog carries you to the top of the
/// stairs.
pub struct Whistle;

impl Action for Whistle {
    fn execute(&self, game: &mut Game, _argument: Option<&str>) -> FictionResult<String> {
        if !game.world().has_item(house::DOG_WHISTLE) {
            return Err(FictionError::precondition(
                "The dog can't hear you without the dog whistle",
            ));
        }
        if game.is_in(house::STAIRCASE) {
            return Ok("The dog lifts one ear, sees you're already at the top of the stairs, and goes back to sleep.".to_string());
        }
        let here = game.world().current_room_name().to_lowercase();
        let view = game.relocate(house::STAIRCASE)?;
        Ok(format!(
            "You hear the padding footsteps of your loyal steed.
He comes loping into the {here}.
You grab onto him and he starts running.
When he finally slows down at the top of the stairs you jump off.

{view}"
        ))
    }
}

/// `call`.
pub struct Call;

impl Action for Call {
    fn execute(&self, _game: &mut Game, _argument: Option<&str>) -> FictionResult<String> {
        Ok("Are you sure you want to do that? You'll be grounded forever".to_string())
    }
}

/// `enter`: type the password into the lab computer.
pub struct Enter;

impl Action for Enter {
    fn execute(&self, game: &mut Game, _argument: Option<&str>) -> FictionResult<String> {
        if !game.world().has_item(house::PASSWORD) {
            return Err(FictionError::precondition(
                "I don't think you know the password.",
            ));
        }
        if !(game.is_in(house::BASEMENT_LAB) && game.world().is_discovered(house::COMPUTER)) {
            return Err(FictionError::precondition(
                "There's nothing that needs a password here.",
            ));
        }
        game.world_mut().discover_item(house::SOFTWARE);
        Ok("The screen unlocks. TAKE the software you need".to_string())
    }
}

/// `use <item>`. Only the umbrella has a use.
pub struct Use;

impl Action for Use {
    fn execute(&self, game: &mut Game, argument: Option<&str>) -> FictionResult<String> {
        match argument {
            None => Ok(Verb::Use.prompt()),
            Some(house::UMBRELLA) => open_umbrella(game),
            Some(_) => Err(FictionError::precondition(
                "I don't know how to USE that, can you use a more specific action?",
            )),
        }
    }
}

fn open_umbrella(game: &mut Game) -> FictionResult<String> {
    if !game.world().has_item(house::UMBRELLA) {
        return Err(FictionError::precondition("You don't have an umbrella"));
    }
    if !game.is_in(house::YARD) {
        return Err(FictionError::precondition(
            "You can't open the umbrella inside!",
        ));
    }
    game.world_mut().conceal_item(house::EAGLE);
    Ok("You open the umbrella and are completely hidden from the eagle.
Not finding lunch the eagle flies away."
        .to_string())
}

/// `taunt <someone>`. Taunting the eagle gets you carried off.
pub struct Taunt;

impl Action for Taunt {
    fn execute(&self, game: &mut Game, argument: Option<&str>) -> FictionResult<String> {
        let at_eagle = argument.and_then(|a| a.split_whitespace().next()) == Some(house::EAGLE);
        if !(at_eagle && game.is_in(house::YARD)) {
            return Ok("There's nobody here to taunt but yourself".to_string());
        }
        game.stay_grounded()?;

        let mut out = String::new();
        if !game.world().is_discovered(house::EAGLE) {
            game.world_mut().discover_item(house::EAGLE);
            out.push_str("The eagle has heard your taunts and it has made him mad!\n");
        }
        out.push_str("The eagle swoops down, snatches you up, and drops you down the chimney into the master bedroom.\n\n");
        out.push_str(&game.relocate(house::LARGE_BEDROOM)?);
        Ok(out)
    }
}
