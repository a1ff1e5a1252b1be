use crate::dispatch::Action;
use crate::error::FictionResult;
use crate::game::Game;
use crate::house;

use super::items::inventory_listing;

/// `look` and `look at <thing>`.
pub struct Look;

impl Action for Look {
    fn execute(&self, game: &mut Game, argument: Option<&str>) -> FictionResult<String> {
        match argument {
            None => Ok(game.world().look_at_room().to_string()),
            Some("inventory") => Ok(inventory_listing(game)),
            Some(house::EAGLE) if game.is_in(house::YARD) => look_at_eagle(game),
            Some(name) => Ok(game.world_mut().look_at_item(name)?.to_string()),
        }
    }
}

fn look_at_eagle(game: &mut Game) -> FictionResult<String> {
    if !game.world().is_discovered(house::EAGLE) {
        return Ok("Hmm...the eagle doesn't seem to be here right now".to_string());
    }
    if game.world().has_item(house::UMBRELLA) {
        return Ok("If you want to use the umbrella to hide from the eagle say: use umbrella
If you want to be taken by the eagle say: taunt eagle"
            .to_string());
    }
    let view = game.relocate(house::LARGE_BEDROOM)?;
    Ok(format!(
        "The eagle swoops down and picks you up, you manage to wriggle free and drop down the chimney into the master bedroom.\n\n{view}"
    ))
}
