use sr_core::WorldError;

use crate::dispatch::Action;
use crate::error::{FictionError, FictionResult};
use crate::game::Game;
use crate::house;
use crate::parser::Verb;

pub(super) fn inventory_listing(game: &Game) -> String {
    let items = game.world().list_inventory();
    if items.is_empty() {
        "Your backpack is empty.".to_string()
    } else {
        items.join("\n")
    }
}

fn picked_up(item: &str) -> String {
    format!("You have picked up the {item}.\nIt is now in your INVENTORY.")
}

/// `take`, `grab`, `pull`, `yank`.
pub struct Take;

impl Action for Take {
    fn execute(&self, game: &mut Game, argument: Option<&str>) -> FictionResult<String> {
        let Some(item) = argument else {
            return Ok(Verb::Take.prompt());
        };
        game.world_mut().take_item(item)?;
        Ok(picked_up(item))
    }
}

/// `drop <item>`.
pub struct DropItem;

impl Action for DropItem {
    fn execute(&self, game: &mut Game, argument: Option<&str>) -> FictionResult<String> {
        let Some(item) = argument else {
            return Ok(Verb::Drop.prompt());
        };
        game.world_mut().drop_item(item)?;
        Ok(format!(
            "You dropped the {item} in the {}.",
            game.world().current_room_name()
        ))
    }
}

/// `inventory`, `mystuff`.
pub struct ShowInventory;

impl Action for ShowInventory {
    fn execute(&self, game: &mut Game, _argument: Option<&str>) -> FictionResult<String> {
        Ok(inventory_listing(game))
    }
}

/// `eat <item>`.
pub struct Eat;

impl Action for Eat {
    fn execute(&self, game: &mut Game, argument: Option<&str>) -> FictionResult<String> {
        let Some(item) = argument else {
            return Ok(Verb::Eat.prompt());
        };
        match game.world_mut().eat_item(item) {
            Ok(true) => Ok("That was delicious! Your strength has been restored.".to_string()),
            Ok(false) => Err(FictionError::precondition(format!(
                "I know you're hangry. But {item} is not food!"
            ))),
            Err(WorldError::NotFound(_)) => Err(FictionError::precondition(format!(
                "{item} is not in your backpack."
            ))),
            Err(e) => Err(e.into()),
        }
    }
}

/// `shrink <item>`.
pub struct Shrink;

impl Action for Shrink {
    fn execute(&self, game: &mut Game, argument: Option<&str>) -> FictionResult<String> {
        let Some(item) = argument else {
            return Ok(Verb::Shrink.prompt());
        };
        if !game.world().has_item(house::SHRINK_RAY) {
            return Err(FictionError::precondition(
                "You need the shrink ray to shrink things.",
            ));
        }
        if item == house::SHRINK_RAY {
            return Err(FictionError::precondition("You can't shrink the shrink ray"));
        }
        match game.world_mut().shrink_item(item) {
            Ok(true) => {
                Ok("SHRINKING!\nThis item is now small enough to collect. You can TAKE it now."
                    .to_string())
            }
            Ok(false) => Err(FictionError::precondition(
                "I don't think that can get any smaller. Did you try to just TAKE it?",
            )),
            Err(WorldError::Fixed(_)) => Err(FictionError::precondition(
                "You can't shrink this. Mom and Dad might notice!",
            )),
            Err(e) => Err(e.into()),
        }
    }
}

/// `cut <item>`: snips the couch stuffing or the copper wire free and takes
/// it.
pub struct Cut;

impl Action for Cut {
    fn execute(&self, game: &mut Game, argument: Option<&str>) -> FictionResult<String> {
        let Some(item) = argument else {
            return Ok(Verb::Cut.prompt());
        };
        let snippable = (game.is_in(house::FAMILY_ROOM) && item == house::COPPER_WIRE)
            || (game.is_in(house::LIVING_ROOM) && item == house::COUCH_STUFFING);
        if !game.world().is_discovered(item) {
            return Err(WorldError::NotFound(item.to_string()).into());
        }
        if !snippable {
            return Err(FictionError::precondition("Please don't cut that."));
        }
        let world = game.world_mut();
        world.detach_item(item)?;
        world.take_item(item)?;
        Ok(format!("snip snip\n{}", picked_up(item)))
    }
}
