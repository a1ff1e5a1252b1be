use crate::dispatch::Action;
use crate::error::{FictionError, FictionResult};
use crate::game::Game;
use crate::house;
use crate::parser::Verb;

/// `go <room>` and `go to <room>`.
pub struct Go;

impl Action for Go {
    fn execute(&self, game: &mut Game, argument: Option<&str>) -> FictionResult<String> {
        match argument {
            Some(room) => game.move_to_room(room),
            None => Ok(Verb::Go.prompt()),
        }
    }
}

/// `goto`, which is considered harmful.
pub struct Goto;

impl Action for Goto {
    fn execute(&self, _game: &mut Game, _argument: Option<&str>) -> FictionResult<String> {
        Ok("Go To Statement Considered Harmful!  https://xkcd.com/292".to_string())
    }
}

/// `climb <feature>` and `climb down`.
pub struct Climb;

impl Action for Climb {
    fn execute(&self, game: &mut Game, argument: Option<&str>) -> FictionResult<String> {
        match argument {
            None => Ok(Verb::Climb.prompt()),
            Some("down") => match game.descend() {
                Some(feature) => Ok(format!("You climb down from the {feature}.")),
                None => Err(FictionError::precondition(
                    "You aren't standing on anything.",
                )),
            },
            Some(feature) => climb_onto(game, feature),
        }
    }
}

fn climb_onto(game: &mut Game, feature: &str) -> FictionResult<String> {
    let room = game.world().current_room_name().to_string();
    let (reveals, narration) = match (room.as_str(), feature) {
        (house::BASEMENT_LAB, house::DESK) => (
            house::COMPUTER,
            "You climb up the desk and are face to face with the computer. It seems locked, why don't you take a LOOK?",
        ),
        (house::PANTRY, house::PAPER_TOWELS) => (
            house::CORNFLAKES,
            "From up on the paper towels you can get a better look at the shelves.
There is a box of cornflakes pushed all the way back on one of the shelves.
Weren't you looking for cornflakes?",
        ),
        (house::DINING_ROOM, house::DINING_ROOM_TABLE) => (
            house::CANDLE,
            "From on top of the dining room table you can get a better look at the candelabra.
There's wax everywhere but it looks like there might still be a bit of candle left. Is that a candle? Look closer.",
        ),
        (house::LARGE_BEDROOM, house::DESK) => {
            return Err(FictionError::precondition(
                "You had better not climb on your parent's desk!",
            ));
        }
        _ => return Err(FictionError::precondition("You can't climb on that!")),
    };
    if !game.world().is_discovered(feature) {
        return Err(FictionError::precondition("You can't climb on that!"));
    }

    game.elevate(feature)?;
    game.world_mut().discover_item(reveals);
    Ok(narration.to_string())
}

/// From either bedroom, the fireplace drops you into the living room and
/// the laundry chute into the lab.
fn chute(game: &mut Game, argument: Option<&str>) -> Option<FictionResult<String>> {
    if !(game.is_in(house::LARGE_BEDROOM) || game.is_in(house::SMALL_BEDROOM)) {
        return None;
    }
    let (shout, destination) = argument?
        .split_whitespace()
        .take(2)
        .find_map(|word| match word {
            "fireplace" => Some(("GERONIMO!!!!", house::LIVING_ROOM)),
            "laundry" => Some(("HERE GOES NOTHING", house::BASEMENT_LAB)),
            _ => None,
        })?;
    Some(
        game.relocate(destination)
            .map(|view| format!("{shout}\n\n{view}")),
    )
}

/// `jump`, possibly into the laundry chute or the fireplace.
pub struct Jump;

impl Action for Jump {
    fn execute(&self, game: &mut Game, argument: Option<&str>) -> FictionResult<String> {
        if let Some(result) = chute(game, argument) {
            return result;
        }
        let worth_it = [house::PANTRY, house::UPSTAIRS_HALLWAY, house::BASEMENT_LAB]
            .into_iter()
            .any(|room| game.is_in(room));
        if worth_it {
            Ok("You need to jump here".to_string())
        } else {
            Ok("Jump all you want it's not going to do you any good".to_string())
        }
    }
}

/// `slide`, possibly down the fireplace or the laundry chute.
pub struct Slide;

impl Action for Slide {
    fn execute(&self, game: &mut Game, argument: Option<&str>) -> FictionResult<String> {
        if let Some(result) = chute(game, argument) {
            return result;
        }
        Ok("Sliiiiiide to the left *clap* Sliiiiiide to the right.
You can't remember any more of the dance."
            .to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::Status;
    use crate::verbs::testing::game_in;

    #[test]
    fn go_moves_and_prompts() {
        let mut g = game_in(house::ATTIC);
        assert_eq!(Go.execute(&mut g, None).unwrap(), "Go where?");
        let out = Go.execute(&mut g, Some(house::UPSTAIRS_HALLWAY)).unwrap();
        assert!(out.ends_with("A long hallway."));
        assert!(g.is_in(house::UPSTAIRS_HALLWAY));
    }

    #[test]
    fn goto_is_harmful() {
        let mut g = game_in(house::ATTIC);
        assert!(Goto
            .execute(&mut g, Some("attic"))
            .unwrap()
            .contains("Considered Harmful"));
    }

    #[test]
    fn climbing_reveals_and_elevates() {
        let mut g = game_in(house::PANTRY);
        let out = Climb.execute(&mut g, Some(house::PAPER_TOWELS)).unwrap();
        assert!(out.contains("box of cornflakes"));
        assert!(g.world().is_discovered(house::CORNFLAKES));
        assert_eq!(g.elevated_on(), Some(house::PAPER_TOWELS));

        let err = Climb.execute(&mut g, Some(house::PAPER_TOWELS)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "You need to CLIMB DOWN from the paper towels first."
        );

        assert_eq!(
            Climb.execute(&mut g, Some("down")).unwrap(),
            "You climb down from the paper towels."
        );
        assert!(g.elevated_on().is_none());
        assert!(Climb.execute(&mut g, Some("down")).is_err());
    }

    #[test]
    fn climbing_the_lab_desk_finds_the_computer() {
        let mut g = game_in(house::BASEMENT_LAB);
        Climb.execute(&mut g, Some(house::DESK)).unwrap();
        assert!(g.world().is_discovered(house::COMPUTER));
    }

    #[test]
    fn not_everything_is_climbable() {
        let mut g = game_in(house::LARGE_BEDROOM);
        assert_eq!(
            Climb.execute(&mut g, Some(house::DESK)).unwrap_err().to_string(),
            "You had better not climb on your parent's desk!"
        );
        assert_eq!(
            Climb.execute(&mut g, Some("curtains")).unwrap_err().to_string(),
            "You can't climb on that!"
        );
        assert_eq!(
            Climb.execute(&mut g, None).unwrap(),
            "Climb what? The corporate ladder?"
        );
        assert!(g.elevated_on().is_none());
    }

    #[test]
    fn laundry_chute_drops_into_lab_without_winning() {
        let mut g = game_in(house::SMALL_BEDROOM);
        for item in crate::house::REQUIRED_ITEMS {
            g.world_mut()
                .room_mut(house::SMALL_BEDROOM)
                .unwrap()
                .put_item(sr_core::Item::new(item, ""));
            g.world_mut().take_item(item).unwrap();
        }
        let out = Jump.execute(&mut g, Some("into laundry chute")).unwrap();
        assert!(out.starts_with("HERE GOES NOTHING\n\nThe lab."));
        assert!(g.is_in(house::BASEMENT_LAB));
        assert_eq!(g.status(), Status::Ongoing);
    }

    #[test]
    fn fireplace_slide() {
        let mut g = game_in(house::LARGE_BEDROOM);
        let out = Slide.execute(&mut g, Some("down fireplace")).unwrap();
        assert!(out.starts_with("GERONIMO!!!!"));
        assert!(g.is_in(house::LIVING_ROOM));
    }

    #[test]
    fn flavor_elsewhere() {
        let mut g = game_in(house::ATTIC);
        assert!(Slide
            .execute(&mut g, Some("down fireplace"))
            .unwrap()
            .starts_with("Sliiiiiide"));
        assert_eq!(
            Jump.execute(&mut g, None).unwrap(),
            "Jump all you want it's not going to do you any good"
        );
        assert!(g.is_in(house::ATTIC));
    }
}
