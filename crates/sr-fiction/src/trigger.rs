//! Scripted scenes that play when the player crosses between two rooms.

use std::collections::HashMap;
use std::fmt;

use sr_core::World;

use crate::house;

/// What a transition trigger did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriggerOutcome {
    /// Text shown before the destination room. May be empty.
    pub narration: String,
    /// Room the player ends up in instead of the requested one.
    pub redirect: Option<String>,
}

impl TriggerOutcome {
    /// Narration only; the move proceeds as requested.
    pub fn narrate(narration: impl Into<String>) -> Self {
        Self {
            narration: narration.into(),
            redirect: None,
        }
    }

    /// Narration followed by a detour to another room.
    pub fn redirect(narration: impl Into<String>, room: impl Into<String>) -> Self {
        Self {
            narration: narration.into(),
            redirect: Some(room.into()),
        }
    }
}

/// A scene bound to a `(from, to)` room pair.
pub type TriggerFn = Box<dyn Fn(&mut World) -> TriggerOutcome>;

/// Table of scenes keyed by `(from, to)` room names.
///
/// Triggers run after the exit has been validated and before the player is
/// moved, so the world they see still has the player in `from`.
#[derive(Default)]
pub struct TransitionTriggers {
    table: HashMap<(String, String), TriggerFn>,
}

impl fmt::Debug for TransitionTriggers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pairs: Vec<_> = self.table.keys().collect();
        pairs.sort();
        f.debug_struct("TransitionTriggers")
            .field("pairs", &pairs)
            .finish()
    }
}

impl TransitionTriggers {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a scene, builder style.
    pub fn on<F>(mut self, from: &str, to: &str, scene: F) -> Self
    where
        F: Fn(&mut World) -> TriggerOutcome + 'static,
    {
        self.register(from, to, scene);
        self
    }

    /// Add or replace the scene for `(from, to)`.
    pub fn register<F>(&mut self, from: &str, to: &str, scene: F)
    where
        F: Fn(&mut World) -> TriggerOutcome + 'static,
    {
        self.table
            .insert((from.to_string(), to.to_string()), Box::new(scene));
    }

    /// Run the scene for `(from, to)`, if there is one.
    pub fn fire(&self, from: &str, to: &str, world: &mut World) -> Option<TriggerOutcome> {
        let scene = self.table.get(&(from.to_string(), to.to_string()))?;
        tracing::debug!(from, to, "transition trigger fired");
        Some(scene(world))
    }

    /// Whether a scene is bound to `(from, to)`.
    pub fn contains(&self, from: &str, to: &str) -> bool {
        self.table
            .contains_key(&(from.to_string(), to.to_string()))
    }

    /// Number of bound pairs.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether no scenes are bound.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// The scenes of the house.
    pub fn house() -> Self {
        Self::new()
            .on(house::ATTIC, house::UPSTAIRS_HALLWAY, thread_bungee)
            .on(house::UPSTAIRS_HALLWAY, house::ATTIC, thread_lasso)
            .on(house::UPSTAIRS_HALLWAY, house::LARGE_BEDROOM, bounce)
            .on(house::STAIRCASE, house::DOWNSTAIRS_HALLWAY, banister)
            .on(house::DOWNSTAIRS_HALLWAY, house::STAIRCASE, stairs)
            .on(house::KITCHEN, house::YARD, eagle)
    }
}

const NO_THREAD: &str = "You don't have the thread";

fn thread_bungee(world: &mut World) -> TriggerOutcome {
    if !world.has_item(house::THREAD) {
        return TriggerOutcome::narrate(NO_THREAD);
    }
    TriggerOutcome::narrate(
        "You tie one end of the thread around your waist and the other around the top rung of the attic ladder.
Here goes nothing!
You leap out of the attic door and the thread acts as a bungee.
It catches you right before you smash into the upstairs hallway.
As you're hanging, catching your breath, it unravels from the ladder and you drop with a small thud.
You gather up the thread and put it in your backpack.",
    )
}

fn thread_lasso(world: &mut World) -> TriggerOutcome {
    if !world.has_item(house::THREAD) {
        return TriggerOutcome::narrate(NO_THREAD);
    }
    TriggerOutcome::narrate(
        "You throw the thread up like a lasso and it attaches to the bottom of the ladder to the attic.
You free climb up it like the Man in Black from the Princess Bride on the Cliffs of Insanity.
You look so cool.",
    )
}

fn bounce(world: &mut World) -> TriggerOutcome {
    let first_visit = world
        .room(house::LARGE_BEDROOM)
        .is_some_and(|room| !room.visited);
    if !first_visit {
        return TriggerOutcome::default();
    }
    TriggerOutcome::narrate(
        "The door to the large bedroom is closed and you can't reach it at this size.
You take a running start and hurl yourself at your dad's exercise ball.
You bounce off of it with a loud *VWOMP* and grab onto the door handle.
You're just heavy enough to make the handle turn and the door creaks open.
You drop to the floor and walk right in.",
    )
}

fn banister(world: &mut World) -> TriggerOutcome {
    if world.has_item(house::SCARF) {
        return TriggerOutcome::narrate(
            "You use the scarf to slide quickly and safely down the banister.",
        );
    }
    TriggerOutcome::narrate(
        "You try to slide down the banister but your jeans don't slide down easily so it's more of a scooch.
After a couple of minutes of struggling you're sweaty and have worn a hole in the seat of your pants.
You fall off the banister halfway down and tumble down the rest of the stairs.
The dog just raises his head and looks at you while you flail helplessly.
You land with another thud, thankfully nothing seems broken.
You should have grabbed that silky scarf.",
    )
}

fn stairs(world: &mut World) -> TriggerOutcome {
    if world.has_item(house::DOG_WHISTLE) {
        return TriggerOutcome::narrate(
            "Oof that's a lot of stairs to climb.
But you have the dog whistle!
You hear the padding footsteps of your loyal steed.
He comes loping into the downstairs hallway.
You grab onto him and he starts running.
When he finally slows down at the top of the stairs you jump off.",
        );
    }
    TriggerOutcome::narrate(
        "Oof that's a lot of stairs to climb.
You scream in frustration and your wailing wakes the dog up.
He takes pity on you and picks you up by the scruff and drops you off at the top of the stairs.
You're drenched and smell terrible now but at least you didn't have to climb those stairs.",
    )
}

fn eagle(world: &mut World) -> TriggerOutcome {
    let circling = world
        .room(house::YARD)
        .and_then(|yard| yard.item(house::EAGLE))
        .is_some_and(|eagle| eagle.discovered);
    if !circling || world.has_item(house::UMBRELLA) {
        return TriggerOutcome::default();
    }
    TriggerOutcome::redirect(
        "You step out into the sunshine and a shadow falls over you.
The eagle swoops down and picks you up, you manage to wriggle free and drop down the chimney into the master bedroom.",
        house::LARGE_BEDROOM,
    )
}
