//! Win and loss evaluation.

use std::collections::BTreeSet;

use sr_core::Inventory;

/// Where the session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// Still playing.
    #[default]
    Ongoing,
    /// Reached the lab with everything needed.
    Won,
    /// Gave up without everything needed.
    Lost,
    /// Left with `exit` or `quit`.
    Exited,
}

impl Status {
    /// Whether the session has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, Self::Ongoing)
    }
}

/// True iff every required item is in the inventory.
pub fn have_all_items(required: &BTreeSet<String>, inventory: &Inventory) -> bool {
    required.iter().all(|item| inventory.contains(item))
}

/// Required items not yet carried, in name order.
pub fn missing_items<'a>(required: &'a BTreeSet<String>, inventory: &Inventory) -> Vec<&'a str> {
    required
        .iter()
        .filter(|item| !inventory.contains(item))
        .map(String::as_str)
        .collect()
}

/// Shown when the player wins.
pub const WIN_NARRATION: &str = "\
You spread your treasures out on the lab bench.
You splice the copper wire into the shrink ray, seal it with a blob of
candle wax, and load the software. The display flickers: REVERSE MODE.
You point the shrink ray at your own feet and squeeze the trigger.

The room spins, the ceiling rushes toward you, and suddenly the lab is
the right size again. So are you.

Upstairs, the front door opens. \"We're home!\" Your parents will never
know. Probably.

YOU WIN!";

/// Shown when the player gives up.
pub const LOSS_NARRATION: &str = "\
You sit down on the cold floor and sigh a very small sigh.
Hours later your parents come home and find you standing on the kitchen
counter, waving your arms and squeaking.

You're grounded. Forever. At this size that's a very long time.

GAME OVER";
