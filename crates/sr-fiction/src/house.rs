//! Names and fixed text for the house the game is set in.
//!
//! Room and item names here must match the JSON room files.

/// Where the player wakes up.
pub const ATTIC: &str = "Attic";
/// Below the attic ladder.
pub const UPSTAIRS_HALLWAY: &str = "Upstairs Hallway";
/// The parents' bedroom.
pub const LARGE_BEDROOM: &str = "Large Bedroom";
/// The player's own bedroom.
pub const SMALL_BEDROOM: &str = "Small Bedroom";
/// Top of the stairs.
pub const STAIRCASE: &str = "Staircase";
/// Bottom of the stairs.
pub const DOWNSTAIRS_HALLWAY: &str = "Downstairs Hallway";
/// Where the fireplace comes out.
pub const LIVING_ROOM: &str = "Living Room";
/// Home of the copper wire.
pub const FAMILY_ROOM: &str = "Family Room";
/// Home of the candelabra.
pub const DINING_ROOM: &str = "Dining Room";
/// Leads out to the yard.
pub const KITCHEN: &str = "Kitchen";
/// Shelves and cereal.
pub const PANTRY: &str = "Pantry";
/// Eagle territory.
pub const YARD: &str = "Yard";
/// The lab, where the game can be won.
pub const BASEMENT_LAB: &str = "Basement Lab";

/// The gadget that started it all.
pub const SHRINK_RAY: &str = "shrink ray";
/// Lasso and bungee cord.
pub const THREAD: &str = "thread";
/// Makes the banister slippery.
pub const SCARF: &str = "scarf";
/// Summons the dog.
pub const DOG_WHISTLE: &str = "dog whistle";
/// Hides you from the eagle.
pub const UMBRELLA: &str = "umbrella";
/// Unlocks the lab computer.
pub const PASSWORD: &str = "password";
/// The lab computer.
pub const COMPUTER: &str = "computer";
/// On the lab computer.
pub const SOFTWARE: &str = "software";
/// Inside the family room wall.
pub const COPPER_WIRE: &str = "copper wire";
/// Inside the living room couch.
pub const COUCH_STUFFING: &str = "couch stuffing";
/// On the dining room candelabra.
pub const CANDLE: &str = "candle";
/// Behind the pantry shelves.
pub const CORNFLAKES: &str = "cornflakes";
/// Circling over the yard.
pub const EAGLE: &str = "eagle";
/// Lab furniture.
pub const DESK: &str = "desk";
/// Pantry tower.
pub const PAPER_TOWELS: &str = "paper towels";
/// Dining room furniture.
pub const DINING_ROOM_TABLE: &str = "dining room table";

/// Items needed to reverse the shrinking.
pub const REQUIRED_ITEMS: [&str; 4] = [SHRINK_RAY, SOFTWARE, COPPER_WIRE, CANDLE];

/// Printed once when a session starts.
pub const OPENING: &str = "\
It was a bright and sunny afternoon. Everything was going fine.
Your parents were developing new semi-legal technology in their lab,
and you were watching them. They've told you 100 times to not watch them
while they work, but what are they going to do? You're curious.
The shrink ray! What a cool invention. Now anything can be made smaller!
They've told you not to play with the inventions 101 times, but what are they
going to do? You're curious.
So yeah, they did kick you out of the lab when they left to go run errands,
telling you 102 times to not touch anything, but you smuggled the
shrink ray out anyway.
That's the last thing you remember. You open your eyes and seem to be in a
giant cavern. Everything is so big! Wait...you're so small!
Where are you? How will you fix this? Is there anywhere you could GO TO?
Is there anything you could TAKE to help you? Why don't you try to LOOK around?";

/// Printed by `help`.
pub const HELP: &str = "\
Here are some of the commands the game understands:

inventory :: Lists the contents of your inventory.
mystuff :: see inventory
look :: Print the long form explanation of the current room.
look at <feature or object> :: Examine something in the room or in your
    inventory. Looking closely sometimes turns up things you missed.
go <room> / go to <room> / <room> :: Walk through an exit to the next room.
take <object> :: Put an object into your inventory.
grab, pull, yank :: see take
drop <object> :: Leave an object from your inventory in the current room.
eat <object> :: Restore your strength by eating an item.
shrink <object> :: Zap something with the shrink ray so you can carry it.
cut <object> :: Snip something free.
whistle :: With the right item at hand, summon the family pet.
call :: Call your parents to come get you.
enter :: Type a secret password into a computer.
climb <feature> :: Climb a desk. Maybe someday a mountain.
climb down :: Get back down again.
use <object> :: Make use of an item in your inventory.
taunt :: Pick a fight!
jump :: Get vertical!
slide :: Travel quickly.
savegame :: Save the state of the game to a file.
loadgame <file> :: Load a saved game after confirming.
give up :: See how it ends.
exit :: Save the game and then exit.
quit :: see exit
help :: Print this message.";
