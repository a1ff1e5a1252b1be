//! Command parsing for player input.

use std::fmt;

/// Every verb the game understands. Synonyms parse to the same member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    /// Look at the room or at an item.
    Look,
    /// Walk through an exit.
    Go,
    /// The `goto` joke.
    Goto,
    /// Pick something up.
    Take,
    /// Put something down.
    Drop,
    /// List what you carry.
    Inventory,
    /// Eat something you carry.
    Eat,
    /// Use an item.
    Use,
    /// Climb onto or down from furniture.
    Climb,
    /// Zap something with the shrink ray.
    Shrink,
    /// Blow the dog whistle.
    Whistle,
    /// Call your parents.
    Call,
    /// Type a password.
    Enter,
    /// Taunt someone.
    Taunt,
    /// Jump, possibly into something.
    Jump,
    /// Slide, possibly down something.
    Slide,
    /// Cut something loose.
    Cut,
    /// Write a snapshot.
    SaveGame,
    /// Restore a snapshot.
    LoadGame,
    /// Stop trying and see how it ends.
    GiveUp,
    /// Save and leave.
    Exit,
    /// List commands.
    Help,
}

impl Verb {
    /// Parse a verb from a lowercase token.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "look" => Some(Self::Look),
            "go" => Some(Self::Go),
            "goto" => Some(Self::Goto),
            "take" | "grab" | "pull" | "yank" => Some(Self::Take),
            "drop" => Some(Self::Drop),
            "inventory" | "mystuff" => Some(Self::Inventory),
            "eat" => Some(Self::Eat),
            "use" => Some(Self::Use),
            "climb" => Some(Self::Climb),
            "shrink" => Some(Self::Shrink),
            "whistle" => Some(Self::Whistle),
            "call" => Some(Self::Call),
            "enter" => Some(Self::Enter),
            "taunt" => Some(Self::Taunt),
            "jump" => Some(Self::Jump),
            "slide" => Some(Self::Slide),
            "cut" => Some(Self::Cut),
            "savegame" => Some(Self::SaveGame),
            "loadgame" => Some(Self::LoadGame),
            "giveup" | "surrender" => Some(Self::GiveUp),
            "exit" | "quit" => Some(Self::Exit),
            "help" => Some(Self::Help),
            _ => None,
        }
    }

    /// The canonical token for this verb.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Look => "look",
            Self::Go => "go",
            Self::Goto => "goto",
            Self::Take => "take",
            Self::Drop => "drop",
            Self::Inventory => "inventory",
            Self::Eat => "eat",
            Self::Use => "use",
            Self::Climb => "climb",
            Self::Shrink => "shrink",
            Self::Whistle => "whistle",
            Self::Call => "call",
            Self::Enter => "enter",
            Self::Taunt => "taunt",
            Self::Jump => "jump",
            Self::Slide => "slide",
            Self::Cut => "cut",
            Self::SaveGame => "savegame",
            Self::LoadGame => "loadgame",
            Self::GiveUp => "giveup",
            Self::Exit => "exit",
            Self::Help => "help",
        }
    }

    /// What to ask when a verb that needs a noun arrives without one.
    pub fn prompt(&self) -> String {
        match self {
            Self::Look => "What would you like to look at?".to_string(),
            Self::Go => "Go where?".to_string(),
            Self::Climb => "Climb what? The corporate ladder?".to_string(),
            Self::LoadGame => "Please specify a saved game to load.".to_string(),
            other => {
                let name = other.name();
                let mut chars = name.chars();
                let capitalized: String = chars
                    .next()
                    .map(|c| c.to_uppercase().chain(chars).collect())
                    .unwrap_or_default();
                format!("{capitalized} what?")
            }
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Blank line; reprompt silently.
    Empty,
    /// The whole line named a room: walk there.
    GoTo {
        /// Title-cased room name.
        room: String,
    },
    /// A verb with an optional argument phrase.
    Act {
        /// The verb.
        verb: Verb,
        /// Remaining words, single-spaced, connector stripped.
        argument: Option<String>,
    },
    /// A verb and its connector word with nothing after it (`look at`).
    Missing {
        /// The verb that needs an argument.
        verb: Verb,
    },
    /// The first word is not a verb.
    Unknown {
        /// The normalized input line.
        input: String,
    },
}

/// Capitalize the first letter of every word.
pub fn title_case(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a line of input.
///
/// `is_room` answers whether a title-cased name is a room; a line that is
/// nothing but a room name becomes [`Command::GoTo`] before any verb is
/// considered.
pub fn parse_command(input: &str, is_room: impl Fn(&str) -> bool) -> Command {
    let normalized = input.to_lowercase();
    let words: Vec<&str> = normalized.split_whitespace().collect();
    if words.is_empty() {
        return Command::Empty;
    }

    let line = words.join(" ");
    let as_room = title_case(&line);
    if is_room(&as_room) {
        return Command::GoTo { room: as_room };
    }

    let (verb, rest) = match words.as_slice() {
        ["give", "up", rest @ ..] => (Verb::GiveUp, rest),
        [first, rest @ ..] => match Verb::parse(first) {
            Some(verb) => (verb, rest),
            None => return Command::Unknown { input: line },
        },
        [] => return Command::Empty,
    };

    match verb {
        Verb::Look => parse_with_connector(verb, "at", rest),
        Verb::Go => match parse_with_connector(verb, "to", rest) {
            Command::Act {
                verb,
                argument: Some(target),
            } => Command::Act {
                verb,
                argument: Some(title_case(&target)),
            },
            other => other,
        },
        _ => Command::Act {
            verb,
            argument: join(rest),
        },
    }
}

fn parse_with_connector(verb: Verb, connector: &str, rest: &[&str]) -> Command {
    match rest {
        [first] if *first == connector => Command::Missing { verb },
        [first, tail @ ..] if *first == connector => Command::Act {
            verb,
            argument: join(tail),
        },
        _ => Command::Act {
            verb,
            argument: join(rest),
        },
    }
}

fn join(words: &[&str]) -> Option<String> {
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}
