mod command;

pub use command::{Command, Verb, parse_command, title_case};
