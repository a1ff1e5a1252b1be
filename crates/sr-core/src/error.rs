use std::path::PathBuf;

/// Alias for `Result<T, WorldError>`.
pub type WorldResult<T> = Result<T, WorldError>;

/// Recoverable failures of a world model operation.
///
/// The `Display` text of each variant is what the player sees.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    /// Item absent from the relevant scope, or not yet discovered.
    #[error("{0} not found.")]
    NotFound(String),

    /// Item exists in the room but has not been discovered.
    #[error("You cannot see that, at least not from here!")]
    NotVisible(String),

    /// Item needs shrinking before it can be taken.
    #[error("{0} is too big to pick up!\nWhy don't you try to SHRINK it first?")]
    TooBig(String),

    /// Item is a fixed feature of the room.
    #[error("The {0} won't budge. It's part of the house!")]
    Fixed(String),

    /// A room name that is not part of the world.
    #[error("{0} is not a valid exit")]
    UnknownRoom(String),
}

/// Alias for `Result<T, LoadError>`.
pub type LoadResult<T> = Result<T, LoadError>;

/// Fatal problems with the room definitions read at startup.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The room directory or a room file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// The path that failed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A room file is not a valid room record.
    #[error("invalid room definition in {path}: {source}")]
    Json {
        /// The offending file.
        path: PathBuf,
        /// The parse error.
        source: serde_json::Error,
    },

    /// Two room files define the same room name.
    #[error("room \"{0}\" is defined more than once")]
    DuplicateRoom(String),

    /// A room alias is not a valid regular expression.
    #[error("room \"{room}\" has an invalid alias: {source}")]
    BadAlias {
        /// The room carrying the alias.
        room: String,
        /// The regex compile error.
        source: regex::Error,
    },

    /// Too few rooms to make a game.
    #[error("the game must have at least {min} rooms, found {found}")]
    TooFewRooms {
        /// Required minimum.
        min: usize,
        /// Rooms actually defined.
        found: usize,
    },

    /// Too few items to make a game.
    #[error("the game must have at least {min} items, found {found}")]
    TooFewItems {
        /// Required minimum.
        min: usize,
        /// Items actually defined.
        found: usize,
    },

    /// The configured starting room does not exist.
    #[error("starting room \"{0}\" is not defined")]
    MissingStartRoom(String),
}
