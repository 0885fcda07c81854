use std::path::PathBuf;

/// Errors reported by the board itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("column {column} is outside the board")]
    ColumnOutOfRange { column: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("cell ({column}, {row}) is outside the board")]
    OutOfRange { column: usize, row: usize },
}

/// Errors that can occur when advancing a game by one move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is not available (available: {available:?})")]
    InvalidColumn {
        column: usize,
        available: Vec<usize>,
    },

    #[error("the game is already over")]
    GameAlreadyOver,

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Errors produced while turning typed input into a column choice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("'{0}' is not a column letter")]
    Unparsable(String),

    #[error("column {0} is not available")]
    Unavailable(char),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
