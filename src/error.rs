use std::path::PathBuf;

/// Errors raised while dealing a new deck.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeckError {
    #[error("a {rows}x{cols} grid has an odd number of cards; cards must pair up")]
    OddCellCount { rows: usize, cols: usize },

    #[error("a {rows}x{cols} grid has no cards")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("a {rows}x{cols} grid is too large")]
    TooLarge { rows: usize, cols: usize },
}

/// Errors produced when a line of console input cannot be read as a pick.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("expected a row and a column, found {found} number(s)")]
    MissingCoordinates { found: usize },

    #[error("'{0}' is too large to be a coordinate")]
    NumberOutOfRange(String),
}

/// Errors that can occur while reading or writing the score file.
#[derive(Debug, thiserror::Error)]
pub enum ScoreStoreError {
    #[error("failed to read scores from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid score '{value}' on line {line} of {path}")]
    Parse {
        path: PathBuf,
        line: usize,
        value: String,
    },

    #[error("failed to write scores to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
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

/// Errors that end a console session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input closed before the game finished")]
    InputClosed,

    #[error("deck error: {0}")]
    Deck(#[from] DeckError),

    #[error("score store error: {0}")]
    Scores(#[from] ScoreStoreError),
}
