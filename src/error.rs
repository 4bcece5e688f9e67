use std::path::PathBuf;

/// Errors that can occur when placing a piece.
///
/// `column` is always the 0-based board index, so a 1-based entry of `0`
/// shows up as `-1`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("Invalid column. Please select a column between 1 and {columns}.")]
    InvalidColumnIndex { column: i64, columns: usize },

    #[error("Column full. Try a different column.")]
    /// Only produced for a column that exists on the board
    ColumnFull { column: usize },

    #[error("The game is already over.")]
    GameOver,
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
