//! Error types for the pacai crate

use thiserror::Error;

/// Main error type for the pacai crate
///
/// The search and learning algorithms themselves never fail: an exhausted
/// frontier yields an empty plan and a state without legal actions yields
/// `None`. Errors only arise at the edges, when resolving names, reading
/// configuration or parsing layouts.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("no {kind} registered under '{name}' (available: {available})")]
    UnknownEntry {
        kind: String,
        name: String,
        available: String,
    },

    #[error("invalid search strategy '{input}'. Expected one of: {expected}")]
    ParseSearchStrategy { input: String, expected: String },

    #[error("invalid heuristic '{input}'. Expected one of: {expected}")]
    ParseHeuristic { input: String, expected: String },

    #[error("invalid direction '{input}'")]
    ParseDirection { input: String },

    #[error("invalid tie-break mode '{input}'. Expected one of: {expected}")]
    ParseTieBreak { input: String, expected: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("invalid layout: {message}")]
    InvalidLayout { message: String },

    #[error("invalid character '{character}' at row {row}, column {column}")]
    InvalidLayoutCharacter {
        character: char,
        row: usize,
        column: usize,
    },

    #[error("unknown gridworld '{name}'. Expected one of: {expected}")]
    UnknownGridworld { name: String, expected: String },

    #[error("failed to initialise logging: {message}")]
    Logging { message: String },

    #[error("invalid progress bar template: {message}")]
    ProgressBarTemplate { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
