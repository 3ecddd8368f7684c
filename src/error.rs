//! Error types for the edges of the crate
//!
//! Generators never fail: capacity violations, misses and precondition
//! adjustments are reported as steps. [`Error`] covers what happens around
//! them: parsing raw input into a request, driving playback, and the I/O of
//! the binary.

use thiserror::Error;

/// Result type for fallible AlgoViz operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while turning raw input into a step sequence or showing it.
#[derive(Debug, Error)]
pub enum Error {
    /// An entry of a comma-separated list is not an integer
    #[error("'{entry}' is not a valid integer")]
    InvalidNumber { entry: String },

    /// The list contained no entries at all
    #[error("please enter at least one number")]
    EmptyInput,

    /// The list exceeds the visualisation cap
    #[error("please enter {max} or fewer numbers (got {got})")]
    TooManyValues { got: usize, max: usize },

    /// An edge was not written as `from-to` or `from-to:weight`
    #[error("invalid edge '{entry}': expected from-to or from-to:weight")]
    InvalidEdge { entry: String },

    /// The algorithm id is not part of the catalogue
    #[error("unknown algorithm '{0}' (try --list)")]
    UnknownAlgorithm(String),

    /// A flag the selected algorithm requires was not supplied
    #[error("{algorithm} requires {flag}")]
    MissingArgument {
        algorithm: &'static str,
        flag: &'static str,
    },

    /// A flag value could not be parsed
    #[error("invalid value '{value}' for {flag}")]
    InvalidArgument { flag: String, value: String },

    /// The command line contained a flag nobody understands
    #[error("unknown flag '{0}'")]
    UnknownFlag(String),

    /// Playback transport could not move
    #[error(transparent)]
    Playback(#[from] PlaybackError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Reasons the playback cursor refused to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("no steps have been generated")]
    Empty,

    #[error("already at the first step")]
    AtStart,

    #[error("already at the last step")]
    AtEnd,
}
