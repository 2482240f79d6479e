//! Error taxonomy. Configuration and payload errors are raised before any
//! connection is attempted; transport errors surface through `anyhow` at
//! the call sites in [`crate::run`].

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: ini::Error,
    },

    #[error("service profile [{0}] not found in config file")]
    MissingProfile(String),

    #[error("rabbit_message_body missing from profile [{0}] and is required")]
    MissingMessageBody(String),

    #[error("invalid rabbit_port {value:?} in profile [{profile}]: not an integer")]
    InvalidPort { profile: String, value: String },

    #[error("rabbit_queue is not set and is required for a basic publish")]
    MissingQueue,
}

/// Errors from parsing `rabbit_message_body` as a restricted literal.
/// Offsets are byte positions into the configured value.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PayloadError {
    #[error("unexpected character {found:?} at offset {offset}")]
    Unexpected { found: char, offset: usize },

    #[error("unexpected end of input")]
    UnexpectedEnd,

    #[error("{word:?} at offset {offset} is not a literal")]
    UnknownWord { word: String, offset: usize },

    #[error("invalid number {text:?} at offset {offset}")]
    InvalidNumber { text: String, offset: usize },

    #[error("unterminated string starting at offset {offset}")]
    UnterminatedString { offset: usize },

    #[error("invalid escape sequence at offset {offset}")]
    InvalidEscape { offset: usize },

    #[error("mapping key at offset {offset} must be a scalar literal")]
    InvalidKey { offset: usize },

    #[error("trailing characters after literal at offset {offset}")]
    Trailing { offset: usize },
}
