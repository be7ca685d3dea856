//! Engine Errors
//!
//! Every failure the engine can observe. None of them is fatal: loads
//! report them and keep the current list, state decoding turns them into
//! "no state".

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Fetch failed: {0}")]
    Transport(String),

    #[error("HTTP {0}")]
    HttpStatus(u16),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected catalog structure: {0}")]
    UnexpectedShape(String),

    #[error("Invalid item #{index}: {reason}")]
    InvalidItem { index: usize, reason: String },

    #[error("Unknown list: {0}")]
    UnknownList(String),

    #[error("Could not decode state: {0}")]
    StateDecode(String),
}

pub type Result<T> = std::result::Result<T, Error>;
