// crates/countrypicker-core/src/error.rs

use thiserror::Error;

/// Reasons a [`Country`](crate::Country) cannot be constructed.
///
/// Checks run in field order (name, code, flag, dial code) and the first
/// violation wins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidCountry {
    #[error("country name cannot be blank")]
    BlankName,
    #[error("country code cannot be blank")]
    BlankCode,
    #[error("country code must be 2 characters, got {0}")]
    CodeLength(usize),
    #[error("flag cannot be blank")]
    BlankFlag,
    #[error("dial code cannot be blank")]
    BlankDialCode,
    #[error("dial code must start with '+': {0:?}")]
    DialCodeWithoutPlus(String),
    #[error("cannot derive a flag from country code {0:?}")]
    UnderivableFlag(String),
}

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum PickerError {
    #[error("invalid country: {0}")]
    InvalidCountry(#[from] InvalidCountry),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("picker session is already closed")]
    SessionClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot encoding error: {0}")]
    Bincode(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, PickerError>;
