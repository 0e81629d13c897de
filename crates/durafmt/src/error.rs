//! Error types for duration formatting
//!
//! Parsing a duration literal is the only fallible step of building a
//! phrase; decomposition and rendering are total. [`LiteralError`] describes
//! why a literal was rejected and is wrapped by the crate-level
//! [`DurafmtError`].

use thiserror::Error;

/// Result type using [`DurafmtError`]
pub type DurafmtResult<T> = Result<T, DurafmtError>;

/// Reasons a duration literal such as `"3h4m5s"` can be rejected
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LiteralError {
    #[error("Empty duration literal: {input:?}")]
    Empty { input: String },

    #[error("Invalid number in duration literal: {input:?}")]
    InvalidNumber { input: String },

    #[error("Missing unit in duration literal: {input:?}")]
    MissingUnit { input: String },

    #[error("Unknown unit {unit:?} in duration literal: {input:?}")]
    UnknownUnit { unit: String, input: String },

    #[error("Duration literal out of range: {input:?}")]
    Overflow { input: String },
}

impl LiteralError {
    /// The literal that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::Empty { input }
            | Self::InvalidNumber { input }
            | Self::MissingUnit { input }
            | Self::UnknownUnit { input, .. }
            | Self::Overflow { input } => input,
        }
    }
}

/// Errors surfaced by the public API
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DurafmtError {
    /// The text does not follow the duration-literal grammar.
    #[error(transparent)]
    Parse(#[from] LiteralError),

    /// A bare `"0"` or `"-0"` names no unit for the zero phrase.
    #[error("No time unit in duration literal: {input:?}")]
    NoUnit { input: String },

    /// A unit ceiling was requested by a name that is not canonical.
    #[error("Unknown unit name: {name:?}")]
    UnknownUnit { name: String },

    /// Formatting options could not be decoded or encoded.
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl DurafmtError {
    /// Create a no-unit error for the given literal
    pub fn no_unit<S: Into<String>>(input: S) -> Self {
        Self::NoUnit { input: input.into() }
    }

    /// Create an unknown-unit error for the given name
    pub fn unknown_unit<S: Into<String>>(name: S) -> Self {
        Self::UnknownUnit { name: name.into() }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config { message: message.into() }
    }

    /// Whether the error comes from rejected user input rather than from
    /// configuration.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::Parse(_) | Self::NoUnit { .. })
    }
}
