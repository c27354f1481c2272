//! Error types for dtime operations.

use chrono::NaiveDateTime;
use serde::Serialize;
use thiserror::Error;

use crate::types::ParsedMoment;

/// Guidance shown when input matches none of the recognised shapes.
pub const INVALID_FORMAT_MESSAGE: &str =
    "Please use a date format like '2023-12-30', '13:00', or '2023-12-30 13:00'";

/// Why an input could not be turned into a moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Input matches neither recognised shape.
    InvalidFormat,
    /// Input has a recognised shape but names an impossible moment.
    SemanticError,
}

impl FailureKind {
    /// Label of the error suggestion shown to the user.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::InvalidFormat => "Invalid input",
            Self::SemanticError => "Parse error",
        }
    }
}

/// A user-correctable parse failure.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{message}")]
pub struct ParseFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl ParseFailure {
    #[must_use]
    pub fn invalid_format() -> Self {
        Self {
            kind: FailureKind::InvalidFormat,
            message: INVALID_FORMAT_MESSAGE.to_string(),
        }
    }

    pub fn semantic(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::SemanticError,
            message: message.into(),
        }
    }
}

impl From<ResolveError> for ParseFailure {
    fn from(err: ResolveError) -> Self {
        Self::semantic(err.to_string())
    }
}

/// Failure to resolve an ISO-like literal to an instant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// chrono rejected the literal (out-of-range field, impossible date, ...).
    #[error("'{literal}' is not a valid date and time: {source}")]
    Chrono {
        literal: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("second must be in 0..59")]
    SecondOutOfRange,

    #[error("24:00 must not have non-zero minutes or seconds")]
    EndOfDay,

    #[error("{0} does not exist in the local timezone")]
    NonexistentLocalTime(NaiveDateTime),
}

/// Failure while executing a selected suggestion.
#[derive(Error, Debug)]
pub enum ExecuteError {
    #[error("Failed to copy to clipboard: {0}")]
    Clipboard(String),
}

/// Result of classifying and resolving one input.
pub type ParseOutcome = std::result::Result<ParsedMoment, ParseFailure>;
