//! Parse failure classification

use thiserror::Error;

/// Why a line could not be turned into a reading
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Line was empty after trimming
    #[error("empty line")]
    EmptyLine,

    /// Too few tokens; the line may be one half of a split record
    #[error("insufficient columns: {found} tokens -> {line}")]
    InsufficientColumns { found: usize, line: String },

    /// Date or time token does not match `MM/DD/YYYY HH:MM:SS`
    #[error("invalid date/time '{date} {time}': {reason}")]
    InvalidDateTime {
        date: String,
        time: String,
        reason: String,
    },

    /// A required measurement is not a number
    #[error("invalid value in '{field}': {token}")]
    InvalidField { field: &'static str, token: String },
}

impl ParseError {
    /// True when the failure may be caused by a record split across lines
    pub fn is_fragment(&self) -> bool {
        matches!(self, Self::InsufficientColumns { .. })
    }
}
