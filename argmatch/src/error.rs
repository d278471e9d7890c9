//! Error types of the [`argmatch`](crate) crate.

use thiserror::Error;

/// Failure while evaluating an argument matcher.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum MatchError {
    /// The matcher panicked while checking an argument.
    #[error("Matcher '{matcher}' panicked: {message}")]
    Panicked { matcher: String, message: String },
}
