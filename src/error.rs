
use thiserror::Error;

/// A failed resolution. Messages are stable and pattern-matchable so tests
/// can assert on fragments such as "is null or undefined" or "should be
/// type". Expected kinds are summarized by the first kind in canonical
/// declaration order, not listed exhaustively.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Argument {index} ({name}) is null or undefined but it must be not null.")]
    NullRequired { index: usize, name: String },
    #[error("Argument {index} ({name}) should be type {expected}, but it was type {actual} with value {value}.")]
    WrongType {
        index: usize,
        name: String,
        expected: String,
        actual: &'static str,
        value: String,
    },
    #[error("Argument {index} ({name}) has no valid type specified.")]
    NoTypeSpecified { index: usize, name: String },
    #[error("Argument {index} should be one of {expected}.")]
    NoGroupMatch { index: usize, expected: String },
    #[error("Argument {index} is null or undefined but it must match one of the group alternatives.")]
    NoGroupMatchNull { index: usize },
}

pub type Result<T> = std::result::Result<T, ResolveError>;
