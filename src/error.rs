use crate::model::{GroupId, StudentId};
use thiserror::Error;

/// Failures of roster operations. An operation returning an error has not
/// modified the roster.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    /// An id given as argument does not designate anything in the roster.
    #[error("{argument} is missing from the roster")]
    MissingArgument { argument: &'static str },

    #[error("index {index} is out of range for a group of {len} students")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("student {student} is not a member of group {group}")]
    NotFound { student: StudentId, group: GroupId },
}

pub type Result<T> = std::result::Result<T, RosterError>;
