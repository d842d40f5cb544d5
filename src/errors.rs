//! Core error taxonomy.
//!
//! These variants cover the logical failures of the history engine. Plain
//! I/O failures are not translated: they propagate as `std::io::Error`
//! through `anyhow`, since storage errors are fatal to the current command.
//! The typed variants stay downcastable through `anyhow`, so callers can
//! tell "history is broken" (`ObjectNotFound` while walking the graph)
//! apart from "you asked for something that does not exist"
//! (`UnknownBranch`).

use crate::artifacts::objects::object_id::ObjectId;

/// Maximum number of symbolic hops followed before a reference chain is
/// declared cyclic. Cycles cannot occur under correct use; the bound keeps
/// a corrupted refs area from hanging the process.
pub const MAX_SYMREF_HOPS: usize = 10;

#[derive(Debug, thiserror::Error)]
pub enum JotError {
    #[error("object {0} is missing from the object database")]
    ObjectNotFound(ObjectId),

    #[error("symbolic reference chain starting at '{0}' did not terminate within {MAX_SYMREF_HOPS} hops")]
    ReferenceCycle(String),

    #[error("branch '{0}' does not exist")]
    UnknownBranch(String),

    #[error("nothing to commit (staging index is empty)")]
    NothingToCommit,

    #[error("invalid reference name '{0}'")]
    InvalidName(String),
}
