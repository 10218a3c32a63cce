//! Framework error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `FlockError` via `From` impls, or keep them separate and wrap `FlockError`
//! as one variant.  Both patterns are acceptable; prefer whichever keeps
//! error sites clean.

use thiserror::Error;

use crate::GroupId;

/// The top-level error type for `flock-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum FlockError {
    #[error("group {0} not found")]
    GroupNotFound(GroupId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `flock-*` crates.
pub type FlockResult<T> = Result<T, FlockError>;
