//! Error types for flock-steer.

use thiserror::Error;

/// Errors surfaced by the kernel and propagated by the dispatcher.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SteerError {
    /// The agent's own snapshot carried a non-finite position or heading.
    ///
    /// The dispatcher stops scheduling further work as soon as one of these
    /// surfaces; the tick that produced it is never applied.
    #[error("malformed snapshot for agent {agent}: non-finite position or heading")]
    MalformedSnapshot { agent: usize },
}

/// Alias for `Result<T, SteerError>`.
pub type SteerResult<T> = Result<T, SteerError>;
