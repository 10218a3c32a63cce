//! `flock-steer` — the per-agent steering force kernel and its data-parallel
//! dispatcher.
//!
//! # Execution model
//!
//! ```text
//! snapshots (read-only)  ──►  compute(i) for every i  ──►  outputs[i]
//!                              any order, no shared
//!                              mutation, one writer
//!                              per output slot
//! ```
//!
//! [`kernel::compute`] is pure: for a fixed snapshot array and config it
//! returns the identical vector on every invocation, regardless of the order
//! (or thread) the indices run in.  [`dispatch`] fans the kernel out across
//! all indices and joins before returning, so completed outputs are always
//! fully visible to the caller.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                           |
//! |------------|--------------------------------------------------|
//! | `parallel` | Runs the dispatch on Rayon's thread pool.        |

pub mod dispatch;
pub mod error;
pub mod kernel;

#[cfg(test)]
mod tests;

pub use dispatch::{DEFAULT_MIN_CHUNK, dispatch, dispatch_chunked};
pub use error::{SteerError, SteerResult};
pub use kernel::compute;
