//! `flock-agent` — Structure-of-Arrays agent storage for the `rust_flock`
//! framework.
//!
//! # Crate layout
//!
//! | Module       | Contents                                             |
//! |--------------|------------------------------------------------------|
//! | [`store`]    | `AgentStore` (SoA arrays), `AgentInit`               |
//! | [`snapshot`] | `AgentSnapshot`, `SnapshotBuffer` (double buffer)    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                               |
//! |---------|------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on all public types. |

pub mod snapshot;
pub mod store;

#[cfg(test)]
mod tests;

pub use snapshot::{AgentSnapshot, SnapshotBuffer};
pub use store::{AgentInit, AgentStore};
