//! `flock-core` — foundational types for the `rust_flock` flocking framework.
//!
//! This crate is a dependency of every other `flock-*` crate.  It
//! intentionally has no `flock-*` dependencies and minimal external ones
//! (only `glam`, `rand`, and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                           |
//! |------------|----------------------------------------------------|
//! | [`ids`]    | `AgentId`, `GroupId`                               |
//! | [`space`]  | `Bounds`, capped-rotation steering helper          |
//! | [`time`]   | `Tick`, `SimClock`                                 |
//! | [`rng`]    | `AgentRng` (per-agent deterministic RNG)           |
//! | [`config`] | `FlockConfig`, `SteeringWeights`, `SpawnParams`    |
//! | [`error`]  | `FlockError`, `FlockResult`                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod space;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{FlockConfig, SpawnParams, SteeringWeights};
pub use error::{FlockError, FlockResult};
pub use ids::{AgentId, GroupId};
pub use rng::AgentRng;
pub use space::{Bounds, rotate_towards};
pub use time::{SimClock, Tick};

/// 3-D vector type used for positions, headings, and steering forces.
pub use glam::Vec3;
