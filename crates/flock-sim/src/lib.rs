//! `flock-sim` — tick loop orchestrator for the rust_flock framework.
//!
//! # Tick anatomy
//!
//! ```text
//! tick(dt):
//!   ① Growth    — drain queued grow requests, appending agents to the store
//!                 (resizes happen only here, never mid-dispatch).
//!   ② Snapshot  — rebuild the read-only input array + zeroed output array.
//!   ③ Dispatch  — run the steering kernel for every index
//!                 (parallel with the `parallel` feature); join.
//!   ④ Integrate — sequential, ascending agent index: rate-limited turn
//!                 toward the computed heading, then forward translation.
//!   ⑤ Clock     — advance tick counter and elapsed time.
//! ```
//!
//! If ③ fails, ④ never runs: the tick is not applied and agent state is
//! exactly what it was before the call.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                               |
//! |------------|------------------------------------------------------|
//! | `parallel` | Runs the steering dispatch on Rayon's thread pool.   |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use flock_core::{FlockConfig, SpawnParams};
//! use flock_sim::{NoopObserver, SimulationBuilder};
//!
//! let mut sim = SimulationBuilder::new(FlockConfig::default(), /*seed=*/ 42)
//!     .group(500, SpawnParams::default())
//!     .build()?;
//! sim.run_ticks(1_000, 1.0 / 60.0, &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod integrator;
pub mod observer;
pub mod registry;
pub mod sim;


pub use builder::SimulationBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use registry::{Group, GroupRegistry};
pub use sim::Simulation;
