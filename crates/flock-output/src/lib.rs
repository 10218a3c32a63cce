//! `flock-output` — simulation output writers for the rust_flock framework.
//!
//! The CSV backend implements [`OutputWriter`] and is driven by
//! [`SimOutputObserver`], which implements `flock_sim::SimObserver`.
//!
//! | Backend | Files created                           |
//! |---------|------------------------------------------|
//! | CSV     | `agent_poses.csv`, `tick_summaries.csv`  |
//!
//! # Usage
//!
//! ```rust,ignore
//! use flock_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run_ticks(10_000, dt, &mut obs)?;
//! obs.finish();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentPoseRow, TickSummaryRow};
pub use writer::OutputWriter;
