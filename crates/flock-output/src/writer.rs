//! The `OutputWriter` trait implemented by all backend writers.

use crate::{AgentPoseRow, OutputResult, TickSummaryRow};

/// Trait implemented by output backends (CSV today; the observer is backend
/// agnostic).
pub trait OutputWriter {
    /// Write a batch of sampled agent poses.
    fn write_poses(&mut self, rows: &[AgentPoseRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
