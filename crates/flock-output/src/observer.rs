//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use flock_agent::AgentStore;
use flock_core::Tick;
use flock_sim::SimObserver;

use crate::OutputError;
use crate::row::{AgentPoseRow, TickSummaryRow};
use crate::writer::OutputWriter;

/// A [`SimObserver`] that writes agent poses and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After the run, call
/// [`finish`][Self::finish] to flush, then check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer: W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Flush the underlying writer.  The simulation has no terminal state,
    /// so the host decides when a run is over and calls this.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Take the stored write error (if any) after the run.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, elapsed_secs: f64, agent_count: usize) {
        let row = TickSummaryRow {
            tick: tick.0,
            elapsed_secs,
            agent_count: agent_count as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_sample(&mut self, tick: Tick, agents: &AgentStore) {
        let rows: Vec<AgentPoseRow> = (0..agents.count)
            .map(|i| {
                let position = agents.position[i];
                let heading = agents.heading[i];
                AgentPoseRow {
                    agent_id: i as u32,
                    group_id: agents.group_id[i].0,
                    tick: tick.0,
                    x: position.x,
                    y: position.y,
                    z: position.z,
                    heading_x: heading.x,
                    heading_y: heading.y,
                    heading_z: heading.z,
                }
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_poses(&rows);
            self.store_err(result);
        }
    }
}
