//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `agent_poses.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentPoseRow, OutputResult, TickSummaryRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    poses: Writer<File>,
    summaries: Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut poses = Writer::from_path(dir.join("agent_poses.csv"))?;
        poses.write_record([
            "agent_id", "group_id", "tick", "x", "y", "z", "heading_x", "heading_y", "heading_z",
        ])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["tick", "elapsed_secs", "agent_count"])?;

        Ok(Self { poses, summaries, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_poses(&mut self, rows: &[AgentPoseRow]) -> OutputResult<()> {
        for row in rows {
            self.poses.write_record(&[
                row.agent_id.to_string(),
                row.group_id.to_string(),
                row.tick.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.z.to_string(),
                row.heading_x.to_string(),
                row.heading_y.to_string(),
                row.heading_z.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.elapsed_secs.to_string(),
            row.agent_count.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.poses.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
