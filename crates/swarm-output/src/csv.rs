//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `agent_snapshots.csv`
//! - `tick_summaries.csv`
//! - `behaviors.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, BehaviorRow, OutputResult, TickSummaryRow};

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    behaviors: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("agent_snapshots.csv"))?;
        snapshots.write_record([
            "tick", "agent_id", "x", "y", "heading", "collision", "stopped_duration", "detection_id",
        ])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["tick", "elapsed_secs", "live_agents"])?;

        let mut behaviors = Writer::from_path(dir.join("behaviors.csv"))?;
        behaviors.write_record(["tick", "behavior", "current", "average"])?;

        Ok(Self {
            snapshots,
            summaries,
            behaviors,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.tick.to_string(),
                row.agent_id.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.heading.to_string(),
                (row.collision as u8).to_string(),
                row.stopped_duration.to_string(),
                row.detection_id.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.elapsed_secs.to_string(),
            row.live_agents.to_string(),
        ])?;
        Ok(())
    }

    fn write_behaviors(&mut self, rows: &[BehaviorRow]) -> OutputResult<()> {
        for row in rows {
            self.behaviors.write_record(&[
                row.tick.to_string(),
                row.name.clone(),
                row.current.to_string(),
                row.average.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        self.behaviors.flush()?;
        Ok(())
    }
}
