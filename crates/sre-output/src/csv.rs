//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `agent_activity.csv`
//! - `tick_summaries.csv`
//! - `work_mix.csv` (team rows carry `team` in the `agent_id` column)

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{AgentActivityRow, OutputResult, TickSummaryRow, WorkMixRow};
use crate::writer::OutputWriter;

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    activity:  Writer<File>,
    summaries: Writer<File>,
    work_mix:  Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut activity = Writer::from_path(dir.join("agent_activity.csv"))?;
        activity.write_record(["tick", "agent_id", "kind", "remaining"])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record([
            "tick", "arrivals", "followups", "served", "relieved", "completed", "backlog_len",
        ])?;

        let mut work_mix = Writer::from_path(dir.join("work_mix.csv"))?;
        work_mix.write_record(["agent_id", "kind", "ticks", "fraction"])?;

        Ok(Self {
            activity,
            summaries,
            work_mix,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[AgentActivityRow]) -> OutputResult<()> {
        for row in rows {
            self.activity.write_record(&[
                row.tick.to_string(),
                row.agent_id.to_string(),
                row.kind.as_str().to_owned(),
                row.remaining.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.arrivals.to_string(),
            row.followups.to_string(),
            row.served.to_string(),
            row.relieved.to_string(),
            row.completed.to_string(),
            row.backlog_len.to_string(),
        ])?;
        Ok(())
    }

    fn write_work_mix(&mut self, rows: &[WorkMixRow]) -> OutputResult<()> {
        for row in rows {
            let agent = row.agent_id.map_or_else(|| "team".to_owned(), |id| id.to_string());
            self.work_mix.write_record(&[
                agent,
                row.kind.as_str().to_owned(),
                row.ticks.to_string(),
                format!("{:.6}", row.fraction),
            ])?;
        }
        self.work_mix.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.activity.flush()?;
        self.summaries.flush()?;
        self.work_mix.flush()?;
        Ok(())
    }
}
