//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! three tables: `agent_activity`, `tick_summaries` and `work_mix`.

use std::path::Path;

use rusqlite::Connection;

use crate::{AgentActivityRow, OutputResult, TickSummaryRow, WorkMixRow};
use crate::writer::OutputWriter;

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS agent_activity (
                 tick      INTEGER NOT NULL,
                 agent_id  INTEGER NOT NULL,
                 kind      TEXT    NOT NULL,
                 remaining INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS tick_summaries (
                 tick        INTEGER PRIMARY KEY,
                 arrivals    INTEGER NOT NULL,
                 followups   INTEGER NOT NULL,
                 served      INTEGER NOT NULL,
                 relieved    INTEGER NOT NULL,
                 completed   INTEGER NOT NULL,
                 backlog_len INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS work_mix (
                 agent_id INTEGER,
                 kind     TEXT    NOT NULL,
                 ticks    INTEGER NOT NULL,
                 fraction REAL    NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_snapshots(&mut self, rows: &[AgentActivityRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO agent_activity (tick, agent_id, kind, remaining) \
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.tick,
                    row.agent_id,
                    row.kind.as_str(),
                    row.remaining,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO tick_summaries \
             (tick, arrivals, followups, served, relieved, completed, backlog_len) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            rusqlite::params![
                row.tick,
                row.arrivals,
                row.followups,
                row.served,
                row.relieved,
                row.completed,
                row.backlog_len,
            ],
        )?;
        Ok(())
    }

    fn write_work_mix(&mut self, rows: &[WorkMixRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO work_mix (agent_id, kind, ticks, fraction) VALUES (?1, ?2, ?3, ?4)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.agent_id,
                    row.kind.as_str(),
                    row.ticks,
                    row.fraction,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
