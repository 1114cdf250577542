//! Flat-file custody log
//!
//! Appends one line per action to a text file. The file is opened in
//! append mode, written and closed on every call; no handle is kept
//! between calls and concurrent writers are not coordinated.

use crate::domain::entities::{CustodyEntry, MalformedEntry};
use crate::domain::repositories::{Clock, CustodyLog, SystemClock};
use crate::error::{IoContext, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Default log location, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "chain_of_custody.log";

pub struct FileCustodyLog<C: Clock = SystemClock> {
    path: PathBuf,
    clock: C,
}

impl FileCustodyLog<SystemClock> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_clock(path, SystemClock)
    }
}

impl<C: Clock> FileCustodyLog<C> {
    pub fn with_clock(path: impl Into<PathBuf>, clock: C) -> Self {
        Self {
            path: path.into(),
            clock,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<C: Clock> CustodyLog for FileCustodyLog<C> {
    fn log(&self, action: &str, details: &str) -> Result<CustodyEntry> {
        let entry = CustodyEntry::new(self.clock.now(), action, details);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_path("opening", &self.path)?;
        writeln!(file, "{}", entry).with_path("appending to", &self.path)?;

        tracing::debug!(log = %self.path.display(), action, "custody entry appended");
        Ok(entry)
    }
}

/// Summary of a custody log read back for auditing
#[derive(Debug, Default)]
pub struct LogAudit {
    pub entries: Vec<CustodyEntry>,
    /// 1-based line number and reason of every line that failed to parse
    pub malformed: Vec<(usize, MalformedEntry)>,
}

impl LogAudit {
    /// Reads and parses every line of the log at `path`
    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).with_path("reading", path)?;
        Ok(Self::parse(&content))
    }

    pub fn parse(content: &str) -> Self {
        let mut audit = LogAudit::default();
        for (idx, line) in content.lines().enumerate() {
            match CustodyEntry::parse_line(line) {
                Ok(entry) => audit.entries.push(entry),
                Err(e) => audit.malformed.push((idx + 1, e)),
            }
        }
        audit
    }

    pub fn is_clean(&self) -> bool {
        self.malformed.is_empty()
    }
}
