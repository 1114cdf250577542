//! Custody log persistence

mod file_custody_log;

pub use file_custody_log::{DEFAULT_LOG_FILE, FileCustodyLog, LogAudit};
