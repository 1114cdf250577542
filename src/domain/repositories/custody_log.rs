//! Custody log trait
//!
//! Defines the append-only chain-of-custody record.

use crate::domain::entities::CustodyEntry;
use crate::error::Result;
use chrono::NaiveDateTime;

/// Source of "now" for custody timestamps
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock in the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// Append-only record of actions taken on evidence
pub trait CustodyLog {
    /// Appends one timestamped entry and returns it
    fn log(&self, action: &str, details: &str) -> Result<CustodyEntry>;
}
