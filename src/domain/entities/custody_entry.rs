//! Chain-of-custody entry
//!
//! One immutable, timestamped line of the custody log:
//! `[YYYY-MM-DD HH:MM:SS] <action>: <details>`
//!
//! Backslashes and control characters in the action and details are
//! escaped (`\\`, `\n`, `\r`, `\t`, `\u{..}`) so every entry stays on one
//! physical line; [`CustodyEntry::parse_line`] reverses the escaping.

use chrono::NaiveDateTime;
use std::fmt::{self, Write as _};
use thiserror::Error;

/// Timestamp layout used in every custody line (second resolution)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Reasons a custody line fails to parse
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedEntry {
    #[error("missing '[timestamp]' prefix")]
    MissingTimestamp,

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("missing '<action>: <details>' body")]
    MissingAction,

    #[error("invalid escape sequence: {0}")]
    InvalidEscape(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustodyEntry {
    timestamp: NaiveDateTime,
    action: String,
    details: String,
}

impl CustodyEntry {
    pub fn new(timestamp: NaiveDateTime, action: &str, details: &str) -> Self {
        Self {
            timestamp,
            action: action.to_string(),
            details: details.to_string(),
        }
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    /// Parses a single line (without its trailing newline)
    pub fn parse_line(line: &str) -> Result<Self, MalformedEntry> {
        let rest = line
            .strip_prefix('[')
            .ok_or(MalformedEntry::MissingTimestamp)?;
        let (stamp, body) = rest
            .split_once("] ")
            .ok_or(MalformedEntry::MissingTimestamp)?;

        let timestamp = NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT)
            .map_err(|_| MalformedEntry::InvalidTimestamp(stamp.to_string()))?;

        let (action, details) = body.split_once(": ").ok_or(MalformedEntry::MissingAction)?;
        if action.is_empty() {
            return Err(MalformedEntry::MissingAction);
        }

        Ok(Self {
            timestamp,
            action: unescape_field(action)?,
            details: unescape_field(details)?,
        })
    }
}

impl fmt::Display for CustodyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ", self.timestamp.format(TIMESTAMP_FORMAT))?;
        escape_field(&self.action, f)?;
        f.write_str(": ")?;
        escape_field(&self.details, f)
    }
}

fn escape_field(field: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for c in field.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c.is_control() => write!(f, "\\u{{{:x}}}", c as u32)?,
            c => f.write_char(c)?,
        }
    }
    Ok(())
}

fn unescape_field(field: &str) -> Result<String, MalformedEntry> {
    let invalid = || MalformedEntry::InvalidEscape(field.to_string());
    let mut out = String::with_capacity(field.len());
    let mut chars = field.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next().ok_or_else(invalid)? {
            '\\' => out.push('\\'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'u' => {
                if chars.next() != Some('{') {
                    return Err(invalid());
                }
                let hex: String = chars.by_ref().take_while(|&c| c != '}').collect();
                let decoded = u32::from_str_radix(&hex, 16)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or_else(invalid)?;
                out.push(decoded);
            }
            _ => return Err(invalid()),
        }
    }
    Ok(out)
}
