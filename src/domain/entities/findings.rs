//! Verification and detection outcomes

use super::digest::Digest;
use serde::Serialize;
use std::fmt;

/// Outcome of comparing a source digest against its image digest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrityVerdict {
    Match,
    Mismatch,
    /// At least one digest could not be computed
    Unknown,
}

impl IntegrityVerdict {
    pub fn is_verified(&self) -> bool {
        matches!(self, IntegrityVerdict::Match)
    }
}

/// Both digests and the resulting verdict
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntegrityReport {
    pub source: Option<Digest>,
    pub image: Option<Digest>,
    pub verdict: IntegrityVerdict,
}

impl IntegrityReport {
    pub fn from_digests(source: Option<Digest>, image: Option<Digest>) -> Self {
        let verdict = match (&source, &image) {
            (Some(a), Some(b)) if a == b => IntegrityVerdict::Match,
            (Some(_), Some(_)) => IntegrityVerdict::Mismatch,
            _ => IntegrityVerdict::Unknown,
        };
        Self {
            source,
            image,
            verdict,
        }
    }
}

/// Result of the (mock) anti-forensic check on an evidence path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExistenceFinding {
    /// File is still there; no overwriting observed
    Present,
    /// File is gone; possible overwriting or secure deletion
    Missing,
}

impl ExistenceFinding {
    pub fn from_exists(exists: bool) -> Self {
        if exists {
            ExistenceFinding::Present
        } else {
            ExistenceFinding::Missing
        }
    }
}

impl fmt::Display for ExistenceFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExistenceFinding::Present => f.write_str("File exists. No overwriting detected."),
            ExistenceFinding::Missing => f.write_str(
                "File does not exist. Possible overwriting or secure deletion detected.",
            ),
        }
    }
}
