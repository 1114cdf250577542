//! Individual forensic steps
//!
//! Each step runs one leaf operation, prints a human-readable status line
//! and hands the typed result back to the caller. Whether a failure stops
//! anything is the caller's decision.

use crate::domain::entities::{
    CustodyEntry, Digest, ExistenceFinding, HashAlgorithm, IntegrityReport, IntegrityVerdict,
};
use crate::domain::repositories::{CustodyLog, DigestCalculator, EvidenceCopier};
use crate::error::Result;
use crate::infrastructure::probe;
use std::io::Write;
use std::path::Path;

pub const ACTION_CREATE_IMAGE: &str = "Create Forensic Image";
pub const ACTION_RECOVER: &str = "Recover Deleted File";
pub const ACTION_ANTI_FORENSIC: &str = "Anti-Forensic Detection";

/// Writes one status line; a closed stdout must not abort the run
macro_rules! status {
    ($out:expr, $($arg:tt)*) => {{
        let _ = writeln!($out, $($arg)*);
    }};
}

pub struct ForensicSteps<C, D, L> {
    copier: C,
    hasher: D,
    custody: L,
}

impl<C: EvidenceCopier, D: DigestCalculator, L: CustodyLog> ForensicSteps<C, D, L> {
    pub fn new(copier: C, hasher: D, custody: L) -> Self {
        Self {
            copier,
            hasher,
            custody,
        }
    }

    /// Appends a custody entry and announces it
    pub fn log_action<W: Write>(
        &self,
        action: &str,
        details: &str,
        out: &mut W,
    ) -> Result<CustodyEntry> {
        let result = self.custody.log(action, details);
        match &result {
            Ok(_) => {
                status!(out, "Logged action: {}", action);
            }
            Err(e) => {
                tracing::warn!(action, error = %e, "custody log write failed");
                status!(out, "Error logging action: {}", e);
            }
        }
        result
    }

    /// Produces a byte-for-byte image of `source` at `image`
    pub fn create_image<W: Write>(&self, source: &Path, image: &Path, out: &mut W) -> Result<u64> {
        let result = self.copier.copy(source, image);
        match &result {
            Ok(bytes) => {
                tracing::info!(image = %image.display(), bytes, "forensic image created");
                status!(out, "Forensic image created: {}", image.display());
            }
            Err(e) => {
                tracing::warn!(error = %e, "imaging failed");
                status!(out, "Error creating forensic image: {}", e);
            }
        }
        result
    }

    /// Digest of `path`, or `None` when it cannot be read
    pub fn calculate_hash<W: Write>(
        &self,
        path: &Path,
        algorithm: HashAlgorithm,
        out: &mut W,
    ) -> Option<Digest> {
        match self.hasher.digest(path, algorithm) {
            Ok(digest) => Some(digest),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "digest failed");
                status!(out, "Error calculating hash: {}", e);
                None
            }
        }
    }

    /// Hashes both files and compares the digests
    pub fn verify_integrity<W: Write>(
        &self,
        source: &Path,
        image: &Path,
        algorithm: HashAlgorithm,
        out: &mut W,
    ) -> IntegrityReport {
        let original = self.calculate_hash(source, algorithm, out);
        let imaged = self.calculate_hash(image, algorithm, out);
        let report = IntegrityReport::from_digests(original, imaged);

        status!(out, "Original File Hash: {}", display_digest(&report.source));
        status!(out, "Forensic Image Hash: {}", display_digest(&report.image));

        match report.verdict {
            IntegrityVerdict::Match => {
                status!(out, "Integrity verified. Hashes match.");
            }
            IntegrityVerdict::Mismatch => {
                status!(out, "Integrity verification failed. Hashes do not match.");
            }
            IntegrityVerdict::Unknown => {
                status!(out, "Integrity could not be verified: digest unavailable.");
            }
        }

        tracing::info!(verdict = ?report.verdict, %algorithm, "integrity check finished");
        report
    }

    /// Simulated recovery: copies `source` to `dest` under the recovery label.
    ///
    /// Nothing is undeleted; this is the same byte copy as imaging.
    pub fn recover<W: Write>(&self, source: &Path, dest: &Path, out: &mut W) -> Result<u64> {
        let result = self.copier.copy(source, dest);
        match &result {
            Ok(_) => {
                status!(out, "Forensic image created: {}", dest.display());
                status!(out, "Simulated recovery: {}", dest.display());
            }
            Err(e) => {
                tracing::warn!(error = %e, "simulated recovery failed");
                status!(out, "Error recovering file: {}", e);
            }
        }
        result
    }

    /// Mock anti-forensic check: presence of the file is the only signal
    pub fn detect_anti_forensic<W: Write>(&self, path: &Path, out: &mut W) -> ExistenceFinding {
        let finding = ExistenceFinding::from_exists(probe::exists(path));
        status!(out, "{}", finding);
        finding
    }
}

fn display_digest(digest: &Option<Digest>) -> String {
    digest
        .as_ref()
        .map_or_else(|| "None".to_string(), |d| d.to_string())
}

pub fn create_image_details(source: &Path, image: &Path) -> String {
    format!("Source: {}, Image: {}", source.display(), image.display())
}

pub fn recover_details(image: &Path, recovered: &Path) -> String {
    format!("Source: {}, Recovered: {}", image.display(), recovered.display())
}

pub fn anti_forensic_details(path: &Path) -> String {
    format!("Check file existence for: {}", path.display())
}
