//! Evidence copier trait
//!
//! Defines how a byte-for-byte image of an evidence file is produced.

use crate::error::Result;
use std::path::Path;

/// Block size used for streaming copies and digests
pub const BLOCK_SIZE: usize = 4096;

/// Produces a byte-for-byte copy of a source file
///
/// Implementations open both files for the duration of the call only.
/// A failed copy may leave a partial destination behind; no cleanup is
/// attempted.
pub trait EvidenceCopier {
    /// Copies `source` to `dest`, returning the number of bytes written
    fn copy(&self, source: &Path, dest: &Path) -> Result<u64>;
}
