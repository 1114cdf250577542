//! Digest calculator trait

use crate::domain::entities::{Digest, HashAlgorithm};
use crate::error::Result;
use std::path::Path;

/// Computes the digest of a file's contents
pub trait DigestCalculator {
    /// Streams `path` through `algorithm` and returns the finalized digest
    ///
    /// A failure yields no digest at all; callers treat that as "unknown",
    /// never as a mismatch.
    fn digest(&self, path: &Path, algorithm: HashAlgorithm) -> Result<Digest>;
}
