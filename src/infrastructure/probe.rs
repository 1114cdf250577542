//! Existence probe used as a stand-in for anti-forensic detection.
//!
//! No content or metadata is inspected.

use std::path::Path;

/// Reports whether anything exists at `path`
pub fn exists(path: &Path) -> bool {
    path.exists()
}
