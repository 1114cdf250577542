//! Streaming block copier
//!
//! Copies a file in fixed-size blocks, writing each block as soon as it is
//! read. There is no atomic rename and no cleanup on failure.
//!
//! A destination that resolves to the source file itself is refused before
//! anything is truncated.

use crate::domain::repositories::{BLOCK_SIZE, EvidenceCopier};
use crate::error::{ImagingError, IoContext, Result};
use std::fs::{self, File};
use std::io::{ErrorKind, Read, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy)]
pub struct StreamCopier {
    block_size: usize,
}

impl StreamCopier {
    pub fn new() -> Self {
        Self::with_block_size(BLOCK_SIZE)
    }

    /// Block size is clamped to at least one byte
    pub fn with_block_size(block_size: usize) -> Self {
        Self {
            block_size: block_size.max(1),
        }
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }
}

impl Default for StreamCopier {
    fn default() -> Self {
        Self::new()
    }
}

impl EvidenceCopier for StreamCopier {
    fn copy(&self, source: &Path, dest: &Path) -> Result<u64> {
        let mut src = File::open(source).with_path("opening", source)?;
        if is_same_file(&src, source, dest)? {
            return Err(ImagingError::SameFile(dest.to_path_buf()));
        }
        let mut out = File::create(dest).with_path("creating", dest)?;

        let mut buffer = vec![0u8; self.block_size];
        let mut total: u64 = 0;

        loop {
            let n = match src.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(ImagingError::io("reading", source, e)),
            };

            out.write_all(&buffer[..n]).with_path("writing", dest)?;
            total += n as u64;
        }

        out.flush().with_path("flushing", dest)?;

        tracing::debug!(
            source = %source.display(),
            dest = %dest.display(),
            bytes = total,
            "copied evidence"
        );

        Ok(total)
    }
}

/// True when `dest` already exists and is the file behind `src`
#[cfg(unix)]
fn is_same_file(src: &File, source: &Path, dest: &Path) -> Result<bool> {
    use std::os::unix::fs::MetadataExt;

    let dest_meta = match fs::metadata(dest) {
        Ok(meta) => meta,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(ImagingError::io("inspecting", dest, e)),
    };
    let src_meta = src.metadata().with_path("inspecting", source)?;
    Ok(src_meta.dev() == dest_meta.dev() && src_meta.ino() == dest_meta.ino())
}

#[cfg(not(unix))]
fn is_same_file(_src: &File, source: &Path, dest: &Path) -> Result<bool> {
    let dest = match fs::canonicalize(dest) {
        Ok(path) => path,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(ImagingError::io("resolving", dest, e)),
    };
    let source = fs::canonicalize(source).with_path("resolving", source)?;
    Ok(source == dest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn copies_across_block_boundaries() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src.bin");
        let dst = dir.path().join("dst.bin");
        let data: Vec<u8> = (0..=255u8).cycle().take(BLOCK_SIZE * 2 + 17).collect();
        fs::write(&src, &data).unwrap();

        let written = StreamCopier::new().copy(&src, &dst).unwrap();

        assert_eq!(written, data.len() as u64);
        assert_eq!(fs::read(&dst).unwrap(), data);
    }

    #[test]
    fn tiny_block_size_still_copies_everything() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src.txt");
        let dst = dir.path().join("dst.txt");
        fs::write(&src, b"chain of custody").unwrap();

        let copier = StreamCopier::with_block_size(0);
        assert_eq!(copier.block_size(), 1);
        copier.copy(&src, &dst).unwrap();

        assert_eq!(fs::read(&dst).unwrap(), b"chain of custody");
    }

    #[test]
    fn refuses_to_copy_onto_itself() {
        let dir = TempDir::new().unwrap();
        let evidence = dir.path().join("evidence.bin");
        fs::write(&evidence, b"original bytes").unwrap();

        let err = StreamCopier::new().copy(&evidence, &evidence).unwrap_err();

        assert!(matches!(err, ImagingError::SameFile(_)));
        assert_eq!(fs::read(&evidence).unwrap(), b"original bytes");
    }
}
