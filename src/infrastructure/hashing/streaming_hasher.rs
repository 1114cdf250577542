//! Streaming file hasher
//!
//! Feeds a file through the selected hash one block at a time. Every
//! supported algorithm implements the RustCrypto `Digest` trait that `sha2`
//! re-exports, so one generic loop serves them all.

use crate::domain::entities::{Digest, HashAlgorithm};
use crate::domain::repositories::{BLOCK_SIZE, DigestCalculator};
use crate::error::{ImagingError, IoContext, Result};
use blake2::{Blake2b512, Blake2s256};
use md5::Md5;
use sha1::Sha1;
use sha2::Digest as _;
use sha2::{Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};
use sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Expands `$body` with `$H` bound to the hasher type for `$algorithm`
macro_rules! with_hasher {
    ($algorithm:expr, $H:ident => $body:expr) => {
        match $algorithm {
            HashAlgorithm::Md5 => {
                type $H = Md5;
                $body
            }
            HashAlgorithm::Sha1 => {
                type $H = Sha1;
                $body
            }
            HashAlgorithm::Sha224 => {
                type $H = Sha224;
                $body
            }
            HashAlgorithm::Sha256 => {
                type $H = Sha256;
                $body
            }
            HashAlgorithm::Sha384 => {
                type $H = Sha384;
                $body
            }
            HashAlgorithm::Sha512 => {
                type $H = Sha512;
                $body
            }
            HashAlgorithm::Sha512_224 => {
                type $H = Sha512_224;
                $body
            }
            HashAlgorithm::Sha512_256 => {
                type $H = Sha512_256;
                $body
            }
            HashAlgorithm::Sha3_224 => {
                type $H = Sha3_224;
                $body
            }
            HashAlgorithm::Sha3_256 => {
                type $H = Sha3_256;
                $body
            }
            HashAlgorithm::Sha3_384 => {
                type $H = Sha3_384;
                $body
            }
            HashAlgorithm::Sha3_512 => {
                type $H = Sha3_512;
                $body
            }
            HashAlgorithm::Blake2b512 => {
                type $H = Blake2b512;
                $body
            }
            HashAlgorithm::Blake2s256 => {
                type $H = Blake2s256;
                $body
            }
        }
    };
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StreamingHasher;

impl StreamingHasher {
    pub fn new() -> Self {
        Self
    }

    /// Digest of an in-memory buffer, for callers that already hold the bytes
    pub fn digest_bytes(data: &[u8], algorithm: HashAlgorithm) -> Digest {
        let bytes = with_hasher!(algorithm, H => H::digest(data).to_vec());
        Digest::from_bytes(algorithm, &bytes)
    }
}

fn stream<H: sha2::Digest>(path: &Path, file: &mut File) -> Result<Vec<u8>> {
    let mut hasher = H::new();
    let mut buffer = [0u8; BLOCK_SIZE];

    loop {
        match file.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => hasher.update(&buffer[..n]),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(ImagingError::io("reading", path, e)),
        }
    }

    Ok(hasher.finalize().to_vec())
}

impl DigestCalculator for StreamingHasher {
    fn digest(&self, path: &Path, algorithm: HashAlgorithm) -> Result<Digest> {
        let mut file = File::open(path).with_path("opening", path)?;

        let bytes = with_hasher!(algorithm, H => stream::<H>(path, &mut file)?);

        let digest = Digest::from_bytes(algorithm, &bytes);
        tracing::debug!(path = %path.display(), %algorithm, %digest, "computed digest");
        Ok(digest)
    }
}
