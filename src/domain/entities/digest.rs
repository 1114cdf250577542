//! Digest entity
//!
//! A finalized hash of a file's contents, plus the algorithm that produced it.

use crate::error::ImagingError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Hash algorithms available for integrity verification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HashAlgorithm {
    /// Legacy; kept for matching digests recorded by older tooling
    Md5,
    Sha1,
    Sha224,
    /// 256-bit SHA-2, the default for imaging verification
    #[default]
    Sha256,
    Sha384,
    Sha512,
    Sha512_224,
    Sha512_256,
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
    #[serde(rename = "blake2b")]
    Blake2b512,
    #[serde(rename = "blake2s")]
    Blake2s256,
}

impl HashAlgorithm {
    pub const ALL: [HashAlgorithm; 14] = [
        HashAlgorithm::Md5,
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha224,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
        HashAlgorithm::Sha512_224,
        HashAlgorithm::Sha512_256,
        HashAlgorithm::Sha3_224,
        HashAlgorithm::Sha3_256,
        HashAlgorithm::Sha3_384,
        HashAlgorithm::Sha3_512,
        HashAlgorithm::Blake2b512,
        HashAlgorithm::Blake2s256,
    ];

    /// Canonical lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha224 => "sha224",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha384 => "sha384",
            HashAlgorithm::Sha512 => "sha512",
            HashAlgorithm::Sha512_224 => "sha512_224",
            HashAlgorithm::Sha512_256 => "sha512_256",
            HashAlgorithm::Sha3_224 => "sha3_224",
            HashAlgorithm::Sha3_256 => "sha3_256",
            HashAlgorithm::Sha3_384 => "sha3_384",
            HashAlgorithm::Sha3_512 => "sha3_512",
            HashAlgorithm::Blake2b512 => "blake2b",
            HashAlgorithm::Blake2s256 => "blake2s",
        }
    }

    /// Length of the hex-encoded digest
    pub fn hex_len(&self) -> usize {
        match self {
            HashAlgorithm::Md5 => 32,
            HashAlgorithm::Sha1 => 40,
            HashAlgorithm::Sha224 | HashAlgorithm::Sha512_224 | HashAlgorithm::Sha3_224 => 56,
            HashAlgorithm::Sha256
            | HashAlgorithm::Sha512_256
            | HashAlgorithm::Sha3_256
            | HashAlgorithm::Blake2s256 => 64,
            HashAlgorithm::Sha384 | HashAlgorithm::Sha3_384 => 96,
            HashAlgorithm::Sha512 | HashAlgorithm::Sha3_512 | HashAlgorithm::Blake2b512 => 128,
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = ImagingError;

    /// Accepts `sha256`, `SHA-256`, `sha512/256`, `SHA3-256`, `blake2b-512`
    /// and so on
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_ascii_lowercase()
            .chars()
            .map(|c| if c == '-' || c == '/' { '_' } else { c })
            .collect();

        let canonical = match normalized.as_str() {
            "md_5" => "md5",
            "sha_1" => "sha1",
            "sha_224" => "sha224",
            "sha_256" => "sha256",
            "sha_384" => "sha384",
            "sha_512" => "sha512",
            "sha_512_224" => "sha512_224",
            "sha_512_256" => "sha512_256",
            "sha3224" | "sha_3_224" => "sha3_224",
            "sha3256" | "sha_3_256" => "sha3_256",
            "sha3384" | "sha_3_384" => "sha3_384",
            "sha3512" | "sha_3_512" => "sha3_512",
            "blake2b512" | "blake2b_512" => "blake2b",
            "blake2s256" | "blake2s_256" => "blake2s",
            other => other,
        };

        HashAlgorithm::ALL
            .into_iter()
            .find(|a| a.name() == canonical)
            .ok_or_else(|| ImagingError::UnsupportedAlgorithm(s.to_string()))
    }
}

/// Hex-encoded digest of a file
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Digest {
    algorithm: HashAlgorithm,
    hex: String,
}

impl Digest {
    /// Wraps raw digest bytes
    pub fn from_bytes(algorithm: HashAlgorithm, bytes: &[u8]) -> Self {
        Self {
            algorithm,
            hex: hex::encode(bytes),
        }
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Lowercase hex string
    pub fn as_hex(&self) -> &str {
        &self.hex
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}
