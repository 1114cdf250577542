//! File digests

mod streaming_hasher;

pub use streaming_hasher::StreamingHasher;
