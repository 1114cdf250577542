//! Byte-for-byte imaging

mod stream_copier;

pub use stream_copier::StreamCopier;
