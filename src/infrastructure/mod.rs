//! Infrastructure layer
//!
//! Filesystem-backed implementations of the domain traits.

pub mod hashing;
pub mod imaging;
pub mod persistence;
pub mod probe;
