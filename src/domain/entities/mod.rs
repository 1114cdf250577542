//! Domain entities
//!
//! Value objects passed between the imaging operations.

mod custody_entry;
mod digest;
mod findings;

pub use custody_entry::{CustodyEntry, MalformedEntry, TIMESTAMP_FORMAT};
pub use digest::{Digest, HashAlgorithm};
pub use findings::{ExistenceFinding, IntegrityReport, IntegrityVerdict};
