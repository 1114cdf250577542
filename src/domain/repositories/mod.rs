//! Repository traits (interfaces)
//!
//! Contracts for the filesystem-facing operations. Concrete
//! implementations live in the infrastructure layer.

mod custody_log;
mod digest_calculator;
mod evidence_copier;

pub use custody_log::{Clock, CustodyLog, SystemClock};
pub use digest_calculator::DigestCalculator;
pub use evidence_copier::{BLOCK_SIZE, EvidenceCopier};
