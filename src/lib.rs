//! Forensic imaging toolkit
//!
//! Byte-for-byte imaging, streaming digest verification, a mock
//! anti-forensic existence check and an append-only chain-of-custody log,
//! sequenced by [`application::ImagingWorkflow`].

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

pub use application::dto::{WorkflowConfig, WorkflowReport};
pub use application::{ForensicSteps, ImagingWorkflow};
pub use domain::entities::{
    CustodyEntry, Digest, ExistenceFinding, HashAlgorithm, IntegrityReport, IntegrityVerdict,
};
pub use error::{ImagingError, Result};
