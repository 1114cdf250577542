//! Domain layer
//!
//! Value objects for digests, custody entries and findings, plus the
//! traits the infrastructure layer implements.

pub mod entities;
pub mod repositories;
