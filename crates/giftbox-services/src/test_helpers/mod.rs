//! Test helpers for catalog, resolver and upload tests
//!
//! In-memory catalogs, logo hosts and a manual clock so that cache expiry and fallback
//! behavior can be exercised without network access.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
