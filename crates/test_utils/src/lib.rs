//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! quoting system test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pinned clocks, random sources and reference profiles
//! - `builders`: Builder for quote requests with sensible defaults
//! - `assertions`: Custom assertion helpers for quotes and money
//! - `generators`: Property-based generators for valid requests

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
