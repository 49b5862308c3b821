//! Core Kernel - Foundational types for the quoting system
//!
//! This crate provides the building blocks shared by the rating domain and
//! the HTTP layer:
//! - Dollar amounts with precise decimal arithmetic and cent rounding
//! - An injectable reference clock and the quoting timezone
//! - Quote reference identifiers and their random source

pub mod money;
pub mod clock;
pub mod identifiers;
pub mod error;

pub use money::{Money, round_half_up};
pub use clock::{ReferenceClock, SystemClock, FixedClock, Timezone, TemporalError};
pub use identifiers::{QuoteId, QuoteIdError, RandomSource, ThreadRandom, FixedRandom, QUOTE_SUFFIX_RANGE};
pub use error::CoreError;
