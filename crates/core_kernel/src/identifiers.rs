//! Quote reference identifiers
//!
//! A quote reference reads `QM-YYYYMMDD-NNNN`: a fixed prefix, the quoting
//! date and a four digit suffix drawn from a [`RandomSource`]. References are
//! for display and customer correspondence; two quotes on the same day may
//! share one.

use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use thiserror::Error;

/// Range every quote suffix falls in
pub const QUOTE_SUFFIX_RANGE: RangeInclusive<u16> = 1000..=9999;

const QUOTE_PREFIX: &str = "QM";

/// Supplies the random part of quote references
pub trait RandomSource: Send + Sync {
    /// Returns a value within [`QUOTE_SUFFIX_RANGE`]
    fn quote_suffix(&self) -> u16;
}

/// Draws suffixes from the thread-local RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn quote_suffix(&self) -> u16 {
        rand::thread_rng().gen_range(QUOTE_SUFFIX_RANGE)
    }
}

/// Always yields the same suffix, clamped into [`QUOTE_SUFFIX_RANGE`]
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(pub u16);

impl RandomSource for FixedRandom {
    fn quote_suffix(&self) -> u16 {
        self.0.clamp(*QUOTE_SUFFIX_RANGE.start(), *QUOTE_SUFFIX_RANGE.end())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuoteIdError {
    #[error("Malformed quote reference: {0}")]
    Malformed(String),
}

/// Quote reference such as `QM-20250615-4821`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QuoteId {
    date: NaiveDate,
    suffix: u16,
}

impl QuoteId {
    /// Creates a reference for a quote produced on `date`
    pub fn generate(date: NaiveDate, random: &dyn RandomSource) -> Self {
        Self {
            date,
            suffix: random.quote_suffix(),
        }
    }

    /// Returns the quoting date embedded in the reference
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the four digit suffix
    pub fn suffix(&self) -> u16 {
        self.suffix
    }
}

impl fmt::Display for QuoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", QUOTE_PREFIX, self.date.format("%Y%m%d"), self.suffix)
    }
}

impl FromStr for QuoteId {
    type Err = QuoteIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || QuoteIdError::Malformed(s.to_string());

        let rest = s
            .strip_prefix(QUOTE_PREFIX)
            .and_then(|r| r.strip_prefix('-'))
            .ok_or_else(malformed)?;
        let (date_part, suffix_part) = rest.split_once('-').ok_or_else(malformed)?;

        if date_part.len() != 8 || suffix_part.len() != 4 {
            return Err(malformed());
        }
        let date = NaiveDate::parse_from_str(date_part, "%Y%m%d").map_err(|_| malformed())?;
        let suffix: u16 = suffix_part.parse().map_err(|_| malformed())?;
        if !QUOTE_SUFFIX_RANGE.contains(&suffix) {
            return Err(malformed());
        }

        Ok(Self { date, suffix })
    }
}

impl TryFrom<String> for QuoteId {
    type Error = QuoteIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<QuoteId> for String {
    fn from(id: QuoteId) -> String {
        id.to_string()
    }
}
