//! Reference clock and quoting timezone
//!
//! Everything date-derived on a quote (vehicle age, quote reference date,
//! expiration) reads "now" from a [`ReferenceClock`] handed in by the caller.
//! Production uses [`SystemClock`]; tests pin the date with [`FixedClock`].

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors related to clock configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),
}

/// Timezone the quoting office operates in
///
/// Wraps chrono_tz::Tz with custom serialization support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timezone(pub Tz);

impl Serialize for Timezone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.name())
    }
}

impl<'de> Deserialize<'de> for Timezone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl FromStr for Timezone {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tz::from_str(s)
            .map(Timezone)
            .map_err(|_| TemporalError::UnknownTimezone(s.to_string()))
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.name())
    }
}

impl Timezone {
    pub fn new(tz: Tz) -> Self {
        Self(tz)
    }

    /// Returns the calendar date of `utc` in this timezone
    pub fn local_date(&self, utc: DateTime<Utc>) -> NaiveDate {
        utc.with_timezone(&self.0).date_naive()
    }

    /// Gets the last instant (23:59:59.999999999) of `date` in this timezone as UTC
    ///
    /// An ambiguous local time resolves to the earlier instant. A local time
    /// skipped by a transition falls back to reading the wall clock as UTC.
    pub fn end_of_day(&self, date: NaiveDate) -> DateTime<Utc> {
        let naive = date.and_time(NaiveTime::MIN) + Duration::days(1) - Duration::nanoseconds(1);
        self.0
            .from_local_datetime(&naive)
            .earliest()
            .map(|local| local.with_timezone(&Utc))
            .unwrap_or_else(|| Utc.from_utc_datetime(&naive))
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self(chrono_tz::UTC)
    }
}

/// Source of the current instant for quote calculations
pub trait ReferenceClock: Send + Sync {
    /// Current instant
    fn now(&self) -> DateTime<Utc>;

    /// Timezone used to derive calendar dates from [`ReferenceClock::now`]
    fn timezone(&self) -> Timezone;

    /// Today's date in the quoting timezone
    fn today(&self) -> NaiveDate {
        self.timezone().local_date(self.now())
    }

    /// Current calendar year in the quoting timezone
    fn current_year(&self) -> i32 {
        self.today().year()
    }
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    timezone: Timezone,
}

impl SystemClock {
    pub fn new(timezone: Timezone) -> Self {
        Self { timezone }
    }
}

impl ReferenceClock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn timezone(&self) -> Timezone {
        self.timezone
    }
}

/// A clock frozen at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Utc>,
    timezone: Timezone,
}

impl FixedClock {
    /// Freezes the clock at `instant`, reading dates in UTC
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self {
            instant,
            timezone: Timezone::default(),
        }
    }

    /// Freezes the clock at noon UTC on `date`
    pub fn on(date: NaiveDate) -> Self {
        let noon = date.and_time(NaiveTime::MIN) + Duration::hours(12);
        Self::at(Utc.from_utc_datetime(&noon))
    }

    /// Reads calendar dates in `timezone` instead of UTC
    pub fn with_timezone(mut self, timezone: Timezone) -> Self {
        self.timezone = timezone;
        self
    }
}

impl ReferenceClock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }

    fn timezone(&self) -> Timezone {
        self.timezone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_today() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let clock = FixedClock::on(date);

        assert_eq!(clock.today(), date);
        assert_eq!(clock.current_year(), 2025);
    }

    #[test]
    fn test_timezone_shifts_local_date() {
        // 03:00 UTC on Jan 1st is still New Year's Eve in Los Angeles
        let instant = Utc.with_ymd_and_hms(2025, 1, 1, 3, 0, 0).unwrap();
        let clock = FixedClock::at(instant)
            .with_timezone("America/Los_Angeles".parse().unwrap());

        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
        assert_eq!(clock.current_year(), 2024);
    }

    #[test]
    fn test_end_of_day_utc() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 15).unwrap();
        let eod = Timezone::default().end_of_day(date);

        assert_eq!(eod.date_naive(), date);
        assert_eq!(eod.time(), NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999).unwrap());
    }

    #[test]
    fn test_end_of_day_in_offset_timezone() {
        let tz: Timezone = "America/New_York".parse().unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 7, 15).unwrap();

        // EDT is UTC-4, so the local end of day lands early next morning UTC
        let eod = tz.end_of_day(date);
        assert_eq!(eod.date_naive(), NaiveDate::from_ymd_opt(2025, 7, 16).unwrap());
        assert_eq!(tz.local_date(eod), date);
    }

    #[test]
    fn test_unknown_timezone() {
        let err = "Mars/Olympus_Mons".parse::<Timezone>().unwrap_err();
        assert_eq!(err, TemporalError::UnknownTimezone("Mars/Olympus_Mons".to_string()));
    }

    #[test]
    fn test_timezone_serde() {
        let tz: Timezone = "Europe/London".parse().unwrap();
        let json = serde_json::to_string(&tz).unwrap();
        assert_eq!(json, "\"Europe/London\"");
        let back: Timezone = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tz);
    }
}
