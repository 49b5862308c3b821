//! Pre-built Test Fixtures
//!
//! Pinned clocks, deterministic random sources and the reference profiles
//! whose prices are known by hand. Every fixture quotes on
//! [`QUOTING_YEAR`] unless stated otherwise.

use std::sync::Arc;

use chrono::NaiveDate;
use core_kernel::{FixedClock, FixedRandom, Timezone};
use domain_quote::{
    CarOwnership, CoverageLevel, DrivingFrequency, HomeOwnership, MaritalStatus, QuoteEngine,
    QuoteRequest, VehicleCategory, VehicleValue,
};

/// Calendar year fixtures quote in
pub const QUOTING_YEAR: i32 = 2025;

/// Suffix every fixture random source yields
pub const FIXED_SUFFIX: u16 = 4821;

/// Fixture for clocks and engines
pub struct ClockFixtures;

impl ClockFixtures {
    /// Quoting date (June 15th of the quoting year)
    pub fn quoting_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(QUOTING_YEAR, 6, 15).unwrap()
    }

    /// Clock pinned to noon UTC on the quoting date
    pub fn fixed_clock() -> FixedClock {
        FixedClock::on(Self::quoting_date())
    }

    /// Clock pinned to the quoting date, reading dates in `timezone`
    pub fn fixed_clock_in(timezone: &str) -> FixedClock {
        let tz: Timezone = timezone.parse().unwrap();
        Self::fixed_clock().with_timezone(tz)
    }

    /// Engine on the fixed clock with a fixed quote suffix
    pub fn engine() -> QuoteEngine {
        QuoteEngine::new(Arc::new(Self::fixed_clock()), Arc::new(FixedRandom(FIXED_SUFFIX)))
    }
}

/// Fixture for reference customer profiles
pub struct ProfileFixtures;

impl ProfileFixtures {
    /// Brand-new mid-value Standard car on Basic coverage, married renter aged 40 in 90210
    ///
    /// Prices at base 500.00, subtotal 666.36, discounts 150.00, final 516.36.
    pub fn worked_example() -> QuoteRequest {
        QuoteRequest {
            vehicle_category: VehicleCategory::Standard,
            vehicle_year: i64::from(QUOTING_YEAR),
            coverage_level: CoverageLevel::Basic,
            marital_status: MaritalStatus::Married,
            age: 40,
            home_ownership: HomeOwnership::Rent,
            car_ownership: CarOwnership::Finance,
            vehicle_value: VehicleValue::From5kTo40k,
            driving_frequency: DrivingFrequency::Average,
            zip_code: "90210".to_string(),
        }
    }

    /// Qualifies for all six discounts (355.00 total)
    ///
    /// Premium coverage on a year-old high-value Luxury car owned outright by
    /// a married homeowner aged 40 in 10001. Final premium 4398.77.
    pub fn every_discount() -> QuoteRequest {
        QuoteRequest {
            vehicle_category: VehicleCategory::Luxury,
            vehicle_year: i64::from(QUOTING_YEAR) - 1,
            coverage_level: CoverageLevel::Premium,
            marital_status: MaritalStatus::Married,
            age: 40,
            home_ownership: HomeOwnership::Own,
            car_ownership: CarOwnership::Own,
            vehicle_value: VehicleValue::Over40k,
            driving_frequency: DrivingFrequency::ALot,
            zip_code: "10001".to_string(),
        }
    }

    /// Eighteen year old single renter leasing a 20 year old cheap car, no discounts
    ///
    /// Final premium 526.37.
    pub fn young_driver() -> QuoteRequest {
        QuoteRequest {
            vehicle_category: VehicleCategory::Economy,
            vehicle_year: i64::from(QUOTING_YEAR) - 20,
            coverage_level: CoverageLevel::Basic,
            marital_status: MaritalStatus::Single,
            age: 18,
            home_ownership: HomeOwnership::Rent,
            car_ownership: CarOwnership::Lease,
            vehicle_value: VehicleValue::Under5k,
            driving_frequency: DrivingFrequency::VeryLittle,
            zip_code: "02134".to_string(),
        }
    }

    /// Discounts exceed the subtotal, so the minimum premium applies
    ///
    /// Subtotal 243.09, discounts 195.00, final 50.00.
    pub fn floored() -> QuoteRequest {
        QuoteRequest {
            vehicle_category: VehicleCategory::Economy,
            vehicle_year: i64::from(QUOTING_YEAR) - 20,
            coverage_level: CoverageLevel::Basic,
            marital_status: MaritalStatus::Married,
            age: 40,
            home_ownership: HomeOwnership::Own,
            car_ownership: CarOwnership::Own,
            vehicle_value: VehicleValue::Under5k,
            driving_frequency: DrivingFrequency::VeryLittle,
            zip_code: "90210".to_string(),
        }
    }
}

/// ZIP codes with their known location buckets
pub const LOCATION_REFERENCE: [(&str, u8); 9] = [
    ("90210", 62),
    ("10001", 77),
    ("60601", 37),
    ("00000", 32),
    ("99999", 84),
    ("02134", 27),
    ("73301", 92),
    ("12345", 15),
    ("94105", 49),
];
