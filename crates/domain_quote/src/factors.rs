//! Risk factor calculators
//!
//! Five independent multiplicative adjustments applied to the base premium.
//! Each one looks at a single attribute of the request; labels outside a
//! catalog price neutrally at 1.0.

use md5::{Digest, Md5};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::round_half_up;

use crate::profile::{CarOwnership, DrivingFrequency, MaritalStatus, QuoteRequest, VehicleCategory, VehicleValue};

/// Lowest location factor, for a ZIP hashing into bucket 0
pub const LOCATION_FLOOR: Decimal = dec!(0.8);
/// Width of the location factor band across the 100 buckets
pub const LOCATION_SPREAD: Decimal = dec!(0.7);

/// Newest-vehicle factor before depreciation
const VEHICLE_AGE_NEW: Decimal = dec!(1.2);
/// Reduction per year of vehicle age
const VEHICLE_AGE_STEP: Decimal = dec!(0.03);
/// Vehicle age factor never drops below this
const VEHICLE_AGE_FLOOR: Decimal = dec!(0.8);

/// An age range and its multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeBracket {
    pub label: &'static str,
    /// Youngest age in the bracket
    pub min_age: i64,
    pub factor: Decimal,
    pub note: &'static str,
}

/// Driver age brackets, youngest first
pub const AGE_BRACKETS: [AgeBracket; 6] = [
    AgeBracket { label: "Under 20", min_age: 0, factor: dec!(2.0), note: "highest risk" },
    AgeBracket { label: "20-24", min_age: 20, factor: dec!(1.5), note: "high risk" },
    AgeBracket { label: "25-29", min_age: 25, factor: dec!(1.2), note: "moderate risk" },
    AgeBracket { label: "30-59", min_age: 30, factor: dec!(1.0), note: "base rate" },
    AgeBracket { label: "60-69", min_age: 60, factor: dec!(1.1), note: "slightly elevated risk" },
    AgeBracket { label: "70+", min_age: 70, factor: dec!(1.3), note: "higher risk" },
];

/// Driver age factor
///
/// Ages below every bracket rate as the youngest one.
pub fn age_factor(age: i64) -> Decimal {
    AGE_BRACKETS
        .iter()
        .rev()
        .find(|bracket| age >= bracket.min_age)
        .unwrap_or(&AGE_BRACKETS[0])
        .factor
}

/// Bucket in 0..100 a ZIP code hashes into
///
/// The MD5 digest of the ZIP's bytes is read as a big-endian 128-bit integer
/// and reduced mod 100. The same ZIP always lands in the same bucket.
pub fn location_bucket(zip_code: &str) -> u8 {
    let digest = Md5::digest(zip_code.as_bytes());
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest);

    (u128::from_be_bytes(bytes) % 100) as u8
}

/// Location factor in [0.8, 1.5)
pub fn location_factor(zip_code: &str) -> Decimal {
    let bucket = Decimal::from(location_bucket(zip_code));
    LOCATION_FLOOR + bucket / dec!(100) * LOCATION_SPREAD
}

impl MaritalStatus {
    pub fn rating_factor(&self) -> Decimal {
        match self {
            MaritalStatus::Single => dec!(1.1),
            MaritalStatus::Married => dec!(0.9),
            MaritalStatus::Divorced => dec!(1.0),
            MaritalStatus::Widowed => dec!(0.95),
            MaritalStatus::Unrecognized(_) => Decimal::ONE,
        }
    }
}

impl VehicleCategory {
    pub fn rating_factor(&self) -> Decimal {
        match self {
            VehicleCategory::Economy => dec!(0.9),
            VehicleCategory::Standard => dec!(1.0),
            VehicleCategory::Luxury => dec!(1.3),
            VehicleCategory::Unrecognized(_) => Decimal::ONE,
        }
    }
}

impl VehicleValue {
    /// Risk scaling by value; distinct from the coverage multiplier
    pub fn rating_factor(&self) -> Decimal {
        match self {
            VehicleValue::Under5k => dec!(0.8),
            VehicleValue::From5kTo40k => dec!(1.0),
            VehicleValue::Over40k => dec!(1.3),
            VehicleValue::Unrecognized(_) => Decimal::ONE,
        }
    }
}

impl CarOwnership {
    pub fn rating_factor(&self) -> Decimal {
        match self {
            CarOwnership::Own => dec!(0.95),
            CarOwnership::Finance => dec!(1.0),
            CarOwnership::Lease => dec!(1.05),
            CarOwnership::Unrecognized(_) => Decimal::ONE,
        }
    }
}

impl DrivingFrequency {
    pub fn rating_factor(&self) -> Decimal {
        match self {
            DrivingFrequency::VeryLittle => dec!(0.8),
            DrivingFrequency::Average => dec!(1.0),
            DrivingFrequency::ALot => dec!(1.2),
            DrivingFrequency::Unrecognized(_) => Decimal::ONE,
        }
    }
}

/// Depreciation factor for a vehicle `vehicle_age` years old
///
/// Next year's models (negative age) rate slightly above new.
pub fn vehicle_age_factor(vehicle_age: i64) -> Decimal {
    let depreciated = VEHICLE_AGE_NEW - VEHICLE_AGE_STEP * Decimal::from(vehicle_age);
    depreciated.max(VEHICLE_AGE_FLOOR)
}

/// Composite vehicle factor: category, age, value and ownership
pub fn vehicle_factor(request: &QuoteRequest, current_year: i32) -> Decimal {
    request.vehicle_category.rating_factor()
        * vehicle_age_factor(request.vehicle_age(current_year))
        * request.vehicle_value.rating_factor()
        * request.car_ownership.rating_factor()
}

/// The five risk factors of a quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFactors {
    pub age: Decimal,
    pub location: Decimal,
    pub marital: Decimal,
    pub vehicle: Decimal,
    pub driving: Decimal,
}

impl RiskFactors {
    /// Computes every factor for `request`, unrounded
    pub fn assess(request: &QuoteRequest, current_year: i32) -> Self {
        Self {
            age: age_factor(request.age),
            location: location_factor(&request.zip_code),
            marital: request.marital_status.rating_factor(),
            vehicle: vehicle_factor(request, current_year),
            driving: request.driving_frequency.rating_factor(),
        }
    }

    /// Product of all five factors
    pub fn combined(&self) -> Decimal {
        self.age * self.location * self.marital * self.vehicle * self.driving
    }

    /// Each factor rounded to 2 decimal places for presentation
    pub fn rounded(&self) -> Self {
        Self {
            age: round_half_up(self.age, 2),
            location: round_half_up(self.location, 2),
            marital: round_half_up(self.marital, 2),
            vehicle: round_half_up(self.vehicle, 2),
            driving: round_half_up(self.driving, 2),
        }
    }
}
