//! Customer profile and the categorical catalogs a quote request draws from
//!
//! Each categorical field is an enum whose wire form is the display label
//! ("Very Little", "$5,000 - $40,000", ...). Labels outside the catalog are
//! kept as `Unrecognized` rather than failing to parse; the validator rejects
//! them before rating, and the rating tables price them neutrally.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A closed list of display labels for one request field
pub trait Catalog: Sized + Send + Sync + 'static {
    /// Field name as it appears in validation messages
    const FIELD: &'static str;

    /// Every recognized entry, in display order
    fn all() -> &'static [Self];

    fn label(&self) -> &str;

    fn is_recognized(&self) -> bool;

    /// Display labels of every recognized entry
    fn labels() -> Vec<&'static str> {
        Self::all().iter().map(|entry| entry.label()).collect()
    }
}

macro_rules! define_catalog {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// Label outside the catalog, kept verbatim
            Unrecognized(String),
        }

        impl $name {
            const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];
        }

        impl Catalog for $name {
            const FIELD: &'static str = $field;

            fn all() -> &'static [Self] {
                Self::ALL
            }

            fn label(&self) -> &str {
                match self {
                    $( $name::$variant => $label, )+
                    $name::Unrecognized(raw) => raw.as_str(),
                }
            }

            fn is_recognized(&self) -> bool {
                !matches!(self, $name::Unrecognized(_))
            }
        }

        impl From<&str> for $name {
            fn from(label: &str) -> Self {
                match label {
                    $( $label => $name::$variant, )+
                    other => $name::Unrecognized(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(label: String) -> Self {
                Self::from(label.as_str())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.label().to_string()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

define_catalog! {
    /// Market segment of the insured vehicle
    VehicleCategory, "vehicle category" {
        Economy => "Economy",
        Standard => "Standard",
        Luxury => "Luxury",
    }
}

define_catalog! {
    /// Coverage tier; decides which coverages are written and how they scale
    CoverageLevel, "coverage level" {
        /// Statutory-style liability only
        Basic => "Basic",
        /// Adds rental, comprehensive and collision
        Standard => "Standard",
        /// Highest limits, lowest deductibles
        Premium => "Premium",
    }
}

define_catalog! {
    MaritalStatus, "marital status" {
        Single => "Single",
        Married => "Married",
        Divorced => "Divorced",
        Widowed => "Widowed",
    }
}

define_catalog! {
    HomeOwnership, "home ownership" {
        Own => "Own",
        Rent => "Rent",
        Other => "Other",
    }
}

define_catalog! {
    CarOwnership, "car ownership" {
        Own => "Own",
        Lease => "Lease",
        Finance => "Finance",
    }
}

define_catalog! {
    /// Estimated market value bracket of the vehicle
    VehicleValue, "vehicle value" {
        Under5k => "Under $5,000",
        From5kTo40k => "$5,000 - $40,000",
        Over40k => "Over $40,000",
    }
}

define_catalog! {
    /// How much the vehicle is on the road
    DrivingFrequency, "driving frequency" {
        VeryLittle => "Very Little",
        Average => "Average",
        ALot => "A Lot",
    }
}

/// Everything a customer supplies to get a quote
///
/// The rating core trusts these values; run
/// [`QuoteValidator`](crate::validation::QuoteValidator) first when they come
/// from outside the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub vehicle_category: VehicleCategory,
    /// Model year of the vehicle
    pub vehicle_year: i64,
    pub coverage_level: CoverageLevel,
    pub marital_status: MaritalStatus,
    /// Age of the primary driver in whole years
    pub age: i64,
    pub home_ownership: HomeOwnership,
    pub car_ownership: CarOwnership,
    pub vehicle_value: VehicleValue,
    pub driving_frequency: DrivingFrequency,
    /// Residential ZIP code of the primary driver
    pub zip_code: String,
}

impl QuoteRequest {
    /// Years since the vehicle's model year; negative for next year's models
    ///
    /// Saturates instead of overflowing on model years far outside any window.
    pub fn vehicle_age(&self, current_year: i32) -> i64 {
        i64::from(current_year).saturating_sub(self.vehicle_year)
    }
}

/// A typical request, useful for trying the service out
///
/// A three year old mid-value Standard car on Standard coverage, driven an
/// average amount by a married 35 year old homeowner in 90210.
pub fn sample_request(current_year: i32) -> QuoteRequest {
    QuoteRequest {
        vehicle_category: VehicleCategory::Standard,
        vehicle_year: i64::from(current_year) - 3,
        coverage_level: CoverageLevel::Standard,
        marital_status: MaritalStatus::Married,
        age: 35,
        home_ownership: HomeOwnership::Own,
        car_ownership: CarOwnership::Finance,
        vehicle_value: VehicleValue::From5kTo40k,
        driving_frequency: DrivingFrequency::Average,
        zip_code: "90210".to_string(),
    }
}
