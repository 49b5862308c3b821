//! Coverage catalog
//!
//! Maps a coverage tier and vehicle value bracket to the list of coverages
//! written on the quote, each with its limit and premium.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::Money;

use crate::profile::{CoverageLevel, VehicleValue};

/// Loading applied to optional coverages on the Premium tier
const PREMIUM_TIER_LOADING: Decimal = dec!(1.2);

/// The coverages the catalog can write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoverageKind {
    BodilyInjury,
    PropertyDamage,
    UninsuredMotorist,
    RentalCar,
    Comprehensive,
    Collision,
}

impl CoverageKind {
    /// Every coverage, in the order it appears on a quote
    pub const ALL: [CoverageKind; 6] = [
        CoverageKind::BodilyInjury,
        CoverageKind::PropertyDamage,
        CoverageKind::UninsuredMotorist,
        CoverageKind::RentalCar,
        CoverageKind::Comprehensive,
        CoverageKind::Collision,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CoverageKind::BodilyInjury => "Bodily Injury Liability",
            CoverageKind::PropertyDamage => "Property Damage Liability",
            CoverageKind::UninsuredMotorist => "Uninsured/Underinsured Motorist Bodily Injury",
            CoverageKind::RentalCar => "Rental Car Coverage",
            CoverageKind::Comprehensive => "Comprehensive",
            CoverageKind::Collision => "Collision",
        }
    }

    /// One-line description printed on the line item
    pub fn description(&self) -> &'static str {
        match self {
            CoverageKind::BodilyInjury => {
                "Covers costs due to injuries you cause to others in an accident"
            }
            CoverageKind::PropertyDamage => {
                "Covers costs due to damage you cause to others' property"
            }
            CoverageKind::UninsuredMotorist => {
                "Covers your injuries caused by an uninsured or underinsured driver"
            }
            CoverageKind::RentalCar => "Covers rental car costs while your car is being repaired",
            CoverageKind::Comprehensive => {
                "Covers damage to your car from non-accident causes like theft, vandalism, etc."
            }
            CoverageKind::Collision => "Covers damage to your car from accidents regardless of fault",
        }
    }

    /// Annual premium before tier and value adjustments
    pub fn base_premium(&self) -> Decimal {
        match self {
            CoverageKind::BodilyInjury => dec!(250),
            CoverageKind::PropertyDamage => dec!(150),
            CoverageKind::UninsuredMotorist => dec!(100),
            CoverageKind::RentalCar => dec!(50),
            CoverageKind::Comprehensive => dec!(200),
            CoverageKind::Collision => dec!(300),
        }
    }

    /// Liability coverages written on every tier
    pub fn is_mandatory(&self) -> bool {
        matches!(
            self,
            CoverageKind::BodilyInjury | CoverageKind::PropertyDamage | CoverageKind::UninsuredMotorist
        )
    }

    /// Limit wording on a quote, `None` when the tier does not include it
    pub fn limit(&self, level: &CoverageLevel) -> Option<&'static str> {
        use CoverageLevel::{Premium, Standard};

        match (self, level) {
            (CoverageKind::BodilyInjury | CoverageKind::UninsuredMotorist, Standard) => {
                Some("$50,000/$100,000")
            }
            (CoverageKind::BodilyInjury | CoverageKind::UninsuredMotorist, Premium) => {
                Some("$100,000/$300,000")
            }
            (CoverageKind::BodilyInjury | CoverageKind::UninsuredMotorist, _) => {
                Some("$15,000/$30,000")
            }
            (CoverageKind::PropertyDamage, Standard) => Some("$25,000"),
            (CoverageKind::PropertyDamage, Premium) => Some("$50,000"),
            (CoverageKind::PropertyDamage, _) => Some("$5,000"),
            (CoverageKind::RentalCar, Standard) => Some("$25/day, $750 maximum"),
            (CoverageKind::RentalCar, Premium) => Some("$30/day, $900 maximum"),
            (CoverageKind::Comprehensive | CoverageKind::Collision, Standard) => {
                Some("$500 deductible")
            }
            (CoverageKind::Comprehensive | CoverageKind::Collision, Premium) => {
                Some("$250 deductible")
            }
            _ => None,
        }
    }

    /// Premium for this coverage, rounded to cents
    pub fn premium(&self, level: &CoverageLevel, value: &VehicleValue) -> Money {
        let tier_loading = match level {
            CoverageLevel::Premium => PREMIUM_TIER_LOADING,
            _ => Decimal::ONE,
        };
        let multiplier = match self {
            kind if kind.is_mandatory() => level.premium_multiplier(),
            CoverageKind::RentalCar => tier_loading,
            _ => value.coverage_multiplier() * tier_loading,
        };

        Money::usd(self.base_premium() * multiplier).round_to_currency()
    }
}

impl CoverageLevel {
    /// Scaling applied to the liability coverages
    pub fn premium_multiplier(&self) -> Decimal {
        match self {
            CoverageLevel::Basic => dec!(1.0),
            CoverageLevel::Standard => dec!(1.3),
            CoverageLevel::Premium => dec!(1.7),
            CoverageLevel::Unrecognized(_) => Decimal::ONE,
        }
    }
}

impl VehicleValue {
    /// Scaling applied to physical damage coverages
    pub fn coverage_multiplier(&self) -> Decimal {
        match self {
            VehicleValue::Under5k => dec!(0.8),
            VehicleValue::From5kTo40k => dec!(1.0),
            VehicleValue::Over40k => dec!(1.4),
            VehicleValue::Unrecognized(_) => Decimal::ONE,
        }
    }
}

/// One coverage written on a quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageLineItem {
    pub name: String,
    /// Limit or deductible wording
    #[serde(rename = "amount")]
    pub limit: String,
    pub premium: Money,
    pub description: String,
}

impl CoverageLineItem {
    fn new(kind: CoverageKind, limit: &str, premium: Money) -> Self {
        Self {
            name: kind.name().to_string(),
            limit: limit.to_string(),
            premium,
            description: kind.description().to_string(),
        }
    }
}

/// Builds the coverages written for a tier and vehicle value
///
/// Basic yields the three liability coverages; Standard and Premium add
/// rental, comprehensive and collision. An unrecognized tier is written as
/// Basic with neutral pricing.
pub fn build_coverages(level: &CoverageLevel, value: &VehicleValue) -> Vec<CoverageLineItem> {
    CoverageKind::ALL
        .iter()
        .filter_map(|kind| {
            kind.limit(level)
                .map(|limit| CoverageLineItem::new(*kind, limit, kind.premium(level, value)))
        })
        .collect()
}

/// Sum of line item premiums
pub fn base_premium(coverages: &[CoverageLineItem]) -> Money {
    coverages.iter().map(|item| &item.premium).sum()
}
