//! Customer-facing explanations of coverages, pricing factors and discounts
//!
//! Multipliers and amounts are read from the rating tables themselves, so
//! the explanations cannot drift from what a quote actually charges.

use rust_decimal::Decimal;
use serde::Serialize;

use core_kernel::Money;

use crate::coverage::CoverageKind;
use crate::discount::DiscountKind;
use crate::error::QuoteError;
use crate::factors::AGE_BRACKETS;
use crate::profile::{Catalog, CarOwnership, CoverageLevel, DrivingFrequency, MaritalStatus, VehicleCategory, VehicleValue};

const NOT_INCLUDED: &str = "Not included";

/// Summary of one coverage tier
#[derive(Debug, Clone, Serialize)]
pub struct TierSummary {
    pub level: CoverageLevel,
    pub summary: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct TierLimit {
    pub level: CoverageLevel,
    pub limit: &'static str,
}

/// A coverage with its limits on every tier
#[derive(Debug, Clone, Serialize)]
pub struct CoverageDetail {
    pub name: &'static str,
    pub description: &'static str,
    pub limits: Vec<TierLimit>,
}

/// A coverage with its limit on one tier
#[derive(Debug, Clone, Serialize)]
pub struct LevelCoverage {
    pub name: &'static str,
    pub description: &'static str,
    pub limit: &'static str,
}

/// Coverage explanation, either across all tiers or for a single tier
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum CoverageExplanation {
    AllLevels {
        coverage_levels: Vec<TierSummary>,
        coverages: Vec<CoverageDetail>,
    },
    Level {
        coverage_level: CoverageLevel,
        coverages: Vec<LevelCoverage>,
    },
}

fn tier_summary(level: &CoverageLevel) -> &'static str {
    match level {
        CoverageLevel::Basic => {
            "Minimal coverage that meets state requirements. Higher out-of-pocket costs if you have an accident."
        }
        CoverageLevel::Standard => {
            "Balanced coverage with moderate out-of-pocket costs. Includes comprehensive and collision."
        }
        CoverageLevel::Premium => {
            "Maximum protection with lowest out-of-pocket costs. Includes all available coverages with higher limits."
        }
        CoverageLevel::Unrecognized(_) => "",
    }
}

fn long_description(kind: CoverageKind) -> &'static str {
    match kind {
        CoverageKind::BodilyInjury => {
            "Covers costs if you injure someone else in a car accident. This helps pay for their medical expenses, lost wages, pain and suffering, and legal fees if they sue you."
        }
        CoverageKind::PropertyDamage => {
            "Covers damage you cause to other people's property, including their vehicles, buildings, fences, etc. Also covers legal defense costs if you're sued."
        }
        CoverageKind::UninsuredMotorist => {
            "Protects you and your passengers if injured by a driver who has insufficient or no insurance. Covers medical bills, lost wages, and pain and suffering."
        }
        CoverageKind::RentalCar => {
            "Pays for a rental car while your vehicle is being repaired after a covered accident."
        }
        CoverageKind::Comprehensive => {
            "Covers damage to your car from non-collision events like theft, vandalism, fire, natural disasters, falling objects, or hitting an animal."
        }
        CoverageKind::Collision => {
            "Covers damage to your car from a collision with another vehicle or object, regardless of who is at fault."
        }
    }
}

/// Limit wording spelled out for customers
fn long_limit(kind: CoverageKind, level: &CoverageLevel) -> &'static str {
    use CoverageKind::*;

    match (kind, level) {
        (BodilyInjury | UninsuredMotorist, CoverageLevel::Basic) => {
            "$15,000 per person/$30,000 per accident"
        }
        (BodilyInjury | UninsuredMotorist, CoverageLevel::Standard) => {
            "$50,000 per person/$100,000 per accident"
        }
        (BodilyInjury | UninsuredMotorist, CoverageLevel::Premium) => {
            "$100,000 per person/$300,000 per accident"
        }
        (PropertyDamage, CoverageLevel::Basic) => "$5,000 per accident",
        (PropertyDamage, CoverageLevel::Standard) => "$25,000 per accident",
        (PropertyDamage, CoverageLevel::Premium) => "$50,000 per accident",
        (RentalCar, CoverageLevel::Standard) => "$25 per day, up to $750 maximum",
        (RentalCar, CoverageLevel::Premium) => "$30 per day, up to $900 maximum",
        (Comprehensive | Collision, CoverageLevel::Standard) => "$500 deductible",
        (Comprehensive | Collision, CoverageLevel::Premium) => "$250 deductible",
        _ => NOT_INCLUDED,
    }
}

/// Explains what each coverage protects and its limits
///
/// Without a level, every tier is described. With a level, only the
/// coverages written on that tier are listed.
///
/// # Errors
///
/// Returns `UnknownCoverageLevel` for a label outside the catalog
pub fn explain_coverages(level: Option<&CoverageLevel>) -> Result<CoverageExplanation, QuoteError> {
    let Some(level) = level else {
        let coverage_levels = CoverageLevel::all()
            .iter()
            .map(|level| TierSummary {
                level: level.clone(),
                summary: tier_summary(level),
            })
            .collect();
        let coverages = CoverageKind::ALL
            .iter()
            .map(|kind| CoverageDetail {
                name: kind.name(),
                description: long_description(*kind),
                limits: CoverageLevel::all()
                    .iter()
                    .map(|level| TierLimit {
                        level: level.clone(),
                        limit: long_limit(*kind, level),
                    })
                    .collect(),
            })
            .collect();

        return Ok(CoverageExplanation::AllLevels {
            coverage_levels,
            coverages,
        });
    };

    if !level.is_recognized() {
        return Err(QuoteError::UnknownCoverageLevel(level.label().to_string()));
    }

    let coverages = CoverageKind::ALL
        .iter()
        .map(|kind| (*kind, long_limit(*kind, level)))
        .filter(|(_, limit)| *limit != NOT_INCLUDED)
        .map(|(kind, limit)| LevelCoverage {
            name: kind.name(),
            description: long_description(kind),
            limit,
        })
        .collect();

    Ok(CoverageExplanation::Level {
        coverage_level: level.clone(),
        coverages,
    })
}

/// A catalog label with its multiplier
#[derive(Debug, Clone, Serialize)]
pub struct FactorEntry {
    pub label: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub multiplier: Decimal,
    /// Multiplier and a short reading of it, e.g. "1.1x (slightly higher risk)"
    pub impact: String,
}

impl FactorEntry {
    fn new(label: &str, multiplier: Decimal, note: &str) -> Self {
        Self {
            label: label.to_string(),
            multiplier,
            impact: format!("{multiplier}x ({note})"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FactorSection {
    pub description: &'static str,
    pub entries: Vec<FactorEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LocationSection {
    pub description: &'static str,
    pub impact: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct VehicleSection {
    pub description: &'static str,
    pub category_impact: Vec<FactorEntry>,
    pub age_impact: &'static str,
    pub value_impact: Vec<FactorEntry>,
    pub ownership_impact: Vec<FactorEntry>,
}

/// Every pricing factor with its multipliers
#[derive(Debug, Clone, Serialize)]
pub struct PricingFactorGuide {
    pub age_factors: FactorSection,
    pub location_factors: LocationSection,
    pub marital_status_factors: FactorSection,
    pub vehicle_factors: VehicleSection,
    pub driving_frequency_factors: FactorSection,
}

fn catalog_entries<T: Catalog>(
    factor: impl Fn(&T) -> Decimal,
    note: impl Fn(&T) -> &'static str,
) -> Vec<FactorEntry> {
    T::all()
        .iter()
        .map(|entry| FactorEntry::new(entry.label(), factor(entry), note(entry)))
        .collect()
}

/// Explains the five risk factors
pub fn explain_pricing_factors() -> PricingFactorGuide {
    let age_entries = AGE_BRACKETS
        .iter()
        .map(|bracket| FactorEntry::new(bracket.label, bracket.factor, bracket.note))
        .collect();

    let marital_entries = catalog_entries(MaritalStatus::rating_factor, |status| match status {
        MaritalStatus::Single => "slightly higher risk",
        MaritalStatus::Married => "lower risk",
        MaritalStatus::Widowed => "slightly lower risk",
        _ => "base rate",
    });

    let category_entries = catalog_entries(VehicleCategory::rating_factor, |category| match category {
        VehicleCategory::Economy => "lower repair/replacement costs",
        VehicleCategory::Luxury => "higher repair/replacement costs",
        _ => "base rate",
    });

    let value_entries = catalog_entries(VehicleValue::rating_factor, |value| match value {
        VehicleValue::Under5k => "lower replacement cost",
        VehicleValue::Over40k => "higher replacement cost",
        _ => "base rate",
    });

    let mut ownership_entries = catalog_entries(CarOwnership::rating_factor, |ownership| match ownership {
        CarOwnership::Own => "slight discount",
        CarOwnership::Lease => "slight increase",
        _ => "base rate",
    });
    ownership_entries.sort_by(|a, b| a.multiplier.cmp(&b.multiplier));

    let driving_entries = catalog_entries(DrivingFrequency::rating_factor, |frequency| match frequency {
        DrivingFrequency::VeryLittle => "lower exposure",
        DrivingFrequency::ALot => "higher exposure",
        _ => "base rate",
    });

    PricingFactorGuide {
        age_factors: FactorSection {
            description: "Driver age significantly impacts insurance rates due to risk correlation.",
            entries: age_entries,
        },
        location_factors: LocationSection {
            description: "ZIP codes affect rates based on local accident rates, theft statistics, population density, and weather patterns.",
            impact: "Can vary premiums by -20% to +50% depending on location risk assessment.",
        },
        marital_status_factors: FactorSection {
            description: "Statistics show married drivers have fewer accidents on average.",
            entries: marital_entries,
        },
        vehicle_factors: VehicleSection {
            description: "Vehicle category, age, value and ownership combine into a single vehicle factor.",
            category_impact: category_entries,
            age_impact: "Newer vehicles cost more to insure, with premium decreasing ~3% per year of age",
            value_impact: value_entries,
            ownership_impact: ownership_entries,
        },
        driving_frequency_factors: FactorSection {
            description: "More time on the road increases exposure to potential accidents.",
            entries: driving_entries,
        },
    }
}

/// What a discount is for and who qualifies
#[derive(Debug, Clone, Serialize)]
pub struct DiscountExplanation {
    pub name: &'static str,
    pub description: &'static str,
    pub eligibility: &'static str,
    /// Dollar amount as printed, e.g. "$75.00"
    pub typical_amount: String,
}

/// Explains every available discount, in evaluation order
pub fn explain_discounts() -> Vec<DiscountExplanation> {
    DiscountKind::ALL
        .iter()
        .map(|kind| {
            let (description, eligibility) = match kind {
                DiscountKind::Homeowner => (
                    "Discount for customers who own their home. Statistics show homeowners file fewer claims.",
                    "Must own your home (not renting or other arrangement).",
                ),
                DiscountKind::MarriedDriver => (
                    "Discount for married drivers, who statistically file fewer claims.",
                    "Must have marital status of 'Married'.",
                ),
                DiscountKind::ExperiencedDriver => (
                    "Discount for drivers in the age range with the best safety records.",
                    "Driver must be between 30-65 years old.",
                ),
                DiscountKind::MultiPolicy => (
                    "Discount for bundling multiple insurance policies with the same company.",
                    "Must own home and have Premium coverage level (indicating interest in comprehensive coverage).",
                ),
                DiscountKind::NewVehicle => (
                    "Discount for newer vehicles with modern safety features.",
                    "Vehicle must be 3 years old or newer.",
                ),
                DiscountKind::VehicleOwner => (
                    "Discount for customers who own their vehicles outright.",
                    "Vehicle ownership status must be 'Own' (not leased or financed).",
                ),
            };

            DiscountExplanation {
                name: kind.name(),
                description,
                eligibility,
                typical_amount: Money::usd(kind.amount()).to_string(),
            }
        })
        .collect()
}
