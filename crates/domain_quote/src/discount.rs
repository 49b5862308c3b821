//! Discount rules
//!
//! A fixed set of flat-dollar discounts, each evaluated independently against
//! the customer profile. Discounts stack without a cap; the minimum premium
//! floor is applied later by the quote assembler.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::Money;

use crate::profile::{CarOwnership, CoverageLevel, HomeOwnership, MaritalStatus, QuoteRequest};

/// Driver ages eligible for the experienced driver discount
const EXPERIENCED_AGES: std::ops::RangeInclusive<i64> = 30..=65;
/// Oldest vehicle, in years, that still counts as new
const NEW_VEHICLE_MAX_AGE: i64 = 3;

/// The discounts a quote can carry, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiscountKind {
    Homeowner,
    MarriedDriver,
    ExperiencedDriver,
    MultiPolicy,
    NewVehicle,
    VehicleOwner,
}

impl DiscountKind {
    pub const ALL: [DiscountKind; 6] = [
        DiscountKind::Homeowner,
        DiscountKind::MarriedDriver,
        DiscountKind::ExperiencedDriver,
        DiscountKind::MultiPolicy,
        DiscountKind::NewVehicle,
        DiscountKind::VehicleOwner,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DiscountKind::Homeowner => "Homeowner Discount",
            DiscountKind::MarriedDriver => "Married Driver Discount",
            DiscountKind::ExperiencedDriver => "Experienced Driver Discount",
            DiscountKind::MultiPolicy => "Multi-Policy Discount",
            DiscountKind::NewVehicle => "New Vehicle Discount",
            DiscountKind::VehicleOwner => "Vehicle Owner Discount",
        }
    }

    /// Flat dollar amount taken off the subtotal
    pub fn amount(&self) -> Decimal {
        match self {
            DiscountKind::Homeowner => dec!(75.00),
            DiscountKind::MarriedDriver => dec!(50.00),
            DiscountKind::ExperiencedDriver => dec!(40.00),
            DiscountKind::MultiPolicy => dec!(100.00),
            DiscountKind::NewVehicle => dec!(60.00),
            DiscountKind::VehicleOwner => dec!(30.00),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DiscountKind::Homeowner => "Discount for customers who own their home",
            DiscountKind::MarriedDriver => "Discount for married drivers",
            DiscountKind::ExperiencedDriver => "Discount for drivers aged 30-65",
            DiscountKind::MultiPolicy => "Discount for bundling auto with homeowners insurance",
            DiscountKind::NewVehicle => "Discount for newer vehicles with modern safety features",
            DiscountKind::VehicleOwner => "Discount for customers who own their vehicles",
        }
    }

    /// Whether the profile qualifies
    pub fn applies_to(&self, request: &QuoteRequest, current_year: i32) -> bool {
        match self {
            DiscountKind::Homeowner => request.home_ownership == HomeOwnership::Own,
            DiscountKind::MarriedDriver => request.marital_status == MaritalStatus::Married,
            DiscountKind::ExperiencedDriver => EXPERIENCED_AGES.contains(&request.age),
            DiscountKind::MultiPolicy => {
                request.home_ownership == HomeOwnership::Own
                    && request.coverage_level == CoverageLevel::Premium
            }
            DiscountKind::NewVehicle => request.vehicle_age(current_year) <= NEW_VEHICLE_MAX_AGE,
            DiscountKind::VehicleOwner => request.car_ownership == CarOwnership::Own,
        }
    }
}

/// A discount applied to a quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountLineItem {
    pub name: String,
    pub amount: Money,
    pub description: String,
}

impl From<DiscountKind> for DiscountLineItem {
    fn from(kind: DiscountKind) -> Self {
        Self {
            name: kind.name().to_string(),
            amount: Money::usd(kind.amount()).round_to_currency(),
            description: kind.description().to_string(),
        }
    }
}

/// Every discount the profile qualifies for, in evaluation order
pub fn compute_discounts(request: &QuoteRequest, current_year: i32) -> Vec<DiscountLineItem> {
    DiscountKind::ALL
        .iter()
        .filter(|kind| kind.applies_to(request, current_year))
        .map(|kind| DiscountLineItem::from(*kind))
        .collect()
}

/// Sum of discount amounts
pub fn total_discounts(discounts: &[DiscountLineItem]) -> Money {
    discounts.iter().map(|item| &item.amount).sum()
}
