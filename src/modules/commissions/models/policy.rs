use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};
use crate::modules::sales::SaleType;

/// One price band of the tiered sale-price bonus.
///
/// A sale price belongs to the first tier whose `upper_bound` it is
/// strictly below; prices at or above every bound earn the open-ended
/// `top_tier_bonus` of the policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceTier {
    pub upper_bound: Decimal,
    pub bonus: Decimal,
}

/// Immutable commission policy: every threshold, baseline, and divisor
/// the engine consults.
///
/// The engine holds one of these by value, so tests swap thresholds by
/// constructing a different policy instead of patching globals. `Default`
/// is the canonical dealership policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommissionPolicy {
    /// Ascending price bands with exclusive upper bounds
    pub price_tiers: Vec<PriceTier>,
    /// Bonus for sale prices at or above the last band bound
    pub top_tier_bonus: Decimal,

    /// Accessory revenue assumed bundled into a new-car sale
    pub new_accessory_baseline: Decimal,
    /// Accessory revenue assumed bundled into a used-car sale
    pub used_accessory_baseline: Decimal,
    /// Minimum extra accessory revenue before a new-car bonus applies
    pub new_accessory_threshold: Decimal,
    /// Division step for new-car extra accessory revenue
    pub new_accessory_divisor: Decimal,
    /// Division step for used-car raw accessory revenue
    pub used_accessory_divisor: Decimal,
    /// Bonus paid per full accessory division step
    pub accessory_bonus_step: Decimal,

    /// Division step for warranty profit
    pub warranty_profit_divisor: Decimal,
    /// Bonus paid per full warranty profit step
    pub warranty_bonus_step: Decimal,

    /// Maintenance package price above which the flat bonus applies
    pub maintenance_threshold: Decimal,
    /// Flat maintenance bonus, not scaled by amount
    pub maintenance_bonus: Decimal,
}

impl Default for CommissionPolicy {
    fn default() -> Self {
        Self {
            price_tiers: vec![
                PriceTier {
                    upper_bound: Decimal::from(10_000),
                    bonus: Decimal::from(200),
                },
                PriceTier {
                    upper_bound: Decimal::from(20_000),
                    bonus: Decimal::from(300),
                },
                PriceTier {
                    upper_bound: Decimal::from(30_000),
                    bonus: Decimal::from(400),
                },
            ],
            top_tier_bonus: Decimal::from(500),
            new_accessory_baseline: Decimal::from(998),
            used_accessory_baseline: Decimal::from(498),
            new_accessory_threshold: Decimal::from(900),
            new_accessory_divisor: Decimal::from(900),
            used_accessory_divisor: Decimal::from(800),
            accessory_bonus_step: Decimal::from(100),
            warranty_profit_divisor: Decimal::from(1_000),
            warranty_bonus_step: Decimal::from(100),
            maintenance_threshold: Decimal::from(800),
            maintenance_bonus: Decimal::from(100),
        }
    }
}

impl CommissionPolicy {
    /// Accessory revenue assumed bundled into the sale for the given type
    pub fn accessory_baseline(&self, sale_type: SaleType) -> Decimal {
        match sale_type {
            SaleType::New => self.new_accessory_baseline,
            SaleType::Used => self.used_accessory_baseline,
        }
    }

    /// Validate the policy table
    pub fn validate(&self) -> Result<()> {
        if self.price_tiers.is_empty() {
            return Err(AppError::Configuration(
                "Commission policy must define at least one price tier".to_string(),
            ));
        }

        let mut previous_bound = Decimal::ZERO;
        for tier in &self.price_tiers {
            if tier.upper_bound <= previous_bound {
                return Err(AppError::Configuration(format!(
                    "Price tier bounds must be strictly ascending, got {} after {}",
                    tier.upper_bound, previous_bound
                )));
            }
            if tier.bonus < Decimal::ZERO {
                return Err(AppError::Configuration(
                    "Price tier bonus cannot be negative".to_string(),
                ));
            }
            previous_bound = tier.upper_bound;
        }

        if self.top_tier_bonus < Decimal::ZERO {
            return Err(AppError::Configuration(
                "Top tier bonus cannot be negative".to_string(),
            ));
        }

        for (name, divisor) in [
            ("new accessory divisor", self.new_accessory_divisor),
            ("used accessory divisor", self.used_accessory_divisor),
            ("warranty profit divisor", self.warranty_profit_divisor),
        ] {
            if divisor <= Decimal::ZERO {
                return Err(AppError::Configuration(format!(
                    "Commission policy {} must be positive, got {}",
                    name, divisor
                )));
            }
        }

        for (name, amount) in [
            ("new accessory baseline", self.new_accessory_baseline),
            ("used accessory baseline", self.used_accessory_baseline),
            ("new accessory threshold", self.new_accessory_threshold),
            ("accessory bonus step", self.accessory_bonus_step),
            ("warranty bonus step", self.warranty_bonus_step),
            ("maintenance threshold", self.maintenance_threshold),
            ("maintenance bonus", self.maintenance_bonus),
        ] {
            if amount < Decimal::ZERO {
                return Err(AppError::Configuration(format!(
                    "Commission policy {} cannot be negative, got {}",
                    name, amount
                )));
            }
        }

        Ok(())
    }
}
