use rust_decimal::Decimal;
use serde::Serialize;

/// Per-component commission result, as shown by the entry-form preview.
///
/// Component amounts are pre-split; `total` is the one salesperson's
/// share, halved when `shared` and rounded to cents in the single final
/// rounding step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommissionBreakdown {
    pub price_tier_bonus: Decimal,
    pub accessory_bonus: Decimal,
    pub warranty_bonus: Decimal,
    pub maintenance_bonus: Decimal,
    pub pass_through: Decimal,
    pub shared: bool,
    pub total: Decimal,
}
