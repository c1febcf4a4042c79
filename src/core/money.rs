use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal scale for all monetary amounts (USD, cents precision)
pub const MONEY_SCALE: u32 = 2;

/// Rounds a monetary amount to cents using half-up rounding.
///
/// This is the single rounding step in the system: intermediate
/// calculations stay at full precision and only final amounts pass
/// through here.
pub fn round(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Validates that a monetary amount is non-negative and carries at most
/// cents precision. Used at the input boundary; the calculation engine
/// itself never validates.
pub fn validate_amount(field: &str, amount: Decimal) -> Result<(), String> {
    if amount < Decimal::ZERO {
        return Err(format!("{} cannot be negative, got {}", field, amount));
    }

    if amount.scale() > MONEY_SCALE {
        return Err(format!(
            "{} must have at most {} decimal places, got {}",
            field,
            MONEY_SCALE,
            amount.scale()
        ));
    }

    Ok(())
}

/// Formats an amount for display with cents precision
pub fn format_amount(amount: Decimal) -> String {
    format!("${:.2}", amount)
}
