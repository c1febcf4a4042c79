use rust_decimal::Decimal;

use crate::core::money;
use crate::modules::commissions::models::{CommissionBreakdown, CommissionPolicy};
use crate::modules::sales::{SaleRecord, SaleType};

/// Commission calculation engine.
///
/// A pure function of a sale record to a commission amount: no I/O, no
/// mutation, no time dependence. Five rule components are computed
/// independently and summed, the total is halved for shared sales, and
/// the result is rounded to cents exactly once at the end. The engine
/// never fails; degenerate inputs resolve to a zero contribution from the
/// affected component.
///
/// Commission is recomputed from stored sale fields wherever it is
/// displayed, so the same engine serves the entry-form preview and
/// historical reporting.
pub struct CommissionEngine {
    policy: CommissionPolicy,
}

impl CommissionEngine {
    pub fn new(policy: CommissionPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &CommissionPolicy {
        &self.policy
    }

    /// Compute one salesperson's commission for a sale
    pub fn compute(&self, sale: &SaleRecord) -> Decimal {
        self.breakdown(sale).total
    }

    /// Compute the commission along with its per-component amounts
    pub fn breakdown(&self, sale: &SaleRecord) -> CommissionBreakdown {
        let price_tier_bonus = self.price_tier_bonus(sale.sale_price);
        let accessory_bonus = self.accessory_bonus(sale);
        let warranty_bonus = self.warranty_bonus(sale.warranty_price, sale.warranty_cost);
        let maintenance_bonus = self.maintenance_bonus(sale.maintenance_price);
        let pass_through = sale.trade_in + sale.bonus;

        let mut total =
            price_tier_bonus + accessory_bonus + warranty_bonus + maintenance_bonus + pass_through;

        // Equal split with the counterpart salesperson; apportioning the
        // other half is the caller's bookkeeping, not the engine's.
        if sale.shared {
            total /= Decimal::TWO;
        }

        CommissionBreakdown {
            price_tier_bonus,
            accessory_bonus,
            warranty_bonus,
            maintenance_bonus,
            pass_through,
            shared: sale.shared,
            total: money::round(total),
        }
    }

    /// Tiered bonus on the vehicle price.
    ///
    /// Applies only when a sale price is actually present and positive; a
    /// zero price contributes nothing rather than earning the lowest tier.
    fn price_tier_bonus(&self, sale_price: Decimal) -> Decimal {
        if sale_price <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        for tier in &self.policy.price_tiers {
            if sale_price < tier.upper_bound {
                return tier.bonus;
            }
        }

        self.policy.top_tier_bonus
    }

    /// Accessory bonus.
    ///
    /// New and used sales are distinct incentives and stay separate
    /// branches: new cars pay on baseline-adjusted extra revenue once it
    /// reaches the threshold, used cars pay on the raw accessory price.
    /// A sale with no recognized type contributes nothing here.
    fn accessory_bonus(&self, sale: &SaleRecord) -> Decimal {
        let Some(sale_type) = sale.sale_type else {
            return Decimal::ZERO;
        };

        match sale_type {
            SaleType::New => {
                let baseline = self.policy.accessory_baseline(sale_type);
                let extra = (sale.accessory_price - baseline).max(Decimal::ZERO);
                if extra >= self.policy.new_accessory_threshold {
                    (extra / self.policy.new_accessory_divisor).floor()
                        * self.policy.accessory_bonus_step
                } else {
                    Decimal::ZERO
                }
            }
            SaleType::Used => {
                (sale.accessory_price / self.policy.used_accessory_divisor).floor()
                    * self.policy.accessory_bonus_step
            }
        }
    }

    /// Warranty bonus, paid on strictly positive warranty profit only.
    /// Zero or negative profit contributes zero, never a deduction.
    fn warranty_bonus(&self, warranty_price: Decimal, warranty_cost: Decimal) -> Decimal {
        let profit = warranty_price - warranty_cost;
        if profit > Decimal::ZERO {
            (profit / self.policy.warranty_profit_divisor).floor()
                * self.policy.warranty_bonus_step
        } else {
            Decimal::ZERO
        }
    }

    /// Flat maintenance bonus above the threshold (strict comparison),
    /// not scaled by amount
    fn maintenance_bonus(&self, maintenance_price: Decimal) -> Decimal {
        if maintenance_price > self.policy.maintenance_threshold {
            self.policy.maintenance_bonus
        } else {
            Decimal::ZERO
        }
    }
}

impl Default for CommissionEngine {
    fn default() -> Self {
        Self::new(CommissionPolicy::default())
    }
}
