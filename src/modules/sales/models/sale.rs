// Canonical sale shape and wire-level normalization.
//
// The entry surface sends sale drafts in historically inconsistent shapes:
// numeric fields may be absent, the shared flag arrives as a boolean, a
// string, or a 0/1 number, and the shared-counterpart and vehicle-type
// fields go by more than one name. Everything is normalized here, once,
// into a single `SaleRecord`; the commission engine never branches on
// wire-shape variants.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::core::{money, AppError, Result};

/// Vehicle sale type, determines which accessory bonus policy applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaleType {
    New,
    Used,
}

impl fmt::Display for SaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaleType::New => write!(f, "New"),
            SaleType::Used => write!(f, "Used"),
        }
    }
}

impl std::str::FromStr for SaleType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "new" => Ok(SaleType::New),
            "used" => Ok(SaleType::Used),
            _ => Err(format!("Invalid sale type: {}", s)),
        }
    }
}

/// Canonical sale record, the commission engine's only input shape.
///
/// All monetary fields are already defaulted to zero where the wire value
/// was absent. `sale_type` is `None` when the draft carried no type or an
/// unrecognized one; the engine then skips the accessory component and
/// computes everything else normally.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SaleRecord {
    pub sale_price: Decimal,
    pub sale_type: Option<SaleType>,
    pub accessory_price: Decimal,
    pub warranty_price: Decimal,
    pub warranty_cost: Decimal,
    pub maintenance_price: Decimal,
    pub trade_in: Decimal,
    pub bonus: Decimal,
    pub shared: bool,
}

/// Loose sale draft as submitted by the record-entry surface.
///
/// Field names follow the external sale-storage schema. Metadata fields
/// (`date`, `stock_number`, the shared counterpart, `maintenance_cost`)
/// are accepted so a full stored sale round-trips through the endpoint,
/// but they are not commission inputs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaleDraft {
    pub sale_price: Option<Decimal>,

    #[serde(rename = "type", alias = "sale_type")]
    pub sale_type: Option<String>,

    pub accessory_price: Option<Decimal>,
    pub warranty_price: Option<Decimal>,
    pub warranty_cost: Option<Decimal>,
    pub maintenance_price: Option<Decimal>,
    pub maintenance_cost: Option<Decimal>,
    pub trade_in: Option<Decimal>,
    pub bonus: Option<Decimal>,

    #[serde(default, deserialize_with = "deserialize_flag")]
    pub shared: Option<bool>,

    #[serde(alias = "shared_with_salesperson_id")]
    pub shared_with_email: Option<String>,

    pub date: Option<NaiveDate>,
    pub stock_number: Option<String>,
}

impl SaleDraft {
    /// Normalize the draft into the canonical record.
    ///
    /// Missing numeric fields default to zero. The non-negative fields of
    /// the sale (vehicle, accessory, warranty, maintenance prices and
    /// warranty cost) are validated here; `trade_in` and `bonus` pass
    /// through sign-unconstrained because the engine adds them verbatim.
    pub fn normalize(self) -> Result<SaleRecord> {
        let sale_type = match self.sale_type.as_deref() {
            None => None,
            Some(raw) => match raw.parse::<SaleType>() {
                Ok(sale_type) => Some(sale_type),
                Err(_) => {
                    tracing::warn!(
                        sale_type = %raw,
                        "Unrecognized sale type, accessory bonus will not apply"
                    );
                    None
                }
            },
        };

        let record = SaleRecord {
            sale_price: self.sale_price.unwrap_or(Decimal::ZERO),
            sale_type,
            accessory_price: self.accessory_price.unwrap_or(Decimal::ZERO),
            warranty_price: self.warranty_price.unwrap_or(Decimal::ZERO),
            warranty_cost: self.warranty_cost.unwrap_or(Decimal::ZERO),
            maintenance_price: self.maintenance_price.unwrap_or(Decimal::ZERO),
            trade_in: self.trade_in.unwrap_or(Decimal::ZERO),
            bonus: self.bonus.unwrap_or(Decimal::ZERO),
            shared: self.shared.unwrap_or(false),
        };

        Self::validate_non_negative("sale_price", record.sale_price)?;
        Self::validate_non_negative("accessory_price", record.accessory_price)?;
        Self::validate_non_negative("warranty_price", record.warranty_price)?;
        Self::validate_non_negative("warranty_cost", record.warranty_cost)?;
        Self::validate_non_negative("maintenance_price", record.maintenance_price)?;

        Ok(record)
    }

    fn validate_non_negative(field: &str, amount: Decimal) -> Result<()> {
        money::validate_amount(field, amount).map_err(AppError::Validation)
    }
}

/// Accepts the flag encodings observed on the wire: JSON booleans,
/// "true"/"false"/"yes"/"no"/"1"/"0" strings, and 0/1 numbers.
fn deserialize_flag<'de, D>(deserializer: D) -> std::result::Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Number(i64),
        Text(String),
    }

    match Option::<Flag>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Flag::Bool(value)) => Ok(Some(value)),
        Some(Flag::Number(value)) => Ok(Some(value != 0)),
        Some(Flag::Text(value)) => match value.trim().to_lowercase().as_str() {
            "true" | "yes" | "1" => Ok(Some(true)),
            "false" | "no" | "0" | "" => Ok(Some(false)),
            other => Err(serde::de::Error::custom(format!(
                "Invalid boolean flag: {}",
                other
            ))),
        },
    }
}
