use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw transaction data as supplied by the kiosk. Every field may be absent;
/// numeric fields are kept as text until validated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionRequest {
    pub recipient: Option<String>,
    pub amount_paid: Option<String>,
    pub litres: Option<String>,
    pub price_per_unit: Option<String>,
    pub fuel_type: Option<String>,
    pub payment_method: Option<String>,
    pub service_type: Option<String>,
    pub pump_number: Option<String>,
    pub transaction_id: Option<String>,
}

/// A transaction that passed validation. Quantities are parsed,
/// non-negative decimals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidTransaction {
    pub recipient: String,
    pub amount_paid: Decimal,
    pub litres: Decimal,
    pub price_per_unit: Decimal,
    pub fuel_type: Option<String>,
    pub payment_method: Option<String>,
    pub service_type: Option<String>,
    pub pump_number: Option<String>,
    pub transaction_id: Option<String>,
}

impl ValidTransaction {
    pub fn should_include_pump(&self) -> bool {
        should_include_pump(self.pump_number.as_deref())
    }
}

/// A pump number is printed only when it is present, non-empty and not the
/// "0" placeholder.
pub fn should_include_pump(pump_number: Option<&str>) -> bool {
    match pump_number.map(str::trim) {
        Some(pump) => !pump.is_empty() && pump != "0",
        None => false,
    }
}
