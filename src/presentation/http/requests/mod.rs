use poem_openapi::Object;
use serde_json::Value;

/// Completed fuel purchase as posted by the kiosk. Quantities may be JSON
/// numbers or numeric strings.
#[derive(Object, Debug, Default)]
#[oai(rename_all = "camelCase")]
pub struct TransactionRequestDto {
    pub recipient: Option<String>,
    pub amount_paid: Option<Value>,
    pub litres: Option<Value>,
    pub price_per_unit: Option<Value>,
    pub fuel_type: Option<String>,
    pub payment_method: Option<String>,
    pub service_type: Option<String>,
    pub pump_number: Option<Value>,
    pub transaction_id: Option<String>,
}
