use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use uuid::Uuid;

use crate::domain::models::{ReceiptField, ReceiptLine, RenderedReceipt, ValidTransaction};

const NOT_AVAILABLE: &str = "N/A";
const CLOSING_NOTE: &str = "Thank you for your purchase!";

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time at render.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct RendererConfig {
    pub station_name: String,
    pub currency_prefix: String,
    pub utc_offset: FixedOffset,
}

#[derive(Clone)]
pub struct ReceiptRenderer {
    config: RendererConfig,
    clock: Arc<dyn Clock>,
}

impl ReceiptRenderer {
    pub fn new(config: RendererConfig, clock: Arc<dyn Clock>) -> Self {
        Self { config, clock }
    }

    pub fn render(&self, transaction: &ValidTransaction) -> RenderedReceipt {
        let now = self.clock.now();
        let local = now.with_timezone(&self.config.utc_offset);
        let transaction_id = transaction
            .transaction_id
            .clone()
            .unwrap_or_else(|| synthesize_transaction_id(now));
        let currency = &self.config.currency_prefix;

        let mut lines = vec![
            line(ReceiptField::Station, self.config.station_name.clone()),
            line(ReceiptField::Date, local.format("%d/%m/%Y").to_string()),
            line(ReceiptField::Time, local.format("%I:%M %P").to_string()),
            line(ReceiptField::FuelType, label(&transaction.fuel_type)),
            line(
                ReceiptField::Litres,
                format!("{} L", fixed_point(transaction.litres)),
            ),
            line(
                ReceiptField::PricePerUnit,
                format!("{currency} {}", fixed_point(transaction.price_per_unit)),
            ),
            line(
                ReceiptField::TotalPaid,
                format!("{currency} {}", fixed_point(transaction.amount_paid)),
            ),
            line(ReceiptField::PaymentMethod, label(&transaction.payment_method)),
            line(ReceiptField::ServiceType, label(&transaction.service_type)),
        ];

        if transaction.should_include_pump() {
            if let Some(pump) = &transaction.pump_number {
                lines.push(line(ReceiptField::Pump, pump.clone()));
            }
        }

        lines.push(line(ReceiptField::TransactionId, transaction_id.clone()));
        lines.push(line(ReceiptField::ClosingNote, CLOSING_NOTE.to_string()));

        RenderedReceipt {
            lines,
            transaction_id,
        }
    }
}

fn line(field: ReceiptField, value: String) -> ReceiptLine {
    ReceiptLine { field, value }
}

fn label(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Two decimal places, half away from zero.
pub fn fixed_point(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}

fn synthesize_transaction_id(now: DateTime<Utc>) -> String {
    let nonce = Uuid::new_v4().simple().to_string();
    format!("TX-{}-{}", now.timestamp_millis(), &nonce[..8])
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn renderer() -> ReceiptRenderer {
        let clock = FixedClock(Utc.with_ymd_and_hms(2026, 10, 19, 6, 5, 0).unwrap());
        ReceiptRenderer::new(
            RendererConfig {
                station_name: "Petronas KL".to_string(),
                currency_prefix: "RM".to_string(),
                utc_offset: FixedOffset::east_opt(8 * 3600).unwrap(),
            },
            Arc::new(clock),
        )
    }

    fn transaction(pump_number: Option<&str>) -> ValidTransaction {
        ValidTransaction {
            recipient: "0189578888".to_string(),
            amount_paid: Decimal::new(125, 1),
            litres: Decimal::from(10),
            price_per_unit: Decimal::new(125, 2),
            fuel_type: Some("RON95".to_string()),
            payment_method: Some("card".to_string()),
            service_type: Some("self".to_string()),
            pump_number: pump_number.map(str::to_string),
            transaction_id: Some("TX-1".to_string()),
        }
    }

    #[test]
    fn renders_fixed_order_lines() {
        let receipt = renderer().render(&transaction(None));

        assert_eq!(
            receipt.fields(),
            vec![
                ReceiptField::Station,
                ReceiptField::Date,
                ReceiptField::Time,
                ReceiptField::FuelType,
                ReceiptField::Litres,
                ReceiptField::PricePerUnit,
                ReceiptField::TotalPaid,
                ReceiptField::PaymentMethod,
                ReceiptField::ServiceType,
                ReceiptField::TransactionId,
                ReceiptField::ClosingNote,
            ]
        );
        assert_eq!(receipt.line(ReceiptField::Litres), Some("10.00 L"));
        assert_eq!(receipt.line(ReceiptField::PricePerUnit), Some("RM 1.25"));
        assert_eq!(receipt.line(ReceiptField::TotalPaid), Some("RM 12.50"));
        assert_eq!(receipt.line(ReceiptField::TransactionId), Some("TX-1"));
    }

    #[test]
    fn formats_date_and_time_in_station_offset() {
        let receipt = renderer().render(&transaction(None));

        assert_eq!(receipt.line(ReceiptField::Date), Some("19/10/2026"));
        assert_eq!(receipt.line(ReceiptField::Time), Some("02:05 pm"));
    }

    #[test]
    fn pump_line_only_for_real_pump_numbers() {
        let renderer = renderer();
        for (pump, expected) in [
            (None, None),
            (Some(""), None),
            (Some("0"), None),
            (Some("5"), Some("5")),
        ] {
            let receipt = renderer.render(&transaction(pump));
            assert_eq!(receipt.line(ReceiptField::Pump), expected, "pump {pump:?}");
        }
    }

    #[test]
    fn pump_line_sits_before_transaction_id() {
        let receipt = renderer().render(&transaction(Some("5")));
        let fields = receipt.fields();
        let pump = fields.iter().position(|f| *f == ReceiptField::Pump).unwrap();
        let id = fields
            .iter()
            .position(|f| *f == ReceiptField::TransactionId)
            .unwrap();
        assert_eq!(pump + 1, id);
    }

    #[test]
    fn quantities_use_two_decimal_places() {
        assert_eq!(fixed_point(Decimal::from(10)), "10.00");
        assert_eq!(fixed_point(Decimal::new(10456, 3)), "10.46");
        assert_eq!(fixed_point(Decimal::new(2675, 3)), "2.68");
        assert_eq!(fixed_point(Decimal::new(1, 1)), "0.10");
    }

    #[test]
    fn synthesizes_missing_transaction_id() {
        let mut tx = transaction(None);
        tx.transaction_id = None;

        let first = renderer().render(&tx);
        let second = renderer().render(&tx);

        assert!(first.transaction_id.starts_with("TX-"));
        assert!(first.transaction_id.len() > "TX-".len());
        assert_eq!(
            first.line(ReceiptField::TransactionId),
            Some(first.transaction_id.as_str())
        );
        assert_ne!(first.transaction_id, second.transaction_id);
    }

    #[test]
    fn missing_labels_render_placeholder() {
        let mut tx = transaction(None);
        tx.fuel_type = None;

        let receipt = renderer().render(&tx);
        assert_eq!(receipt.line(ReceiptField::FuelType), Some("N/A"));
    }
}
