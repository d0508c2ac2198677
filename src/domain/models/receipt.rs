
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReceiptField {
    Station,
    Date,
    Time,
    FuelType,
    Litres,
    PricePerUnit,
    TotalPaid,
    PaymentMethod,
    ServiceType,
    Pump,
    TransactionId,
    ClosingNote,
}

impl ReceiptField {
    pub fn label(&self) -> &'static str {
        match self {
            ReceiptField::Station => "Pump Station",
            ReceiptField::Date => "Date",
            ReceiptField::Time => "Time",
            ReceiptField::FuelType => "Fuel Type",
            ReceiptField::Litres => "Litres",
            ReceiptField::PricePerUnit => "Price/Litre",
            ReceiptField::TotalPaid => "Total Paid",
            ReceiptField::PaymentMethod => "Payment Method",
            ReceiptField::ServiceType => "Service Type",
            ReceiptField::Pump => "Pump",
            ReceiptField::TransactionId => "Transaction ID",
            ReceiptField::ClosingNote => "Note",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptLine {
    pub field: ReceiptField,
    pub value: String,
}

/// Fixed-order receipt lines. Built only by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReceipt {
    pub lines: Vec<ReceiptLine>,
    pub transaction_id: String,
}

impl RenderedReceipt {
    pub fn line(&self, field: ReceiptField) -> Option<&str> {
        self.lines
            .iter()
            .find(|line| line.field == field)
            .map(|line| line.value.as_str())
    }

    pub fn fields(&self) -> Vec<ReceiptField> {
        self.lines.iter().map(|line| line.field).collect()
    }

    /// Message text in WhatsApp markdown.
    pub fn body(&self) -> String {
        let mut body = String::from("⛽ *Fuel Receipt*\n---\n");
        let mut closing = None;

        for line in &self.lines {
            match line.field {
                ReceiptField::ClosingNote => closing = Some(line.value.as_str()),
                ReceiptField::TotalPaid => {
                    body.push_str(&format!("*{}*: *{}*\n", line.field.label(), line.value));
                }
                _ => body.push_str(&format!("*{}*: {}\n", line.field.label(), line.value)),
            }
        }

        body.push_str("---");
        if let Some(note) = closing {
            body.push_str(&format!("\n_{note}_"));
        }
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_keeps_line_order_and_closes_with_note() {
        let receipt = RenderedReceipt {
            lines: vec![
                ReceiptLine {
                    field: ReceiptField::Station,
                    value: "Petronas KL".to_string(),
                },
                ReceiptLine {
                    field: ReceiptField::TotalPaid,
                    value: "RM 12.50".to_string(),
                },
                ReceiptLine {
                    field: ReceiptField::ClosingNote,
                    value: "Thank you for your purchase!".to_string(),
                },
            ],
            transaction_id: "TX-1".to_string(),
        };

        assert_eq!(
            receipt.body(),
            "⛽ *Fuel Receipt*\n---\n*Pump Station*: Petronas KL\n*Total Paid*: *RM 12.50*\n---\n_Thank you for your purchase!_"
        );
        assert_eq!(receipt.line(ReceiptField::TotalPaid), Some("RM 12.50"));
        assert_eq!(receipt.line(ReceiptField::Pump), None);
    }
}
