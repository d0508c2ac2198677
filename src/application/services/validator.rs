use std::str::FromStr;

use rust_decimal::Decimal;

use crate::domain::{
    errors::{REQUIRED_FIELDS, ValidationError},
    models::{TransactionRequest, ValidTransaction},
};

enum Quantity {
    Missing,
    Invalid,
    Value(Decimal),
}

/// Checks mandatory fields first, then parses quantities. Nothing is
/// partially processed: the first failing stage rejects the whole request.
pub fn validate(request: &TransactionRequest) -> Result<ValidTransaction, ValidationError> {
    let recipient = non_blank(request.recipient.as_deref());
    let amount_paid = parse_quantity(request.amount_paid.as_deref());
    let litres = parse_quantity(request.litres.as_deref());
    let price_per_unit = parse_quantity(request.price_per_unit.as_deref());

    let quantities = [
        (REQUIRED_FIELDS[1], &amount_paid),
        (REQUIRED_FIELDS[2], &litres),
        (REQUIRED_FIELDS[3], &price_per_unit),
    ];

    let mut missing = Vec::new();
    if recipient.is_none() {
        missing.push(REQUIRED_FIELDS[0]);
    }
    missing.extend(
        quantities
            .iter()
            .filter(|(_, quantity)| matches!(quantity, Quantity::Missing))
            .map(|(name, _)| *name),
    );
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields { missing });
    }

    let invalid: Vec<&'static str> = quantities
        .iter()
        .filter(|(_, quantity)| matches!(quantity, Quantity::Invalid))
        .map(|(name, _)| *name)
        .collect();
    if !invalid.is_empty() {
        return Err(ValidationError::InvalidNumbers { invalid });
    }

    match (recipient, amount_paid, litres, price_per_unit) {
        (
            Some(recipient),
            Quantity::Value(amount_paid),
            Quantity::Value(litres),
            Quantity::Value(price_per_unit),
        ) => Ok(ValidTransaction {
            recipient: recipient.to_string(),
            amount_paid,
            litres,
            price_per_unit,
            fuel_type: non_blank(request.fuel_type.as_deref()).map(str::to_string),
            payment_method: non_blank(request.payment_method.as_deref()).map(str::to_string),
            service_type: non_blank(request.service_type.as_deref()).map(str::to_string),
            pump_number: request.pump_number.as_deref().map(|p| p.trim().to_string()),
            transaction_id: non_blank(request.transaction_id.as_deref()).map(str::to_string),
        }),
        _ => Err(ValidationError::MissingFields {
            missing: REQUIRED_FIELDS.to_vec(),
        }),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_quantity(raw: Option<&str>) -> Quantity {
    let Some(raw) = non_blank(raw) else {
        return Quantity::Missing;
    };

    let parsed = Decimal::from_str(raw).or_else(|_| Decimal::from_scientific(raw));
    match parsed {
        Ok(value) if value.is_zero() => Quantity::Missing,
        Ok(value) if value.is_sign_negative() => Quantity::Invalid,
        Ok(value) => Quantity::Value(value),
        Err(_) => Quantity::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> TransactionRequest {
        TransactionRequest {
            recipient: Some("0189578888".to_string()),
            amount_paid: Some("12.5".to_string()),
            litres: Some("10".to_string()),
            price_per_unit: Some("1.25".to_string()),
            fuel_type: Some("RON95".to_string()),
            payment_method: Some("card".to_string()),
            service_type: Some("self".to_string()),
            pump_number: None,
            transaction_id: Some("TX-1".to_string()),
        }
    }

    #[test]
    fn accepts_complete_request() {
        let valid = validate(&complete()).unwrap();
        assert_eq!(valid.amount_paid, Decimal::new(125, 1));
        assert_eq!(valid.litres, Decimal::from(10));
        assert_eq!(valid.fuel_type.as_deref(), Some("RON95"));
    }

    #[test]
    fn lists_exactly_the_missing_fields() {
        let request = TransactionRequest {
            recipient: Some("   ".to_string()),
            litres: None,
            ..complete()
        };

        assert_eq!(
            validate(&request),
            Err(ValidationError::MissingFields {
                missing: vec!["recipient", "litres"]
            })
        );
    }

    #[test]
    fn zero_quantity_counts_as_missing() {
        let request = TransactionRequest {
            amount_paid: Some("0.00".to_string()),
            ..complete()
        };

        assert_eq!(
            validate(&request),
            Err(ValidationError::MissingFields {
                missing: vec!["amountPaid"]
            })
        );
    }

    #[test]
    fn empty_request_misses_every_mandatory_field() {
        assert_eq!(
            validate(&TransactionRequest::default()),
            Err(ValidationError::MissingFields {
                missing: REQUIRED_FIELDS.to_vec()
            })
        );
    }

    #[test]
    fn rejects_malformed_and_negative_numbers() {
        let request = TransactionRequest {
            litres: Some("ten".to_string()),
            price_per_unit: Some("-1.25".to_string()),
            amount_paid: Some("NaN".to_string()),
            ..complete()
        };

        assert_eq!(
            validate(&request),
            Err(ValidationError::InvalidNumbers {
                invalid: vec!["amountPaid", "litres", "pricePerUnit"]
            })
        );
    }

    #[test]
    fn accepts_scientific_notation() {
        let request = TransactionRequest {
            amount_paid: Some("1.25e1".to_string()),
            ..complete()
        };

        assert_eq!(validate(&request).unwrap().amount_paid, Decimal::new(125, 1));
    }

    #[test]
    fn blank_transaction_id_is_dropped() {
        let request = TransactionRequest {
            transaction_id: Some(" ".to_string()),
            ..complete()
        };

        assert_eq!(validate(&request).unwrap().transaction_id, None);
    }
}
