use poem_openapi::payload::Json;
use serde_json::Value;

use crate::{
    application::handlers::receipt_dispatcher::DispatchReceipt,
    domain::{
        errors::{DispatchError, REQUIRED_FIELDS, ValidationError},
        models::{DeliveryErrorKind, TransactionRequest},
    },
    presentation::{
        http::{
            requests::TransactionRequestDto,
            responses::{ErrorResponseDto, ReceiptSentDto, SendReceiptResponse},
        },
        models::ErrorKindDto,
    },
};

pub fn map_request(dto: TransactionRequestDto) -> TransactionRequest {
    TransactionRequest {
        recipient: dto.recipient,
        amount_paid: scalar(dto.amount_paid),
        litres: scalar(dto.litres),
        price_per_unit: scalar(dto.price_per_unit),
        fuel_type: dto.fuel_type,
        payment_method: dto.payment_method,
        service_type: dto.service_type,
        pump_number: pump_label(dto.pump_number),
        transaction_id: dto.transaction_id,
    }
}

// Numbers keep their JSON text so the validator sees what the kiosk sent.
fn scalar(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

// Only strings and numbers name a pump; anything else is treated as absent.
fn pump_label(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

pub fn map_receipt(receipt: DispatchReceipt) -> SendReceiptResponse {
    SendReceiptResponse::Ok(Json(ReceiptSentDto {
        success: true,
        message_id: receipt.message_id,
        transaction_id: receipt.transaction_id,
        message: "Receipt sent successfully!".to_string(),
    }))
}

pub fn map_error(err: DispatchError) -> SendReceiptResponse {
    match err {
        DispatchError::Validation(ValidationError::MissingFields { missing }) => {
            SendReceiptResponse::BadRequest(Json(ErrorResponseDto {
                error: "Missing required fields".to_string(),
                message: "Missing required fields".to_string(),
                kind: Some(ErrorKindDto::MissingFields),
                required: Some(names(&REQUIRED_FIELDS)),
                missing: Some(names(&missing)),
                ..Default::default()
            }))
        }
        DispatchError::Validation(ValidationError::InvalidNumbers { invalid }) => {
            SendReceiptResponse::BadRequest(Json(ErrorResponseDto {
                error: "Invalid numeric fields".to_string(),
                message: "Quantities must be non-negative numbers".to_string(),
                kind: Some(ErrorKindDto::InvalidNumbers),
                invalid: Some(names(&invalid)),
                ..Default::default()
            }))
        }
        DispatchError::InvalidRecipient(err) => {
            SendReceiptResponse::BadRequest(Json(ErrorResponseDto {
                error: "Invalid recipient".to_string(),
                message: "Recipient phone number could not be understood".to_string(),
                kind: Some(ErrorKindDto::InvalidRecipient),
                details: Some(err.to_string()),
                ..Default::default()
            }))
        }
        DispatchError::Configuration(_) => {
            SendReceiptResponse::InternalServerError(Json(ErrorResponseDto {
                error: "Server misconfigured".to_string(),
                message: "Receipt delivery is not configured".to_string(),
                kind: Some(ErrorKindDto::Configuration),
                ..Default::default()
            }))
        }
        DispatchError::Delivery { kind, detail, code } => {
            let body = Json(ErrorResponseDto {
                error: kind.description().to_string(),
                message: "Failed to send receipt.".to_string(),
                kind: Some(kind.into()),
                details: Some(detail),
                code,
                ..Default::default()
            });
            match kind {
                DeliveryErrorKind::InvalidRecipientFormat | DeliveryErrorKind::ChannelNotEnabled => {
                    SendReceiptResponse::BadRequest(body)
                }
                DeliveryErrorKind::AuthenticationFailed => SendReceiptResponse::Unauthorized(body),
                DeliveryErrorKind::DeliveryFailed => SendReceiptResponse::InternalServerError(body),
                DeliveryErrorKind::DeliveryTimeout => SendReceiptResponse::GatewayTimeout(body),
            }
        }
    }
}

fn names(fields: &[&'static str]) -> Vec<String> {
    fields.iter().map(|field| field.to_string()).collect()
}
