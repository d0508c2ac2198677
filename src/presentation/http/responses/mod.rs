use poem_openapi::{ApiResponse, Object, payload::Json};

use crate::presentation::models::ErrorKindDto;

#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct ReceiptSentDto {
    pub success: bool,
    pub message_id: String,
    pub transaction_id: String,
    pub message: String,
}

#[derive(Object, Debug, Default)]
#[oai(rename_all = "camelCase")]
pub struct ErrorResponseDto {
    pub success: bool,
    pub error: String,
    pub message: String,
    #[oai(skip_serializing_if_is_none)]
    pub kind: Option<ErrorKindDto>,
    #[oai(skip_serializing_if_is_none)]
    pub details: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub code: Option<i64>,
    #[oai(skip_serializing_if_is_none)]
    pub required: Option<Vec<String>>,
    #[oai(skip_serializing_if_is_none)]
    pub missing: Option<Vec<String>>,
    #[oai(skip_serializing_if_is_none)]
    pub invalid: Option<Vec<String>>,
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "invalid_body")]
pub enum SendReceiptResponse {
    /// The provider accepted the receipt.
    #[oai(status = 200)]
    Ok(Json<ReceiptSentDto>),
    /// Incomplete or malformed transaction, or a recipient the provider refused.
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponseDto>),
    /// The provider rejected our credentials.
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponseDto>),
    #[oai(status = 500)]
    InternalServerError(Json<ErrorResponseDto>),
    #[oai(status = 504)]
    GatewayTimeout(Json<ErrorResponseDto>),
}

fn invalid_body(err: poem::Error) -> SendReceiptResponse {
    SendReceiptResponse::BadRequest(Json(ErrorResponseDto {
        error: "Invalid request body".to_string(),
        message: "Request body must be a JSON transaction".to_string(),
        kind: Some(ErrorKindDto::InvalidBody),
        details: Some(err.to_string()),
        ..Default::default()
    }))
}
