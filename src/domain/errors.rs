use thiserror::Error;

use crate::domain::models::DeliveryErrorKind;

pub const REQUIRED_FIELDS: [&str; 4] = ["recipient", "amountPaid", "litres", "pricePerUnit"];

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required fields: {}", .missing.join(", "))]
    MissingFields { missing: Vec<&'static str> },
    #[error("Invalid numeric fields: {}", .invalid.join(", "))]
    InvalidNumbers { invalid: Vec<&'static str> },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidRecipientError {
    #[error("recipient is empty")]
    Empty,
    #[error("recipient contains non-numeric characters: {0}")]
    NonNumeric(String),
    #[error("recipient has {0} digits, expected 8 to 15")]
    Length(usize),
}

/// Deployment problems. Never carries secret values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("missing provider settings: {}", .0.join(", "))]
    MissingSettings(Vec<&'static str>),
    #[error("failed to build provider client: {0}")]
    Client(String),
}

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    InvalidRecipient(#[from] InvalidRecipientError),
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error("{}: {detail}", .kind.as_str())]
    Delivery {
        kind: DeliveryErrorKind,
        detail: String,
        code: Option<i64>,
    },
}
