use poem_openapi::Enum;

use crate::domain::models::DeliveryErrorKind;

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKindDto {
    #[oai(rename = "invalid-body")]
    InvalidBody,
    #[oai(rename = "missing-fields")]
    MissingFields,
    #[oai(rename = "invalid-numbers")]
    InvalidNumbers,
    #[oai(rename = "invalid-recipient")]
    InvalidRecipient,
    #[oai(rename = "configuration")]
    Configuration,
    #[oai(rename = "invalid-recipient-format")]
    InvalidRecipientFormat,
    #[oai(rename = "channel-not-enabled")]
    ChannelNotEnabled,
    #[oai(rename = "authentication-failed")]
    AuthenticationFailed,
    #[oai(rename = "delivery-failed")]
    DeliveryFailed,
    #[oai(rename = "delivery-timeout")]
    DeliveryTimeout,
}

impl From<DeliveryErrorKind> for ErrorKindDto {
    fn from(value: DeliveryErrorKind) -> Self {
        match value {
            DeliveryErrorKind::InvalidRecipientFormat => ErrorKindDto::InvalidRecipientFormat,
            DeliveryErrorKind::ChannelNotEnabled => ErrorKindDto::ChannelNotEnabled,
            DeliveryErrorKind::AuthenticationFailed => ErrorKindDto::AuthenticationFailed,
            DeliveryErrorKind::DeliveryFailed => ErrorKindDto::DeliveryFailed,
            DeliveryErrorKind::DeliveryTimeout => ErrorKindDto::DeliveryTimeout,
        }
    }
}
