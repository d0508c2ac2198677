use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryErrorKind {
    InvalidRecipientFormat,
    ChannelNotEnabled,
    AuthenticationFailed,
    DeliveryFailed,
    DeliveryTimeout,
}

impl DeliveryErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryErrorKind::InvalidRecipientFormat => "invalid-recipient-format",
            DeliveryErrorKind::ChannelNotEnabled => "channel-not-enabled",
            DeliveryErrorKind::AuthenticationFailed => "authentication-failed",
            DeliveryErrorKind::DeliveryFailed => "delivery-failed",
            DeliveryErrorKind::DeliveryTimeout => "delivery-timeout",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DeliveryErrorKind::InvalidRecipientFormat => "Invalid recipient phone number format",
            DeliveryErrorKind::ChannelNotEnabled => {
                "Messaging channel is not enabled for this recipient"
            }
            DeliveryErrorKind::AuthenticationFailed => "Messaging provider authentication failed",
            DeliveryErrorKind::DeliveryFailed => "Failed to send receipt.",
            DeliveryErrorKind::DeliveryTimeout => "Messaging provider did not respond in time",
        }
    }
}

/// Result of the single delivery attempt made for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Delivered {
        provider_message_id: String,
    },
    Failed {
        kind: DeliveryErrorKind,
        provider_detail: String,
        provider_code: Option<i64>,
    },
}
