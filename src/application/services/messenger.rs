use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::{
    errors::ConfigurationError,
    models::{DeliveryErrorKind, DeliveryOutcome, RenderedReceipt},
    value_objects::Recipient,
};

const INVALID_RECIPIENT_CODES: [i64; 2] = [21211, 21614];
const CHANNEL_NOT_ENABLED_CODES: [i64; 5] = [21408, 63003, 63007, 63015, 63016];
const AUTHENTICATION_CODES: [i64; 1] = [20003];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderReceipt {
    pub message_id: String,
}

/// A failed send as reported by the provider or its transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderFault {
    Rejected {
        status: Option<u16>,
        code: Option<i64>,
        message: String,
    },
    Transport(String),
    TimedOut(String),
}

impl ProviderFault {
    pub fn classify(&self) -> DeliveryErrorKind {
        match self {
            ProviderFault::Rejected { code: Some(code), .. }
                if INVALID_RECIPIENT_CODES.contains(code) =>
            {
                DeliveryErrorKind::InvalidRecipientFormat
            }
            ProviderFault::Rejected { code: Some(code), .. }
                if CHANNEL_NOT_ENABLED_CODES.contains(code) =>
            {
                DeliveryErrorKind::ChannelNotEnabled
            }
            ProviderFault::Rejected { code: Some(code), .. }
                if AUTHENTICATION_CODES.contains(code) =>
            {
                DeliveryErrorKind::AuthenticationFailed
            }
            ProviderFault::Rejected {
                status: Some(401), ..
            } => DeliveryErrorKind::AuthenticationFailed,
            ProviderFault::TimedOut(_) => DeliveryErrorKind::DeliveryTimeout,
            _ => DeliveryErrorKind::DeliveryFailed,
        }
    }

    pub fn code(&self) -> Option<i64> {
        match self {
            ProviderFault::Rejected { code, .. } => *code,
            ProviderFault::Transport(_) | ProviderFault::TimedOut(_) => None,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ProviderFault::Rejected { message, .. } => message,
            ProviderFault::Transport(message) | ProviderFault::TimedOut(message) => message,
        }
    }
}

#[async_trait]
pub trait MessageProvider: Send + Sync {
    fn name(&self) -> &'static str;
    async fn send(&self, to: &Recipient, body: &str) -> Result<ProviderReceipt, ProviderFault>;
}

/// Owns the one outbound call per request and turns its result into a
/// [`DeliveryOutcome`].
#[derive(Clone)]
pub struct DeliveryGateway {
    provider: Result<Arc<dyn MessageProvider>, ConfigurationError>,
    timeout: Duration,
}

impl DeliveryGateway {
    pub fn new(provider: Arc<dyn MessageProvider>, timeout: Duration) -> Self {
        Self {
            provider: Ok(provider),
            timeout,
        }
    }

    pub fn unconfigured(error: ConfigurationError, timeout: Duration) -> Self {
        Self {
            provider: Err(error),
            timeout,
        }
    }

    pub async fn deliver(
        &self,
        to: &Recipient,
        receipt: &RenderedReceipt,
    ) -> Result<DeliveryOutcome, ConfigurationError> {
        let provider = self.provider.as_ref().map_err(|err| err.clone())?;

        debug!(
            provider = provider.name(),
            recipient = %to.masked(),
            transaction_id = %receipt.transaction_id,
            "sending receipt"
        );

        let outcome = match tokio::time::timeout(self.timeout, provider.send(to, &receipt.body()))
            .await
        {
            Ok(Ok(sent)) => DeliveryOutcome::Delivered {
                provider_message_id: sent.message_id,
            },
            Ok(Err(fault)) => {
                let kind = fault.classify();
                warn!(
                    provider = provider.name(),
                    kind = kind.as_str(),
                    code = ?fault.code(),
                    "provider rejected receipt: {}",
                    fault.message()
                );
                DeliveryOutcome::Failed {
                    kind,
                    provider_detail: fault.message().to_string(),
                    provider_code: fault.code(),
                }
            }
            Err(_) => {
                warn!(
                    provider = provider.name(),
                    timeout_ms = self.timeout.as_millis() as u64,
                    "provider call timed out"
                );
                DeliveryOutcome::Failed {
                    kind: DeliveryErrorKind::DeliveryTimeout,
                    provider_detail: format!(
                        "no response from {} within {} ms",
                        provider.name(),
                        self.timeout.as_millis()
                    ),
                    provider_code: None,
                }
            }
        };

        Ok(outcome)
    }
}
