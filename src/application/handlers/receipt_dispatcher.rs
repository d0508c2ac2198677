use tracing::{error, info, warn};

use crate::{
    application::services::{
        messenger::DeliveryGateway, recipient::RecipientNormalizer, renderer::ReceiptRenderer,
        validator,
    },
    domain::{
        errors::DispatchError,
        models::{DeliveryOutcome, TransactionRequest},
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchReceipt {
    pub message_id: String,
    pub transaction_id: String,
}

/// validate -> normalize recipient -> render -> deliver. Local failures are
/// reported before the provider is contacted, and at most one delivery attempt
/// is made per request.
pub struct ReceiptDispatchHandler {
    normalizer: RecipientNormalizer,
    renderer: ReceiptRenderer,
    gateway: DeliveryGateway,
}

impl ReceiptDispatchHandler {
    pub fn new(
        normalizer: RecipientNormalizer,
        renderer: ReceiptRenderer,
        gateway: DeliveryGateway,
    ) -> Self {
        Self {
            normalizer,
            renderer,
            gateway,
        }
    }

    pub async fn handle(
        &self,
        request: TransactionRequest,
    ) -> Result<DispatchReceipt, DispatchError> {
        let transaction = validator::validate(&request).inspect_err(|err| {
            warn!("rejected receipt request: {err}");
        })?;

        let recipient = self
            .normalizer
            .normalize(&transaction.recipient)
            .inspect_err(|err| warn!("rejected receipt recipient: {err}"))?;

        let receipt = self.renderer.render(&transaction);

        let outcome = self
            .gateway
            .deliver(&recipient, &receipt)
            .await
            .inspect_err(|err| error!("receipt delivery is not configured: {err}"))?;

        match outcome {
            DeliveryOutcome::Delivered {
                provider_message_id,
            } => {
                info!(
                    recipient = %recipient.masked(),
                    transaction_id = %receipt.transaction_id,
                    message_id = %provider_message_id,
                    "receipt sent"
                );
                Ok(DispatchReceipt {
                    message_id: provider_message_id,
                    transaction_id: receipt.transaction_id,
                })
            }
            DeliveryOutcome::Failed {
                kind,
                provider_detail,
                provider_code,
            } => Err(DispatchError::Delivery {
                kind,
                detail: provider_detail,
                code: provider_code,
            }),
        }
    }
}
