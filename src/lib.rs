pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::{
    application::{
        handlers::receipt_dispatcher::ReceiptDispatchHandler,
        services::{
            messenger::DeliveryGateway,
            recipient::RecipientNormalizer,
            renderer::{Clock, ReceiptRenderer},
        },
    },
    config::Config,
    infrastructure::messaging::{in_memory::InMemoryProvider, twilio::TwilioClient},
};

/// Picks the provider once at startup. Missing credentials leave the gateway
/// unconfigured so every delivery answers with a configuration error.
pub fn delivery_gateway(config: &Config) -> DeliveryGateway {
    if config.dry_run {
        warn!("DELIVERY_DRY_RUN is set, receipts are logged and not sent");
        return DeliveryGateway::new(Arc::new(InMemoryProvider::dry_run()), config.delivery_timeout);
    }

    match TwilioClient::new(
        &config.twilio,
        &config.receipt.channel,
        config.delivery_timeout,
    ) {
        Ok(client) => {
            info!(base_url = %config.twilio.api_base_url, "twilio provider configured");
            DeliveryGateway::new(Arc::new(client), config.delivery_timeout)
        }
        Err(err) => {
            error!("receipt delivery disabled: {err}");
            DeliveryGateway::unconfigured(err, config.delivery_timeout)
        }
    }
}

pub fn dispatch_handler(
    config: &Config,
    gateway: DeliveryGateway,
    clock: Arc<dyn Clock>,
) -> ReceiptDispatchHandler {
    ReceiptDispatchHandler::new(
        RecipientNormalizer::new(&config.receipt.country_code, &config.receipt.channel),
        ReceiptRenderer::new(config.receipt.renderer(), clock),
        gateway,
    )
}
