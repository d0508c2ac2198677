use std::sync::Arc;

use poem_openapi::Tags;

use crate::application::handlers::receipt_dispatcher::ReceiptDispatchHandler;

#[derive(Clone)]
pub struct ApiState {
    pub dispatch_handler: Arc<ReceiptDispatchHandler>,
}

/// Enum of API sections (tags)
#[derive(Tags)]
pub enum EndpointsTags {
    Health,
    Receipts,
}
