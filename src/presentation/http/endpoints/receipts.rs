use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use crate::presentation::http::{
    endpoints::root::{ApiState, EndpointsTags},
    mappers::{map_error, map_receipt, map_request},
    requests::TransactionRequestDto,
    responses::SendReceiptResponse,
};

#[derive(Clone)]
pub struct ReceiptEndpoints {
    state: Arc<ApiState>,
}

impl ReceiptEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl ReceiptEndpoints {
    /// Render a fuel receipt and send it to the customer.
    #[oai(
        path = "/send-receipt",
        method = "post",
        tag = EndpointsTags::Receipts,
    )]
    pub async fn send_receipt(&self, request: Json<TransactionRequestDto>) -> SendReceiptResponse {
        match self
            .state
            .dispatch_handler
            .handle(map_request(request.0))
            .await
        {
            Ok(receipt) => map_receipt(receipt),
            Err(err) => map_error(err),
        }
    }
}
