pub mod cors;
pub mod endpoints;
pub mod mappers;
pub mod requests;
pub mod responses;

use std::sync::Arc;

use poem::{Endpoint, EndpointExt, IntoEndpoint, Route, middleware::Tracing};
use poem_openapi::OpenApiService;

use crate::presentation::http::{
    cors::KioskCors,
    endpoints::{health::HealthEndpoints, receipts::ReceiptEndpoints, root::ApiState},
};

/// Routes: the API under `/api` behind the kiosk CORS policy, Swagger UI at `/`.
pub fn build_app(state: Arc<ApiState>, server_url: String) -> impl Endpoint {
    let api_service = OpenApiService::new(
        (HealthEndpoints, ReceiptEndpoints::new(state)),
        "Receipt Dispatch API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(format!("{server_url}/api"));
    let ui = api_service.swagger_ui();

    Route::new()
        .nest("/api", api_service.into_endpoint().with(KioskCors))
        .nest("/", ui)
        .with(Tracing)
}
