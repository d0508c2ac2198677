#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{TimeZone, Utc};
use poem::{Endpoint, test::TestClient};
use receipt_dispatch::{
    application::services::{messenger::DeliveryGateway, renderer::FixedClock},
    config::Config,
    delivery_gateway, dispatch_handler,
    infrastructure::messaging::in_memory::InMemoryProvider,
    presentation::http::{build_app, endpoints::root::ApiState},
};
use serde_json::{Value, json};

pub fn config(extra: &[(&str, &str)]) -> Config {
    let mut vars: HashMap<String, String> = HashMap::from([("PORT".to_string(), "3000".to_string())]);
    for (key, value) in extra {
        vars.insert(key.to_string(), value.to_string());
    }
    Config::from_lookup(|name| vars.get(name).cloned()).expect("test config")
}

pub fn clock() -> Arc<FixedClock> {
    Arc::new(FixedClock(Utc.with_ymd_and_hms(2026, 10, 19, 6, 5, 0).unwrap()))
}

pub fn app_with_gateway(gateway: DeliveryGateway) -> TestClient<impl Endpoint> {
    let config = config(&[]);
    let state = Arc::new(ApiState {
        dispatch_handler: Arc::new(dispatch_handler(&config, gateway, clock())),
    });
    TestClient::new(build_app(state, config.server_url()))
}

pub fn app_with_provider(provider: Arc<InMemoryProvider>) -> TestClient<impl Endpoint> {
    app_with_gateway(DeliveryGateway::new(provider, Duration::from_secs(1)))
}

/// Server started without any provider credentials.
pub fn unconfigured_app() -> TestClient<impl Endpoint> {
    app_with_gateway(delivery_gateway(&config(&[])))
}

pub fn sample_transaction() -> Value {
    json!({
        "recipient": "0189578888",
        "amountPaid": 12.5,
        "litres": 10,
        "pricePerUnit": 1.25,
        "fuelType": "RON95",
        "paymentMethod": "card",
        "serviceType": "self",
        "transactionId": "TX-1"
    })
}

pub fn with_field(mut body: Value, key: &str, value: Value) -> Value {
    body[key] = value;
    body
}

pub fn without_field(mut body: Value, key: &str) -> Value {
    if let Some(object) = body.as_object_mut() {
        object.remove(key);
    }
    body
}
