use std::sync::Arc;

use anyhow::Context;
use poem::{Server, listener::TcpListener};
use tokio::main;
use tracing::info;

use receipt_dispatch::{
    application::services::renderer::SystemClock,
    config::Config,
    delivery_gateway, dispatch_handler,
    presentation::http::{build_app, endpoints::root::ApiState},
};

#[main]
async fn main() -> anyhow::Result<()> {
    let config = Config::try_parse().context("invalid configuration")?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    let server_url = config.server_url();
    info!("Starting server at {}", server_url);

    let gateway = delivery_gateway(&config);
    let state = Arc::new(ApiState {
        dispatch_handler: Arc::new(dispatch_handler(&config, gateway, Arc::new(SystemClock))),
    });
    let app = build_app(state, server_url);

    Server::new(TcpListener::bind(format!("{}:{}", config.host, config.port)))
        .run(app)
        .await
        .context("server stopped")
}
