//! Send SMS Lambda - Handles outbound SMS requests from API Gateway.
//!
//! Expects a JSON body `{"message": "...", "phoneNumber": "..."}` and publishes
//! the message directly to the phone number through SNS.

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use shared::{clients, Config, OutboundNotifier, SnsSmsPublisher};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Application state shared across requests.
struct AppState {
    notifier: OutboundNotifier,
}

impl AppState {
    async fn new() -> Self {
        let config = Config::from_env();
        let client = clients::sns(&config.aws_region).await.clone();

        Self {
            notifier: OutboundNotifier::new(Arc::new(SnsSmsPublisher::new(client))),
        }
    }
}

async fn handler(state: Arc<AppState>, event: Request) -> Result<Response<Body>, Error> {
    info!("Processing outbound SMS request");

    let response = state.notifier.handle_request(event.body().as_ref()).await?;
    response.into_http()
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let state = Arc::new(AppState::new().await);

    run(service_fn(move |event| {
        let state = Arc::clone(&state);
        async move { handler(state, event).await }
    }))
    .await
}
