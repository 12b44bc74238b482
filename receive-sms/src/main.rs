//! Receive SMS Lambda - Records RSVP replies delivered through SNS.
//!
//! This Lambda is triggered by SNS and:
//! 1. Decodes the inbound SMS from the first record's message
//! 2. Classifies the reply as attending, declined or unclear
//! 3. Upserts decisive replies into the RSVP table, keyed by phone number

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use shared::{clients, Config, DynamoDbRsvpStore, ProxyResponse, RsvpRecorder, SnsEvent};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

struct AppState {
    recorder: RsvpRecorder,
}

impl AppState {
    async fn new() -> Result<Self, Error> {
        let config = Config::from_env();
        let table_name = config.table_name()?;
        let client = clients::dynamodb(&config.aws_region).await.clone();

        Ok(Self {
            recorder: RsvpRecorder::new(Arc::new(DynamoDbRsvpStore::new(client, table_name))),
        })
    }
}

async fn handler(state: Arc<AppState>, event: LambdaEvent<SnsEvent>) -> Result<ProxyResponse, Error> {
    info!(
        request_id = %event.context.request_id,
        records = event.payload.records.len(),
        "Processing inbound SMS event"
    );

    Ok(state.recorder.handle_event(&event.payload).await?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let state = Arc::new(AppState::new().await?);

    run(service_fn(move |event| {
        let state = Arc::clone(&state);
        async move { handler(state, event).await }
    }))
    .await
}
