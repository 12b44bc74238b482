//! Process-wide AWS SDK clients.
//!
//! Lambda reuses the execution environment between invocations, so each client
//! is built once on first use and shared for the lifetime of the process.

use aws_config::{BehaviorVersion, Region, SdkConfig};
use tokio::sync::OnceCell;

static SDK_CONFIG: OnceCell<SdkConfig> = OnceCell::const_new();
static DYNAMODB_CLIENT: OnceCell<aws_sdk_dynamodb::Client> = OnceCell::const_new();
static SNS_CLIENT: OnceCell<aws_sdk_sns::Client> = OnceCell::const_new();

/// Shared SDK configuration. The region passed on first call wins.
pub async fn sdk_config(region: &str) -> &'static SdkConfig {
    SDK_CONFIG
        .get_or_init(|| async move {
            aws_config::defaults(BehaviorVersion::latest())
                .region(Region::new(region.to_string()))
                .load()
                .await
        })
        .await
}

/// DynamoDB client, constructed once per process.
pub async fn dynamodb(region: &str) -> &'static aws_sdk_dynamodb::Client {
    DYNAMODB_CLIENT
        .get_or_init(|| async move { aws_sdk_dynamodb::Client::new(sdk_config(region).await) })
        .await
}

/// SNS client, constructed once per process.
pub async fn sns(region: &str) -> &'static aws_sdk_sns::Client {
    SNS_CLIENT
        .get_or_init(|| async move { aws_sdk_sns::Client::new(sdk_config(region).await) })
        .await
}
