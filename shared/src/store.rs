//! RSVP persistence in DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::HashMap;

use crate::models::RsvpRecord;
use crate::{Error, Result};

/// Key-value store for RSVP records.
#[async_trait]
pub trait RsvpStore: Send + Sync {
    /// Insert or overwrite the record keyed by its phone number.
    async fn upsert(&self, record: &RsvpRecord) -> Result<()>;
}

/// DynamoDB-backed store. A single `PutItem` replaces any prior item.
pub struct DynamoDbRsvpStore {
    client: aws_sdk_dynamodb::Client,
    table_name: String,
}

impl DynamoDbRsvpStore {
    pub fn new(client: aws_sdk_dynamodb::Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

/// DynamoDB item for a record: `{phoneNumber, rsvpStatus, message}`.
fn item(record: &RsvpRecord) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (
            "phoneNumber".to_string(),
            AttributeValue::S(record.origination_identifier.clone()),
        ),
        (
            "rsvpStatus".to_string(),
            AttributeValue::S(record.status.as_str().to_string()),
        ),
        (
            "message".to_string(),
            AttributeValue::S(record.raw_body.clone()),
        ),
    ])
}

#[async_trait]
impl RsvpStore for DynamoDbRsvpStore {
    async fn upsert(&self, record: &RsvpRecord) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item(record)))
            .send()
            .await
            .map_err(|e| Error::Aws(format!("Failed to save RSVP: {}", e)))?;

        Ok(())
    }
}
