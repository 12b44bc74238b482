//! Configuration management for Lambda functions.

use std::env;

use crate::{Error, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// DynamoDB table holding RSVP records
    pub table_name: Option<String>,
    /// AWS region
    pub aws_region: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            table_name: env::var("DYNAMODB_TABLE_NAME")
                .ok()
                .filter(|name| !name.is_empty()),
            aws_region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
        }
    }

    /// The RSVP table name, required by the receive handler.
    pub fn table_name(&self) -> Result<&str> {
        self.table_name
            .as_deref()
            .ok_or_else(|| Error::Config("DYNAMODB_TABLE_NAME not set".to_string()))
    }
}
