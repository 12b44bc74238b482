//! Shared data models.

use serde::Deserialize;
use std::fmt;

use crate::{Error, Result};

/// SNS Event wrapper
#[derive(Debug, Clone, Deserialize)]
pub struct SnsEvent {
    #[serde(rename = "Records")]
    pub records: Vec<SnsRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SnsRecord {
    #[serde(rename = "Sns")]
    pub sns: SnsMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SnsMessage {
    #[serde(rename = "Message")]
    pub message: String,
}

/// Inbound SMS as published to SNS by the messaging channel.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Sender's phone number
    #[serde(rename = "originationNumber")]
    pub origination_identifier: String,
    /// Free-text reply
    #[serde(rename = "messageBody")]
    pub body: String,
    #[serde(default)]
    pub destination_number: Option<String>,
    #[serde(default)]
    pub message_keyword: Option<String>,
    #[serde(default)]
    pub inbound_message_id: Option<String>,
}

impl Notification {
    #[cfg(test)]
    pub(crate) fn new(origination_identifier: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            origination_identifier: origination_identifier.into(),
            body: body.into(),
            destination_number: None,
            message_keyword: None,
            inbound_message_id: None,
        }
    }

    /// Decode the notification carried by the first record of an SNS event.
    pub fn from_event(event: &SnsEvent) -> Result<Self> {
        let record = event
            .records
            .first()
            .ok_or_else(|| Error::MalformedEvent("event has no records".to_string()))?;

        Ok(serde_json::from_str(&record.sns.message)?)
    }
}

/// Decisive RSVP status as stored in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsvpStatus {
    Attending,
    Declined,
}

impl RsvpStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RsvpStatus::Attending => "Attending",
            RsvpStatus::Declined => "Declined",
        }
    }
}

impl fmt::Display for RsvpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted RSVP, keyed by the sender's phone number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsvpRecord {
    pub origination_identifier: String,
    pub status: RsvpStatus,
    pub raw_body: String,
}

/// Outbound SMS request payload.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendSmsRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
}
