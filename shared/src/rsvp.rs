//! RSVP classification and recording for inbound SMS replies.

use std::sync::Arc;
use tracing::{error, info, warn};

use crate::http::ProxyResponse;
use crate::models::{Notification, RsvpRecord, RsvpStatus, SnsEvent};
use crate::store::RsvpStore;
use crate::{Error, Result};

const ATTENDING_TOKENS: [&str; 2] = ["yes", "attending"];
const DECLINED_TOKENS: [&str; 2] = ["no", "cannot"];

/// Tri-state reading of a free-text reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Attending,
    Declined,
    Undetermined,
}

impl Classification {
    /// The status to persist, if the reply was decisive.
    pub fn status(self) -> Option<RsvpStatus> {
        match self {
            Classification::Attending => Some(RsvpStatus::Attending),
            Classification::Declined => Some(RsvpStatus::Declined),
            Classification::Undetermined => None,
        }
    }
}

/// Classify a reply by plain substring matching on its lower-cased text.
///
/// Attending tokens are checked first, so "no, actually yes" is Attending.
pub fn classify(body: &str) -> Classification {
    let lowered = body.to_lowercase();

    if ATTENDING_TOKENS.iter().any(|token| lowered.contains(token)) {
        Classification::Attending
    } else if DECLINED_TOKENS.iter().any(|token| lowered.contains(token)) {
        Classification::Declined
    } else {
        Classification::Undetermined
    }
}

/// Result of processing one notification.
#[derive(Debug)]
pub enum Outcome {
    Recorded(RsvpStatus),
    Skipped,
    Failed(Error),
}

impl Outcome {
    /// Response returned to the invoker for this outcome.
    pub fn to_response(&self) -> Result<ProxyResponse> {
        match self {
            Outcome::Recorded(_) => ProxyResponse::message(200, "RSVP received"),
            Outcome::Skipped => ProxyResponse::message(200, "RSVP status unclear"),
            Outcome::Failed(_) => ProxyResponse::message(500, "Error processing RSVP"),
        }
    }
}

/// Classifies inbound replies and upserts decisive ones.
pub struct RsvpRecorder {
    store: Arc<dyn RsvpStore>,
}

impl RsvpRecorder {
    pub fn new(store: Arc<dyn RsvpStore>) -> Self {
        Self { store }
    }

    /// Classify the notification and persist it when decisive.
    pub async fn process(&self, notification: &Notification) -> Outcome {
        let phone_number = notification.origination_identifier.as_str();

        let Some(status) = classify(&notification.body).status() else {
            info!(phone_number, "Could not determine RSVP status from message");
            return Outcome::Skipped;
        };

        let record = RsvpRecord {
            origination_identifier: notification.origination_identifier.clone(),
            status,
            raw_body: notification.body.clone(),
        };

        match self.store.upsert(&record).await {
            Ok(()) => {
                info!(phone_number, rsvp_status = %status, "Saved RSVP status");
                Outcome::Recorded(status)
            }
            Err(e) => {
                error!(phone_number, error = %e, "Failed to save RSVP status");
                Outcome::Failed(e)
            }
        }
    }

    /// Handle an SNS delivery. Envelope errors are returned, not answered.
    pub async fn handle_event(&self, event: &SnsEvent) -> Result<ProxyResponse> {
        let notification = Notification::from_event(event)?;

        if event.records.len() > 1 {
            warn!(
                records = event.records.len(),
                "Ignoring records after the first"
            );
        }

        info!(
            phone_number = %notification.origination_identifier,
            message = %notification.body,
            inbound_message_id = notification.inbound_message_id.as_deref().unwrap_or(""),
            "Received message"
        );

        self.process(&notification).await.to_response()
    }
}
