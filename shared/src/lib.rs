//! Shared library for the SMS RSVP Lambda functions.
//!
//! This crate provides the RSVP classifier and recorder, the outbound SMS
//! notifier, and the clients, types and helpers both Lambdas use.

pub mod clients;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod notifier;
pub mod rsvp;
pub mod store;

pub use config::Config;
pub use error::{Error, Result};
pub use http::{MessageBody, ProxyResponse};
pub use models::{Notification, RsvpRecord, RsvpStatus, SendSmsRequest, SnsEvent};
pub use notifier::{OutboundNotifier, Sent, SmsPublisher, SnsSmsPublisher};
pub use rsvp::{classify, Classification, Outcome, RsvpRecorder};
pub use store::{DynamoDbRsvpStore, RsvpStore};
