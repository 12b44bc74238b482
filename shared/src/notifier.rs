//! Outbound SMS delivery through SNS.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};

use crate::http::ProxyResponse;
use crate::models::SendSmsRequest;
use crate::{Error, Result};

const MISSING_FIELDS: &str = "Missing message or phoneNumber";

/// Messaging transport able to deliver a single SMS.
#[async_trait]
pub trait SmsPublisher: Send + Sync {
    /// Publish `message` to `phone_number`, returning the transport message id.
    async fn publish(&self, message: &str, phone_number: &str) -> Result<Option<String>>;
}

/// SNS direct-to-phone publisher.
pub struct SnsSmsPublisher {
    client: aws_sdk_sns::Client,
}

impl SnsSmsPublisher {
    pub fn new(client: aws_sdk_sns::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SmsPublisher for SnsSmsPublisher {
    async fn publish(&self, message: &str, phone_number: &str) -> Result<Option<String>> {
        let output = self
            .client
            .publish()
            .message(message)
            .phone_number(phone_number)
            .send()
            .await
            .map_err(|e| Error::Aws(format!("Failed to publish SMS: {}", e)))?;

        Ok(output.message_id().map(str::to_string))
    }
}

/// Accepted delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sent {
    pub message_id: Option<String>,
}

/// Validates outbound requests and forwards them to the publisher.
pub struct OutboundNotifier {
    publisher: Arc<dyn SmsPublisher>,
}

impl OutboundNotifier {
    pub fn new(publisher: Arc<dyn SmsPublisher>) -> Self {
        Self { publisher }
    }

    /// Send one SMS. Empty inputs are rejected before the transport is called.
    pub async fn send(&self, message: &str, destination: &str) -> Result<Sent> {
        if message.is_empty() || destination.is_empty() {
            return Err(Error::Validation(MISSING_FIELDS.to_string()));
        }

        let message_id = self.publisher.publish(message, destination).await?;
        Ok(Sent { message_id })
    }

    /// Handle an API request body. Only unparseable JSON is returned as an error.
    pub async fn handle_request(&self, body: &[u8]) -> Result<ProxyResponse> {
        let request: SendSmsRequest = serde_json::from_slice(body)?;
        let message = request.message.unwrap_or_default();
        let phone_number = request.phone_number.unwrap_or_default();

        match self.send(&message, &phone_number).await {
            Ok(sent) => {
                info!(
                    phone_number = %phone_number,
                    message_id = sent.message_id.as_deref().unwrap_or(""),
                    "SMS sent"
                );
                ProxyResponse::message(200, "SMS sent successfully")
            }
            Err(Error::Validation(reason)) => ProxyResponse::message(400, reason),
            Err(e) => {
                error!(phone_number = %phone_number, error = %e, "Failed to send SMS");
                ProxyResponse::message(e.status_code(), "Error sending SMS")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockPublisher {
        calls: Mutex<Vec<(String, String)>>,
        fail: bool,
    }

    #[async_trait]
    impl SmsPublisher for MockPublisher {
        async fn publish(&self, message: &str, phone_number: &str) -> Result<Option<String>> {
            self.calls
                .lock()
                .unwrap()
                .push((message.to_string(), phone_number.to_string()));
            if self.fail {
                Err(Error::Aws("SNS service error".to_string()))
            } else {
                Ok(Some("test-message-id".to_string()))
            }
        }
    }

    fn notifier(publisher: &Arc<MockPublisher>) -> OutboundNotifier {
        OutboundNotifier::new(publisher.clone())
    }

    #[tokio::test]
    async fn test_send_success() {
        let publisher = Arc::new(MockPublisher::default());
        let response = notifier(&publisher)
            .handle_request(br#"{"message":"Test wedding reminder","phoneNumber":"+1234567890"}"#)
            .await
            .unwrap();

        assert_eq!(response.status_code, 200);
        assert_eq!(response.message_body().unwrap().message, "SMS sent successfully");
        assert_eq!(
            *publisher.calls.lock().unwrap(),
            vec![("Test wedding reminder".to_string(), "+1234567890".to_string())]
        );
    }

    #[tokio::test]
    async fn test_send_returns_message_id() {
        let publisher = Arc::new(MockPublisher::default());
        let sent = notifier(&publisher).send("hi", "+1234567890").await.unwrap();
        assert_eq!(sent.message_id.as_deref(), Some("test-message-id"));
    }

    #[tokio::test]
    async fn test_missing_fields_return_400() {
        let publisher = Arc::new(MockPublisher::default());
        let notifier = notifier(&publisher);

        for body in [
            r#"{"phoneNumber":"+1234567890"}"#,
            r#"{"message":"Test message"}"#,
            r#"{"message":"","phoneNumber":"+1234567890"}"#,
            "{}",
        ] {
            let response = notifier.handle_request(body.as_bytes()).await.unwrap();
            assert_eq!(response.status_code, 400, "body: {}", body);
            assert_eq!(
                response.message_body().unwrap().message,
                "Missing message or phoneNumber"
            );
        }

        assert!(publisher.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_returns_500() {
        let publisher = Arc::new(MockPublisher {
            fail: true,
            ..Default::default()
        });
        let response = notifier(&publisher)
            .handle_request(br#"{"message":"Test message","phoneNumber":"+1234567890"}"#)
            .await
            .unwrap();

        assert_eq!(response.status_code, 500);
        assert_eq!(response.message_body().unwrap().message, "Error sending SMS");
        assert_eq!(publisher.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_json_is_an_error() {
        let publisher = Arc::new(MockPublisher::default());
        let result = notifier(&publisher).handle_request(b"invalid json").await;

        assert!(matches!(result, Err(Error::Serialization(_))));
        assert!(publisher.calls.lock().unwrap().is_empty());
    }
}
