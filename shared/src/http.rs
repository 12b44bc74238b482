//! HTTP helpers for Lambda functions.

use lambda_http::{Body, Response};
use serde::{Deserialize, Serialize};

use crate::Result;

/// JSON body carried by every handler response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

/// API Gateway proxy-style response: `body` is the JSON-encoded payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,
    pub body: String,
}

impl ProxyResponse {
    /// Build a response whose body is `{"message": ...}`.
    pub fn message(status_code: u16, message: impl Into<String>) -> Result<Self> {
        let body = serde_json::to_string(&MessageBody {
            message: message.into(),
        })?;
        Ok(Self { status_code, body })
    }

    /// Decode the body back into its message payload.
    pub fn message_body(&self) -> Result<MessageBody> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Convert into a `lambda_http` response with a JSON content type.
    pub fn into_http(self) -> std::result::Result<Response<Body>, lambda_http::Error> {
        Ok(Response::builder()
            .status(self.status_code)
            .header("content-type", "application/json")
            .body(Body::from(self.body))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_response_shape() {
        let response = ProxyResponse::message(200, "RSVP received").unwrap();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["statusCode"], 200);
        assert_eq!(json["body"], r#"{"message":"RSVP received"}"#);
    }

    #[test]
    fn test_into_http() {
        let response = ProxyResponse::message(400, "Missing message or phoneNumber")
            .unwrap()
            .into_http()
            .unwrap();
        assert_eq!(response.status(), 400);
        assert_eq!(response.headers()["content-type"], "application/json");
        let body: &[u8] = response.body().as_ref();
        assert_eq!(body, br#"{"message":"Missing message or phoneNumber"}"#);
    }
}
