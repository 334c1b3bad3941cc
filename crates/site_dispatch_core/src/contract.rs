use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::DispatchError;

pub const GREETING_MESSAGE: &str = "Hello World from AWS Lambda Container!";
pub const INTERNAL_ERROR_LABEL: &str = "Internal Server Error";
pub const HTML_CONTENT_TYPE: &str = "text/html";
pub const CORS_ALLOW_ORIGIN: &str = "*";
pub const CORS_ALLOW_HEADERS: &str = "Content-Type";
pub const CORS_ALLOW_METHODS: &str = "GET, POST, OPTIONS";

pub type Headers = BTreeMap<String, String>;

/// Identity of a single invocation, supplied by the hosting platform.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InvocationContext {
    #[serde(rename = "awsRequestId")]
    pub request_id: String,
}

impl InvocationContext {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
        }
    }
}

/// API Gateway proxy-shaped response returned for every invocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResponseEnvelope {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Headers>,
    pub body: String,
}

impl ResponseEnvelope {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .as_ref()
            .and_then(|headers| headers.get(name))
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DirectInvocationBody {
    pub message: String,
    pub timestamp: String,
    pub request_id: String,
    pub environment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

pub fn html_headers() -> Headers {
    Headers::from([
        ("Content-Type".to_string(), HTML_CONTENT_TYPE.to_string()),
        (
            "Access-Control-Allow-Origin".to_string(),
            CORS_ALLOW_ORIGIN.to_string(),
        ),
        (
            "Access-Control-Allow-Headers".to_string(),
            CORS_ALLOW_HEADERS.to_string(),
        ),
        (
            "Access-Control-Allow-Methods".to_string(),
            CORS_ALLOW_METHODS.to_string(),
        ),
    ])
}

pub fn html_response(html: String) -> ResponseEnvelope {
    ResponseEnvelope {
        status_code: 200,
        headers: Some(html_headers()),
        body: html,
    }
}

pub fn direct_response(
    context: &InvocationContext,
    timestamp: impl Into<String>,
    environment: &str,
) -> Result<ResponseEnvelope, DispatchError> {
    let body = DirectInvocationBody {
        message: GREETING_MESSAGE.to_string(),
        timestamp: timestamp.into(),
        request_id: context.request_id.clone(),
        environment: environment.to_string(),
    };

    Ok(ResponseEnvelope {
        status_code: 200,
        headers: None,
        body: serde_json::to_string(&body)?,
    })
}

/// Collapses any dispatch failure into the single 500 envelope.
///
/// The error description is echoed to the caller as-is.
pub fn internal_error_response(error: &DispatchError) -> ResponseEnvelope {
    ResponseEnvelope {
        status_code: 500,
        headers: None,
        body: json!({
            "error": INTERNAL_ERROR_LABEL,
            "message": error.to_string(),
        })
        .to_string(),
    }
}
