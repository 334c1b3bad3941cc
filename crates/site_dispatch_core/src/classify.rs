//! Invocation classification.
//!
//! An event is read only through a fixed, ordered set of accessors. Anything
//! that is not one of those fields is ignored, and a payload that is not a
//! JSON object simply carries no HTTP signals.

use serde_json::Value;

pub const DEFAULT_REQUEST_PATH: &str = "/";
pub const API_PATH_MARKER: &str = "/api/";

const LEGACY_METHOD_FIELD: &str = "httpMethod";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// Served the static HTML asset.
    Http,
    /// Answered with the JSON greeting.
    Direct,
}

/// Where a request path may be found, in lookup priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSource {
    NestedHttp,
    Legacy,
}

impl PathSource {
    pub const LOOKUP_ORDER: [PathSource; 2] = [PathSource::NestedHttp, PathSource::Legacy];

    fn pointer(self) -> &'static str {
        match self {
            Self::NestedHttp => "/requestContext/http/path",
            Self::Legacy => "/path",
        }
    }

    /// Returns the path carried by this source, if it is a non-empty string.
    pub fn lookup(self, event: &Value) -> Option<&str> {
        event
            .pointer(self.pointer())
            .and_then(Value::as_str)
            .filter(|path| !path.is_empty())
    }
}

pub fn resolve_request_path(event: &Value) -> &str {
    PathSource::LOOKUP_ORDER
        .iter()
        .find_map(|source| source.lookup(event))
        .unwrap_or(DEFAULT_REQUEST_PATH)
}

pub fn has_legacy_http_method(event: &Value) -> bool {
    event.get(LEGACY_METHOD_FIELD).is_some_and(is_truthy)
}

pub fn classify(event: &Value) -> RequestKind {
    classify_resolved(resolve_request_path(event), event)
}

/// Same rule as [`classify`], for callers that already resolved the path.
pub fn classify_resolved(request_path: &str, event: &Value) -> RequestKind {
    if request_path.contains(API_PATH_MARKER) || has_legacy_http_method(event) {
        RequestKind::Http
    } else {
        RequestKind::Direct
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
