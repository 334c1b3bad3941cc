use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;
use site_dispatch_core::classify::{classify_resolved, resolve_request_path, RequestKind};
use site_dispatch_core::contract::{
    direct_response, html_response, internal_error_response, InvocationContext, ResponseEnvelope,
};
use site_dispatch_core::error::DispatchError;
use tracing::{debug, error, info};

use crate::adapters::asset_store::AssetStore;
use crate::config::HandlerConfig;

/// Entry point for one invocation. Always yields an envelope; failures are
/// logged and turned into a 500.
pub fn handle_site_event(
    event: &Value,
    context: &InvocationContext,
    config: &HandlerConfig,
    assets: &dyn AssetStore,
    now: DateTime<Utc>,
) -> ResponseEnvelope {
    dispatch_site_event(event, context, config, assets, now).unwrap_or_else(|failure| {
        error!(
            request_id = %context.request_id,
            error = %failure,
            "site dispatch failed"
        );
        internal_error_response(&failure)
    })
}

pub fn dispatch_site_event(
    event: &Value,
    context: &InvocationContext,
    config: &HandlerConfig,
    assets: &dyn AssetStore,
    now: DateTime<Utc>,
) -> Result<ResponseEnvelope, DispatchError> {
    info!(request_id = %context.request_id, %event, "received event");

    let html = assets.load_asset()?;

    let request_path = resolve_request_path(event);
    let kind = classify_resolved(request_path, event);
    debug!(
        request_id = %context.request_id,
        request_path,
        ?kind,
        "classified invocation"
    );

    match kind {
        RequestKind::Http => Ok(html_response(html)),
        RequestKind::Direct => direct_response(context, iso_timestamp(now), &config.environment),
    }
}

/// ISO-8601 in UTC with millisecond precision, e.g. `2026-01-02T03:04:05.678Z`.
pub fn iso_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::PathBuf;

    use serde_json::json;
    use site_dispatch_core::contract::{DirectInvocationBody, ErrorBody};

    use super::*;

    const PAGE: &str = "<!DOCTYPE html><html><body>hello</body></html>";

    struct InMemoryAssets(&'static str);

    impl AssetStore for InMemoryAssets {
        fn load_asset(&self) -> Result<String, DispatchError> {
            Ok(self.0.to_string())
        }
    }

    struct MissingAssets;

    impl AssetStore for MissingAssets {
        fn load_asset(&self) -> Result<String, DispatchError> {
            Err(DispatchError::AssetRead {
                path: PathBuf::from("/var/task/dist/index.html"),
                source: io::Error::new(io::ErrorKind::NotFound, "no such file or directory"),
            })
        }
    }

    fn config(environment: &str) -> HandlerConfig {
        HandlerConfig {
            environment: environment.to_string(),
            asset_path: PathBuf::from("dist/index.html"),
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        "2026-01-02T03:04:05.678Z"
            .parse()
            .expect("timestamp should parse")
    }

    #[test]
    fn api_path_serves_html_asset() {
        let response = handle_site_event(
            &json!({"requestContext": {"http": {"path": "/api/hello"}}}),
            &InvocationContext::new("req-1"),
            &config("development"),
            &InMemoryAssets(PAGE),
            fixed_now(),
        );

        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, PAGE);
        assert_eq!(response.header("Content-Type"), Some("text/html"));
        assert_eq!(response.header("Access-Control-Allow-Origin"), Some("*"));
        assert_eq!(
            response.header("Access-Control-Allow-Methods"),
            Some("GET, POST, OPTIONS")
        );
    }

    #[test]
    fn legacy_method_serves_html_for_any_path() {
        for method in ["GET", "POST", "OPTIONS"] {
            let response = handle_site_event(
                &json!({"httpMethod": method, "path": "/"}),
                &InvocationContext::new("req-2"),
                &config("development"),
                &InMemoryAssets(PAGE),
                fixed_now(),
            );

            assert_eq!(response.status_code, 200, "method {method}");
            assert_eq!(response.body, PAGE, "method {method}");
        }
    }

    #[test]
    fn empty_event_returns_greeting() {
        let response = handle_site_event(
            &json!({}),
            &InvocationContext::new("abc123"),
            &config("development"),
            &InMemoryAssets(PAGE),
            fixed_now(),
        );

        assert_eq!(response.status_code, 200);
        assert!(response.headers.is_none());

        let body: DirectInvocationBody =
            serde_json::from_str(&response.body).expect("greeting body should parse");
        assert_eq!(body.message, "Hello World from AWS Lambda Container!");
        assert_eq!(body.timestamp, "2026-01-02T03:04:05.678Z");
        assert_eq!(body.request_id, "abc123");
        assert_eq!(body.environment, "development");
    }

    #[test]
    fn greeting_reports_configured_environment() {
        let response = handle_site_event(
            &json!({"path": "/"}),
            &InvocationContext::new("abc123"),
            &config("staging"),
            &InMemoryAssets(PAGE),
            fixed_now(),
        );

        let body: Value = serde_json::from_str(&response.body).expect("body should parse");
        assert_eq!(body["environment"], "staging");
    }

    #[test]
    fn missing_asset_returns_internal_error() {
        let response = handle_site_event(
            &json!({"requestContext": {"http": {"path": "/api/hello"}}}),
            &InvocationContext::new("req-3"),
            &config("development"),
            &MissingAssets,
            fixed_now(),
        );

        assert_eq!(response.status_code, 500);
        assert!(response.headers.is_none());

        let body: ErrorBody = serde_json::from_str(&response.body).expect("error body");
        assert_eq!(body.error, "Internal Server Error");
        assert!(body.message.contains("no such file or directory"));
    }

    #[test]
    fn missing_asset_fails_direct_invocations_too() {
        let result = dispatch_site_event(
            &json!({}),
            &InvocationContext::new("req-4"),
            &config("development"),
            &MissingAssets,
            fixed_now(),
        );

        assert!(matches!(result, Err(DispatchError::AssetRead { .. })));
    }

    #[test]
    fn repeated_http_invocations_are_identical() {
        let event = json!({"httpMethod": "GET"});
        let first = handle_site_event(
            &event,
            &InvocationContext::new("one"),
            &config("development"),
            &InMemoryAssets(PAGE),
            fixed_now(),
        );
        let second = handle_site_event(
            &event,
            &InvocationContext::new("two"),
            &config("development"),
            &InMemoryAssets(PAGE),
            Utc::now(),
        );

        assert_eq!(first, second);
    }

    #[test]
    fn repeated_direct_invocations_differ_only_in_timestamp_and_request_id() {
        let event = json!({});
        let later: DateTime<Utc> = "2026-01-02T03:04:09.001Z"
            .parse()
            .expect("timestamp should parse");

        let first = handle_site_event(
            &event,
            &InvocationContext::new("one"),
            &config("production"),
            &InMemoryAssets(PAGE),
            fixed_now(),
        );
        let second = handle_site_event(
            &event,
            &InvocationContext::new("two"),
            &config("production"),
            &InMemoryAssets(PAGE),
            later,
        );

        assert_eq!(first.status_code, second.status_code);
        assert_eq!(first.headers, second.headers);
        assert_ne!(first.body, second.body);

        let mut first_body: Value = serde_json::from_str(&first.body).expect("first body");
        let mut second_body: Value = serde_json::from_str(&second.body).expect("second body");
        assert_eq!(first_body["requestId"], "one");
        assert_eq!(second_body["requestId"], "two");
        assert_eq!(second_body["timestamp"], "2026-01-02T03:04:09.001Z");

        for body in [&mut first_body, &mut second_body] {
            let fields = body.as_object_mut().expect("greeting should be an object");
            fields.remove("timestamp");
            fields.remove("requestId");
        }
        assert_eq!(first_body, second_body);
    }

    #[test]
    fn timestamp_uses_millisecond_zulu_format() {
        assert_eq!(iso_timestamp(fixed_now()), "2026-01-02T03:04:05.678Z");
    }
}
