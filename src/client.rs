//! HTTP dispatch
//!
//! A thin wrapper over reqwest: materializes headers, sends the request,
//! measures timing and size, and maps transport failures to the status-0
//! sentinel response so the rendering path has one shape to handle.
//! Fire-and-forget per invocation: no retry, no cancellation, no
//! deduplication; any timeout is enforced by the transport.

use std::time::{Duration, Instant};

use indexmap::IndexMap;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde_json::{json, Value as JsonValue};
use tracing::debug;
use url::Url;

use crate::errors::{ReqprobeError, Result};
use crate::models::{ApiRequest, ApiResponse, HttpMethod};

pub const USER_AGENT_STRING: &str = concat!("reqprobe/", env!("CARGO_PKG_VERSION"));

/// Send a request and hand back a response in all cases: transport and
/// request-building failures become the `status == 0` sentinel instead of
/// an error.
pub async fn send_request(request: &ApiRequest, timeout: Option<f64>) -> ApiResponse {
    let started = Instant::now();
    match try_send(request, timeout).await {
        Ok(mut response) => {
            response.time_ms = started.elapsed().as_millis() as u64;
            response
        }
        Err(err) => {
            debug!(error = %err, "request failed");
            network_error(&err, started.elapsed())
        }
    }
}

async fn try_send(request: &ApiRequest, timeout: Option<f64>) -> Result<ApiResponse> {
    let mut builder = Client::builder().user_agent(USER_AGENT_STRING);
    if let Some(seconds) = timeout {
        builder = builder.timeout(Duration::from_secs_f64(seconds));
    }
    let client = builder.build()?;

    let url = Url::parse(&request.url)?;
    let method = Method::from_bytes(request.method.as_str().as_bytes())
        .map_err(|_| ReqprobeError::Argument(format!("invalid method: {}", request.method)))?;

    let mut headers = HeaderMap::new();
    for (key, value) in request.materialized_headers() {
        let name = HeaderName::from_bytes(key.as_bytes())
            .map_err(|e| ReqprobeError::Argument(format!("invalid header name {key:?}: {e}")))?;
        let value = HeaderValue::from_str(&value)
            .map_err(|e| ReqprobeError::Argument(format!("invalid value for header {key}: {e}")))?;
        headers.insert(name, value);
    }

    // Requests with a body default to JSON unless the user said otherwise.
    if !request.body.is_empty() && !headers.contains_key(CONTENT_TYPE) {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }

    let mut pending = client.request(method, url).headers(headers);
    if request.method != HttpMethod::Get && !request.body.is_empty() {
        pending = pending.body(request.body.clone());
    }

    let response = pending.send().await?;

    let status = response.status();
    let mut response_headers = IndexMap::new();
    for (name, value) in response.headers() {
        response_headers.insert(
            name.as_str().to_string(),
            String::from_utf8_lossy(value.as_bytes()).into_owned(),
        );
    }

    let is_json = response_headers
        .get("content-type")
        .is_some_and(|ct| ct.contains("application/json"));

    let bytes = response.bytes().await?;
    let size_bytes = bytes.len() as u64;
    let text = String::from_utf8_lossy(&bytes).into_owned();
    let data = if is_json {
        serde_json::from_str(&text).unwrap_or(JsonValue::String(text))
    } else {
        JsonValue::String(text)
    };

    Ok(ApiResponse {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or_default().to_string(),
        headers: response_headers,
        data,
        time_ms: 0,
        size_bytes,
    })
}

fn network_error(err: &ReqprobeError, elapsed: Duration) -> ApiResponse {
    ApiResponse {
        status: 0,
        status_text: "Network Error".to_string(),
        headers: IndexMap::new(),
        data: json!({ "error": err.to_string() }),
        time_ms: elapsed.as_millis() as u64,
        size_bytes: 0,
    }
}
