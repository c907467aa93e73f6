//! Response and request rendering
//!
//! Terminal output: a class-colored status line, response headers in wire
//! order, the body (pretty-printed when it is JSON), and a meta line with
//! timing and size. Colors are applied only when the environment allows.

use std::fmt::Write;

use console::style;
use humansize::{format_size, DECIMAL};
use serde_json::Value as JsonValue;

use crate::context::Environment;
use crate::json::format_body;
use crate::models::{ApiRequest, ApiResponse, HttpMethod};

/// Render a dispatched response.
pub fn render_response(env: &Environment, response: &ApiResponse) -> String {
    let mut out = String::new();

    let status_line = if response.is_network_error() {
        "Network Error".to_string()
    } else {
        format!("HTTP {} {}", response.status, response.status_text)
    };
    if env.use_color {
        let styled = match response.status {
            200..=299 => style(status_line).green().bold(),
            300..=399 => style(status_line).yellow().bold(),
            _ => style(status_line).red().bold(),
        };
        let _ = writeln!(out, "{styled}");
    } else {
        let _ = writeln!(out, "{status_line}");
    }

    for (name, value) in &response.headers {
        let _ = writeln!(out, "{name}: {value}");
    }
    out.push('\n');

    let body = render_body(&response.data);
    if !body.is_empty() {
        out.push_str(&body);
        if !body.ends_with('\n') {
            out.push('\n');
        }
    }

    let _ = writeln!(
        out,
        "\nTime: {} ms  Size: {}",
        response.time_ms,
        format_size(response.size_bytes, DECIMAL)
    );
    out
}

/// Render the composed request without sending it (`--offline`).
pub fn render_request(request: &ApiRequest) -> String {
    let mut out = format!("{} {}\n", request.method, request.url);

    for (name, value) in request.materialized_headers() {
        let _ = writeln!(out, "{name}: {value}");
    }

    if !request.body.is_empty() && request.method != HttpMethod::Get {
        out.push('\n');
        out.push_str(&request.body);
        if !out.ends_with('\n') {
            out.push('\n');
        }
    }
    out
}

/// Text bodies are printed raw after a best-effort JSON pretty-pass;
/// structured values serialize with two-space indentation.
fn render_body(data: &JsonValue) -> String {
    match data {
        JsonValue::String(text) => format_body(text),
        value => serde_json::to_string_pretty(value).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use serde_json::json;
    use crate::models::{Authentication, Header};

    fn sample_response() -> ApiResponse {
        let mut headers = IndexMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        ApiResponse {
            status: 200,
            status_text: "OK".to_string(),
            headers,
            data: json!({"id": 1}),
            time_ms: 42,
            size_bytes: 10,
        }
    }

    #[test]
    fn test_render_response_plain() {
        let text = render_response(&Environment::plain(), &sample_response());
        assert!(text.starts_with("HTTP 200 OK\n"));
        assert!(text.contains("content-type: application/json\n"));
        assert!(text.contains("{\n  \"id\": 1\n}"));
        assert!(text.contains("Time: 42 ms"));
        assert!(text.contains("Size: 10 B"));
    }

    #[test]
    fn test_render_network_error() {
        let response = ApiResponse {
            status: 0,
            status_text: "Network Error".to_string(),
            headers: IndexMap::new(),
            data: json!({"error": "connection refused"}),
            time_ms: 3,
            size_bytes: 0,
        };
        let text = render_response(&Environment::plain(), &response);
        assert!(text.starts_with("Network Error\n"));
        assert!(text.contains("connection refused"));
    }

    #[test]
    fn test_render_request_includes_auth_and_body() {
        let request = ApiRequest {
            url: "http://h/p".to_string(),
            method: HttpMethod::Post,
            headers: vec![Header::new("1", "Accept", "*/*")],
            body: "{\"x\": 1}".to_string(),
            authentication: Authentication::bearer("tok"),
        };
        let text = render_request(&request);
        assert!(text.starts_with("POST http://h/p\n"));
        assert!(text.contains("Accept: */*\n"));
        assert!(text.contains("Authorization: Bearer tok\n"));
        assert!(text.ends_with("{\"x\": 1}\n"));
    }

    #[test]
    fn test_render_request_get_omits_body() {
        let request = ApiRequest {
            url: "http://h".to_string(),
            body: "ignored".to_string(),
            ..Default::default()
        };
        let text = render_request(&request);
        assert!(!text.contains("ignored"));
    }
}
