//! Request and response data model
//!
//! The primary data structures shared by the parser, generator, and
//! dispatch layer. A request is transient: produced by CLI flags or one
//! parse operation, consumed by one dispatch or one generate operation.
//!
//! Response headers use [`IndexMap`] to preserve wire order in output.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;

/// HTTP methods supported by the composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// Parse a method name, case-insensitively. Anything outside the five
    /// supported methods is rejected.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Some(HttpMethod::Get),
            "POST" => Some(HttpMethod::Post),
            "PUT" => Some(HttpMethod::Put),
            "PATCH" => Some(HttpMethod::Patch),
            "DELETE" => Some(HttpMethod::Delete),
            _ => None,
        }
    }

    /// Upper-case wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single request header row.
///
/// `id` is opaque and unique within its sequence; it only keeps rows
/// stable across edits and carries no semantic meaning. Disabled rows stay
/// in the model but are never materialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub id: String,
    pub key: String,
    pub value: String,
    pub enabled: bool,
}

impl Header {
    pub fn new(id: impl Into<String>, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            key: key.into(),
            value: value.into(),
            enabled: true,
        }
    }

    /// True when the header should go on the wire.
    pub fn is_active(&self) -> bool {
        self.enabled && !self.key.is_empty() && !self.value.is_empty()
    }
}

/// Authentication scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AuthType {
    #[default]
    None,
    Bearer,
}

/// Bearer-token authentication state.
///
/// `AuthType::None` implies an empty token and `enabled = false`. An
/// active bearer materializes exactly one `Authorization: Bearer <token>`
/// header at dispatch/generation time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Authentication {
    #[serde(rename = "type")]
    pub auth_type: AuthType,
    pub token: String,
    pub enabled: bool,
}

impl Authentication {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            auth_type: AuthType::Bearer,
            token: token.into(),
            enabled: true,
        }
    }

    /// True when a bearer header should be materialized.
    pub fn is_active(&self) -> bool {
        self.enabled && self.auth_type == AuthType::Bearer && !self.token.is_empty()
    }
}

/// A composed HTTP request, independent of any textual encoding.
///
/// Invariant: `headers` never holds an `Authorization` entry; bearer
/// credentials always live in `authentication`. The cURL parser and the
/// CLI header handling both enforce the diversion.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApiRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: Vec<Header>,
    pub body: String,
    pub authentication: Authentication,
}

impl ApiRequest {
    /// Headers as they go on the wire: active entries in sequence order,
    /// with the bearer Authorization header appended last. Duplicate keys
    /// collapse to the last value.
    pub fn materialized_headers(&self) -> IndexMap<String, String> {
        let mut headers: IndexMap<String, String> = self
            .headers
            .iter()
            .filter(|h| h.is_active())
            .map(|h| (h.key.clone(), h.value.clone()))
            .collect();

        if self.authentication.is_active() {
            headers.insert(
                "Authorization".to_string(),
                format!("Bearer {}", self.authentication.token),
            );
        }

        headers
    }
}

/// Response shape handed to the renderer.
///
/// Network failures use the `status == 0` sentinel instead of an error
/// path, so the rendering side has one uniform shape to handle.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse {
    pub status: u16,
    pub status_text: String,
    pub headers: IndexMap<String, String>,
    pub data: JsonValue,
    pub time_ms: u64,
    pub size_bytes: u64,
}

impl ApiResponse {
    pub fn is_network_error(&self) -> bool {
        self.status == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_parse() {
        assert_eq!(HttpMethod::parse("get"), Some(HttpMethod::Get));
        assert_eq!(HttpMethod::parse("Post"), Some(HttpMethod::Post));
        assert_eq!(HttpMethod::parse("DELETE"), Some(HttpMethod::Delete));
        assert_eq!(HttpMethod::parse("HEAD"), None);
        assert_eq!(HttpMethod::parse(""), None);
    }

    #[test]
    fn test_materialized_headers_skip_inactive() {
        let mut request = ApiRequest {
            headers: vec![
                Header::new("1", "Accept", "application/json"),
                Header::new("2", "X-Debug", "1"),
            ],
            ..Default::default()
        };
        request.headers[1].enabled = false;

        let headers = request.materialized_headers();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("Accept").map(String::as_str), Some("application/json"));
    }

    #[test]
    fn test_materialized_headers_append_bearer_last() {
        let request = ApiRequest {
            headers: vec![Header::new("1", "Accept", "*/*")],
            authentication: Authentication::bearer("abc123"),
            ..Default::default()
        };

        let headers = request.materialized_headers();
        let last = headers.last().map(|(k, v)| (k.as_str(), v.as_str()));
        assert_eq!(last, Some(("Authorization", "Bearer abc123")));
    }

    #[test]
    fn test_empty_key_or_value_not_materialized() {
        let request = ApiRequest {
            headers: vec![Header::new("1", "", "x"), Header::new("2", "X-Empty", "")],
            ..Default::default()
        };
        assert!(request.materialized_headers().is_empty());
    }

    #[test]
    fn test_inactive_auth_not_materialized() {
        let mut auth = Authentication::bearer("tok");
        auth.enabled = false;
        let request = ApiRequest {
            authentication: auth,
            ..Default::default()
        };
        assert!(request.materialized_headers().is_empty());
    }
}
