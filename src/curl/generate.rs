//! cURL command generation
//!
//! Serializes a composed request into a shell-quoted, multi-line `curl`
//! string for sharing and round-tripping. Not a byte-exact inverse of the
//! parser (quoting style and inferred methods can differ), but re-parsing
//! the output reproduces the same structured request.

use std::fmt::Write;

use crate::models::{ApiRequest, HttpMethod};

/// Render `request` as a paste-able curl command.
pub fn generate_curl(request: &ApiRequest) -> String {
    let mut curl = format!("curl -X {}", request.method);

    for header in request.headers.iter().filter(|h| h.is_active()) {
        let _ = write!(curl, " \\\n  -H \"{}: {}\"", header.key, header.value);
    }

    // The bearer header always comes last, wherever it originated.
    if request.authentication.is_active() {
        let _ = write!(
            curl,
            " \\\n  -H \"Authorization: Bearer {}\"",
            request.authentication.token
        );
    }

    if !request.body.is_empty() && request.method != HttpMethod::Get {
        // Single quotes keep JSON bodies readable without escaping; fall
        // back to escaped double quotes when the body itself contains a
        // single quote.
        if request.body.contains('\'') {
            let _ = write!(curl, " \\\n  -d \"{}\"", request.body.replace('"', "\\\""));
        } else {
            let _ = write!(curl, " \\\n  -d '{}'", request.body);
        }
    }

    let _ = write!(curl, " \\\n  \"{}\"", request.url);
    curl
}
