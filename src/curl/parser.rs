//! Best-effort cURL command parsing
//!
//! Turns a `curl` invocation (typically copied from browser devtools or
//! API documentation) back into a structured request. Each field is
//! extracted by an independent scan over the normalized command, and every
//! scan degrades to a default when nothing matches, so parsing is total:
//! the worst case is an empty URL, GET, no headers, no auth, empty body.
//! Callers reject an empty URL before attempting dispatch.
//!
//! Known limitations, kept on purpose so textual behavior stays stable:
//! - line-continuation joining is a global pass; a literal
//!   backslash-newline inside a quoted value is joined too (devtools
//!   copies only use continuations between flags);
//! - non-Bearer `Authorization` values are dropped;
//! - repeated data flags are not concatenated (curl would join with `&`).

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::json::format_body;
use crate::models::{ApiRequest, Authentication, Header, HttpMethod};

/// Body flags, tried in this order at every scan position. All four are
/// treated identically; curl's semantic differences between them are not
/// preserved.
const DATA_FLAGS: [&str; 4] = ["-d", "--data", "--data-raw", "--data-binary"];

static LINE_CONTINUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\\s*\n\s*").unwrap());
static CURL_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^curl\s+").unwrap());
static METHOD_FLAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)(?:-X|--request)\s+['"]?(\w+)['"]?"#).unwrap());
static HEADER_FLAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)(?:-H|--header)\s+['"]([^'"]+)['"]"#).unwrap());
static BEARER_VALUE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^Bearer\s+(.+)$").unwrap());

/// Check whether a chunk of text plausibly contains a curl command.
///
/// A substring heuristic, not a grammar check: anything containing the
/// word `curl ` passes. Used as a pre-flight gate before a full parse.
pub fn is_valid_curl(input: &str) -> bool {
    let normalized = input.trim().to_lowercase();
    normalized.starts_with("curl ") || normalized.contains("curl ")
}

/// Parse a cURL command into a fully-populated request.
pub fn parse(curl_command: &str) -> ApiRequest {
    let curl = normalize(curl_command);
    debug!(len = curl.len(), "normalized curl command");

    let url = extract_url(&curl);
    let method = extract_method(&curl);
    let (headers, authentication) = extract_headers(&curl);
    let body = format_body(&extract_body(&curl));

    // A body-bearing command with no explicit -X almost never means GET;
    // curl itself would have sent POST.
    let method = if !body.is_empty() && method == HttpMethod::Get {
        HttpMethod::Post
    } else {
        method
    };

    debug!(%url, %method, headers = headers.len(), "parsed curl command");

    ApiRequest {
        url,
        method,
        headers,
        body,
        authentication,
    }
}

/// Join shell line continuations and strip the leading `curl` token.
///
/// Whitespace inside quoted segments is otherwise preserved; only the
/// backslash-newline sequences collapse, each to a single space.
fn normalize(curl_command: &str) -> String {
    let joined = LINE_CONTINUATION.replace_all(curl_command, " ");
    CURL_PREFIX.replace(joined.trim(), "").into_owned()
}

/// The target URL is conventionally the final bare argument, while header
/// or body values earlier in the command may contain `http://` substrings.
/// Scanning tokens from the end favors the trailing URL over such decoys.
fn extract_url(curl: &str) -> String {
    for token in curl.split_whitespace().rev() {
        let candidate = strip_outer_quotes(token);
        if candidate.starts_with("http://") || candidate.starts_with("https://") {
            return candidate.to_string();
        }
    }
    String::new()
}

fn strip_outer_quotes(token: &str) -> &str {
    let token = token.strip_prefix(['\'', '"']).unwrap_or(token);
    token.strip_suffix(['\'', '"']).unwrap_or(token)
}

/// First `-X`/`--request` occurrence wins; duplicates are not validated.
/// An unsupported method word falls back to GET.
fn extract_method(curl: &str) -> HttpMethod {
    METHOD_FLAG
        .captures(curl)
        .and_then(|caps| HttpMethod::parse(&caps[1]))
        .unwrap_or(HttpMethod::Get)
}

/// Scan all `-H`/`--header` occurrences left to right. Each quoted value
/// splits on its FIRST colon only, so header values may contain colons.
/// `Authorization: Bearer <token>` is diverted into the authentication
/// slot (later occurrences overwrite earlier ones); other Authorization
/// schemes are dropped. Remaining headers keep encounter order and get
/// sequential 1-based ids.
fn extract_headers(curl: &str) -> (Vec<Header>, Authentication) {
    let mut headers = Vec::new();
    let mut authentication = Authentication::none();
    let mut next_id = 1u32;

    for caps in HEADER_FLAG.captures_iter(curl) {
        let line = &caps[1];
        let Some(colon) = line.find(':') else { continue };
        let key = line[..colon].trim();
        let value = line[colon + 1..].trim();

        if key.eq_ignore_ascii_case("authorization") {
            if let Some(token) = bearer_token(value) {
                authentication = Authentication::bearer(token);
            }
        } else {
            headers.push(Header::new(next_id.to_string(), key, value));
            next_id += 1;
        }
    }

    (headers, authentication)
}

/// Extract the token from an `Authorization` header value of the form
/// `Bearer <token>` (case-insensitive keyword, at least one space).
pub fn bearer_token(value: &str) -> Option<&str> {
    BEARER_VALUE
        .captures(value)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Quote styles are tried strictly in order: single-quoted first (the
/// common shape for JSON bodies), then double-quoted, then a bare token.
/// Each pass scans the whole command before the next style is tried, and
/// only the first match of the winning pass is used; repeated data flags
/// are never concatenated.
fn extract_body(curl: &str) -> String {
    for quote in ['\'', '"'] {
        if let Some(body) = scan_quoted_body(curl, quote) {
            debug!(%quote, "found quoted request body");
            return body;
        }
    }
    if let Some(body) = scan_bare_body(curl) {
        debug!("found bare request body");
        return body;
    }
    String::new()
}

/// Byte length of the data flag at offset `at`, when one is present and
/// followed by at least one whitespace character.
fn data_flag_at(curl: &str, at: usize) -> Option<usize> {
    let rest = &curl[at..];
    for flag in DATA_FLAGS {
        let Some(head) = rest.get(..flag.len()) else { continue };
        if !head.eq_ignore_ascii_case(flag) {
            continue;
        }
        if rest[flag.len()..].starts_with(|c: char| c.is_whitespace()) {
            return Some(flag.len());
        }
    }
    None
}

/// Find the first data flag whose value is wrapped in `quote`. The closing
/// quote is the nearest one after the opener, so multi-line JSON bodies
/// are captured whole without swallowing later arguments.
fn scan_quoted_body(curl: &str, quote: char) -> Option<String> {
    for (at, _) in curl.char_indices() {
        let Some(flag_len) = data_flag_at(curl, at) else { continue };
        let value = curl[at + flag_len..].trim_start();
        let Some(inner) = value.strip_prefix(quote) else { continue };
        if let Some(end) = inner.find(quote) {
            return Some(inner[..end].to_string());
        }
    }
    None
}

/// Unquoted fallback: a single whitespace-delimited token after the flag.
fn scan_bare_body(curl: &str) -> Option<String> {
    for (at, _) in curl.char_indices() {
        let Some(flag_len) = data_flag_at(curl, at) else { continue };
        let value = curl[at + flag_len..].trim_start();
        if let Some(token) = value.split_whitespace().next() {
            return Some(token.to_string());
        }
    }
    None
}
