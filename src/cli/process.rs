//! Request assembly from parsed CLI flags
//!
//! An imported cURL command or share link forms the base request when
//! given; explicit flags are layered on top and win.

use tracing::warn;

use crate::cli::Args;
use crate::curl;
use crate::errors::{ReqprobeError, Result};
use crate::json::validate_json;
use crate::models::{ApiRequest, Authentication, Header, HttpMethod};
use crate::share;

/// Build the request the user described.
pub fn build_request(args: &Args) -> Result<ApiRequest> {
    let mut request = import_base(args)?.unwrap_or_default();

    if let Some(url) = &args.url {
        request.url = url.clone();
    }

    if let Some(method) = &args.method {
        request.method = HttpMethod::parse(method)
            .ok_or_else(|| ReqprobeError::Argument(format!("unsupported HTTP method: {method}")))?;
    }

    for raw in &args.headers {
        push_header(&mut request, raw)?;
    }

    if let Some(data) = &args.data {
        request.body = data.clone();
        // Same defaulting as the parser: a body with no explicit method
        // means POST.
        if args.method.is_none() && request.method == HttpMethod::Get {
            request.method = HttpMethod::Post;
        }
    }

    if let Some(token) = &args.bearer {
        request.authentication = Authentication::bearer(token);
    }

    if !request.body.is_empty() && validate_json(&request.body).is_err() {
        warn!("request body is not valid JSON; sending as-is");
    }

    Ok(request)
}

fn import_base(args: &Args) -> Result<Option<ApiRequest>> {
    if let Some(command) = &args.import_curl {
        if !curl::is_valid_curl(command) {
            return Err(ReqprobeError::Parse(
                "input does not look like a curl command".to_string(),
            ));
        }
        return Ok(Some(curl::parse(command)));
    }

    if let Some(link) = &args.from_share {
        return match share::request_from_embed_url(link)? {
            Some(request) => Ok(Some(request)),
            None => Err(ReqprobeError::Parse(
                "share link carries no curl parameter".to_string(),
            )),
        };
    }

    Ok(None)
}

/// Split a "Key: Value" argument on the first colon and append it.
/// `Authorization: Bearer <token>` is diverted into the authentication
/// slot so the header list never carries credentials; other Authorization
/// schemes are dropped.
fn push_header(request: &mut ApiRequest, raw: &str) -> Result<()> {
    let Some((key, value)) = raw.split_once(':') else {
        return Err(ReqprobeError::Argument(format!(
            "header must be \"Key: Value\": {raw}"
        )));
    };
    let key = key.trim();
    let value = value.trim();

    if key.eq_ignore_ascii_case("authorization") {
        if let Some(token) = curl::parser::bearer_token(value) {
            request.authentication = Authentication::bearer(token);
        }
        return Ok(());
    }

    let id = (request.headers.len() + 1).to_string();
    request.headers.push(Header::new(id, key, value));
    Ok(())
}
