//! Share/embed link codec
//!
//! A request is shared by base64-encoding its generated cURL command into
//! a `curl` query parameter. Decoding the parameter and re-parsing it
//! reconstructs an equivalent request, which is how a shared link
//! pre-loads the composer.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use url::Url;

use crate::curl::{generate_curl, parse};
use crate::errors::{ReqprobeError, Result};
use crate::models::ApiRequest;

/// Base64 of a cURL command, suitable for a query parameter value.
pub fn encode_share_param(curl_command: &str) -> String {
    BASE64.encode(curl_command)
}

/// Inverse of [`encode_share_param`].
pub fn decode_share_param(param: &str) -> Result<String> {
    let bytes = BASE64
        .decode(param.trim())
        .map_err(|e| ReqprobeError::Parse(format!("invalid base64 in curl parameter: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|e| ReqprobeError::Parse(format!("curl parameter is not valid UTF-8: {e}")))
}

/// Build a link that pre-loads the composer with `request`.
pub fn build_embed_url(base_url: &str, request: &ApiRequest) -> String {
    let encoded = encode_share_param(&generate_curl(request));
    format!("{}?curl={}", base_url, urlencoding::encode(&encoded))
}

/// Reconstruct a request from an embed link. `Ok(None)` when the link
/// carries no `curl` parameter.
pub fn request_from_embed_url(embed_url: &str) -> Result<Option<ApiRequest>> {
    let url = Url::parse(embed_url)?;
    let Some((_, param)) = url.query_pairs().find(|(key, _)| key.as_ref() == "curl") else {
        return Ok(None);
    };
    let curl_command = decode_share_param(&param)?;
    Ok(Some(parse(&curl_command)))
}
