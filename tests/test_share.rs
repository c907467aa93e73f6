//! Integration tests for cURL generation and share links

mod common;

use common::{reqprobe, ExitStatus};

// =============================================================================
// cURL generation (--curl)
// =============================================================================

#[test]
fn test_curl_flag_prints_command() {
    let response = reqprobe(&[
        "--curl",
        "-X",
        "POST",
        "-H",
        "X-A: 1",
        "-d",
        "{\"x\":1}",
        "http://h/p",
    ]);

    assert_eq!(response.exit_status, ExitStatus::Success);
    assert!(response.stdout.starts_with("curl -X POST"));
    assert!(response.contains("-H \"X-A: 1\""));
    assert!(response.contains("-d '{\"x\":1}'"));
    assert!(response.contains("\"http://h/p\""));
}

#[test]
fn test_curl_flag_bearer_header_emitted_last() {
    let response = reqprobe(&[
        "--curl",
        "-H",
        "X-A: 1",
        "--bearer",
        "tok-9",
        "http://h/p",
    ]);

    let auth_at = response.stdout.find("Authorization: Bearer tok-9").expect("auth header");
    let header_at = response.stdout.find("X-A: 1").expect("explicit header");
    assert!(auth_at > header_at);
}

#[test]
fn test_curl_flag_single_quote_body_double_quoted() {
    let response = reqprobe(&["--curl", "-d", "it's", "http://h/p"]);

    assert!(response.contains("-d \"it's\""), "stdout: {}", response.stdout);
    assert!(!response.contains("-d '"));
}

#[test]
fn test_curl_flag_get_omits_body() {
    let response = reqprobe(&["--curl", "-X", "GET", "-d", "ignored", "http://h/p"]);

    assert!(!response.contains("-d"), "stdout: {}", response.stdout);
}

// =============================================================================
// Share links (--share / --from-share)
// =============================================================================

#[test]
fn test_share_link_shape() {
    let response = reqprobe(&[
        "--share",
        "https://tester.example.com",
        "-X",
        "POST",
        "-d",
        "{\"q\":1}",
        "http://h/p",
    ]);

    assert_eq!(response.exit_status, ExitStatus::Success);
    assert!(response.stdout.starts_with("https://tester.example.com?curl="));
}

#[test]
fn test_share_link_round_trip() {
    let shared = reqprobe(&[
        "--share",
        "https://tester.example.com",
        "-X",
        "PUT",
        "-H",
        "X-One: 1",
        "--bearer",
        "abc",
        "-d",
        "{\"k\":\"v\"}",
        "http://h/p",
    ]);
    let link = shared.stdout.trim();

    let restored = reqprobe(&["--from-share", link, "--offline"]);

    assert_eq!(restored.exit_status, ExitStatus::Success);
    assert!(restored.stdout.starts_with("PUT http://h/p"));
    assert!(restored.contains("X-One: 1"));
    assert!(restored.contains("Authorization: Bearer abc"));
    assert!(restored.contains("\"k\": \"v\""));
}

#[test]
fn test_from_share_without_param_is_an_error() {
    let response = reqprobe(&["--from-share", "https://tester.example.com/?x=1"]);

    assert_eq!(response.exit_status, ExitStatus::Error);
    assert!(
        response.stderr.contains("no curl parameter"),
        "stderr: {}",
        response.stderr
    );
}
