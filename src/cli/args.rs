//! CLI argument definitions using clap

use clap::Parser;

/// Compose, share, and send HTTP requests, with cURL import and export.
#[derive(Parser, Debug, Default)]
#[command(
    name = "reqprobe",
    version,
    about = "An interactive HTTP request composer for the command line"
)]
pub struct Args {
    /// Target URL
    pub url: Option<String>,

    /// HTTP method (GET, POST, PUT, PATCH, DELETE)
    #[arg(short = 'X', long = "request", value_name = "METHOD")]
    pub method: Option<String>,

    /// Request header as "Key: Value" (repeatable)
    #[arg(short = 'H', long = "header", value_name = "HEADER")]
    pub headers: Vec<String>,

    /// Request body
    #[arg(short = 'd', long = "data", value_name = "BODY")]
    pub data: Option<String>,

    /// Bearer token for the Authorization header
    #[arg(long, value_name = "TOKEN")]
    pub bearer: Option<String>,

    /// Build the request from a cURL command string
    #[arg(long, value_name = "COMMAND")]
    pub import_curl: Option<String>,

    /// Build the request from a share/embed link
    #[arg(long, value_name = "URL", conflicts_with = "import_curl")]
    pub from_share: Option<String>,

    /// Print the equivalent cURL command instead of sending
    #[arg(long)]
    pub curl: bool,

    /// Print a share link that pre-loads this request
    #[arg(long, value_name = "BASE_URL")]
    pub share: Option<String>,

    /// Compose and print the request without sending it
    #[arg(long)]
    pub offline: bool,

    /// Request timeout in seconds (enforced by the transport)
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<f64>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
