//! Main execution logic
//!
//! Parses arguments, composes the request, and dispatches to one of the
//! output modes: cURL generation, share link, offline preview, or send.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{self, Args};
use crate::client;
use crate::context::Environment;
use crate::curl;
use crate::models::ApiRequest;
use crate::output;
use crate::share;
use crate::status::ExitStatus;

/// Main entry point for the CLI.
pub fn run(args: Vec<String>, env: Environment) -> ExitStatus {
    let parsed = match Args::try_parse_from(&args) {
        Ok(parsed) => parsed,
        Err(e) => {
            e.print().ok();
            return if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                ExitStatus::Success
            } else {
                ExitStatus::Error
            };
        }
    };

    init_logging(parsed.debug);

    let request = match cli::build_request(&parsed) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("{}: {}", env.program_name, e);
            return ExitStatus::Error;
        }
    };

    if parsed.curl {
        println!("{}", curl::generate_curl(&request));
        return ExitStatus::Success;
    }

    if let Some(base_url) = &parsed.share {
        println!("{}", share::build_embed_url(base_url, &request));
        return ExitStatus::Success;
    }

    if parsed.offline {
        print!("{}", output::render_request(&request));
        return ExitStatus::Success;
    }

    if request.url.is_empty() {
        eprintln!(
            "{}: no URL to send; pass a URL or import a curl command",
            env.program_name
        );
        return ExitStatus::Error;
    }

    dispatch(&env, &request, parsed.timeout)
}

fn dispatch(env: &Environment, request: &ApiRequest, timeout: Option<f64>) -> ExitStatus {
    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("{}: failed to start runtime: {}", env.program_name, e);
            return ExitStatus::Error;
        }
    };

    let response = runtime.block_on(client::send_request(request, timeout));
    print!("{}", output::render_response(env, &response));
    ExitStatus::from_response_status(response.status)
}

fn init_logging(debug: bool) {
    let default_filter = if debug { "reqprobe=debug" } else { "reqprobe=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}
