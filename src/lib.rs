//! reqprobe library interface
//!
//! An HTTP request composer for the command line: assemble a request from
//! flags, import it from a cURL command or a share link, send it, and
//! inspect the response.
//!
//! # Module Organization
//!
//! - [`curl`] - cURL command parsing and generation (the core)
//! - [`models`] - request/response data model
//! - [`client`] - HTTP dispatch via reqwest
//! - [`share`] - share/embed link codec
//! - [`cli`] / [`core`] - argument handling and orchestration
//! - [`errors`] - error types (ReqprobeError, Result)
//! - [`status`] - exit status codes (ExitStatus)

pub mod cli;
pub mod client;
pub mod context;
pub mod core;
pub mod curl;
pub mod errors;
pub mod json;
pub mod models;
pub mod output;
pub mod share;
pub mod status;
