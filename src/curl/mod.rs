//! cURL command parsing and generation
//!
//! Two stateless text transformers used in opposite directions: [`parser`]
//! reconstructs a structured request from a shell-quoted `curl` invocation,
//! [`generate`] serializes a structured request back into one. Neither
//! holds session state and both are safe to call concurrently.

pub mod generate;
pub mod parser;

pub use generate::generate_curl;
pub use parser::{is_valid_curl, parse};
