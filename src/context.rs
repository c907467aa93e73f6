//! Execution environment (terminal capabilities)

/// Terminal-facing execution context, captured once at startup.
pub struct Environment {
    pub stdin_isatty: bool,
    pub stdout_isatty: bool,
    pub stderr_isatty: bool,
    pub use_color: bool,
    pub program_name: String,
}

impl Environment {
    pub fn init() -> Self {
        let stdout_isatty = atty::is(atty::Stream::Stdout);
        Self {
            stdin_isatty: atty::is(atty::Stream::Stdin),
            stdout_isatty,
            stderr_isatty: atty::is(atty::Stream::Stderr),
            use_color: stdout_isatty && supports_color(),
            program_name: "reqprobe".to_string(),
        }
    }

    /// A plain environment with styling off, for tests and piped output.
    pub fn plain() -> Self {
        Self {
            stdin_isatty: false,
            stdout_isatty: false,
            stderr_isatty: false,
            use_color: false,
            program_name: "reqprobe".to_string(),
        }
    }
}

/// NO_COLOR and TERM=dumb disable styling even on a TTY.
fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    !matches!(std::env::var("TERM").as_deref(), Ok("dumb"))
}
