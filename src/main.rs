use std::sync::atomic::{AtomicBool, Ordering};

use reqprobe::context::Environment;
use reqprobe::core;
use reqprobe::status::ExitStatus;

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Entry point: installs the Ctrl+C handler and delegates to core::run.
fn main() -> ExitStatus {
    ctrlc::set_handler(|| {
        // Second interrupt: the user really wants out.
        if INTERRUPTED.swap(true, Ordering::SeqCst) {
            std::process::exit(ExitStatus::Interrupted as i32);
        }
        eprintln!("\nInterrupted");
    })
    .ok();

    let args: Vec<String> = std::env::args().collect();
    let env = Environment::init();

    let status = core::run(args, env);

    if INTERRUPTED.load(Ordering::SeqCst) {
        return ExitStatus::Interrupted;
    }
    status
}
