//! CLI module containing the main entry point logic.
//!
//! This module is separated from main.rs so the launcher can be reused by
//! other binaries. It is the only place that reads the real argument list and
//! environment, and the only place that exits the process.

use crate::config::{self, Environment};
use crate::launcher::Launcher;
use std::ffi::OsString;

/// Send the launcher's own log records to stderr.
///
/// Filtering comes from `TAURI_LAUNCHER_LOG` rather than `RUST_LOG`, which
/// belongs to the child process. Logging is off unless asked for.
pub fn init_logging() {
    let env = env_logger::Env::new().filter_or(config::LOG_VAR, "off");
    // Another logger may already be installed when embedded; keep it.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

/// Main CLI logic: run `tauri` with this process's arguments and exit with
/// its status.
///
/// Every argument after the program name is forwarded, including `--help`,
/// `--version` and `--`; the launcher has no flags of its own.
pub fn run_cli() -> ! {
    init_logging();

    let args: Vec<OsString> = std::env::args_os().skip(1).collect();
    let env = Environment::from_process();

    match Launcher::tauri().launch(&args, &env) {
        Ok(termination) => std::process::exit(termination.exit_code()),
        Err(e) => crate::fatal_error(&format!("Error: {e}"), e.exit_code()),
    }
}
