//! # tauri-launcher
//!
//! Runs the `tauri` CLI with the caller's arguments, defaulting
//! `APPIMAGE_EXTRACT_AND_RUN=1` so AppImage bundling works without FUSE, and
//! exits with the CLI's own status.

pub mod cli;
pub mod config;
pub mod error;
pub mod launcher;

pub use config::Environment;
pub use error::LaunchError;
pub use launcher::{Launcher, Termination};

/// Print an error message and exit with `code`.
pub fn fatal_error(message: &str, code: i32) -> ! {
    eprintln!("{message}");
    std::process::exit(code);
}
