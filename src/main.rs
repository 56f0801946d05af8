//! # tauri-launcher
//!
//! Thin front for the `tauri` CLI.
//!
//! ## Usage
//!
//! - Build a bundle: `tauri-launcher build`
//! - Pass flags through: `tauri-launcher build --target x86_64-unknown-linux-gnu`
//! - Dev server: `tauri-launcher dev`
//!
//! Set `TAURI_LAUNCHER_LOG=debug` to see how `tauri` was resolved and how it exited.

/// Entry point for the CLI tool.
fn main() {
    tauri_launcher::cli::run_cli();
}
