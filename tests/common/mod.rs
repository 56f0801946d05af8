//! Common test helpers shared across integration tests

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(dead_code)] // Not all helpers are used by every test file

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Fake `tauri` that echoes each argument on its own line, then the value
/// of `APPIMAGE_EXTRACT_AND_RUN` as the child saw it.
pub const ECHO_TAURI: &str = r#"for a in "$@"; do printf '%s\n' "$a"; done
printf 'APPIMAGE=%s\n' "${APPIMAGE_EXTRACT_AND_RUN-unset}""#;

/// Path of the compiled launcher binary
pub fn get_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_tauri-launcher"))
}

/// Helper to create a temporary directory for tests
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Write an executable `tauri` shell script with `body` into `dir`.
#[cfg(unix)]
pub fn create_fake_tauri(dir: &Path, body: &str) {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("tauri");
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
}

/// `dir` followed by the inherited PATH entries.
pub fn path_with(dir: &Path) -> std::ffi::OsString {
    let inherited = env::var_os("PATH").unwrap_or_default();
    let mut paths = vec![dir.to_path_buf()];
    paths.extend(env::split_paths(&inherited));
    env::join_paths(paths).unwrap()
}

/// Helper to create a Command for the launcher with `dir` first on PATH.
/// Clears the variables the launcher reacts to so the user's shell setup
/// does not leak into tests.
pub fn test_command(dir: &Path) -> Command {
    let mut cmd = Command::new(get_binary_path());
    cmd.env("PATH", path_with(dir))
        .env_remove("APPIMAGE_EXTRACT_AND_RUN")
        .env_remove("TAURI_LAUNCHER_SHELL")
        .env_remove("TAURI_LAUNCHER_LOG");
    cmd
}
