//! Launch configuration: the environment handed to the child process and the
//! launcher settings read from it.
//!
//! The environment is an explicit value rather than a view of the process
//! globals, so every setting here can be exercised with a hand-built map.

use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};

/// Tells AppImage-packaged tools to extract themselves instead of mounting
/// through FUSE, which is unavailable on many CI runners and containers.
pub const APPIMAGE_EXTRACT_AND_RUN: &str = "APPIMAGE_EXTRACT_AND_RUN";

/// Value given to [`APPIMAGE_EXTRACT_AND_RUN`] when the caller has not set it.
pub const APPIMAGE_EXTRACT_AND_RUN_DEFAULT: &str = "1";

/// The external CLI this crate launches.
pub const TAURI_PROGRAM: &str = "tauri";

/// Overrides the shell used to look up and exec the program (Unix only).
pub const SHELL_VAR: &str = "TAURI_LAUNCHER_SHELL";

/// Log filter for the launcher's own diagnostics, in `env_logger` syntax.
pub const LOG_VAR: &str = "TAURI_LAUNCHER_LOG";

const DEFAULT_SHELL: &str = "sh";

/// Environment variables for the child process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: BTreeMap<OsString, OsString>,
}

impl Environment {
    /// An empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current process environment.
    #[must_use]
    pub fn from_process() -> Self {
        std::env::vars_os().collect()
    }

    /// Find the stored spelling of `key`. Windows treats variable names
    /// case-insensitively, so `Path` and `PATH` are the same variable there.
    fn stored_key(&self, key: &OsStr) -> Option<&OsString> {
        if cfg!(windows) {
            let wanted = key.to_string_lossy();
            self.vars
                .keys()
                .find(|k| k.to_string_lossy().eq_ignore_ascii_case(&wanted))
        } else {
            self.vars.get_key_value(key).map(|(k, _)| k)
        }
    }

    #[must_use]
    pub fn get(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        let key = self.stored_key(key.as_ref())?;
        self.vars.get(key).map(OsString::as_os_str)
    }

    #[must_use]
    pub fn contains(&self, key: impl AsRef<OsStr>) -> bool {
        self.stored_key(key.as_ref()).is_some()
    }

    pub fn set(&mut self, key: impl Into<OsString>, value: impl Into<OsString>) {
        let key = key.into();
        self.remove(&key);
        self.vars.insert(key, value.into());
    }

    pub fn remove(&mut self, key: impl AsRef<OsStr>) -> Option<OsString> {
        let stored = self.stored_key(key.as_ref())?.clone();
        self.vars.remove(&stored)
    }

    /// Set `key` to `value` only if it is absent. An existing value is kept
    /// even when it is the empty string.
    ///
    /// Returns `true` if the value was inserted.
    pub fn set_default(&mut self, key: impl Into<OsString>, value: impl Into<OsString>) -> bool {
        let key = key.into();
        if self.contains(&key) {
            return false;
        }
        self.vars.insert(key, value.into());
        true
    }

    /// Apply the defaults every `tauri` launch gets.
    #[must_use]
    pub fn with_launch_defaults(mut self) -> Self {
        self.set_default(APPIMAGE_EXTRACT_AND_RUN, APPIMAGE_EXTRACT_AND_RUN_DEFAULT);
        self
    }

    /// Shell used for command search: [`SHELL_VAR`] if set and non-empty,
    /// otherwise `sh`.
    #[must_use]
    pub fn shell(&self) -> OsString {
        match self.get(SHELL_VAR) {
            Some(shell) if !shell.is_empty() => shell.to_os_string(),
            _ => OsString::from(DEFAULT_SHELL),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
        self.vars
            .iter()
            .map(|(k, v)| (k.as_os_str(), v.as_os_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Environment
where
    K: Into<OsString>,
    V: Into<OsString>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut env = Self::new();
        for (key, value) in iter {
            env.set(key, value);
        }
        env
    }
}
