//! Spawning the external CLI and reporting how it ended.
//!
//! The child inherits stdin, stdout and stderr, so whatever it prints reaches
//! the terminal directly. The launcher only decides *what* runs and *with which
//! environment*, then waits.

use crate::config::{self, Environment};
use crate::error::LaunchError;
use log::debug;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

/// Shell script that replaces the shell with `$0`, forwarding the remaining
/// positional parameters untouched. The program name travels as `$0` so it is
/// looked up on PATH by the shell but never parsed as shell syntax.
pub const EXEC_SCRIPT: &str = "exec \"$0\" \"$@\"";

/// How the child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The child exited with a numeric status.
    Exited(i32),
    /// The child was killed by a signal and has no exit status.
    Signaled { signal: Option<i32> },
}

impl Termination {
    /// Status the launcher should exit with. A signaled child maps to 0.
    #[must_use]
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Exited(code) => code,
            Self::Signaled { .. } => 0,
        }
    }
}

impl From<ExitStatus> for Termination {
    fn from(status: ExitStatus) -> Self {
        match status.code() {
            Some(code) => Self::Exited(code),
            None => Self::Signaled {
                signal: signal_of(status),
            },
        }
    }
}

#[cfg(unix)]
fn signal_of(status: ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn signal_of(_status: ExitStatus) -> Option<i32> {
    None
}

/// Launches one external program with passthrough arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launcher {
    program: OsString,
}

impl Launcher {
    #[must_use]
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Launcher for the `tauri` CLI.
    #[must_use]
    pub fn tauri() -> Self {
        Self::new(config::TAURI_PROGRAM)
    }

    #[must_use]
    pub fn program(&self) -> &OsStr {
        &self.program
    }

    fn display_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }

    /// Look the program up on the `PATH` of `env`.
    ///
    /// # Errors
    /// Returns [`LaunchError::NotFound`] if no executable of that name exists
    /// on the search path.
    pub fn resolve(&self, env: &Environment) -> Result<PathBuf, LaunchError> {
        let cwd = std::env::current_dir().unwrap_or_default();
        which::which_in(&self.program, env.get("PATH"), cwd).map_err(|source| {
            LaunchError::NotFound {
                program: self.display_name(),
                source,
            }
        })
    }

    /// Check the program exists before spawning, so a missing one gets a
    /// clear error. Without a `PATH` the shell falls back to its default
    /// search path, which `which` cannot reproduce, so the lookup is left to
    /// the shell.
    #[cfg(unix)]
    fn locate(&self, env: &Environment) -> Result<Option<PathBuf>, LaunchError> {
        if !env.contains("PATH") {
            debug!("PATH unset, leaving lookup of `{}` to the shell", self.display_name());
            return Ok(None);
        }
        let resolved = self.resolve(env)?;
        debug!("resolved `{}` to {}", self.display_name(), resolved.display());
        Ok(Some(resolved))
    }

    #[cfg(not(unix))]
    fn locate(&self, env: &Environment) -> Result<Option<PathBuf>, LaunchError> {
        let resolved = self.resolve(env)?;
        debug!("resolved `{}` to {}", self.display_name(), resolved.display());
        Ok(Some(resolved))
    }

    /// Build the command that runs the program with `args`.
    ///
    /// The child's environment is exactly `env` plus the launch defaults, and
    /// all three standard streams are inherited.
    ///
    /// # Errors
    /// Returns [`LaunchError::NotFound`] if `env` has a `PATH` and the
    /// program is not on it.
    pub fn command(&self, args: &[OsString], env: &Environment) -> Result<Command, LaunchError> {
        if !env.contains(config::APPIMAGE_EXTRACT_AND_RUN) {
            debug!(
                "{} unset, defaulting to {}",
                config::APPIMAGE_EXTRACT_AND_RUN,
                config::APPIMAGE_EXTRACT_AND_RUN_DEFAULT
            );
        }
        let env = env.clone().with_launch_defaults();

        let resolved = self.locate(&env)?;
        let mut cmd = self.base_command(resolved.as_deref(), &env);
        cmd.args(args)
            .env_clear()
            .envs(env.iter())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        Ok(cmd)
    }

    #[cfg(unix)]
    fn base_command(&self, _resolved: Option<&Path>, env: &Environment) -> Command {
        let shell = env.shell();
        debug!("running through shell {}", shell.to_string_lossy());
        let mut cmd = Command::new(shell);
        cmd.arg("-c").arg(EXEC_SCRIPT).arg(&self.program);
        cmd
    }

    // No POSIX shell to lean on; run the resolved file so `tauri.cmd` and
    // friends are found through PATHEXT.
    #[cfg(not(unix))]
    fn base_command(&self, resolved: Option<&Path>, _env: &Environment) -> Command {
        resolved.map_or_else(|| Command::new(&self.program), Command::new)
    }

    /// Run the program with `args` and wait for it to finish.
    ///
    /// # Errors
    /// Returns a [`LaunchError`] if the program cannot be found, started, or
    /// waited on. A non-zero exit is not an error.
    pub fn launch(&self, args: &[OsString], env: &Environment) -> Result<Termination, LaunchError> {
        let mut cmd = self.command(args, env)?;

        let mut child = cmd.spawn().map_err(|source| LaunchError::Spawn {
            program: self.display_name(),
            source,
        })?;

        let status = child.wait().map_err(|source| LaunchError::Wait {
            program: self.display_name(),
            source,
        })?;

        let termination = Termination::from(status);
        debug!("`{}` finished: {termination:?}", self.display_name());
        Ok(termination)
    }
}
