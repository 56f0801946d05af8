//! Launch failures.

use std::io;
use thiserror::Error;

/// Exit status used when the program (or the shell that looks it up) cannot
/// be found, matching what POSIX shells report for an unknown command.
pub const EXIT_NOT_FOUND: i32 = 127;

/// Exit status for any other launch failure.
pub const EXIT_FAILURE: i32 = 1;

#[derive(Debug, Error)]
pub enum LaunchError {
    /// The program is not on the child's search path.
    #[error("could not find `{program}` on PATH: {source}")]
    NotFound {
        program: String,
        #[source]
        source: which::Error,
    },

    /// The OS refused to start the child.
    #[error("failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The child started but waiting on it failed.
    #[error("failed waiting for `{program}`: {source}")]
    Wait {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    /// Status the launcher exits with when this error ends the run.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound { .. } => EXIT_NOT_FOUND,
            Self::Spawn { source, .. } if source.kind() == io::ErrorKind::NotFound => {
                EXIT_NOT_FOUND
            }
            Self::Spawn { .. } | Self::Wait { .. } => EXIT_FAILURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_exit_code() {
        let err = LaunchError::NotFound {
            program: "tauri".to_string(),
            source: which::Error::CannotFindBinaryPath,
        };
        assert_eq!(err.exit_code(), EXIT_NOT_FOUND);
        assert!(err.to_string().contains("`tauri`"));
    }

    #[test]
    fn test_spawn_not_found_maps_to_127() {
        let err = LaunchError::Spawn {
            program: "tauri".to_string(),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(err.exit_code(), EXIT_NOT_FOUND);
    }

    #[test]
    fn test_other_failures_exit_1() {
        let spawn = LaunchError::Spawn {
            program: "tauri".to_string(),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        let wait = LaunchError::Wait {
            program: "tauri".to_string(),
            source: io::Error::other("interrupted"),
        };
        assert_eq!(spawn.exit_code(), EXIT_FAILURE);
        assert_eq!(wait.exit_code(), EXIT_FAILURE);
        assert!(wait.to_string().starts_with("failed waiting for `tauri`"));
    }
}
