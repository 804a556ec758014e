use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Step of the run a failure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Looking up the current user's home directory
    ResolveHome,
    /// Creating the `.claude` directory
    CreateDirectory,
    /// Writing `settings.json`
    Write,
    /// Re-reading `settings.json` after the write
    ReadBack,
    /// Printing the confirmation
    Confirm,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl Operation {
    pub fn display_name(&self) -> &'static str {
        match self {
            Operation::ResolveHome => "Home Directory Lookup",
            Operation::CreateDirectory => "Directory Creation",
            Operation::Write => "Settings Write",
            Operation::ReadBack => "Settings Read-Back",
            Operation::Confirm => "Confirmation Output",
        }
    }

    /// Actionable hint shown to the operator
    pub fn suggestion(&self) -> &'static str {
        match self {
            Operation::ResolveHome => {
                "No home directory could be determined for the current user. Check that HOME (or the platform equivalent) is set."
            }
            Operation::CreateDirectory => {
                "Check permissions on the home directory and that no regular file named .claude is in the way."
            }
            Operation::Write => {
                "Check free disk space and write permissions on the .claude directory."
            }
            Operation::ReadBack => {
                "The file was written but could not be reopened. Something else may be modifying the directory."
            }
            Operation::Confirm => "Standard output was closed before the confirmation could be printed.",
        }
    }
}

/// Failure of any filesystem step of a run
#[derive(Debug, Error)]
pub enum FilesystemError {
    /// No home directory for the current user
    #[error("could not determine the home directory of the current user")]
    HomeUnavailable,

    /// Creating the config directory failed
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    /// Staging or renaming the settings file failed
    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    /// The written file could not be reopened
    #[error("failed to read back {}: {source}", .path.display())]
    ReadBack { path: PathBuf, source: io::Error },

    /// Writing the confirmation to stdout failed
    #[error("failed to print confirmation: {source}")]
    Confirm { source: io::Error },
}

impl FilesystemError {
    pub fn operation(&self) -> Operation {
        match self {
            FilesystemError::HomeUnavailable => Operation::ResolveHome,
            FilesystemError::CreateDir { .. } => Operation::CreateDirectory,
            FilesystemError::Write { .. } => Operation::Write,
            FilesystemError::ReadBack { .. } => Operation::ReadBack,
            FilesystemError::Confirm { .. } => Operation::Confirm,
        }
    }

    /// Path the failing operation was acting on, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            FilesystemError::CreateDir { path, .. }
            | FilesystemError::Write { path, .. }
            | FilesystemError::ReadBack { path, .. } => Some(path.as_path()),
            FilesystemError::HomeUnavailable | FilesystemError::Confirm { .. } => None,
        }
    }

    /// Multi-line report for stderr
    pub fn diagnostics(&self) -> String {
        let op = self.operation();
        match self.path() {
            Some(path) => format!(
                "{} failed\nPath: {}\nError: {}\nSuggestion: {}",
                op,
                path.display(),
                self,
                op.suggestion()
            ),
            None => format!("{} failed\nError: {}\nSuggestion: {}", op, self, op.suggestion()),
        }
    }
}
