//! Error types for project generation

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the generation core
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The target directory (or a file with the same name) is already present
    #[error("Project directory \"{name}\" already exists.")]
    DirectoryAlreadyExists { name: String },

    /// No generator is registered for the requested project type
    #[error("Unknown project type: {id}")]
    UnknownArchetype { id: String },

    #[error("Unknown language: {id} (expected js or ts)")]
    UnknownLanguage { id: String },

    #[error("Invalid project name \"{name}\": {reason}")]
    InvalidProjectName { name: String, reason: &'static str },

    #[error("Invalid config file {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// Any I/O failure while inspecting or writing the project tree
    #[error("Failed to {action} {}: {source}", path.display())]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScaffoldError {
    pub(crate) fn fs(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Filesystem {
            action,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_exists_message_names_project() {
        let err = ScaffoldError::DirectoryAlreadyExists {
            name: "demo-app".to_string(),
        };
        assert_eq!(err.to_string(), "Project directory \"demo-app\" already exists.");
    }

    #[test]
    fn test_filesystem_error_keeps_source() {
        let err = ScaffoldError::fs(
            "write file",
            "/tmp/x/package.json",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("/tmp/x/package.json"));
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("denied"));
    }
}
