//! Error types for scaffolding operations
//!
//! Every fallible library operation returns [`Result`], so callers and
//! tests can match on the failure kind instead of parsing messages.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// Malformed or missing user input (target name, license id).
    #[error("invalid argument: {reason}")]
    Argument { reason: String },

    /// The destination path is already occupied by a non-empty directory
    /// or an existing file.
    #[error("destination {} already exists", .path.display())]
    AlreadyExists { path: PathBuf },

    /// The target name collides with a module already registered in the
    /// enclosing workspace.
    #[error("workspace {} already has a member named '{name}'", .workspace.display())]
    NameConflict { name: String, workspace: PathBuf },

    /// An `add` was attempted outside an initialized project tree.
    #[error("no project found at {} (missing cmd/root.go); run 'cobble init' first", .path.display())]
    NotInitialized { path: PathBuf },

    /// I/O failure while probing module context or registering a member.
    #[error("filesystem error at {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The generation phase failed after validation passed. The partially
    /// written target has already been cleaned up by the time this
    /// surfaces.
    #[error("failed creating project: {0}")]
    Generation(anyhow::Error),
}

impl ScaffoldError {
    pub fn argument(reason: impl Into<String>) -> Self {
        Self::Argument {
            reason: reason.into(),
        }
    }

    pub fn fs(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
