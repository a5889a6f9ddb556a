//! Domain errors for scaffolding operations
//!
//! Application glue uses `anyhow::Result` with context; the variants here are the
//! conditions callers want to tell apart (e.g. "already exists" is reported as a
//! warning rather than a failure).

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the scaffolding core
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Module '{name}' already exists at {}", path.display())]
    ModuleExists { name: String, path: PathBuf },

    #[error("Project '{name}' already exists at {}", path.display())]
    ProjectExists { name: String, path: PathBuf },

    #[error("Route '{name}' already exists at {}", path.display())]
    RouteExists { name: String, path: PathBuf },

    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("Could not find {anchor} in {}; add the line manually:\n  {line}", path.display())]
    AnchorNotFound {
        path: PathBuf,
        anchor: String,
        line: String,
    },

    #[error("Template rendering failed: {source}")]
    Template {
        #[from]
        source: tera::Error,
    },

    #[error("Command `{cmd}` failed with status {status}")]
    ExternalCommand { cmd: String, status: String },

    #[error("Missing required runtime: {0}")]
    MissingRuntime(String),

    #[error("No project name given (pass one as an argument or drop --yes)")]
    NoProjectName,
}

impl ScaffoldError {
    /// Whether this error only reports that the target is already present
    pub fn is_already_exists(&self) -> bool {
        matches!(
            self,
            ScaffoldError::ModuleExists { .. }
                | ScaffoldError::ProjectExists { .. }
                | ScaffoldError::RouteExists { .. }
        )
    }
}

/// Result alias used across the crate
pub type Result<T> = anyhow::Result<T>;

/// Check whether an `anyhow::Error` wraps an "already exists" condition
pub fn is_already_exists(err: &anyhow::Error) -> bool {
    err.downcast_ref::<ScaffoldError>()
        .is_some_and(ScaffoldError::is_already_exists)
}
