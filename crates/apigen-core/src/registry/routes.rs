//! Route registry (`setupRoutes`) patching

use crate::error::ScaffoldError;
use crate::registry::patch::{patch, Anchor, PatchOutcome};
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// The two lines that register one route module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub import: String,
    pub registration: String,
}

/// Apply both patches to `content`
///
/// Returns `None` when both lines are already present. A missing anchor fails the
/// whole update so the file is never left with only one of the two lines.
pub fn apply_entry(
    content: &str,
    entry: &RouteEntry,
    import_anchor: &Anchor,
    registration_anchor: &Anchor,
    path: &Path,
) -> Result<Option<String>, ScaffoldError> {
    let mut changed = false;
    let mut current = content.to_string();

    for (anchor, line) in [
        (import_anchor, &entry.import),
        (registration_anchor, &entry.registration),
    ] {
        match patch(&current, anchor, line) {
            PatchOutcome::Inserted(next) => {
                current = next;
                changed = true;
            }
            PatchOutcome::AlreadyPresent => {
                tracing::debug!("Already registered: {}", line.trim());
            }
            PatchOutcome::AnchorMissing => {
                return Err(ScaffoldError::AnchorNotFound {
                    path: path.to_path_buf(),
                    anchor: anchor.to_string(),
                    line: line.trim().to_string(),
                });
            }
        }
    }

    Ok(changed.then_some(current))
}

/// Register a route module in the routes file at `path`
///
/// Returns whether the file was modified.
pub async fn register_route(
    path: &Path,
    entry: &RouteEntry,
    import_anchor: &Anchor,
    registration_anchor: &Anchor,
) -> Result<bool> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read route registry {}", path.display()))?;

    match apply_entry(&content, entry, import_anchor, registration_anchor, path)? {
        Some(updated) => {
            fs::write(path, updated)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            Ok(true)
        }
        None => Ok(false),
    }
}
