//! Generators behind each CLI command
//!
//! - `module`: `generate:module` (five/six module files, both registries)
//! - `router`: `generate:router` (standalone route file, routes registry)
//! - `project`: `init` (directory skeleton, dependencies, seed files)

pub mod module;
pub mod project;
pub mod router;

use crate::framework::TemplateFile;
use crate::render::Renderer;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;

pub use module::{generate_module, GeneratedModule};
pub use project::{initialize_project, InitOptions};
pub use router::generate_router;

/// Render `file` with `ctx` and write it under `base`, creating parent directories
pub(crate) async fn write_rendered<T: Serialize>(
    renderer: &Renderer,
    file: &TemplateFile,
    base: &Path,
    ctx: &T,
) -> Result<PathBuf> {
    let relative = renderer.render_str(file.path, ctx)?;
    let content = renderer.render(file.template, ctx)?;
    let path = base.join(relative);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(&path, content)
        .await
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    Ok(path)
}
