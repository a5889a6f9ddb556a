//! Where generated files live inside a project
//!
//! Defaults match what `init` produces. A project can override any path with an
//! `apigen.yaml` at its root:
//!
//! ```yaml
//! modules_dir: src/features
//! routes_file: src/app.routes.ts
//! ```

use crate::naming::ModuleName;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// Optional per-project layout file
pub const LAYOUT_FILE: &str = "apigen.yaml";

/// Paths of the generated pieces, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectLayout {
    /// Directory holding one subdirectory per module
    pub modules_dir: PathBuf,

    /// Route registry (`setupRoutes`)
    pub routes_file: PathBuf,

    /// Collection-name registry
    pub collections_file: PathBuf,

    /// Directory for standalone route files
    pub routers_dir: PathBuf,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self {
            modules_dir: PathBuf::from("src/modules"),
            routes_file: PathBuf::from("src/routes.ts"),
            collections_file: PathBuf::from("src/config/collections.config.ts"),
            routers_dir: PathBuf::from("src/routes"),
        }
    }
}

impl ProjectLayout {
    /// Parse a layout file's content
    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty document means "all defaults"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let layout: Self = serde_yaml::from_str(content).context("Failed to parse layout file")?;
        layout.validate()?;
        Ok(layout)
    }

    fn validate(&self) -> Result<()> {
        for (field, path) in [
            ("modules_dir", &self.modules_dir),
            ("routes_file", &self.routes_file),
            ("collections_file", &self.collections_file),
            ("routers_dir", &self.routers_dir),
        ] {
            if path.is_absolute() || path.components().any(|c| c == Component::ParentDir) {
                anyhow::bail!(
                    "{} must be a path inside the project, got {}",
                    field,
                    path.display()
                );
            }
        }
        Ok(())
    }
}

/// A project root together with its layout
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
    layout: ProjectLayout,
}

impl Project {
    pub fn new(root: PathBuf, layout: ProjectLayout) -> Self {
        Self { root, layout }
    }

    /// Open a project, reading `apigen.yaml` if present
    pub async fn open(root: &Path) -> Result<Self> {
        let layout_path = root.join(LAYOUT_FILE);
        let layout = match fs::read_to_string(&layout_path).await {
            Ok(content) => ProjectLayout::from_yaml(&content)
                .with_context(|| format!("Invalid {}", layout_path.display()))?,
            Err(e) if e.kind() == ErrorKind::NotFound => ProjectLayout::default(),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", layout_path.display()))
            }
        };
        tracing::debug!("Project layout for {}: {:?}", root.display(), layout);
        Ok(Self::new(root.to_path_buf(), layout))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    pub fn module_dir(&self, name: &ModuleName) -> PathBuf {
        self.root.join(&self.layout.modules_dir).join(name.kebab())
    }

    pub fn routers_dir(&self) -> PathBuf {
        self.root.join(&self.layout.routers_dir)
    }

    pub fn routes_file(&self) -> PathBuf {
        self.root.join(&self.layout.routes_file)
    }

    pub fn collections_file(&self) -> PathBuf {
        self.root.join(&self.layout.collections_file)
    }

    /// Import specifier for a module, relative to the routes file
    pub fn module_import(&self, name: &ModuleName) -> String {
        relative_import(
            &self.layout.routes_file,
            &self.layout.modules_dir.join(name.kebab()),
        )
    }

    /// Import specifier for a generated router file (extension dropped)
    pub fn router_import(&self, file_name: &str) -> String {
        let stem = file_name.strip_suffix(".ts").unwrap_or(file_name);
        relative_import(&self.layout.routes_file, &self.layout.routers_dir.join(stem))
    }
}

/// ES module specifier for `target` as seen from the file `from`
fn relative_import(from: &Path, target: &Path) -> String {
    let from_dir: Vec<Component> = from
        .parent()
        .map(|p| p.components().collect())
        .unwrap_or_default();
    let target: Vec<Component> = target.components().collect();

    let common = from_dir
        .iter()
        .zip(target.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<String> = Vec::new();
    if common == from_dir.len() {
        parts.push(".".to_string());
    } else {
        parts.extend(std::iter::repeat("..".to_string()).take(from_dir.len() - common));
    }
    parts.extend(
        target[common..]
            .iter()
            .map(|c| c.as_os_str().to_string_lossy().into_owned()),
    );
    parts.join("/")
}
