//! `init`: create a new project directory with dependencies and seed files

use crate::config::{Project, ProjectLayout};
use crate::error::ScaffoldError;
use crate::framework::FrameworkConfig;
use crate::generator::write_rendered;
use crate::naming::ModuleName;
use crate::registry::CollectionRegistry;
use crate::render::{ProjectContext, Renderer};
use crate::runtime::{require_bun, PackageManager};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Files `bun init` creates that the seed files replace
const BUN_INIT_DEFAULTS: &[&str] = &["index.ts", "README.md", ".gitignore", "tsconfig.json"];

/// Options for `init`
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Skip the bun check, `bun init` and dependency installation
    pub skip_install: bool,
}

/// Create `<parent>/<raw_name>` and populate it
///
/// Returns the project root. An existing directory fails before anything is written.
pub async fn initialize_project<C: FrameworkConfig>(
    config: &C,
    renderer: &Renderer,
    parent: &Path,
    raw_name: &str,
    options: &InitOptions,
) -> Result<PathBuf> {
    let name = ModuleName::parse(raw_name)?;
    let root = parent.join(name.raw());

    if fs::try_exists(&root)
        .await
        .with_context(|| format!("Failed to check {}", root.display()))?
    {
        return Err(ScaffoldError::ProjectExists {
            name: name.raw().to_string(),
            path: root,
        }
        .into());
    }

    // Fail on a missing runtime before creating anything
    if !options.skip_install {
        let (bun, warning) = require_bun(config.min_bun_version())?;
        tracing::debug!("Using {} {:?}", bun.name, bun.version);
        if let Some(warning) = warning {
            println!("{}", warning.yellow());
        }
    }

    println!(
        "{}",
        format!("Creating {} project {}...", config.display_name(), name.raw()).blue()
    );
    fs::create_dir_all(&root)
        .await
        .with_context(|| format!("Failed to create project directory {}", root.display()))?;

    if !options.skip_install {
        install_dependencies(config, &root).await?;
    } else {
        tracing::info!("Skipping dependency installation");
    }

    for dir in config.project_dirs() {
        let path = root.join(dir);
        fs::create_dir_all(&path)
            .await
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
    }

    let ctx = ProjectContext::new(&name, config.display_name(), config.name());
    for file in config.project_files() {
        let path = write_rendered(renderer, file, &root, &ctx).await?;
        tracing::debug!("Wrote {}", path.display());
    }

    let project = Project::new(root.clone(), ProjectLayout::default());
    CollectionRegistry::default()
        .save(&project.collections_file(), renderer)
        .await?;

    println!(
        "{} Project {} created at {}",
        "✨".green(),
        name.raw().bold(),
        root.display()
    );
    Ok(root)
}

/// `bun init`, drop its default files, then add the framework's packages
async fn install_dependencies<C: FrameworkConfig>(config: &C, root: &Path) -> Result<()> {
    let bun = PackageManager::bun();
    bun.init(root).await?;

    for file in BUN_INIT_DEFAULTS {
        let path = root.join(file);
        match fs::remove_file(&path).await {
            Ok(()) => tracing::debug!("Removed {}", path.display()),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to remove {}", path.display()))
            }
        }
    }

    println!("{}", "Installing dependencies...".blue());
    bun.add(config.dependencies(), false, root).await?;
    bun.add(config.dev_dependencies(), true, root).await?;
    Ok(())
}
