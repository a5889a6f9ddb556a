//! `generate:module`: one module's files plus both registry updates

use crate::config::Project;
use crate::error::ScaffoldError;
use crate::framework::FrameworkConfig;
use crate::generator::write_rendered;
use crate::naming::ModuleName;
use crate::registry::{register_route, update_collections, RouteEntry};
use crate::render::{ModuleContext, Renderer};
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;
use tokio::fs;

/// What a successful generation produced
#[derive(Debug, Clone)]
pub struct GeneratedModule {
    pub name: ModuleName,
    pub dir: PathBuf,
    pub files: Vec<PathBuf>,
    /// Whether the routes file changed
    pub routes_updated: bool,
}

/// The route registry lines for a module
pub fn module_route_entry<C: FrameworkConfig>(
    config: &C,
    project: &Project,
    name: &ModuleName,
) -> RouteEntry {
    let symbol = config.route_symbol(name);
    RouteEntry {
        import: config.route_import(&symbol, &project.module_import(name)),
        registration: config.route_registration(&symbol, name),
    }
}

/// Generate a module inside `project`
///
/// Steps run in order and stop at the first error; files written before a failure
/// stay on disk. An existing module directory fails before anything is written.
pub async fn generate_module<C: FrameworkConfig>(
    config: &C,
    project: &Project,
    renderer: &Renderer,
    raw_name: &str,
) -> Result<GeneratedModule> {
    let name = ModuleName::parse(raw_name)?;
    let dir = project.module_dir(&name);

    if fs::try_exists(&dir)
        .await
        .with_context(|| format!("Failed to check {}", dir.display()))?
    {
        return Err(ScaffoldError::ModuleExists {
            name: name.kebab(),
            path: dir,
        }
        .into());
    }

    println!("{}", "Updating collections configuration...".blue());
    update_collections(&project.collections_file(), &name, renderer).await?;

    fs::create_dir_all(&dir)
        .await
        .with_context(|| format!("Failed to create module directory {}", dir.display()))?;

    let ctx = ModuleContext::new(&name);
    let mut files = Vec::new();
    for file in config.module_files() {
        let path = write_rendered(renderer, file, &dir, &ctx).await?;
        tracing::debug!("Wrote {}", path.display());
        files.push(path);
    }

    let routes_file = project.routes_file();
    let entry = module_route_entry(config, project, &name);
    let routes_updated = register_route(
        &routes_file,
        &entry,
        &config.import_anchor(),
        &config.registration_anchor(),
    )
    .await?;
    println!(
        "{}",
        format!("Updated routes manager with {} module", name.kebab()).blue()
    );

    println!(
        "{} Module {} generated successfully!",
        "✨".green(),
        name.kebab().bold()
    );

    Ok(GeneratedModule {
        name,
        dir,
        files,
        routes_updated,
    })
}
