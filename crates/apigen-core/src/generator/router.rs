//! `generate:router`: a standalone route file registered in the routes registry

use crate::config::Project;
use crate::error::ScaffoldError;
use crate::framework::FrameworkConfig;
use crate::generator::write_rendered;
use crate::naming::ModuleName;
use crate::registry::{register_route, RouteEntry};
use crate::render::{ModuleContext, Renderer};
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;
use tokio::fs;

/// Generate `<routers_dir>/<file>` for `raw_name` and register it
///
/// Returns the path of the new file.
pub async fn generate_router<C: FrameworkConfig>(
    config: &C,
    project: &Project,
    renderer: &Renderer,
    raw_name: &str,
) -> Result<PathBuf> {
    let Some(file) = config.router_file() else {
        anyhow::bail!("{} does not support standalone routers", config.name());
    };

    let name = ModuleName::parse(raw_name)?;
    let ctx = ModuleContext::new(&name);
    let file_name = renderer.render_str(file.path, &ctx)?;
    let path = project.routers_dir().join(&file_name);

    if fs::try_exists(&path)
        .await
        .with_context(|| format!("Failed to check {}", path.display()))?
    {
        return Err(ScaffoldError::RouteExists {
            name: name.kebab(),
            path,
        }
        .into());
    }

    let written = write_rendered(renderer, &file, &project.routers_dir(), &ctx).await?;

    let symbol = config.route_symbol(&name);
    let entry = RouteEntry {
        import: config.route_import(&symbol, &project.router_import(&file_name)),
        registration: config.route_registration(&symbol, &name),
    };
    register_route(
        &project.routes_file(),
        &entry,
        &config.import_anchor(),
        &config.registration_anchor(),
    )
    .await?;

    println!(
        "{} Router {} generated at {}",
        "✨".green(),
        name.kebab().bold(),
        written.display()
    );
    Ok(written)
}
