//! Charm-style `init` flow using cliclack

use crate::error::ScaffoldError;
use crate::framework::FrameworkConfig;
use crate::generator::{initialize_project, InitOptions};
use crate::naming::ModuleName;
use crate::render::Renderer;
use crate::runtime::check_bun;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Arguments for the `init` command
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Project directory name; prompted for when missing
    pub name: Option<String>,

    /// Skip bun and dependency installation
    pub skip_install: bool,

    /// Non-interactive mode: never prompt
    pub yes: bool,
}

/// Run `init` with interactive prompts, creating the project under `parent`
pub async fn run_init<C: FrameworkConfig>(
    config: &C,
    args: InitArgs,
    parent: &Path,
) -> Result<PathBuf> {
    cliclack::intro(format!("{} project", config.display_name()))?;

    let name = select_name(&args)?;

    if args.skip_install {
        cliclack::log::info("Skipping dependency installation")?;
    } else {
        report_runtime()?;
    }

    let renderer = Renderer::new(config.templates())?;
    let options = InitOptions {
        skip_install: args.skip_install,
    };
    let root = initialize_project(config, &renderer, parent, &name, &options).await?;

    print_next_steps(config, &root)?;
    Ok(root)
}

fn select_name(args: &InitArgs) -> Result<String> {
    if let Some(name) = &args.name {
        cliclack::log::info(format!("Project name: {}", name))?;
        return Ok(name.clone());
    }

    if args.yes {
        return Err(ScaffoldError::NoProjectName.into());
    }

    let name: String = cliclack::input("Project name")
        .placeholder("my-api")
        .validate(|input: &String| {
            ModuleName::parse(input)
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact()?;
    Ok(name)
}

/// Log the detected bun version; the hard check happens in the initializer
fn report_runtime() -> Result<()> {
    let bun = check_bun();
    if bun.available {
        cliclack::log::success(format!(
            "{} installed ({})",
            bun.name,
            bun.version.as_deref().unwrap_or("unknown")
        ))?;
    } else {
        cliclack::log::warning(format!("{} is not installed", bun.name))?;
    }
    Ok(())
}

fn print_next_steps<C: FrameworkConfig>(config: &C, root: &Path) -> Result<()> {
    let steps = config.next_steps(root);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro(format!("Docs: {}", config.docs_url()))?;

    Ok(())
}
