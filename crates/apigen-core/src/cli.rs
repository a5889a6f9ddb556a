//! Glue shared by the framework binaries: logging, command entry points, exit codes

use crate::config::Project;
use crate::error::is_already_exists;
use crate::framework::FrameworkConfig;
use crate::generator::{generate_module, generate_router, GeneratedModule};
use crate::render::Renderer;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the stderr subscriber; `-v` raises the level, `RUST_LOG` overrides it
pub fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    // A second call (tests) keeps the first subscriber
    let _ = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

/// The directory commands run against: `-C` if given, else the working directory
pub fn resolve_project_dir(project_dir: Option<PathBuf>) -> Result<PathBuf> {
    match project_dir {
        Some(dir) => Ok(dir),
        None => std::env::current_dir().context("Failed to read the current directory"),
    }
}

/// `generate:module <name>` against the project at `root`
pub async fn run_generate_module<C: FrameworkConfig>(
    config: &C,
    root: &Path,
    name: &str,
) -> Result<GeneratedModule> {
    let project = Project::open(root).await?;
    let renderer = Renderer::new(config.templates())?;
    generate_module(config, &project, &renderer, name).await
}

/// `generate:router <name>` against the project at `root`
pub async fn run_generate_router<C: FrameworkConfig>(
    config: &C,
    root: &Path,
    name: &str,
) -> Result<PathBuf> {
    let project = Project::open(root).await?;
    let renderer = Renderer::new(config.templates())?;
    generate_router(config, &project, &renderer, name).await
}

/// Report a command result and return the exit status
///
/// "Already exists" is a warning and yields 0; any other error yields 1.
pub fn report<T>(result: Result<T>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(e) if is_already_exists(&e) => {
            eprintln!("{} {}", "Warning:".yellow().bold(), e.to_string().yellow());
            0
        }
        Err(e) => {
            tracing::error!("Command failed: {:?}", e);
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            1
        }
    }
}

/// [`report`] as a process exit code
pub fn finish<T>(result: Result<T>) -> ExitCode {
    ExitCode::from(report(result))
}
