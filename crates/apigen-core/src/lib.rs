//! Apigen Core - Shared library for web API scaffolding CLIs
//!
//! This library generates Bun web API projects and feature modules. It is used by
//! one CLI binary per framework (`ely-cli` for Elysia, `hono-cli` for Hono) that
//! share the same generation logic but supply different templates and route
//! registration rules.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Naming, pluralization, registry patching, rendering
//! - **Layer 2: Generators** - `init`, `generate:module` and `generate:router`, driven by
//!   a `FrameworkConfig`
//! - **Layer 3: CLI/TUI Interface** - Exit-code mapping, logging setup and optional
//!   cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based `init` prompts
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use apigen_core::{generate_module, FrameworkConfig, Project, Renderer};
//!
//! let project = Project::open(Path::new(".")).await?;
//! let renderer = Renderer::new(config.templates())?;
//! let generated = generate_module(&config, &project, &renderer, "order").await?;
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod framework;
pub mod generator;
pub mod naming;
pub mod pluralize;
pub mod registry;
pub mod render;
pub mod runtime;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{Project, ProjectLayout};
pub use error::{is_already_exists, ScaffoldError};
pub use framework::{import_block_pattern, setup_return_pattern, FrameworkConfig, TemplateFile};
pub use generator::{
    generate_module, generate_router, initialize_project, GeneratedModule, InitOptions,
};
pub use naming::ModuleName;
pub use pluralize::{pluralize, pluralize_identifier};
pub use registry::{Anchor, PatchOutcome, RouteEntry};
pub use render::Renderer;

#[cfg(feature = "tui")]
pub use tui::{run_init, InitArgs};
