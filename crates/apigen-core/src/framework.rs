//! Framework configuration trait for CLI binaries
//!
//! Each variant (Elysia, Hono) implements this trait to define what gets generated
//! and how the route registry is patched. The core library never names a framework.

use crate::naming::ModuleName;
use crate::registry::patch::Anchor;
use regex::Regex;
use std::path::Path;

/// A file rendered from a named template
///
/// `path` is itself a template string (e.g. `{{ name.kebab }}.service.ts`) relative
/// to the directory the file is generated into.
#[derive(Debug, Clone, Copy)]
pub struct TemplateFile {
    pub path: &'static str,
    pub template: &'static str,
}

/// Configuration trait for the different framework CLIs
///
/// Each framework implements this trait to define:
/// - Identity (name, display name, docs)
/// - Project initialization (dependencies, directories, seed files)
/// - Module files and their templates
/// - Route registry lines and anchors
pub trait FrameworkConfig: Clone + Send + Sync + 'static {
    /// Binary name (used in help text and messages)
    fn name(&self) -> &'static str;

    /// Human-readable framework name
    fn display_name(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// URL for framework documentation
    fn docs_url(&self) -> &'static str;

    /// Oldest bun release the generated project supports
    fn min_bun_version(&self) -> &'static str {
        "1.0.0"
    }

    /// Runtime packages installed by `init`
    fn dependencies(&self) -> &'static [&'static str];

    /// Dev-only packages installed by `init`
    fn dev_dependencies(&self) -> &'static [&'static str];

    /// Directories created by `init`, relative to the project root
    fn project_dirs(&self) -> &'static [&'static str];

    /// Seed files written by `init`, relative to the project root
    ///
    /// The routes registry is part of this list; the collections registry is
    /// written by the core.
    fn project_files(&self) -> &'static [TemplateFile];

    /// Files written into a new module directory
    fn module_files(&self) -> &'static [TemplateFile];

    /// Standalone route file for `generate:router`, if the framework offers it
    fn router_file(&self) -> Option<TemplateFile> {
        None
    }

    /// Embedded template sources as `(name, source)` pairs
    fn templates(&self) -> &'static [(&'static str, &'static str)];

    /// Identifier exported by a module's route file (e.g. `orderRoutes`)
    fn route_symbol(&self, name: &ModuleName) -> String;

    /// Import line added to the routes registry
    fn route_import(&self, symbol: &str, from: &str) -> String {
        format!("import {{ {} }} from '{}'", symbol, from)
    }

    /// Registration statement added inside the setup function, with indentation
    fn route_registration(&self, symbol: &str, name: &ModuleName) -> String;

    /// Where new imports go: after the first block of import lines
    fn import_anchor(&self) -> Anchor {
        Anchor::AfterMatch(import_block_pattern())
    }

    /// Where new registrations go
    fn registration_anchor(&self) -> Anchor;

    /// Instructions printed after `init`
    fn next_steps(&self, dir: &Path) -> Vec<String>;
}

/// First contiguous run of `import ...` lines
pub fn import_block_pattern() -> Regex {
    Regex::new(r"(?m)^(?:import .*\n)+").expect("import block pattern is valid")
}

/// Start of the `return app` line inside `setupRoutes`, captured as `ret`
pub fn setup_return_pattern() -> Regex {
    Regex::new(r"(?ms)^export const setupRoutes\b.*?(?P<ret>^[ \t]*return app\b)")
        .expect("setup return pattern is valid")
}
