//! Template rendering
//!
//! Templates are plain data: Tera sources embedded at compile time and rendered
//! from typed, serializable context records. Autoescaping is off since every
//! output is source code, not HTML.

pub mod context;

use crate::error::ScaffoldError;
use crate::registry::collections::CollectionEntry;
use anyhow::{Context as _, Result};
use serde::Serialize;
use tera::Tera;

pub use context::{ModuleContext, ProjectContext};

const COLLECTIONS_TEMPLATE: &str = "collections.config.ts";

/// Templates shipped with the core, shared by every framework
///
/// Framework seed lists refer to the `shared/*` names.
const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    (
        COLLECTIONS_TEMPLATE,
        include_str!("../../templates/collections.config.ts.tera"),
    ),
    (
        "shared/db.config.ts",
        include_str!("../../templates/project/db.config.ts.tera"),
    ),
    (
        "shared/db.util.ts",
        include_str!("../../templates/project/db.util.ts.tera"),
    ),
    (
        "shared/tsconfig.json",
        include_str!("../../templates/project/tsconfig.json.tera"),
    ),
    ("shared/env", include_str!("../../templates/project/env.tera")),
    (
        "shared/gitignore",
        include_str!("../../templates/project/gitignore.tera"),
    ),
    (
        "shared/README.md",
        include_str!("../../templates/project/README.md.tera"),
    ),
];

/// Holds the compiled template set for one framework
#[derive(Debug)]
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Compile the builtin templates plus `templates` (`(name, source)` pairs)
    pub fn new(templates: &[(&str, &str)]) -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        let mut all: Vec<(&str, &str)> = BUILTIN_TEMPLATES.to_vec();
        all.extend_from_slice(templates);
        tera.add_raw_templates(all)
            .map_err(|e| ScaffoldError::Template { source: e })
            .context("Failed to compile templates")?;
        Ok(Self { tera })
    }

    /// Render a named template with a serializable context
    pub fn render<T: Serialize>(&self, template: &str, context: &T) -> Result<String> {
        let ctx = tera::Context::from_serialize(context)
            .map_err(|e| ScaffoldError::Template { source: e })
            .context("Failed to build template context")?;
        self.tera
            .render(template, &ctx)
            .map_err(|e| ScaffoldError::Template { source: e })
            .with_context(|| format!("Failed to render template '{}'", template))
    }

    /// Render an inline template string, such as a file path pattern
    pub fn render_str<T: Serialize>(&self, source: &str, context: &T) -> Result<String> {
        let ctx = tera::Context::from_serialize(context)
            .map_err(|e| ScaffoldError::Template { source: e })
            .context("Failed to build template context")?;
        Tera::one_off(source, &ctx, false)
            .map_err(|e| ScaffoldError::Template { source: e })
            .with_context(|| format!("Failed to render '{}'", source))
    }

    /// Render the collections registry file
    pub fn render_collections(&self, entries: &[CollectionEntry]) -> Result<String> {
        #[derive(Serialize)]
        struct Ctx<'a> {
            entries: &'a [CollectionEntry],
        }
        self.render(COLLECTIONS_TEMPLATE, &Ctx { entries })
    }

    /// Whether a template with this name is loaded
    pub fn has_template(&self, template: &str) -> bool {
        self.tera.get_template_names().any(|name| name == template)
    }
}
