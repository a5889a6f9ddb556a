//! Typed parameter records handed to templates

use crate::naming::{ModuleName, NameVariants};
use crate::pluralize::pluralize_identifier;
use serde::Serialize;

/// Everything a module template can reference
#[derive(Debug, Clone, Serialize)]
pub struct ModuleContext {
    /// Case variants (`name.camel`, `name.pascal`, ...)
    pub name: NameVariants,
    /// Key in the `COLLECTIONS` map
    pub collection_key: String,
    /// Storage collection name
    pub collection: String,
    /// URL path segment
    pub route_prefix: String,
}

impl ModuleContext {
    pub fn new(name: &ModuleName) -> Self {
        Self {
            name: name.variants(),
            collection_key: name.upper_snake(),
            collection: pluralize_identifier(&name.snake()),
            route_prefix: format!("/{}", name.kebab()),
        }
    }
}

/// Everything a project seed template can reference
#[derive(Debug, Clone, Serialize)]
pub struct ProjectContext {
    /// Directory / display name as typed
    pub project_name: String,
    /// `package.json` name
    pub package_name: String,
    /// Prefix for database names (`<prefix>_dev`, ...)
    pub db_prefix: String,
    /// Framework display name
    pub framework: String,
    /// CLI that generated the project
    pub generator: String,
}

impl ProjectContext {
    pub fn new(name: &ModuleName, framework: &str, generator: &str) -> Self {
        Self {
            project_name: name.raw().to_string(),
            package_name: name.kebab(),
            db_prefix: name.snake(),
            framework: framework.to_string(),
            generator: generator.to_string(),
        }
    }
}
