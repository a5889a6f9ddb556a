//! Collection-name registry (`COLLECTIONS` map in the generated config file)
//!
//! The file is treated as a serialization of [`CollectionRegistry`]: existing keys are
//! read back, the new module is added, and the whole file is rewritten with every
//! plural recomputed from its key.

use crate::naming::ModuleName;
use crate::pluralize::pluralize_identifier;
use crate::render::Renderer;
use anyhow::{Context, Result};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::OnceLock;
use tokio::fs;

static ENTRY_PATTERN: OnceLock<Regex> = OnceLock::new();

fn entry_pattern() -> &'static Regex {
    ENTRY_PATTERN.get_or_init(|| {
        Regex::new(r#"(?m)^\s*([A-Z][A-Z0-9_]*)\s*:\s*['"][^'"]*['"]"#)
            .expect("collection entry pattern is valid")
    })
}

/// One `KEY: 'plural'` line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionEntry {
    pub key: String,
    pub collection: String,
}

/// Set of registered collection keys (UPPER_SNAKE, kept sorted)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionRegistry {
    keys: BTreeSet<String>,
}

impl CollectionRegistry {
    /// Read the keys back out of a previously generated file
    pub fn parse(content: &str) -> Self {
        let keys = entry_pattern()
            .captures_iter(content)
            .map(|c| c[1].to_string())
            .collect();
        Self { keys }
    }

    /// Add a module; returns false if its key was already registered
    pub fn insert(&mut self, module: &ModuleName) -> bool {
        self.keys.insert(module.upper_snake())
    }

    pub fn contains(&self, module: &ModuleName) -> bool {
        self.keys.contains(&module.upper_snake())
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Entries in key order with freshly computed collection names
    pub fn entries(&self) -> Vec<CollectionEntry> {
        self.keys
            .iter()
            .map(|key| CollectionEntry {
                key: key.clone(),
                collection: pluralize_identifier(&key.to_ascii_lowercase()),
            })
            .collect()
    }

    /// Render the registry to file content
    pub fn render(&self, renderer: &Renderer) -> Result<String> {
        renderer.render_collections(&self.entries())
    }

    /// Load from disk; a missing file is an empty registry
    pub async fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path).await {
            Ok(content) => Ok(Self::parse(&content)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No collections file at {}, starting empty", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    /// Write the full file, creating parent directories as needed
    pub async fn save(&self, path: &Path, renderer: &Renderer) -> Result<()> {
        let content = self.render(renderer)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))
    }
}

/// Register `module` in the collections file at `path`, rewriting the whole file
pub async fn update_collections(path: &Path, module: &ModuleName, renderer: &Renderer) -> Result<()> {
    let mut registry = CollectionRegistry::load(path).await?;
    if !registry.insert(module) {
        tracing::debug!("{} already registered in {}", module.upper_snake(), path.display());
    }
    registry.save(path, renderer).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn module(name: &str) -> ModuleName {
        ModuleName::parse(name).unwrap()
    }

    #[test]
    fn test_parse_generated_file() {
        let content = "// This file is auto-generated. Do not edit manually\n\n\
                       export const COLLECTIONS = {\n\
                       \x20   ORDER_ITEM: 'order_items',\n\
                       \x20   PERSON: \"people\",\n\
                       \x20   CITY: 'cities'\n\
                       } as const\n";
        let registry = CollectionRegistry::parse(content);
        assert_eq!(registry.len(), 3);
        assert!(registry.contains(&module("orderItem")));
        assert!(registry.contains(&module("person")));
        assert!(registry.contains(&module("city")));
    }

    #[test]
    fn test_entries_sorted_and_recomputed() {
        let mut registry = CollectionRegistry::default();
        registry.insert(&module("user"));
        registry.insert(&module("person"));
        registry.insert(&module("category"));
        assert!(!registry.insert(&module("User")));

        let entries = registry.entries();
        let keys: Vec<_> = entries.iter().map(|e| e.key.as_str()).collect();
        let values: Vec<_> = entries.iter().map(|e| e.collection.as_str()).collect();
        assert_eq!(keys, ["CATEGORY", "PERSON", "USER"]);
        assert_eq!(values, ["categories", "people", "users"]);
    }

    #[test]
    fn test_render_is_stable() {
        let renderer = Renderer::new(&[]).unwrap();
        let mut registry = CollectionRegistry::default();
        registry.insert(&module("order"));
        registry.insert(&module("user"));

        let first = registry.render(&renderer).unwrap();
        assert!(first.contains("export const COLLECTIONS = {\n    ORDER: 'orders',\n    USER: 'users'\n} as const"));
        assert!(first.contains("export const collectionNames = Object.values(COLLECTIONS)"));

        let reparsed = CollectionRegistry::parse(&first);
        assert_eq!(reparsed, registry);
        assert_eq!(reparsed.render(&renderer).unwrap(), first);
    }

    #[test]
    fn test_render_empty() {
        let renderer = Renderer::new(&[]).unwrap();
        let content = CollectionRegistry::default().render(&renderer).unwrap();
        assert!(content.contains("export const COLLECTIONS = {\n} as const"));
        assert!(CollectionRegistry::parse(&content).is_empty());
    }

    #[tokio::test]
    async fn test_update_missing_file_starts_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("src/config/collections.config.ts");
        let renderer = Renderer::new(&[]).unwrap();

        update_collections(&path, &module("order"), &renderer).await.unwrap();
        update_collections(&path, &module("bus"), &renderer).await.unwrap();
        let once = std::fs::read_to_string(&path).unwrap();
        update_collections(&path, &module("bus"), &renderer).await.unwrap();
        let twice = std::fs::read_to_string(&path).unwrap();

        assert_eq!(once, twice);
        assert!(once.contains("    BUS: 'buses',\n    ORDER: 'orders'\n"));
    }

    #[tokio::test]
    async fn test_load_unexpected_error_propagates() {
        let dir = tempdir().unwrap();
        // A directory where the file should be is not "not found"
        let err = CollectionRegistry::load(dir.path()).await.unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
