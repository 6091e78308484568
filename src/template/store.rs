//! Template storage and retrieval

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Resolves template names to their textual content
///
/// The readability probe and the read are separate so callers can
/// distinguish "template missing" from "template present but empty".
pub trait TemplateStore {
    /// Whether `name` resolves to readable template content
    fn is_readable(&self, name: &str) -> bool;

    /// The template text; `None` when absent or unreadable
    fn read(&self, name: &str) -> Option<String>;
}

/// Store reading `<base>/<name>.tpl` files from disk
#[derive(Debug, Clone)]
pub struct DirTemplateStore {
    base_path: PathBuf,
}

impl DirTemplateStore {
    /// Create a store rooted at `base_path`
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// The base directory templates are resolved under
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn template_path(&self, name: &str) -> PathBuf {
        self.base_path.join(format!("{}.tpl", name))
    }
}

impl TemplateStore for DirTemplateStore {
    fn is_readable(&self, name: &str) -> bool {
        self.template_path(name).is_file()
    }

    fn read(&self, name: &str) -> Option<String> {
        std::fs::read_to_string(self.template_path(name)).ok()
    }
}

/// In-memory store for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct MemoryTemplateStore {
    templates: HashMap<String, String>,
}

impl MemoryTemplateStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a template
    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.templates.insert(name.into(), content.into());
    }
}

impl TemplateStore for MemoryTemplateStore {
    fn is_readable(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    fn read(&self, name: &str) -> Option<String> {
        self.templates.get(name).cloned()
    }
}
