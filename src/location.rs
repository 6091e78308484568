//! Location configuration: named responsive breakpoint sets
//!
//! A location pairs a name (e.g. `"hero"`, `"post-thumbnail"`) with an
//! ordered list of breakpoints, each mapping a semantic size key to an
//! optional CSS class. Locations are externally authored; the on-disk format
//! is the V2 locations JSON consumed by [`JsonLocationRegistry`].

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing a locations file
#[derive(Error, Debug)]
pub enum LocationError {
    #[error("Failed to read locations file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse locations JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One entry in a location's breakpoint list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Breakpoint {
    /// Semantic size key; entries without one are skipped at render time
    #[serde(default)]
    pub size: Option<String>,
    /// CSS class appended to the rendered root element
    #[serde(default)]
    pub class: Option<String>,
}

/// A resolved configuration for a location name
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LocationConfig {
    /// Breakpoints in declared order
    #[serde(default)]
    pub srcsets: Vec<Breakpoint>,
    /// Size key used for the default image; `"thumbnail"` when unset
    #[serde(default)]
    pub img_base: Option<String>,
}

/// Lookup of location names to their configurations
///
/// A name may resolve to zero, one, or (in malformed configuration) several
/// configs. The renderer uses the head of the list and ignores the rest, so
/// implementations must preserve declaration order.
pub trait LocationRegistry {
    /// All configurations declared under `name`, in declaration order.
    ///
    /// `None` means the name is absent; a `Some` whose head is missing or
    /// invalid is reported separately by the renderer.
    fn get_location(&self, name: &str) -> Option<Vec<LocationConfig>>;
}

/// Registry backed by the on-disk V2 locations JSON
///
/// The file is a top-level array of single-key objects, each mapping a
/// location name to its configuration list:
///
/// ```json
/// [
///     {
///         "hero": [
///             {
///                 "srcsets": [
///                     { "size": "617x333", "class": "hero-sm" },
///                     { "size": "1200x600", "class": "hero-lg" }
///                 ],
///                 "img_base": "617x333"
///             }
///         ]
///     }
/// ]
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonLocationRegistry {
    entries: Vec<HashMap<String, Vec<LocationConfig>>>,
}

impl JsonLocationRegistry {
    /// Load a locations file from disk
    pub fn from_file(path: &Path) -> Result<Self, LocationError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse locations from a JSON string
    pub fn from_str(content: &str) -> Result<Self, LocationError> {
        let entries = serde_json::from_str(content)?;
        Ok(Self { entries })
    }
}

impl LocationRegistry for JsonLocationRegistry {
    fn get_location(&self, name: &str) -> Option<Vec<LocationConfig>> {
        let mut found = false;
        let mut configs = Vec::new();
        for entry in &self.entries {
            if let Some(list) = entry.get(name) {
                found = true;
                configs.extend(list.iter().cloned());
            }
        }
        found.then_some(configs)
    }
}

/// In-memory registry for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct MemoryLocationRegistry {
    locations: HashMap<String, Vec<LocationConfig>>,
}

impl MemoryLocationRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the configurations for a location name
    pub fn insert(&mut self, name: impl Into<String>, configs: Vec<LocationConfig>) {
        self.locations.insert(name.into(), configs);
    }
}

impl LocationRegistry for MemoryLocationRegistry {
    fn get_location(&self, name: &str) -> Option<Vec<LocationConfig>> {
        self.locations.get(name).cloned()
    }
}
