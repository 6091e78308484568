//! Media collaborators: image identity, URL resolution, alt text, request scheme
//!
//! The renderer never talks to an attachment service or a request object
//! directly; it consumes the traits defined here. [`MediaManifest`] is a
//! JSON-backed catalog implementing the lookup traits for the CLI, tests,
//! and hosts without a media backend of their own.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Opaque attachment/image identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(pub u64);

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors that can occur when loading or parsing a media manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read media manifest: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse media manifest JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Produces a source URL for an image at a semantic size
pub trait SizeResolver {
    /// URL for `image` rendered at `size_key`; `use_full_original` asks for
    /// the unresized upload instead. `None` when no such rendition exists.
    fn resolve_url(&self, image: ImageId, size_key: &str, use_full_original: bool)
        -> Option<String>;
}

/// Alt-text metadata lookup
pub trait AltTextStore {
    /// Alt text for `image`; empty when none is stored
    fn alt_text(&self, image: ImageId) -> String;
}

/// Request-scheme probe driving http→https source rewriting
pub trait SecurityContext {
    fn is_secure_request(&self) -> bool;
}

/// A fixed request scheme
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticSecurityContext {
    secure: bool,
}

impl StaticSecurityContext {
    pub fn new(secure: bool) -> Self {
        Self { secure }
    }
}

impl SecurityContext for StaticSecurityContext {
    fn is_secure_request(&self) -> bool {
        self.secure
    }
}

/// One image entry in the manifest
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ManifestImage {
    /// Alt text stored for the image
    #[serde(default)]
    pub alt: Option<String>,
    /// URL of the unresized upload
    #[serde(default)]
    pub original: Option<String>,
    /// Size key → rendition URL
    #[serde(default)]
    pub sources: HashMap<String, String>,
}

/// JSON-backed media catalog standing in for the CMS attachment service
///
/// ```json
/// {
///     "images": {
///         "42": {
///             "alt": "My Photo",
///             "original": "https://cdn.example/42-full.jpg",
///             "sources": {
///                 "617x333": "https://cdn.example/42-617x333.jpg",
///                 "thumbnail": "https://cdn.example/42-thumb.jpg"
///             }
///         }
///     }
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MediaManifest {
    images: HashMap<u64, ManifestImage>,
}

#[derive(Deserialize)]
struct ManifestFile {
    #[serde(default)]
    images: HashMap<u64, ManifestImage>,
}

impl MediaManifest {
    /// Load a manifest from disk
    pub fn from_file(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse a manifest from a JSON string
    pub fn from_str(content: &str) -> Result<Self, ManifestError> {
        let parsed: ManifestFile = serde_json::from_str(content)?;
        Ok(Self {
            images: parsed.images,
        })
    }

    /// Add or replace an image entry
    pub fn insert(&mut self, image: ImageId, entry: ManifestImage) {
        self.images.insert(image.0, entry);
    }
}

impl SizeResolver for MediaManifest {
    fn resolve_url(
        &self,
        image: ImageId,
        size_key: &str,
        use_full_original: bool,
    ) -> Option<String> {
        let entry = self.images.get(&image.0)?;
        if use_full_original {
            if let Some(url) = &entry.original {
                return Some(url.clone());
            }
        }
        entry.sources.get(size_key).cloned()
    }
}

impl AltTextStore for MediaManifest {
    fn alt_text(&self, image: ImageId) -> String {
        self.images
            .get(&image.0)
            .and_then(|entry| entry.alt.clone())
            .unwrap_or_default()
    }
}
