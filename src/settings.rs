//! Settings file for render defaults
//!
//! Hosts can ship a small TOML file overriding the built-in placeholder
//! pixel and the default main-template name, instead of configuring
//! [`RendererConfig`](crate::renderer::RendererConfig) in code.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::renderer::RendererConfig;

/// Errors that can occur when loading or parsing a settings file
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse settings TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Render defaults loaded from TOML
///
/// ```toml
/// [metadata]
/// name = "example site"
///
/// [render]
/// pixel = "/pixel.gif"
/// default_template = "default-picture"
/// ```
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Optional name for the settings set
    pub name: Option<String>,
    /// Placeholder pixel src; `None` keeps the built-in data URI
    pub pixel: Option<String>,
    /// Default main template name; `None` keeps `"default-picture"`
    pub default_template: Option<String>,
}

/// TOML structure for deserializing settings
#[derive(Deserialize)]
struct TomlSettings {
    metadata: Option<TomlMetadata>,
    render: Option<TomlRender>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
}

#[derive(Deserialize)]
struct TomlRender {
    pixel: Option<String>,
    default_template: Option<String>,
}

impl Settings {
    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load settings from a TOML string
    pub fn from_str(content: &str) -> Result<Self, SettingsError> {
        let parsed: TomlSettings = toml::from_str(content)?;

        Ok(Settings {
            name: parsed.metadata.and_then(|m| m.name),
            pixel: parsed.render.as_ref().and_then(|r| r.pixel.clone()),
            default_template: parsed.render.and_then(|r| r.default_template),
        })
    }

    /// Renderer configuration with these settings applied over the defaults
    pub fn renderer_config(&self) -> RendererConfig {
        let mut config = RendererConfig::default();
        if let Some(pixel) = &self.pixel {
            config = config.with_pixel_src(pixel.clone());
        }
        if let Some(name) = &self.default_template {
            config = config.with_default_template(name.clone());
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_settings() {
        let toml_str = r#"
[metadata]
name = "example site"

[render]
pixel = "/pixel.gif"
default_template = "default-figure"
"#;
        let settings = Settings::from_str(toml_str).expect("Should parse");
        assert_eq!(settings.name.as_deref(), Some("example site"));
        assert_eq!(settings.pixel.as_deref(), Some("/pixel.gif"));
        assert_eq!(settings.default_template.as_deref(), Some("default-figure"));
    }

    #[test]
    fn test_parse_empty_settings() {
        let settings = Settings::from_str("").expect("Should parse");
        assert_eq!(settings.name, None);
        assert_eq!(settings.pixel, None);
        assert_eq!(settings.default_template, None);
    }

    #[test]
    fn test_renderer_config_overrides() {
        let settings = Settings {
            name: None,
            pixel: Some("/pixel.gif".to_string()),
            default_template: None,
        };

        let config = settings.renderer_config();
        assert_eq!(config.pixel_src, "/pixel.gif");
        assert_eq!(config.default_template, "default-picture");
    }

    #[test]
    fn test_default_settings_keep_builtin_config() {
        let config = Settings::default().renderer_config();
        assert!(config.pixel_src.starts_with("data:image/gif;base64,"));
        assert_eq!(config.default_template, "default-picture");
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = Settings::from_str("this is not valid toml {{{{");
        assert!(matches!(result, Err(SettingsError::Parse(_))));
    }
}
