//! Configuration for placeholder rendering

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// 1x1 transparent GIF embedded as the built-in placeholder pixel
const PIXEL_GIF: &[u8] = &[
    0x47, 0x49, 0x46, 0x38, 0x39, 0x61, // "GIF89a"
    0x01, 0x00, 0x01, 0x00, 0x80, 0x00, 0x00, // 1x1, one palette bit
    0x00, 0x00, 0x00, 0xff, 0xff, 0xff, // palette
    0x21, 0xf9, 0x04, 0x01, 0x00, 0x00, 0x00, 0x00, // transparency extension
    0x2c, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, // image descriptor
    0x02, 0x01, 0x44, 0x00, 0x3b, // image data, trailer
];

/// Main template name used when the caller does not override it
pub const DEFAULT_TEMPLATE: &str = "default-picture";

/// The built-in placeholder pixel as a `data:` URI
pub fn pixel_data_uri() -> String {
    format!("data:image/gif;base64,{}", STANDARD.encode(PIXEL_GIF))
}

/// Configuration options for placeholder rendering
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Main template name used when `RenderArgs` carries no override
    pub default_template: String,

    /// Value substituted as the `%%srcset%%` `src` attribute
    pub pixel_src: String,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            default_template: DEFAULT_TEMPLATE.to_string(),
            pixel_src: pixel_data_uri(),
        }
    }
}

impl RendererConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default main template name
    pub fn with_default_template(mut self, name: impl Into<String>) -> Self {
        self.default_template = name.into();
        self
    }

    /// Set the placeholder pixel src
    pub fn with_pixel_src(mut self, src: impl Into<String>) -> Self {
        self.pixel_src = src.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RendererConfig::default();
        assert_eq!(config.default_template, "default-picture");
        assert!(config.pixel_src.starts_with("data:image/gif;base64,"));
    }

    #[test]
    fn test_pixel_data_uri_is_stable() {
        assert_eq!(
            pixel_data_uri(),
            "data:image/gif;base64,R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7"
        );
    }

    #[test]
    fn test_builder_pattern() {
        let config = RendererConfig::new()
            .with_default_template("default-figure")
            .with_pixel_src("/pixel.gif");

        assert_eq!(config.default_template, "default-figure");
        assert_eq!(config.pixel_src, "/pixel.gif");
    }
}
