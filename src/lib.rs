//! Lazy Picture - responsive lazy-loaded image placeholder rendering
//!
//! Given an image id and a named "location" (an externally authored set of
//! responsive breakpoints), this library substitutes per-size source URLs,
//! classes, and alt text into `%%token%%` templates, producing placeholder
//! markup whose real sources load lazily behind a transparent pixel.
//!
//! Validation failures never surface as errors: the renderer annotates the
//! original markup with a `data-error` attribute and returns it, so a broken
//! configuration degrades a page instead of breaking it.
//!
//! # Example
//!
//! ```rust
//! use lazy_picture::location::{Breakpoint, LocationConfig, MemoryLocationRegistry};
//! use lazy_picture::media::{ImageId, ManifestImage, MediaManifest, StaticSecurityContext};
//! use lazy_picture::template::MemoryTemplateStore;
//! use lazy_picture::{PictureRenderer, RenderArgs};
//!
//! let mut locations = MemoryLocationRegistry::new();
//! locations.insert(
//!     "teaser",
//!     vec![LocationConfig {
//!         srcsets: vec![Breakpoint {
//!             size: Some("480x240".to_string()),
//!             class: None,
//!         }],
//!         img_base: None,
//!     }],
//! );
//!
//! let mut templates = MemoryTemplateStore::new();
//! templates.insert(
//!     "default-picture",
//!     "<picture>%%sources%%<img %%srcset%% %%attributes%%></picture>",
//! );
//! templates.insert("teaser", r#"<source srcset="%%480x240%%">"#);
//!
//! let mut media = MediaManifest::default();
//! let mut entry = ManifestImage::default();
//! entry.sources.insert(
//!     "480x240".to_string(),
//!     "https://cdn.example/teaser.jpg".to_string(),
//! );
//! media.insert(ImageId(7), entry);
//!
//! let renderer = PictureRenderer::new(
//!     Box::new(locations),
//!     Box::new(templates),
//!     Box::new(media.clone()),
//!     Box::new(media),
//!     Box::new(StaticSecurityContext::new(false)),
//! );
//!
//! let html = renderer.render(ImageId(7), &RenderArgs::for_location("teaser"), "<img />");
//! assert!(html.contains("https://cdn.example/teaser.jpg"));
//! ```

pub mod error;
pub mod hooks;
pub mod location;
pub mod media;
pub mod renderer;
pub mod settings;
pub mod template;

pub use error::RenderFallback;
pub use hooks::{FilterChain, ThumbnailFilter};
pub use location::{Breakpoint, LocationConfig, LocationRegistry};
pub use media::{AltTextStore, ImageId, SecurityContext, SizeResolver};
pub use renderer::{PictureRenderer, RenderArgs, RendererConfig};
pub use settings::Settings;
pub use template::TemplateStore;
