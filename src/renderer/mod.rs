//! Placeholder markup rendering
//!
//! This module takes a location configuration and produces the final
//! placeholder HTML string, with per-breakpoint source URLs, classes, and
//! alt text substituted into the resolved templates.

pub mod config;
pub mod picture;

pub use config::{pixel_data_uri, RendererConfig, DEFAULT_TEMPLATE};
pub use picture::{PictureRenderer, RenderArgs};
