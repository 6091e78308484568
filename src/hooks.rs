//! Thumbnail HTML filter chain
//!
//! The host system hands thumbnail markup through an ordered list of filters,
//! each receiving the previous filter's output. Ordering is explicit at
//! registration time; there is no shared priority counter.

use crate::media::ImageId;
use crate::renderer::{PictureRenderer, RenderArgs};

/// A transformation applied to thumbnail HTML
pub trait ThumbnailFilter {
    /// Produce the replacement markup for `html`
    fn filter_html(&self, image: ImageId, args: &RenderArgs, html: String) -> String;
}

impl ThumbnailFilter for PictureRenderer {
    fn filter_html(&self, image: ImageId, args: &RenderArgs, html: String) -> String {
        self.render(image, args, &html)
    }
}

/// Ordered list of thumbnail filters
#[derive(Default)]
pub struct FilterChain {
    filters: Vec<Box<dyn ThumbnailFilter>>,
}

impl FilterChain {
    /// Create a new empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a filter; earlier registrations run first
    pub fn register(&mut self, filter: Box<dyn ThumbnailFilter>) {
        self.filters.push(filter);
    }

    /// Number of registered filters
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Whether the chain has no filters
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Run `html` through every registered filter in registration order
    pub fn apply(&self, image: ImageId, args: &RenderArgs, html: String) -> String {
        self.filters
            .iter()
            .fold(html, |html, filter| filter.filter_html(image, args, html))
    }
}
