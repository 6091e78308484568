//! Render fallback taxonomy and inline error annotation

use thiserror::Error;

/// Validation failures that abort a render into the annotated-markup path.
///
/// None of these cross the public boundary as `Err`: the renderer turns them
/// into a `data-error` attribute on the original markup and still returns a
/// string.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderFallback {
    /// The location name is absent from the registry
    #[error("No location found in source file")]
    LocationNotFound,

    /// The location resolved but carries no breakpoint list (empty or pre-V2 JSON)
    #[error("No srcsets found or not V2 JSON")]
    MissingSrcsets,

    /// The main/container template is absent or unreadable
    #[error("Default tpl not exists or not readable")]
    MainTemplateMissing,

    /// The main/container template resolved to empty content
    #[error("Empty default tpl")]
    MainTemplateEmpty,

    /// The location fragment template is absent or unreadable
    #[error("Location tpl not exists or not readable")]
    LocationTemplateMissing,

    /// The location fragment template resolved to empty content
    #[error("Empty location tpl")]
    LocationTemplateEmpty,
}

impl RenderFallback {
    /// Inject this fallback as a `data-error` attribute before the first
    /// closing `/>` of `html`.
    ///
    /// Markup without a self-closing tag passes through unchanged.
    pub fn annotate(&self, html: &str) -> String {
        html.replacen("/>", &format!(r#"data-error="{}" />"#, self), 1)
    }
}
