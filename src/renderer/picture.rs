//! The rendering core: validation, breakpoint expansion, substitution

use log::{debug, warn};

use crate::error::RenderFallback;
use crate::location::{LocationConfig, LocationRegistry};
use crate::media::{AltTextStore, ImageId, SecurityContext, SizeResolver};
use crate::template::{
    size_token, TemplateStore, ATTRIBUTES_TOKEN, DEFAULT_IMG_TOKEN, SOURCES_TOKEN, SRCSET_TOKEN,
};

use super::RendererConfig;

/// Size key used for the default image when a location declares no `img_base`
const THUMBNAIL_SIZE: &str = "thumbnail";

/// Caller-supplied arguments for one render call
#[derive(Debug, Clone, Default)]
pub struct RenderArgs {
    /// Location name; the renderer is inert without one
    pub location: Option<String>,
    /// Main template name overriding the configured default
    pub template_override: Option<String>,
    /// Classes applied to the root element, ahead of breakpoint classes
    pub css_classes: Vec<String>,
}

impl RenderArgs {
    /// Arguments activating the renderer for `location`
    pub fn for_location(location: impl Into<String>) -> Self {
        Self {
            location: Some(location.into()),
            ..Self::default()
        }
    }

    /// Override the main template name
    pub fn with_template(mut self, name: impl Into<String>) -> Self {
        self.template_override = Some(name.into());
        self
    }

    /// Append a root-element class
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.css_classes.push(class.into());
        self
    }
}

/// Renders lazy-loading placeholder markup for one image at a named location
///
/// Collaborators are injected at construction; the renderer keeps no per-call
/// state and is reusable across calls.
pub struct PictureRenderer {
    locations: Box<dyn LocationRegistry>,
    templates: Box<dyn TemplateStore>,
    sizes: Box<dyn SizeResolver>,
    metadata: Box<dyn AltTextStore>,
    security: Box<dyn SecurityContext>,
    config: RendererConfig,
}

impl PictureRenderer {
    /// Create a renderer with the default configuration
    pub fn new(
        locations: Box<dyn LocationRegistry>,
        templates: Box<dyn TemplateStore>,
        sizes: Box<dyn SizeResolver>,
        metadata: Box<dyn AltTextStore>,
        security: Box<dyn SecurityContext>,
    ) -> Self {
        Self {
            locations,
            templates,
            sizes,
            metadata,
            security,
            config: RendererConfig::default(),
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: RendererConfig) -> Self {
        self.config = config;
        self
    }

    /// Render the placeholder markup for `image`.
    ///
    /// Returns `original_html` untouched when `args` carries no location, and
    /// an error-annotated copy of it when validation fails. Always returns a
    /// string; never panics or propagates an error.
    pub fn render(&self, image: ImageId, args: &RenderArgs, original_html: &str) -> String {
        let Some(location) = args.location.as_deref() else {
            return original_html.to_string();
        };

        match self.render_located(image, location, args) {
            Ok(html) => html,
            Err(fallback) => {
                warn!(
                    "render of image {} at location '{}' fell back: {}",
                    image, location, fallback
                );
                fallback.annotate(original_html)
            }
        }
    }

    fn render_located(
        &self,
        image: ImageId,
        location: &str,
        args: &RenderArgs,
    ) -> Result<String, RenderFallback> {
        let configs = self
            .locations
            .get_location(location)
            .ok_or(RenderFallback::LocationNotFound)?;
        let config = configs
            .first()
            .filter(|config| !config.srcsets.is_empty())
            .ok_or(RenderFallback::MissingSrcsets)?;

        let main_name = args
            .template_override
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.config.default_template);
        let main_tpl = self.read_template(
            main_name,
            RenderFallback::MainTemplateMissing,
            RenderFallback::MainTemplateEmpty,
        )?;
        let location_tpl = self.read_template(
            location,
            RenderFallback::LocationTemplateMissing,
            RenderFallback::LocationTemplateEmpty,
        )?;

        let secure = self.security.is_secure_request();
        let mut classes = args.css_classes.clone();
        let sources = self.expand_fragment(image, config, location_tpl, secure, &mut classes);

        // Substitution order: default image, sources, attributes, pixel.
        let mut html = main_tpl;
        let base_size = config
            .img_base
            .as_deref()
            .filter(|key| !key.is_empty())
            .unwrap_or(THUMBNAIL_SIZE);
        match self.sizes.resolve_url(image, base_size, false) {
            Some(url) => html = html.replace(DEFAULT_IMG_TOKEN, &url),
            None => debug!("no default image for {} at size '{}'", image, base_size),
        }

        let html = html.replace(SOURCES_TOKEN, &sources);

        let alt = strip_tags(&self.metadata.alt_text(image));
        let attributes = format!(
            r#"class="{}" alt="{}""#,
            escape_attr(&classes.join(" ")),
            escape_attr(alt.trim()),
        );
        let html = html.replace(ATTRIBUTES_TOKEN, &attributes);

        Ok(html.replace(SRCSET_TOKEN, &format!(r#"src="{}""#, self.config.pixel_src)))
    }

    /// Expand the location fragment: one URL substitution per breakpoint, in
    /// declared order, collecting breakpoint classes along the way.
    ///
    /// Breakpoints whose URL cannot be resolved keep their token literal and
    /// contribute no class; one missing size must not block the rest.
    fn expand_fragment(
        &self,
        image: ImageId,
        config: &LocationConfig,
        fragment: String,
        secure: bool,
        classes: &mut Vec<String>,
    ) -> String {
        let mut sources = fragment;
        for breakpoint in &config.srcsets {
            let Some(size) = breakpoint.size.as_deref().filter(|size| !size.is_empty()) else {
                continue;
            };
            let Some(url) = self.sizes.resolve_url(image, size, false) else {
                warn!("no source for image {} at size '{}'", image, size);
                continue;
            };
            let url = if secure { force_https(&url) } else { url };
            sources = sources.replace(&size_token(size), &url);

            if let Some(class) = breakpoint.class.as_deref().filter(|class| !class.is_empty()) {
                classes.push(class.to_string());
            }
        }
        sources
    }

    fn read_template(
        &self,
        name: &str,
        missing: RenderFallback,
        empty: RenderFallback,
    ) -> Result<String, RenderFallback> {
        if !self.templates.is_readable(name) {
            return Err(missing);
        }
        let content = self.templates.read(name).ok_or(missing)?;
        if content.is_empty() {
            return Err(empty);
        }
        Ok(content)
    }
}

/// Rewrite plain-scheme URLs to https
fn force_https(url: &str) -> String {
    url.replace("http://", "https://")
}

/// Escape a string for use inside a double-quoted HTML attribute
fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Drop `<...>` tag runs from alt text
fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}
