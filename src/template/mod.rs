//! Template plumbing: token vocabulary and template stores
//!
//! Templates are plain text with `%%token%%` placeholders. Per render, the
//! engine resolves two of them by name: a main/container template and a
//! location fragment template.
//!
//! Tokens replaced in the main template:
//! - `%%sources%%` — the expanded location fragment
//! - `%%attributes%%` — the `class`/`alt` attribute string
//! - `%%srcset%%` — the placeholder-pixel `src` attribute
//! - `%%default_img%%` — the base/default image URL
//!
//! Tokens replaced in the fragment template:
//! - `%%<sizeKey>%%` — the source URL for one breakpoint

mod store;

pub use store::{DirTemplateStore, MemoryTemplateStore, TemplateStore};

/// Token replaced by the expanded location fragment
pub const SOURCES_TOKEN: &str = "%%sources%%";
/// Token replaced by the `class`/`alt` attribute string
pub const ATTRIBUTES_TOKEN: &str = "%%attributes%%";
/// Token replaced by the placeholder-pixel `src` attribute
pub const SRCSET_TOKEN: &str = "%%srcset%%";
/// Token replaced by the default image URL
pub const DEFAULT_IMG_TOKEN: &str = "%%default_img%%";

/// The `%%<sizeKey>%%` token for one breakpoint
pub fn size_token(size_key: &str) -> String {
    format!("%%{}%%", size_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_token() {
        assert_eq!(size_token("617x333"), "%%617x333%%");
    }
}
