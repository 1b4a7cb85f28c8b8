use std::num::NonZeroU32;

use serde_json::Value;
use thiserror::Error;

use richdoc_types::RenderedDocument;

pub(crate) const DEFAULT_WORDS_PER_MINUTE: u32 = 225;

/// How heading anchors are assigned when a document repeats heading text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnchorMode {
    /// Identical text yields identical ids, so repeated headings share an anchor.
    #[default]
    Shared,
    /// Repeats receive `-2`, `-3`, … suffixes in document order.
    Unique,
}

/// Knobs for the full render pipeline. The defaults reproduce the plain
/// [`render_html`](super::render_html) output exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub anchor_mode: AnchorMode,
    /// Run the rendered fragment through the allow-list sanitizer.
    pub sanitize: bool,
    /// Reading speed used for the reading-time estimate.
    pub words_per_minute: NonZeroU32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            anchor_mode: AnchorMode::Shared,
            sanitize: false,
            words_per_minute: NonZeroU32::new(DEFAULT_WORDS_PER_MINUTE)
                .unwrap_or(NonZeroU32::MIN),
        }
    }
}

impl From<&crate::config::RenderSettings> for RenderOptions {
    fn from(settings: &crate::config::RenderSettings) -> Self {
        Self {
            anchor_mode: if settings.unique_anchors {
                AnchorMode::Unique
            } else {
                AnchorMode::Shared
            },
            sanitize: settings.sanitize,
            words_per_minute: settings.words_per_minute,
        }
    }
}

/// Errors surfaced before a document reaches the renderer. Rendering itself
/// never fails.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("document is not valid JSON: {message}")]
    Document { message: String },
}

/// Trait exposed by the rendering pipeline. Implementations must be pure and
/// deterministic: given the same tree, they return identical output.
pub trait RenderService: Send + Sync {
    fn render(&self, tree: Option<&Value>) -> RenderedDocument;
}

/// Parse raw JSON text handed over by the content store. A JSON `null`
/// stands for an absent document.
pub fn parse_document(source: &str) -> Result<Option<Value>, RenderError> {
    let value: Value = serde_json::from_str(source).map_err(|err| RenderError::Document {
        message: err.to_string(),
    })?;

    Ok((!value.is_null()).then_some(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_document_is_absent() {
        assert_eq!(parse_document("null"), Ok(None));
        assert_eq!(parse_document("  null\n"), Ok(None));
    }

    #[test]
    fn invalid_json_is_reported() {
        let err = parse_document("{\"type\": ").expect_err("truncated JSON");
        assert!(matches!(err, RenderError::Document { .. }));
        assert!(err.to_string().starts_with("document is not valid JSON"));
    }

    #[test]
    fn non_object_json_still_parses() {
        let value = parse_document("\"just a string\"").expect("valid JSON");
        assert_eq!(value, Some(Value::String("just a string".into())));
    }

    #[test]
    fn default_options_use_shared_anchors() {
        let options = RenderOptions::default();
        assert_eq!(options.anchor_mode, AnchorMode::Shared);
        assert!(!options.sanitize);
        assert_eq!(options.words_per_minute.get(), DEFAULT_WORDS_PER_MINUTE);
    }
}
