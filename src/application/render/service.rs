use std::sync::Arc;

use ammonia::Builder as AmmoniaBuilder;
use metrics::counter;
use once_cell::sync::{Lazy, OnceCell};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use richdoc_types::{Heading, RenderedDocument};

use crate::domain::document::Node;

use super::{
    headings::{build_outline, collect_heading_entries, collect_headings},
    html::render_document,
    metrics::collect_metrics,
    sanitize::build_sanitizer,
    types::{RenderOptions, RenderService},
};

pub(crate) const RENDER_TOTAL_METRIC: &str = "richdoc_render_total";
pub(crate) const UNKNOWN_NODES_METRIC: &str = "richdoc_unknown_nodes_total";

/// Full render pipeline: outline extraction, HTML serialization, optional
/// sanitisation, and content metrics.
pub struct RichTextRenderer {
    options: RenderOptions,
    sanitizer: Option<AmmoniaBuilder<'static>>,
}

impl RichTextRenderer {
    pub fn new(options: RenderOptions) -> Self {
        let sanitizer = options.sanitize.then(build_sanitizer);
        Self { options, sanitizer }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Extract only the heading list, honouring the configured anchor mode.
    pub fn headings(&self, tree: Option<&Value>) -> Vec<Heading> {
        match tree.and_then(Node::from_value) {
            Some(root) => collect_headings(&root, self.options.anchor_mode),
            None => Vec::new(),
        }
    }
}

impl Default for RichTextRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl RenderService for RichTextRenderer {
    fn render(&self, tree: Option<&Value>) -> RenderedDocument {
        counter!(RENDER_TOTAL_METRIC).increment(1);

        let Some(root) = tree.and_then(Node::from_value) else {
            debug!(
                target = "application::render",
                present = tree.is_some(),
                "document absent or not an object; rendering nothing"
            );
            return RenderedDocument::empty();
        };

        let entries = collect_heading_entries(&root, self.options.anchor_mode);
        let rendered = render_document(&root, &entries);
        let headings: Vec<Heading> = entries.into_iter().map(|entry| entry.heading).collect();
        let html = match &self.sanitizer {
            Some(sanitizer) => sanitizer.clean(&rendered).to_string(),
            None => rendered,
        };

        let outline = build_outline(&headings);
        let (mut metrics, resource_hints) = collect_metrics(&root, self.options.words_per_minute);
        metrics.headings_count = u32::try_from(headings.len()).unwrap_or(u32::MAX);

        if metrics.unknown_nodes_count > 0 {
            counter!(UNKNOWN_NODES_METRIC).increment(u64::from(metrics.unknown_nodes_count));
        }

        debug!(
            target = "application::render",
            headings = headings.len(),
            words = metrics.word_count,
            unknown_nodes = metrics.unknown_nodes_count,
            html_bytes = html.len(),
            sanitized = self.sanitizer.is_some(),
            "document rendered"
        );

        RenderedDocument {
            html,
            headings,
            outline,
            metrics,
            resource_hints,
        }
    }
}

static RENDER_SERVICE: Lazy<Arc<RichTextRenderer>> =
    Lazy::new(|| Arc::new(RichTextRenderer::new(active_render_options())));

/// Access the shared render service instance, initialised on first use.
pub fn render_service() -> Arc<RichTextRenderer> {
    Arc::clone(&RENDER_SERVICE)
}

#[derive(Debug, Error)]
pub enum RenderConfigError {
    #[error("render service already configured")]
    AlreadyConfigured,
}

static RENDER_OPTIONS: OnceCell<RenderOptions> = OnceCell::new();

/// Set the options used by [`render_service`]. Must run before the first
/// call to [`render_service`] to take effect, and only once per process.
pub fn configure_render_service(options: RenderOptions) -> Result<(), RenderConfigError> {
    RENDER_OPTIONS
        .set(options)
        .map_err(|_| RenderConfigError::AlreadyConfigured)
}

fn active_render_options() -> RenderOptions {
    RENDER_OPTIONS.get().cloned().unwrap_or_default()
}
