//! Rich-text rendering: document tree in, HTML fragment and heading outline out.
//!
//! The pipeline is pure. [`extract_headings`] and [`render_html`] are the
//! two primitive passes; both derive heading anchors from the same
//! slugification so the outline and the body always agree.
//! [`RichTextRenderer`] layers the optional stages (unique anchors,
//! sanitisation, metrics) on top of them.

mod headings;
mod html;
mod metrics;
mod sanitize;
mod service;
mod types;

pub use headings::{build_outline, extract_headings, heading_level};
pub use html::render_html;
pub use service::{RenderConfigError, RichTextRenderer, configure_render_service, render_service};
pub use types::{AnchorMode, RenderError, RenderOptions, RenderService, parse_document};

pub(crate) use service::{RENDER_TOTAL_METRIC, UNKNOWN_NODES_METRIC};
pub(crate) use types::DEFAULT_WORDS_PER_MINUTE;
