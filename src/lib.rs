//! Render structured rich-text documents into HTML fragments with a stable
//! heading outline.
//!
//! ```
//! use serde_json::json;
//!
//! let tree = json!({
//!     "type": "root",
//!     "children": [
//!         {"type": "heading", "tag": "h2", "children": [{"type": "text", "text": "Setup"}]}
//!     ]
//! });
//!
//! assert_eq!(richdoc::render_html(Some(&tree)), "<h2 id=\"setup\">Setup</h2>");
//! assert_eq!(richdoc::extract_headings(Some(&tree))[0].id, "setup");
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod util;

pub use application::render::{
    AnchorMode, RenderOptions, RenderService, RichTextRenderer, build_outline,
    configure_render_service, extract_headings, heading_level, parse_document, render_html,
    render_service,
};
pub use richdoc_types as types;
