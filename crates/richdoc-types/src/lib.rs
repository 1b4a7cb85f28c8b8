//! Output types shared between the richdoc renderer and the page layer that
//! embeds its results (table-of-contents widgets, SEO tooling, templates).

use serde::{Deserialize, Serialize};

/// One entry of the flat heading list, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Heading {
    /// Anchor identifier, identical to the `id` attribute in the rendered HTML.
    pub id: String,
    /// Trimmed plain text of the heading.
    pub text: String,
    /// Heading level, 1 through 6.
    pub level: u8,
}

impl Heading {
    pub fn new(id: impl Into<String>, text: impl Into<String>, level: u8) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            level,
        }
    }
}

/// Heading nested under its nearest preceding heading of a lower level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineEntry {
    pub heading: Heading,
    /// 1-indexed position among siblings sharing the same parent.
    pub position: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<OutlineEntry>,
}

/// Domains worth warming up before the rendered body is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ResourceHints {
    /// Origins of externally hosted images.
    pub preconnect_domains: Vec<String>,
    /// Origins of external link targets.
    pub dns_prefetch_domains: Vec<String>,
}

/// Content-level metrics surfaced alongside rendered HTML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ContentMetrics {
    pub word_count: u32,
    pub reading_time_minutes: u32,
    pub headings_count: u32,
    pub internal_links_count: u32,
    pub external_links_count: u32,
    pub anchor_links_count: u32,
    pub images_count: u32,
    pub images_missing_alt: u32,
    pub code_blocks_count: u32,
    /// Nodes of a type the renderer does not recognise; their children still render.
    pub unknown_nodes_count: u32,
}

/// Everything a single render pass produces for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RenderedDocument {
    /// HTML fragment without any `<html>`/`<body>` wrapper.
    pub html: String,
    /// Flat heading list in document order.
    pub headings: Vec<Heading>,
    /// The same headings nested by level.
    pub outline: Vec<OutlineEntry>,
    #[serde(default)]
    pub metrics: ContentMetrics,
    #[serde(default)]
    pub resource_hints: ResourceHints,
}

impl RenderedDocument {
    /// Result for an absent or non-object document.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.html.is_empty() && self.headings.is_empty()
    }
}
