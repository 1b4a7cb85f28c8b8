use std::{collections::BTreeSet, num::NonZeroU32};

use url::Url;

use richdoc_types::{ContentMetrics, ResourceHints};

use crate::domain::document::{Media, Node};

#[derive(Default)]
struct MetricsState {
    image_domains: BTreeSet<String>,
    link_domains: BTreeSet<String>,
    words: u32,
    in_word: bool,
    internal_links: u32,
    external_links: u32,
    anchor_links: u32,
    images: u32,
    images_missing_alt: u32,
    code_blocks: u32,
    unknown_nodes: u32,
}

/// Walk the document once, counting what editorial and SEO tooling cares
/// about. `headings_count` is left for the caller, which already holds the
/// extracted outline.
pub(crate) fn collect_metrics(
    root: &Node,
    words_per_minute: NonZeroU32,
) -> (ContentMetrics, ResourceHints) {
    let mut state = MetricsState::default();
    visit(root, &mut state);

    let reading_time_minutes = reading_time(state.words, words_per_minute);

    let metrics = ContentMetrics {
        word_count: state.words,
        reading_time_minutes,
        internal_links_count: state.internal_links,
        external_links_count: state.external_links,
        anchor_links_count: state.anchor_links,
        images_count: state.images,
        images_missing_alt: state.images_missing_alt,
        code_blocks_count: state.code_blocks,
        unknown_nodes_count: state.unknown_nodes,
        ..ContentMetrics::default()
    };

    let hints = ResourceHints {
        preconnect_domains: state.image_domains.into_iter().collect(),
        dns_prefetch_domains: state.link_domains.into_iter().collect(),
    };

    (metrics, hints)
}

/// Whole minutes, rounded up; zero only for an empty document.
fn reading_time(words: u32, words_per_minute: NonZeroU32) -> u32 {
    words.div_ceil(words_per_minute.get())
}

fn visit(node: &Node, state: &mut MetricsState) {
    match node {
        Node::Text { text, .. } => count_words(text, state),
        Node::Link { url, .. } => record_link(url.as_deref().unwrap_or("#"), state),
        Node::Code { .. } | Node::CodeHighlight { .. } => {
            state.code_blocks = state.code_blocks.saturating_add(1);
        }
        Node::Upload {
            media: Some(media), ..
        } => record_image(media, state),
        Node::Unknown { .. } => {
            state.unknown_nodes = state.unknown_nodes.saturating_add(1);
        }
        _ => {}
    }

    // Block boundaries end the current word so adjacent paragraphs do not merge.
    let is_block = !matches!(
        node,
        Node::Text { .. } | Node::Link { .. } | Node::Unknown { .. }
    );
    if is_block {
        state.in_word = false;
    }

    for child in node.rendered_children() {
        visit(child, state);
    }

    if is_block {
        state.in_word = false;
    }
}

/// Words may span several text runs (`"hel"` bold + `"lo"`), so the word
/// state carries across sibling text nodes.
fn count_words(text: &str, state: &mut MetricsState) {
    for ch in text.chars() {
        if ch.is_whitespace() {
            state.in_word = false;
        } else if !state.in_word {
            state.in_word = true;
            state.words = state.words.saturating_add(1);
        }
    }
}

fn record_link(href: &str, state: &mut MetricsState) {
    match classify_link(href) {
        LinkKind::External { domain } => {
            state.external_links = state.external_links.saturating_add(1);
            if let Some(domain) = domain {
                state.link_domains.insert(domain);
            }
        }
        LinkKind::Internal => {
            state.internal_links = state.internal_links.saturating_add(1);
        }
        LinkKind::Anchor => {
            state.anchor_links = state.anchor_links.saturating_add(1);
        }
        LinkKind::Other => {}
    }
}

fn record_image(media: &Media, state: &mut MetricsState) {
    state.images = state.images.saturating_add(1);

    let has_alt = media
        .alt
        .as_deref()
        .is_some_and(|alt| !alt.trim().is_empty());
    if !has_alt {
        state.images_missing_alt = state.images_missing_alt.saturating_add(1);
    }

    if is_external_http_url(&media.url)
        && let Some(domain) = extract_domain(&media.url)
    {
        state.image_domains.insert(domain);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum LinkKind {
    Internal,
    External { domain: Option<String> },
    Anchor,
    Other,
}

fn classify_link(href: &str) -> LinkKind {
    if href.starts_with('#') || href.is_empty() {
        return LinkKind::Anchor;
    }

    if is_external_http_url(href) {
        return LinkKind::External {
            domain: extract_domain(href),
        };
    }

    if is_internal_path(href) {
        return LinkKind::Internal;
    }

    LinkKind::Other
}

fn is_internal_path(href: &str) -> bool {
    href.starts_with('/')
        || href.starts_with("./")
        || href.starts_with("../")
        || (!href.contains(':') && !href.starts_with("//"))
}

fn is_external_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

fn extract_domain(url: &str) -> Option<String> {
    Url::parse(url).ok().and_then(|parsed| {
        parsed.host_str().map(|host| {
            let mut domain = format!("{}://{}", parsed.scheme(), host);
            if let Some(port) = parsed.port() {
                domain.push(':');
                domain.push_str(&port.to_string());
            }
            domain
        })
    })
}
