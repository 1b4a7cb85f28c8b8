use std::collections::{HashMap, VecDeque};

use serde_json::Value;
use tracing::trace;

use crate::{
    domain::{
        document::{Media, Node},
        format::TextFormat,
        slug::slugify,
    },
    util::html::{escape_html, push_escaped},
};

use super::{
    headings::{HeadingEntry, collect_heading_entries, heading_level},
    types::AnchorMode,
};

/// Decorations from outermost to innermost.
const FORMAT_TAGS: [(TextFormat, &str); 4] = [
    (TextFormat::BOLD, "strong"),
    (TextFormat::ITALIC, "em"),
    (TextFormat::UNDERLINE, "u"),
    (TextFormat::STRIKETHROUGH, "s"),
];

/// Render a document tree into an HTML fragment.
///
/// Absent or non-object input yields an empty string. Heading `id`
/// attributes match the ids reported by
/// [`extract_headings`](super::extract_headings) for the same tree.
pub fn render_html(tree: Option<&Value>) -> String {
    match tree.and_then(Node::from_value) {
        Some(root) => {
            let entries = collect_heading_entries(&root, AnchorMode::Shared);
            render_document(&root, &entries)
        }
        None => String::new(),
    }
}

pub(crate) fn render_document(root: &Node, headings: &[HeadingEntry]) -> String {
    let mut anchors = AnchorTable::new(headings);
    let mut html = String::new();
    render_node(root, &mut anchors, &mut html);
    html
}

/// Heading text → anchor id lookup built from the rendered headings of the
/// extracted outline.
///
/// Each text keys the ids of its headings in document order. Headings hidden
/// below leaf nodes never reach the serializer, so they stay out of the
/// table. Lookups consume
/// ids until only the last remains, which then answers every further lookup.
/// With shared anchors all queued ids are equal, so this reduces to a plain
/// map; with unique anchors repeated headings pick up their suffixed ids in
/// order.
struct AnchorTable<'a> {
    ids: HashMap<&'a str, VecDeque<&'a str>>,
}

impl<'a> AnchorTable<'a> {
    fn new(headings: &'a [HeadingEntry]) -> Self {
        let mut ids: HashMap<&'a str, VecDeque<&'a str>> = HashMap::new();
        for heading in headings
            .iter()
            .filter(|entry| entry.rendered)
            .map(|entry| &entry.heading)
        {
            ids.entry(heading.text.as_str())
                .or_default()
                .push_back(heading.id.as_str());
        }
        Self { ids }
    }

    fn resolve(&mut self, text: &str) -> String {
        let Some(queue) = self.ids.get_mut(text) else {
            return slugify(text);
        };

        let id = if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().copied()
        };

        match id {
            Some(id) => id.to_owned(),
            None => slugify(text),
        }
    }
}

fn render_node(node: &Node, anchors: &mut AnchorTable<'_>, html: &mut String) {
    match node {
        Node::Root { children } => render_children(children, anchors, html),
        Node::Paragraph { children } => wrap("p", children, anchors, html),
        Node::Heading { tag, children } => {
            let level = heading_level(tag.as_deref());
            let text = node.plain_text();
            let id = anchors.resolve(text.trim());

            html.push_str(&format!("<h{level} id=\""));
            push_escaped(html, &id);
            html.push_str("\">");
            render_children(children, anchors, html);
            html.push_str(&format!("</h{level}>"));
        }
        Node::List { ordered, children } => {
            let tag = if *ordered { "ol" } else { "ul" };
            wrap(tag, children, anchors, html);
        }
        Node::ListItem { children } => wrap("li", children, anchors, html),
        Node::Quote { children } => wrap("blockquote", children, anchors, html),
        Node::Link {
            url,
            new_tab,
            children,
        } => {
            let (target, rel) = if *new_tab {
                ("_blank", "noopener noreferrer")
            } else {
                ("_self", "noopener")
            };

            html.push_str("<a href=\"");
            push_escaped(html, url.as_deref().unwrap_or("#"));
            html.push_str(&format!("\" target=\"{target}\" rel=\"{rel}\">"));
            render_children(children, anchors, html);
            html.push_str("</a>");
        }
        Node::LineBreak { .. } => html.push_str("<br />"),
        Node::Text { text, format, .. } => render_text(text, *format, html),
        Node::Code { code, .. } => {
            html.push_str("<pre><code>");
            push_escaped(html, code);
            html.push_str("</code></pre>");
        }
        Node::CodeHighlight { code, language, .. } => {
            html.push_str("<pre><code class=\"language-");
            push_escaped(html, language.as_deref().unwrap_or("text"));
            html.push_str("\">");
            push_escaped(html, code);
            html.push_str("</code></pre>");
        }
        Node::Upload { media, .. } => {
            if let Some(media) = media {
                render_media(media, html);
            }
        }
        Node::Unknown { kind, children } => {
            trace!(
                target = "application::render::html",
                kind = kind.as_deref().unwrap_or("<missing>"),
                children = children.len(),
                "passing through unknown node"
            );
            render_children(children, anchors, html);
        }
    }
}

fn render_children(children: &[Node], anchors: &mut AnchorTable<'_>, html: &mut String) {
    for child in children {
        render_node(child, anchors, html);
    }
}

fn wrap(tag: &str, children: &[Node], anchors: &mut AnchorTable<'_>, html: &mut String) {
    html.push_str(&format!("<{tag}>"));
    render_children(children, anchors, html);
    html.push_str(&format!("</{tag}>"));
}

fn render_text(text: &str, format: TextFormat, html: &mut String) {
    let applied: Vec<&str> = FORMAT_TAGS
        .iter()
        .filter(|(flag, _)| format.contains(*flag))
        .map(|(_, tag)| *tag)
        .collect();

    for tag in &applied {
        html.push_str(&format!("<{tag}>"));
    }
    push_escaped(html, text);
    for tag in applied.iter().rev() {
        html.push_str(&format!("</{tag}>"));
    }
}

fn render_media(media: &Media, html: &mut String) {
    html.push_str(&format!(
        "<figure><img src=\"{}\" alt=\"{}\" />",
        escape_html(&media.url),
        escape_html(media.alt.as_deref().unwrap_or_default()),
    ));
    if let Some(caption) = media.caption.as_deref() {
        html.push_str("<figcaption>");
        push_escaped(html, caption);
        html.push_str("</figcaption>");
    }
    html.push_str("</figure>");
}
