use serde_json::Value;
use tracing::trace;

use richdoc_types::{Heading, OutlineEntry};

use crate::domain::{
    document::Node,
    slug::{AnchorSlugger, slugify},
};

use super::types::AnchorMode;

const DEFAULT_HEADING_LEVEL: u8 = 2;

/// Collect the heading outline of a document in document order.
///
/// Absent or non-object input yields an empty list. Headings whose plain text
/// is blank are skipped.
pub fn extract_headings(tree: Option<&Value>) -> Vec<Heading> {
    match tree.and_then(Node::from_value) {
        Some(root) => collect_headings(&root, AnchorMode::Shared),
        None => Vec::new(),
    }
}

pub(crate) fn collect_headings(root: &Node, mode: AnchorMode) -> Vec<Heading> {
    collect_heading_entries(root, mode)
        .into_iter()
        .map(|entry| entry.heading)
        .collect()
}

/// Extracted heading plus whether the serializer will emit it. Headings
/// below leaf nodes (`code`, `upload`, ...) are part of the outline but never
/// rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HeadingEntry {
    pub(crate) heading: Heading,
    pub(crate) rendered: bool,
}

impl HeadingEntry {
    pub(crate) fn new(heading: Heading, rendered: bool) -> Self {
        Self { heading, rendered }
    }
}

pub(crate) fn collect_heading_entries(root: &Node, mode: AnchorMode) -> Vec<HeadingEntry> {
    let mut collector = HeadingCollector {
        mode,
        slugger: AnchorSlugger::new(),
        entries: Vec::new(),
    };
    collector.visit(root, true);
    collector.entries
}

struct HeadingCollector {
    mode: AnchorMode,
    slugger: AnchorSlugger,
    entries: Vec<HeadingEntry>,
}

impl HeadingCollector {
    fn visit(&mut self, node: &Node, rendered: bool) {
        if let Node::Heading { tag, .. } = node {
            let text = node.plain_text();
            let text = text.trim();
            if text.is_empty() {
                trace!(
                    target = "application::render::headings",
                    tag = tag.as_deref().unwrap_or_default(),
                    "skipping heading without text"
                );
            } else {
                let id = match self.mode {
                    AnchorMode::Shared => slugify(text),
                    AnchorMode::Unique => self.slugger.anchor_for(text),
                };
                let heading = Heading {
                    id,
                    text: text.to_owned(),
                    level: heading_level(tag.as_deref()),
                };
                self.entries.push(HeadingEntry::new(heading, rendered));
            }
        }

        let children_rendered = rendered && !node.is_leaf();
        for child in node.children() {
            self.visit(child, children_rendered);
        }
    }
}

/// Numeric level of a heading tag: any non-digit prefix is stripped
/// (`"h3"` is 3). Missing or unparsable tags fall back to 2; results are
/// clamped to the valid `h1`–`h6` range.
pub fn heading_level(tag: Option<&str>) -> u8 {
    let Some(tag) = tag else {
        return DEFAULT_HEADING_LEVEL;
    };

    let digits: String = tag
        .trim_start_matches(|ch: char| !ch.is_ascii_digit())
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();

    match digits.parse::<u32>() {
        Ok(level) => level.clamp(1, 6) as u8,
        Err(_) if digits.is_empty() => DEFAULT_HEADING_LEVEL,
        // Only overflow remains: far beyond h6.
        Err(_) => 6,
    }
}

/// Nest a flat heading list: each heading becomes a child of the nearest
/// preceding heading with a strictly lower level.
pub fn build_outline(headings: &[Heading]) -> Vec<OutlineEntry> {
    let parent_indices = compute_parent_indices(headings);

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); headings.len()];
    let mut roots = Vec::new();
    for (idx, parent) in parent_indices.iter().enumerate() {
        match parent {
            Some(parent_idx) => children[*parent_idx].push(idx),
            None => roots.push(idx),
        }
    }

    assemble_entries(&roots, headings, &children)
}

fn compute_parent_indices(headings: &[Heading]) -> Vec<Option<usize>> {
    let mut parent_indices = vec![None; headings.len()];
    let mut stack: Vec<(u8, usize)> = Vec::new();

    for (idx, heading) in headings.iter().enumerate() {
        while let Some(&(level, _)) = stack.last() {
            if level < heading.level {
                break;
            }
            stack.pop();
        }
        parent_indices[idx] = stack.last().map(|&(_, parent_idx)| parent_idx);
        stack.push((heading.level, idx));
    }

    parent_indices
}

fn assemble_entries(
    indices: &[usize],
    headings: &[Heading],
    children: &[Vec<usize>],
) -> Vec<OutlineEntry> {
    indices
        .iter()
        .zip(1u32..)
        .map(|(&idx, position)| OutlineEntry {
            heading: headings[idx].clone(),
            position,
            children: assemble_entries(&children[idx], headings, children),
        })
        .collect()
}
