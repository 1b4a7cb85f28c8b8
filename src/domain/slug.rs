//! Utilities for generating deterministic anchor slugs from heading text.
//!
//! [`slugify`] is a pure function of its input, which is what keeps the
//! outline and the rendered body in agreement without sharing state. When a
//! document repeats a heading, [`AnchorSlugger`] can hand out suffixed
//! variants instead.

use std::collections::HashMap;

/// Derive an anchor slug from human-readable text.
///
/// Lowercases, drops everything except ASCII letters, digits, whitespace and
/// hyphens, trims, then turns whitespace runs into a single hyphen and folds
/// repeated hyphens. Leading or trailing hyphens present in the source survive.
///
/// ```
/// use richdoc::domain::slug::slugify;
///
/// assert_eq!(slugify("Getting Started: Part 1!"), "getting-started-part-1");
/// assert_eq!(slugify("!!!"), "");
/// ```
pub fn slugify(input: &str) -> String {
    let lowered = input.to_lowercase();
    let filtered: String = lowered
        .chars()
        .filter(|ch| {
            ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch.is_whitespace() || *ch == '-'
        })
        .collect();

    let mut slug = String::with_capacity(filtered.len());
    for ch in filtered.trim().chars() {
        let ch = if ch.is_whitespace() { '-' } else { ch };
        if ch == '-' && slug.ends_with('-') {
            continue;
        }
        slug.push(ch);
    }
    slug
}

/// Deterministically generate unique anchor slugs within a single document.
///
/// Headings processed in order receive monotonic suffixes when duplicates
/// occur (e.g. `section`, `section-2`, `section-3`). Text that slugifies to
/// nothing stays empty.
#[derive(Default, Debug)]
pub struct AnchorSlugger {
    occurrences: HashMap<String, usize>,
}

impl AnchorSlugger {
    pub fn new() -> Self {
        Self {
            occurrences: HashMap::new(),
        }
    }

    pub fn anchor_for(&mut self, heading: &str) -> String {
        let base = slugify(heading);
        if base.is_empty() {
            return base;
        }

        let count = self.occurrences.entry(base.clone()).or_insert(0);
        *count += 1;

        if *count == 1 {
            base
        } else {
            format!("{base}-{}", *count)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_joins_words() {
        assert_eq!(slugify("Getting Started: Part 1!"), "getting-started-part-1");
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("What's new?"), "whats-new");
    }

    #[test]
    fn collapses_whitespace_and_hyphens() {
        assert_eq!(slugify("  Multiple   Spaces  "), "multiple-spaces");
        assert_eq!(slugify("a - b"), "a-b");
        assert_eq!(slugify("tabs\tand\nnewlines"), "tabs-and-newlines");
        assert_eq!(slugify("hello--world"), "hello-world");
    }

    #[test]
    fn keeps_edge_hyphens_from_source() {
        assert_eq!(slugify("-hello-"), "-hello-");
        assert_eq!(slugify("--- draft ---"), "-draft-");
    }

    #[test]
    fn drops_non_ascii_and_underscores() {
        assert_eq!(slugify("Café au lait"), "caf-au-lait");
        assert_eq!(slugify("snake_case_name"), "snakecasename");
        assert_eq!(slugify("基线对齐"), "");
    }

    #[test]
    fn empty_results_are_allowed() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("   "), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn trailing_punctuation_does_not_leave_a_hyphen() {
        assert_eq!(slugify("Done !"), "done");
        assert_eq!(slugify("( Intro )"), "intro");
    }

    #[test]
    fn anchor_slugger_produces_unique_slugs() {
        let mut slugger = AnchorSlugger::new();

        assert_eq!(slugger.anchor_for("Overview"), "overview");
        assert_eq!(slugger.anchor_for("Overview"), "overview-2");
        assert_eq!(slugger.anchor_for("overview!"), "overview-3");
        assert_eq!(slugger.anchor_for("Details"), "details");
    }

    #[test]
    fn anchor_slugger_leaves_empty_slugs_alone() {
        let mut slugger = AnchorSlugger::new();

        assert_eq!(slugger.anchor_for("???"), "");
        assert_eq!(slugger.anchor_for("???"), "");
    }
}
