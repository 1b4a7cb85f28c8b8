use std::collections::{HashMap, HashSet};

use ammonia::{Builder as AmmoniaBuilder, UrlRelative};

const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Allow-list limited to the markup the serializer emits.
///
/// `rel` is kept as written (`link_rel(None)`) because the serializer already
/// decides between `noopener` and `noopener noreferrer`.
pub(crate) fn build_sanitizer() -> AmmoniaBuilder<'static> {
    let mut builder = AmmoniaBuilder::default();

    let mut tags: HashSet<&'static str> = HashSet::from([
        "a",
        "blockquote",
        "br",
        "code",
        "em",
        "figcaption",
        "figure",
        "img",
        "li",
        "ol",
        "p",
        "pre",
        "s",
        "strong",
        "u",
        "ul",
    ]);
    tags.extend(HEADING_TAGS);
    builder.tags(tags);

    builder.generic_attributes(HashSet::new());

    let mut tag_attributes: HashMap<&'static str, HashSet<&'static str>> = HashMap::from([
        ("a", HashSet::from(["href", "target", "rel"])),
        ("code", HashSet::from(["class"])),
        ("img", HashSet::from(["src", "alt"])),
    ]);
    for tag in HEADING_TAGS {
        tag_attributes.insert(tag, HashSet::from(["id"]));
    }
    builder.tag_attributes(tag_attributes);

    builder.link_rel(None);
    builder.url_relative(UrlRelative::PassThrough);

    builder
}
