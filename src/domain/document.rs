//! Typed view over the untyped document tree supplied by the content store.
//!
//! The store hands over a JSON value whose nodes are tagged by a `type`
//! string. Conversion into [`Node`] is total: fields of the wrong JSON type
//! read as absent, non-object children are skipped, and unrecognised tags map
//! to [`Node::Unknown`] so their children still render.

use serde_json::{Map, Value};

use super::format::TextFormat;

/// One node of a rich-text document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Root {
        children: Vec<Node>,
    },
    Paragraph {
        children: Vec<Node>,
    },
    Heading {
        tag: Option<String>,
        children: Vec<Node>,
    },
    List {
        ordered: bool,
        children: Vec<Node>,
    },
    ListItem {
        children: Vec<Node>,
    },
    Quote {
        children: Vec<Node>,
    },
    Link {
        url: Option<String>,
        new_tab: bool,
        children: Vec<Node>,
    },
    LineBreak {
        children: Vec<Node>,
    },
    Text {
        text: String,
        format: TextFormat,
        children: Vec<Node>,
    },
    Code {
        code: String,
        children: Vec<Node>,
    },
    CodeHighlight {
        code: String,
        language: Option<String>,
        children: Vec<Node>,
    },
    Upload {
        media: Option<Media>,
        children: Vec<Node>,
    },
    /// Any other tag. Carries only children so wrapper nodes from newer
    /// editor versions pass their content through.
    Unknown {
        kind: Option<String>,
        children: Vec<Node>,
    },
}

/// Embedded media descriptor of an `upload` node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    pub url: String,
    pub alt: Option<String>,
    pub caption: Option<String>,
}

const EMPTY: &[Node] = &[];

impl Node {
    /// Convert a JSON value into a node. Returns `None` when the value is not
    /// an object; every object converts successfully.
    pub fn from_value(value: &Value) -> Option<Node> {
        let object = value.as_object()?;
        Some(Self::from_object(object))
    }

    fn from_object(object: &Map<String, Value>) -> Node {
        let kind = str_field(object, "type");

        match kind {
            Some("root") => Node::Root {
                children: children_of(object),
            },
            Some("paragraph") => Node::Paragraph {
                children: children_of(object),
            },
            Some("heading") => Node::Heading {
                tag: str_field(object, "tag").map(str::to_owned),
                children: children_of(object),
            },
            Some("list") => Node::List {
                ordered: str_field(object, "listType") == Some("number"),
                children: children_of(object),
            },
            Some("listitem") => Node::ListItem {
                children: children_of(object),
            },
            Some("quote") => Node::Quote {
                children: children_of(object),
            },
            Some("link") => Node::Link {
                url: non_empty_field(object, "url"),
                new_tab: object
                    .get("newTab")
                    .and_then(Value::as_bool)
                    .unwrap_or(false),
                children: children_of(object),
            },
            Some("linebreak") => Node::LineBreak {
                children: children_of(object),
            },
            Some("text") => Node::Text {
                text: str_field(object, "text").unwrap_or_default().to_owned(),
                format: TextFormat::from_value(object.get("format")),
                children: children_of(object),
            },
            Some("code") => Node::Code {
                code: str_field(object, "code").unwrap_or_default().to_owned(),
                children: children_of(object),
            },
            Some("codehighlight") => Node::CodeHighlight {
                code: str_field(object, "code").unwrap_or_default().to_owned(),
                language: non_empty_field(object, "language"),
                children: children_of(object),
            },
            Some("upload") => Node::Upload {
                media: object
                    .get("value")
                    .and_then(Value::as_object)
                    .and_then(Media::from_object),
                children: children_of(object),
            },
            other => Node::Unknown {
                kind: other.map(str::to_owned),
                children: children_of(object),
            },
        }
    }

    /// Every child node in document order, including the children of leaf
    /// types that never reach the HTML.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Root { children }
            | Node::Paragraph { children }
            | Node::Heading { children, .. }
            | Node::List { children, .. }
            | Node::ListItem { children }
            | Node::Quote { children }
            | Node::Link { children, .. }
            | Node::LineBreak { children }
            | Node::Text { children, .. }
            | Node::Code { children, .. }
            | Node::CodeHighlight { children, .. }
            | Node::Upload { children, .. }
            | Node::Unknown { children, .. } => children,
        }
    }

    /// Children the HTML serializer emits. Leaf types (`linebreak`, `text`,
    /// `code`, `codehighlight`, `upload`) render none of theirs.
    pub fn rendered_children(&self) -> &[Node] {
        if self.is_leaf() { EMPTY } else { self.children() }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            Node::LineBreak { .. }
                | Node::Text { .. }
                | Node::Code { .. }
                | Node::CodeHighlight { .. }
                | Node::Upload { .. }
        )
    }

    /// Concatenated `text` of every descendant text node, markup ignored.
    pub fn plain_text(&self) -> String {
        fn walk(node: &Node, buffer: &mut String) {
            if let Node::Text { text, .. } = node {
                buffer.push_str(text);
            }
            for child in node.children() {
                walk(child, buffer);
            }
        }

        let mut buffer = String::new();
        walk(self, &mut buffer);
        buffer
    }
}

impl Media {
    fn from_object(object: &Map<String, Value>) -> Option<Media> {
        Some(Media {
            url: non_empty_field(object, "url")?,
            alt: str_field(object, "alt").map(str::to_owned),
            caption: non_empty_field(object, "caption"),
        })
    }
}

fn str_field<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    object.get(key).and_then(Value::as_str)
}

fn non_empty_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    str_field(object, key)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}

fn children_of(object: &Map<String, Value>) -> Vec<Node> {
    object
        .get("children")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Node::from_value).collect())
        .unwrap_or_default()
}
