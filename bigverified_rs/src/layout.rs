//! Layout tree handed to the host renderer.
//!
//! A [`Node`] is a kind, a set of opaque class tags, an optional anchor id,
//! an optional stable key and ordered children. Nothing here knows about
//! markup: the host decides how each [`NodeKind`] is serialized.
//!
//! Nodes are assembled with consuming builder calls:
//!
//! ```rust
//! use bigverified::layout::{Node, NodeKind};
//!
//! let section = Node::new(NodeKind::Section)
//!     .class("bg-white py-16")
//!     .anchor("services")
//!     .child(Node::heading(2, "What we do"));
//!
//! assert_eq!(section.anchor.as_deref(), Some("services"));
//! assert!(section.classes.contains("py-16"));
//! ```

use std::fmt;

use serde::Serialize;

use crate::catalog::{FieldKind, FieldSpan, Graphic};

/// Ordered set of style-class identifiers.
///
/// Tags are opaque: they are stored and compared, never interpreted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Classes(Vec<String>);

impl Classes {
    /// Split a whitespace-separated tag list.
    pub fn parse(tags: &str) -> Self {
        let mut classes = Self::default();
        classes.extend(tags);
        classes
    }

    /// Append tags, skipping ones already present.
    pub fn extend(&mut self, tags: &str) {
        for tag in tags.split_whitespace() {
            if !self.contains(tag) {
                self.0.push(tag.to_string());
            }
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Display for Classes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

/// Where a form shell sends its values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormAction {
    /// Nothing is sent; the send button is a plain button.
    None,
    /// Values are posted to `endpoint`.
    Post { endpoint: String },
}

/// What a button is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonRole {
    /// Collapsed-navigation toggle. Starts closed.
    MenuToggle,
    /// Contact form send action.
    Send,
}

/// Structural role of a node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKind {
    Main,
    Header,
    Nav,
    Section,
    Article,
    Footer,
    Block,
    List,
    Heading {
        level: u8,
        text: String,
    },
    Text {
        text: String,
    },
    Inline {
        text: String,
    },
    ListItem {
        text: String,
    },
    Link {
        href: String,
        label: String,
    },
    Button {
        label: String,
        role: ButtonRole,
    },
    Form {
        action: FormAction,
    },
    Field {
        name: String,
        placeholder: String,
        kind: FieldKind,
        span: FieldSpan,
    },
    Graphic(Graphic),
}

/// One element of the composed page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Node {
    #[serde(flatten)]
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Classes::is_empty")]
    pub classes: Classes,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            classes: Classes::default(),
            anchor: None,
            key: None,
            children: Vec::new(),
        }
    }

    pub fn block() -> Self {
        Self::new(NodeKind::Block)
    }

    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self::new(NodeKind::Heading {
            level,
            text: text.into(),
        })
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(NodeKind::Text { text: text.into() })
    }

    pub fn inline(text: impl Into<String>) -> Self {
        Self::new(NodeKind::Inline { text: text.into() })
    }

    pub fn link(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(NodeKind::Link {
            href: href.into(),
            label: label.into(),
        })
    }

    /// Link to an in-page anchor.
    pub fn anchor_link(target: &str, label: impl Into<String>) -> Self {
        Self::link(format!("#{target}"), label)
    }

    pub fn button(label: impl Into<String>, role: ButtonRole) -> Self {
        Self::new(NodeKind::Button {
            label: label.into(),
            role,
        })
    }

    pub fn class(mut self, tags: &str) -> Self {
        self.classes.extend(tags);
        self
    }

    pub fn anchor(mut self, id: impl Into<String>) -> Self {
        self.anchor = Some(id.into());
        self
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Text carried by text-bearing kinds.
    pub fn text_content(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Heading { text, .. }
            | NodeKind::Text { text }
            | NodeKind::Inline { text }
            | NodeKind::ListItem { text } => Some(text),
            NodeKind::Link { label, .. } | NodeKind::Button { label, .. } => Some(label),
            _ => None,
        }
    }

    /// Depth-first, pre-order traversal including `self`.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    /// First node in document order carrying `anchor` as its id.
    pub fn find_anchor(&self, anchor: &str) -> Option<&Node> {
        self.walk().find(|n| n.anchor.as_deref() == Some(anchor))
    }

    /// All nodes in document order carrying the class tag.
    pub fn find_class<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.walk().filter(move |n| n.classes.contains(tag))
    }
}

/// Iterator returned by [`Node::walk`].
pub struct Walk<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Lowercase slug used for content-derived keys. Letters and digits of any
/// script are kept; runs of anything else collapse into one `-`.
pub fn slug(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_alphanumeric() {
            out.extend(c.to_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}
