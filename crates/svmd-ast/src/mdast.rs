/*
 * mdast.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Markdown-level document tree.
 */

//! Markdown-level document tree.
//!
//! The node set mirrors the subset of mdast that the svmd transforms read and
//! produce, plus the synthetic `section`, `container` and `header` nodes the
//! transforms introduce. Nodes serialize with a `type` discriminator so the
//! JSON form matches mdast conventions.

use serde::{Deserialize, Serialize};

/// Rendering hint attached to a node (mdast `data.hName` / `data.hProperties`).
///
/// Lowering turns a hinted node into an element with `tag_name` and a
/// `className` property of `class_name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlHint {
    pub tag_name: String,
    pub class_name: String,
}

impl HtmlHint {
    pub fn new(tag_name: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            class_name: class_name.into(),
        }
    }

    /// Hint for a `div` with the given class.
    pub fn div(class_name: impl Into<String>) -> Self {
        Self::new("div", class_name)
    }
}

/// Document root.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Root {
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    Text(Text),
    InlineCode(InlineCode),
    Emphasis(Emphasis),
    Strong(Strong),
    Link(Link),
    Image(Image),
    Break,
    Paragraph(Paragraph),
    Heading(Heading),
    Code(Code),
    Html(Html),
    Blockquote(Blockquote),
    List(List),
    ListItem(ListItem),
    ThematicBreak,

    // svmd extensions, produced by the transforms
    Section(Section),
    Container(Container),
    Header(Container),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineCode {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Emphasis {
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strong {
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<HtmlHint>,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading level (1-6)
    pub depth: u8,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Code {
    /// Fence language tag, possibly of the form `language:title`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<String>,
    pub value: String,
}

/// Verbatim markup fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Html {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blockquote {
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    pub ordered: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<u32>,
    pub spread: bool,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub spread: bool,
    pub children: Vec<Node>,
}

/// Custom section block. Holds a single text child with the section body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub data: HtmlHint,
    pub children: Vec<Node>,
}

/// Generic hinted container (`container` and `header` node types).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub data: HtmlHint,
    pub children: Vec<Node>,
}

impl Node {
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(Text {
            value: value.into(),
        })
    }

    pub fn html(value: impl Into<String>) -> Self {
        Node::Html(Html {
            value: value.into(),
        })
    }

    pub fn paragraph(children: Vec<Node>) -> Self {
        Node::Paragraph(Paragraph {
            data: None,
            children,
        })
    }

    pub fn hinted_paragraph(data: HtmlHint, children: Vec<Node>) -> Self {
        Node::Paragraph(Paragraph {
            data: Some(data),
            children,
        })
    }

    pub fn heading(depth: u8, children: Vec<Node>) -> Self {
        Node::Heading(Heading { depth, children })
    }

    pub fn code(lang: Option<&str>, value: impl Into<String>) -> Self {
        Node::Code(Code {
            lang: lang.map(str::to_string),
            meta: None,
            value: value.into(),
        })
    }

    pub fn section(data: HtmlHint, children: Vec<Node>) -> Self {
        Node::Section(Section { data, children })
    }

    pub fn container(data: HtmlHint, children: Vec<Node>) -> Self {
        Node::Container(Container { data, children })
    }

    pub fn header(data: HtmlHint, children: Vec<Node>) -> Self {
        Node::Header(Container { data, children })
    }

    /// Child nodes, or `None` for leaf node types.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Emphasis(Emphasis { children })
            | Node::Strong(Strong { children })
            | Node::Link(Link { children, .. })
            | Node::Paragraph(Paragraph { children, .. })
            | Node::Heading(Heading { children, .. })
            | Node::Blockquote(Blockquote { children })
            | Node::List(List { children, .. })
            | Node::ListItem(ListItem { children, .. })
            | Node::Section(Section { children, .. })
            | Node::Container(Container { children, .. })
            | Node::Header(Container { children, .. }) => Some(children.as_slice()),
            Node::Text(_)
            | Node::InlineCode(_)
            | Node::Image(_)
            | Node::Break
            | Node::Code(_)
            | Node::Html(_)
            | Node::ThematicBreak => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Emphasis(Emphasis { children })
            | Node::Strong(Strong { children })
            | Node::Link(Link { children, .. })
            | Node::Paragraph(Paragraph { children, .. })
            | Node::Heading(Heading { children, .. })
            | Node::Blockquote(Blockquote { children })
            | Node::List(List { children, .. })
            | Node::ListItem(ListItem { children, .. })
            | Node::Section(Section { children, .. })
            | Node::Container(Container { children, .. })
            | Node::Header(Container { children, .. }) => Some(children),
            Node::Text(_)
            | Node::InlineCode(_)
            | Node::Image(_)
            | Node::Break
            | Node::Code(_)
            | Node::Html(_)
            | Node::ThematicBreak => None,
        }
    }

    /// True if the node type carries a children sequence (possibly empty).
    pub fn is_parent(&self) -> bool {
        self.children().is_some()
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Node::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Node::Paragraph(paragraph) => Some(paragraph),
            _ => None,
        }
    }

    pub fn as_paragraph_mut(&mut self) -> Option<&mut Paragraph> {
        match self {
            Node::Paragraph(paragraph) => Some(paragraph),
            _ => None,
        }
    }

    pub fn as_heading(&self) -> Option<&Heading> {
        match self {
            Node::Heading(heading) => Some(heading),
            _ => None,
        }
    }

    pub fn as_code(&self) -> Option<&Code> {
        match self {
            Node::Code(code) => Some(code),
            _ => None,
        }
    }

    pub fn as_html(&self) -> Option<&Html> {
        match self {
            Node::Html(html) => Some(html),
            _ => None,
        }
    }

    pub fn as_html_mut(&mut self) -> Option<&mut Html> {
        match self {
            Node::Html(html) => Some(html),
            _ => None,
        }
    }

    pub fn as_section(&self) -> Option<&Section> {
        match self {
            Node::Section(section) => Some(section),
            _ => None,
        }
    }

    pub fn is_html(&self) -> bool {
        matches!(self, Node::Html(_))
    }

    /// Concatenate every text leaf of this subtree in document order.
    ///
    /// Only `text` nodes contribute; inline code, html and images do not.
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        self.walk(&mut |node| {
            if let Node::Text(leaf) = node {
                text.push_str(&leaf.value);
            }
        });
        text
    }

    /// Depth-first, pre-order traversal of this node and its descendants.
    pub fn walk<F: FnMut(&Node)>(&self, f: &mut F) {
        f(self);
        if let Some(children) = self.children() {
            for child in children {
                child.walk(f);
            }
        }
    }
}

impl Root {
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    /// Depth-first, pre-order traversal of every node in the document.
    pub fn walk<F: FnMut(&Node)>(&self, f: &mut F) {
        for child in &self.children {
            child.walk(f);
        }
    }
}
