/*
 * hast.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Render-level document tree.
 */

//! Render-level document tree.
//!
//! Elements carry a tag name and an insertion-ordered property bag. Markup
//! that is already rendered (scripts, embedded code, component tags) lives in
//! opaque [`Raw`] fragments that are only ever edited as text.

use hashlink::LinkedHashMap;
use serde::{Deserialize, Serialize};

/// Element properties (`className`, `id`, ...), in insertion order.
pub type Properties = LinkedHashMap<String, String>;

pub const CLASS_NAME: &str = "className";
pub const ID: &str = "id";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Root {
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    Element(Element),
    Text(Text),
    Raw(Raw),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub tag_name: String,
    #[serde(default)]
    pub properties: Properties,
    #[serde(default)]
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    pub value: String,
}

/// Opaque verbatim markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Raw {
    pub value: String,
}

impl Element {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            properties: Properties::new(),
            children: Vec::new(),
        }
    }

    /// Element with a single `className` property.
    pub fn with_class(tag_name: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self::new(tag_name).with_property(CLASS_NAME, class_name)
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(key.into(), value.into());
    }

    pub fn class_name(&self) -> Option<&str> {
        self.property(CLASS_NAME)
    }

    pub fn id(&self) -> Option<&str> {
        self.property(ID)
    }

    /// Level of an `h1`..`h6` element.
    pub fn heading_level(&self) -> Option<u8> {
        match self.tag_name.as_str() {
            "h1" => Some(1),
            "h2" => Some(2),
            "h3" => Some(3),
            "h4" => Some(4),
            "h5" => Some(5),
            "h6" => Some(6),
            _ => None,
        }
    }

    /// A `div` whose `className` equals `class_name` exactly.
    ///
    /// Multi-class values do not match partially.
    pub fn is_div_with_class(&self, class_name: &str) -> bool {
        self.tag_name == "div" && self.class_name() == Some(class_name)
    }

    pub fn text_content(&self) -> String {
        let mut text = String::new();
        for child in &self.children {
            child.collect_text(&mut text);
        }
        text
    }
}

impl Node {
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(Text {
            value: value.into(),
        })
    }

    pub fn raw(value: impl Into<String>) -> Self {
        Node::Raw(Raw {
            value: value.into(),
        })
    }

    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Element(element) => Some(element.children.as_slice()),
            Node::Text(_) | Node::Raw(_) => None,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_raw(&self) -> Option<&Raw> {
        match self {
            Node::Raw(raw) => Some(raw),
            _ => None,
        }
    }

    pub fn as_raw_mut(&mut self) -> Option<&mut Raw> {
        match self {
            Node::Raw(raw) => Some(raw),
            _ => None,
        }
    }

    pub fn is_heading_element(&self) -> bool {
        self.as_element()
            .and_then(Element::heading_level)
            .is_some()
    }

    pub fn is_element_with_class(&self, class_name: &str) -> bool {
        matches!(self, Node::Element(element) if element.is_div_with_class(class_name))
    }

    pub fn text_content(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&text.value),
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
            Node::Raw(_) => {}
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Root {
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    /// Visit every element in document order (pre-order), mutably.
    ///
    /// The callback may edit the element's properties and children; the
    /// traversal then continues into the edited children.
    pub fn visit_elements_mut<F: FnMut(&mut Element)>(&mut self, f: &mut F) {
        visit_elements_mut(&mut self.children, f);
    }

    /// Visit every element in document order (pre-order).
    pub fn visit_elements<F: FnMut(&Element)>(&self, f: &mut F) {
        visit_elements(&self.children, f);
    }
}

fn visit_elements_mut<F: FnMut(&mut Element)>(nodes: &mut [Node], f: &mut F) {
    for node in nodes {
        if let Node::Element(element) = node {
            f(element);
            visit_elements_mut(&mut element.children, f);
        }
    }
}

fn visit_elements<F: FnMut(&Element)>(nodes: &[Node], f: &mut F) {
    for node in nodes {
        if let Node::Element(element) = node {
            f(element);
            visit_elements(&element.children, f);
        }
    }
}
