/*
 * html_writer.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Markup writer for the render tree.
 */

//! Markup writer for the render tree.
//!
//! Writes a [`hast::Root`] as component markup. Raw fragments (scripts,
//! embedded code, component tags) are written verbatim. Everything else is
//! escaped, including `{` and `}` so that literal braces in prose are not
//! read as template expressions.
//!
//! Container elements (`div`, `blockquote`, lists, `section`) put each child
//! on its own line; all other elements are written inline.

use std::io::{self, Write};

use svmd_ast::hast::{self, CLASS_NAME, Element, Node};

/// Elements written as `<tag />` with no children.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// Elements whose children are written one per line.
const CONTAINER_ELEMENTS: &[&str] = &["div", "blockquote", "ul", "ol", "section"];

/// Main entry point: write a render tree.
pub fn write<W: Write>(root: &hast::Root, buf: &mut W) -> io::Result<()> {
    write_lines(&root.children, buf)
}

/// Write a render tree to a string.
pub fn to_string(root: &hast::Root) -> io::Result<String> {
    let mut buf = Vec::new();
    write(root, &mut buf)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Write nodes one per line.
fn write_lines<W: Write>(nodes: &[Node], buf: &mut W) -> io::Result<()> {
    for node in nodes {
        write_node(node, buf)?;
        writeln!(buf)?;
    }
    Ok(())
}

/// Write nodes back to back.
fn write_inline<W: Write>(nodes: &[Node], buf: &mut W) -> io::Result<()> {
    for node in nodes {
        write_node(node, buf)?;
    }
    Ok(())
}

/// Escape markup and template special characters.
fn escape_html(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#39;".to_string(),
            '{' => "&#123;".to_string(),
            '}' => "&#125;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

/// Write element properties as attributes. `className` is written as `class`.
fn write_properties<W: Write>(element: &Element, buf: &mut W) -> io::Result<()> {
    for (key, value) in &element.properties {
        let name = if key == CLASS_NAME { "class" } else { key.as_str() };
        write!(buf, " {}=\"{}\"", name, escape_html(value))?;
    }
    Ok(())
}

fn write_node<W: Write>(node: &Node, buf: &mut W) -> io::Result<()> {
    match node {
        Node::Text(text) => write!(buf, "{}", escape_html(&text.value)),
        Node::Raw(raw) => write!(buf, "{}", raw.value),
        Node::Element(element) => write_element(element, buf),
    }
}

fn write_element<W: Write>(element: &Element, buf: &mut W) -> io::Result<()> {
    let tag = element.tag_name.as_str();
    write!(buf, "<{}", tag)?;
    write_properties(element, buf)?;

    if VOID_ELEMENTS.contains(&tag) {
        return write!(buf, " />");
    }
    write!(buf, ">")?;

    if CONTAINER_ELEMENTS.contains(&tag) {
        writeln!(buf)?;
        write_lines(&element.children, buf)?;
    } else {
        write_inline(&element.children, buf)?;
    }
    write!(buf, "</{}>", tag)
}
