/*
 * inline.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Convert comrak inline nodes to mdast inline nodes.
 */

use comrak::nodes::{AstNode, NodeLink, NodeValue};
use svmd_ast::mdast::{Emphasis, Image, InlineCode, Link, Node, Strong};

/// Convert a comrak node's inline children to mdast nodes.
///
/// Adjacent text (including soft breaks, which become `\n`) is merged into a
/// single text leaf.
pub fn convert_children_to_inlines<'a>(node: &'a AstNode<'a>) -> Vec<Node> {
    let mut inlines = Vec::new();
    for child in node.children() {
        for inline in convert_inline(child) {
            push_inline(&mut inlines, inline);
        }
    }
    inlines
}

fn push_inline(inlines: &mut Vec<Node>, inline: Node) {
    if let Node::Text(text) = &inline {
        if let Some(Node::Text(last)) = inlines.last_mut() {
            last.value.push_str(&text.value);
            return;
        }
    }
    inlines.push(inline);
}

/// Convert a comrak inline node to mdast nodes.
fn convert_inline<'a>(node: &'a AstNode<'a>) -> Vec<Node> {
    let ast = node.data.borrow();

    match &ast.value {
        NodeValue::Text(text) => vec![Node::text(text.to_string())],

        NodeValue::SoftBreak => vec![Node::text("\n")],

        NodeValue::LineBreak => vec![Node::Break],

        NodeValue::Code(code) => vec![Node::InlineCode(InlineCode {
            value: code.literal.clone(),
        })],

        NodeValue::HtmlInline(html) => vec![Node::html(html.to_string())],

        NodeValue::Emph => vec![Node::Emphasis(Emphasis {
            children: convert_children_to_inlines(node),
        })],

        NodeValue::Strong => vec![Node::Strong(Strong {
            children: convert_children_to_inlines(node),
        })],

        NodeValue::Link(link) => vec![Node::Link(Link {
            url: link.url.to_string(),
            title: link_title(link),
            children: convert_children_to_inlines(node),
        })],

        NodeValue::Image(link) => {
            // For images, children become alt text
            let alt = convert_children_to_inlines(node)
                .iter()
                .map(Node::text_content)
                .collect();
            vec![Node::Image(Image {
                url: link.url.to_string(),
                title: link_title(link),
                alt,
            })]
        }

        // Escapes and extension inlines keep their text
        _ => convert_children_to_inlines(node),
    }
}

fn link_title(link: &NodeLink) -> Option<String> {
    Some(link.title.to_string()).filter(|title| !title.is_empty())
}
