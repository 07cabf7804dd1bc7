/*
 * block.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Convert comrak block nodes to mdast block nodes.
 */

use crate::inline::convert_children_to_inlines;
use comrak::nodes::{AstNode, ListType, NodeCodeBlock, NodeList, NodeValue};
use svmd_ast::mdast::{Blockquote, Code, List, ListItem, Node, Root};

/// Convert a comrak document to a markdown tree.
pub fn convert_document<'a>(root: &'a AstNode<'a>) -> Root {
    Root::new(convert_children_to_blocks(root))
}

/// Convert a comrak node's block children to mdast nodes.
fn convert_children_to_blocks<'a>(node: &'a AstNode<'a>) -> Vec<Node> {
    node.children()
        .flat_map(|child| convert_block(child))
        .collect()
}

/// Convert a comrak block node to mdast nodes.
///
/// Returns a Vec because some nodes expand to zero or several nodes.
fn convert_block<'a>(node: &'a AstNode<'a>) -> Vec<Node> {
    let ast = node.data.borrow();

    match &ast.value {
        NodeValue::Document => convert_children_to_blocks(node),

        NodeValue::Paragraph => vec![Node::paragraph(convert_children_to_inlines(node))],

        NodeValue::Heading(heading) => {
            vec![Node::heading(heading.level, convert_children_to_inlines(node))]
        }

        NodeValue::CodeBlock(code_block) => vec![convert_code_block(code_block)],

        // mdast html values carry no trailing newline
        NodeValue::HtmlBlock(html) => vec![Node::html(html.literal.trim_end_matches('\n'))],

        NodeValue::BlockQuote => vec![Node::Blockquote(Blockquote {
            children: convert_children_to_blocks(node),
        })],

        NodeValue::List(list) => vec![convert_list(node, list)],

        NodeValue::Item(list) => vec![convert_list_item(node, !list.tight)],

        NodeValue::ThematicBreak => vec![Node::ThematicBreak],

        // Front matter is configuration, not content
        NodeValue::FrontMatter(_) => vec![],

        // Extension blocks are not enabled; keep whatever content they hold
        _ => convert_children_to_blocks(node),
    }
}

fn convert_code_block(code_block: &NodeCodeBlock) -> Node {
    // Info string: language tag, then optional meta after whitespace
    let info = code_block.info.trim();
    let (lang, meta) = match info.split_once(char::is_whitespace) {
        Some((lang, meta)) => (lang, Some(meta.trim().to_string())),
        None => (info, None),
    };

    let literal = code_block.literal.as_str();
    let value = literal.strip_suffix('\n').unwrap_or(literal);

    Node::Code(Code {
        lang: (!lang.is_empty()).then(|| lang.to_string()),
        meta,
        value: value.to_string(),
    })
}

fn convert_list<'a>(node: &'a AstNode<'a>, list: &NodeList) -> Node {
    let spread = !list.tight;
    let children = node
        .children()
        .map(|child| convert_list_item(child, spread))
        .collect();

    let ordered = matches!(list.list_type, ListType::Ordered);
    Node::List(List {
        ordered,
        start: if ordered {
            u32::try_from(list.start).ok()
        } else {
            None
        },
        spread,
        children,
    })
}

fn convert_list_item<'a>(node: &'a AstNode<'a>, spread: bool) -> Node {
    Node::ListItem(ListItem {
        spread,
        children: convert_children_to_blocks(node),
    })
}
