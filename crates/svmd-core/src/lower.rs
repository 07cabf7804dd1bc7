/*
 * lower.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Conversion from the markdown tree to the render tree.
 */

//! Conversion from the markdown tree to the render tree.
//!
//! This sits between the two pipelines and does what a markdown-to-HTML
//! renderer would: nodes with an [`HtmlHint`] become elements with the hinted
//! tag and class, the standard markdown nodes become their HTML elements, and
//! html nodes become opaque raw fragments.
//!
//! Code blocks are emitted as an embedded-code raw fragment so the markup
//! reaches the component runtime untouched:
//!
//! ```text
//! {@html `<pre class="language-ts"><code>let a = 1;</code></pre>`}
//! ```
//!
//! The code text is escaped so it can neither close the template literal
//! nor open a template expression.

use svmd_ast::HtmlHint;
use svmd_ast::hast::{self, Element};
use svmd_ast::mdast::{self, Node};

/// Convert a markdown tree into a render tree.
pub fn lower(root: mdast::Root) -> hast::Root {
    hast::Root::new(lower_nodes(root.children))
}

fn lower_nodes(nodes: Vec<Node>) -> Vec<hast::Node> {
    nodes.into_iter().map(lower_node).collect()
}

fn lower_node(node: Node) -> hast::Node {
    match node {
        Node::Text(text) => hast::Node::text(text.value),
        Node::InlineCode(code) => Element::new("code")
            .with_children(vec![hast::Node::text(code.value)])
            .into(),
        Node::Emphasis(emphasis) => element("em", emphasis.children),
        Node::Strong(strong) => element("strong", strong.children),
        Node::Link(link) => {
            let mut a = Element::new("a").with_property("href", link.url);
            if let Some(title) = link.title {
                a.set_property("title", title);
            }
            a.with_children(lower_nodes(link.children)).into()
        }
        Node::Image(image) => {
            let mut img = Element::new("img")
                .with_property("src", image.url)
                .with_property("alt", image.alt);
            if let Some(title) = image.title {
                img.set_property("title", title);
            }
            img.into()
        }
        Node::Break => Element::new("br").into(),
        Node::Paragraph(paragraph) => match paragraph.data {
            Some(hint) => hinted(hint, paragraph.children),
            None => element("p", paragraph.children),
        },
        Node::Heading(heading) => {
            let level = heading.depth.clamp(1, 6);
            element(&format!("h{level}"), heading.children)
        }
        Node::Code(code) => hast::Node::raw(embedded_code(code.lang.as_deref(), &code.value)),
        Node::Html(html) => hast::Node::raw(html.value),
        Node::Blockquote(quote) => element("blockquote", quote.children),
        Node::List(list) => lower_list(list),
        Node::ListItem(item) => lower_list_item(item, true),
        Node::ThematicBreak => Element::new("hr").into(),
        Node::Section(section) => hinted(section.data, section.children),
        Node::Container(container) | Node::Header(container) => {
            hinted(container.data, container.children)
        }
    }
}

fn element(tag_name: &str, children: Vec<Node>) -> hast::Node {
    Element::new(tag_name)
        .with_children(lower_nodes(children))
        .into()
}

fn hinted(hint: HtmlHint, children: Vec<Node>) -> hast::Node {
    Element::with_class(hint.tag_name, hint.class_name)
        .with_children(lower_nodes(children))
        .into()
}

fn lower_list(list: mdast::List) -> hast::Node {
    let mut element = if list.ordered {
        Element::new("ol")
    } else {
        Element::new("ul")
    };
    if let Some(start) = list.start.filter(|start| list.ordered && *start != 1) {
        element.set_property("start", start.to_string());
    }

    let spread = list.spread;
    let items = list
        .children
        .into_iter()
        .map(|child| match child {
            Node::ListItem(item) => {
                let loose = spread || item.spread;
                lower_list_item(item, loose)
            }
            other => lower_node(other),
        })
        .collect();
    element.with_children(items).into()
}

/// Tight items drop the paragraph wrappers around their content.
fn lower_list_item(item: mdast::ListItem, loose: bool) -> hast::Node {
    let mut children = Vec::new();
    for child in item.children {
        match child {
            Node::Paragraph(paragraph) if !loose && paragraph.data.is_none() => {
                children.extend(lower_nodes(paragraph.children));
            }
            other => children.push(lower_node(other)),
        }
    }
    Element::new("li").with_children(children).into()
}

/// Embedded-code fragment for a code block.
pub fn embedded_code(lang: Option<&str>, value: &str) -> String {
    let class = match lang.filter(|lang| !lang.is_empty()) {
        Some(lang) => format!(" class=\"language-{}\"", escape_code(lang)),
        None => String::new(),
    };
    format!("{{@html `<pre{class}><code>{}</code></pre>`}}", escape_code(value))
}

/// Escape text for use inside an embedded-code template literal.
fn escape_code(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '{' => "&#123;".to_string(),
            '}' => "&#125;".to_string(),
            '`' => "&#96;".to_string(),
            '\\' => "&#92;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use svmd_ast::hast::CLASS_NAME;

    fn as_element(node: &hast::Node) -> &Element {
        let Some(element) = node.as_element() else {
            panic!("Expected element, got {:?}", node);
        };
        element
    }

    #[test]
    fn test_embedded_code() {
        assert_eq!(
            embedded_code(Some("ts"), "let a = 1;"),
            "{@html `<pre class=\"language-ts\"><code>let a = 1;</code></pre>`}"
        );
        assert_eq!(
            embedded_code(None, "x"),
            "{@html `<pre><code>x</code></pre>`}"
        );
        assert_eq!(
            embedded_code(Some(""), "x"),
            "{@html `<pre><code>x</code></pre>`}"
        );
    }

    #[test]
    fn test_embedded_code_escapes_template_syntax() {
        assert_eq!(
            embedded_code(Some("js"), "const s = `${a}` < \\n;"),
            "{@html `<pre class=\"language-js\"><code>const s = &#96;$&#123;a&#125;&#96; &lt; &#92;n;</code></pre>`}"
        );
    }

    #[test]
    fn test_hinted_nodes_become_classed_divs() {
        let root = mdast::Root::new(vec![Node::container(
            HtmlHint::div("md-code-wrapper"),
            vec![Node::header(
                HtmlHint::div("md-code-header"),
                vec![Node::hinted_paragraph(
                    HtmlHint::div("md-code-title"),
                    vec![Node::text("TypeScript")],
                )],
            )],
        )]);
        let tree = lower(root);

        let wrapper = as_element(&tree.children[0]);
        assert!(wrapper.is_div_with_class("md-code-wrapper"));
        let header = as_element(&wrapper.children[0]);
        assert!(header.is_div_with_class("md-code-header"));
        let title = as_element(&header.children[0]);
        assert_eq!(title.tag_name, "div");
        assert_eq!(title.property(CLASS_NAME), Some("md-code-title"));
        assert_eq!(title.text_content(), "TypeScript");
    }

    #[test]
    fn test_headings_and_paragraphs() {
        let tree = lower(mdast::Root::new(vec![
            Node::heading(2, vec![Node::text("Install")]),
            Node::paragraph(vec![Node::text("Run it.")]),
            Node::html("<script>\n</script>"),
        ]));

        assert_eq!(as_element(&tree.children[0]).tag_name, "h2");
        assert_eq!(as_element(&tree.children[1]).tag_name, "p");
        assert_eq!(
            tree.children[2].as_raw().map(|raw| raw.value.as_str()),
            Some("<script>\n</script>")
        );
    }

    #[test]
    fn test_tight_list_unwraps_paragraphs() {
        let tree = lower(mdast::Root::new(vec![Node::List(mdast::List {
            ordered: true,
            start: Some(3),
            spread: false,
            children: vec![Node::ListItem(mdast::ListItem {
                spread: false,
                children: vec![Node::paragraph(vec![Node::text("item")])],
            })],
        })]));

        let list = as_element(&tree.children[0]);
        assert_eq!(list.tag_name, "ol");
        assert_eq!(list.property("start"), Some("3"));
        let item = as_element(&list.children[0]);
        assert_eq!(item.tag_name, "li");
        assert_eq!(item.children, vec![hast::Node::text("item")]);
    }

    #[test]
    fn test_loose_list_keeps_paragraphs() {
        let tree = lower(mdast::Root::new(vec![Node::List(mdast::List {
            ordered: false,
            start: None,
            spread: true,
            children: vec![Node::ListItem(mdast::ListItem {
                spread: false,
                children: vec![Node::paragraph(vec![Node::text("item")])],
            })],
        })]));

        let list = as_element(&tree.children[0]);
        assert_eq!(list.tag_name, "ul");
        let item = as_element(&list.children[0]);
        assert_eq!(as_element(&item.children[0]).tag_name, "p");
    }
}
