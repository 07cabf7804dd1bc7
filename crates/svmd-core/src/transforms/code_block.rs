/*
 * code_block.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Transform that wraps fenced code blocks in a titled container.
 */

//! Code block wrapping transform.
//!
//! Every code node becomes:
//!
//! ```text
//! container div.md-code-wrapper
//! ├── header div.md-code-header
//! │   └── paragraph div.md-code-title
//! │       └── text <title>
//! └── code
//! ```
//!
//! ## Titles
//!
//! | fence tag    | language | title        |
//! |--------------|----------|--------------|
//! | (none)       | (none)   | `text`       |
//! | `ts`         | `ts`     | `TypeScript` |
//! | `python`     | `python` | `python`     |
//! | `ts:Example` | `ts`     | `Example`    |
//!
//! The render-level half of code blocks lives in
//! [`copy_button`](super::copy_button), which finds these wrappers by class.

use svmd_ast::HtmlHint;
use svmd_ast::mdast::{Code, Node, Root};

use crate::Result;
use crate::context::DocumentContext;
use crate::transform::Transform;

pub const CODE_WRAPPER_CLASS: &str = "md-code-wrapper";
pub const CODE_HEADER_CLASS: &str = "md-code-header";
pub const CODE_TITLE_CLASS: &str = "md-code-title";

/// Title used when a fence has no language tag.
const PLAIN_TITLE: &str = "text";

/// Transform that wraps every code block with a header carrying its title.
pub struct CodeWrapTransform;

impl CodeWrapTransform {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CodeWrapTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform<Root> for CodeWrapTransform {
    fn name(&self) -> &str {
        "code-wrap"
    }

    fn transform(&self, tree: &mut Root, _ctx: &mut DocumentContext) -> Result<()> {
        wrap_code_blocks(&mut tree.children);
        Ok(())
    }
}

/// Wrap code blocks at every depth. New wrappers are not descended into.
fn wrap_code_blocks(children: &mut [Node]) {
    for child in children {
        if matches!(child, Node::Code(_)) {
            if let Node::Code(code) = std::mem::replace(child, Node::Break) {
                *child = make_wrapper(code);
            }
        } else if let Some(nested) = child.children_mut() {
            wrap_code_blocks(nested);
        }
    }
}

fn make_wrapper(mut code: Code) -> Node {
    let title = code_title(&mut code);
    let header = Node::header(
        HtmlHint::div(CODE_HEADER_CLASS),
        vec![Node::hinted_paragraph(
            HtmlHint::div(CODE_TITLE_CLASS),
            vec![Node::text(title)],
        )],
    );
    Node::container(
        HtmlHint::div(CODE_WRAPPER_CLASS),
        vec![header, Node::Code(code)],
    )
}

/// Derive the display title of a code block.
///
/// A `lang:title` tag is split: the code keeps `lang` and the title is
/// everything after the first `:`.
pub fn code_title(code: &mut Code) -> String {
    let Some(tag) = code.lang.as_deref().filter(|tag| !tag.is_empty()) else {
        return PLAIN_TITLE.to_string();
    };

    match tag.split_once(':') {
        None => language_name(tag).to_string(),
        Some((lang, title)) => {
            let (lang, title) = (lang.to_string(), title.to_string());
            code.lang = Some(lang);
            title
        }
    }
}

/// Human-readable name of a language tag. Unknown tags are returned unchanged.
pub fn language_name(lang: &str) -> &str {
    match lang {
        "ts" => "TypeScript",
        "sh" => "Shell",
        "css" => "Stylesheet",
        "html" => "HTML",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PipelineConfig;
    use crate::context::DocumentInfo;
    use svmd_ast::mdast::Blockquote;

    fn make_code(lang: Option<&str>) -> Code {
        Code {
            lang: lang.map(str::to_string),
            meta: None,
            value: "let a = 1;".to_string(),
        }
    }

    fn run(tree: &mut Root) {
        let doc = DocumentInfo::anonymous();
        let config = PipelineConfig::default();
        let mut ctx = DocumentContext::new(&doc, &config);
        CodeWrapTransform::new().transform(tree, &mut ctx).unwrap();
    }

    #[test]
    fn test_known_language_title() {
        let mut code = make_code(Some("ts"));
        assert_eq!(code_title(&mut code), "TypeScript");
        assert_eq!(code.lang.as_deref(), Some("ts"));

        assert_eq!(code_title(&mut make_code(Some("sh"))), "Shell");
        assert_eq!(code_title(&mut make_code(Some("css"))), "Stylesheet");
        assert_eq!(code_title(&mut make_code(Some("html"))), "HTML");
    }

    #[test]
    fn test_unknown_language_passes_through() {
        let mut code = make_code(Some("python"));
        assert_eq!(code_title(&mut code), "python");
        assert_eq!(code.lang.as_deref(), Some("python"));
    }

    #[test]
    fn test_custom_title_rewrites_language() {
        let mut code = make_code(Some("ts:Example"));
        assert_eq!(code_title(&mut code), "Example");
        assert_eq!(code.lang.as_deref(), Some("ts"));
    }

    #[test]
    fn test_custom_title_keeps_later_separators() {
        let mut code = make_code(Some("sh:run: all"));
        assert_eq!(code_title(&mut code), "run: all");
        assert_eq!(code.lang.as_deref(), Some("sh"));
    }

    #[test]
    fn test_missing_or_empty_language_is_text() {
        assert_eq!(code_title(&mut make_code(None)), "text");
        assert_eq!(code_title(&mut make_code(Some(""))), "text");
    }

    #[test]
    fn test_wrapper_structure() {
        let mut tree = Root::new(vec![Node::Code(make_code(Some("ts:main.ts")))]);
        run(&mut tree);

        assert_eq!(tree.children.len(), 1);
        let Node::Container(wrapper) = &tree.children[0] else {
            panic!("Expected container, got {:?}", tree.children[0]);
        };
        assert_eq!(wrapper.data, HtmlHint::div("md-code-wrapper"));
        assert_eq!(wrapper.children.len(), 2);

        let Node::Header(header) = &wrapper.children[0] else {
            panic!("Expected header, got {:?}", wrapper.children[0]);
        };
        assert_eq!(header.data, HtmlHint::div("md-code-header"));
        let Some(title) = header.children[0].as_paragraph() else {
            panic!("Expected title paragraph, got {:?}", header.children[0]);
        };
        assert_eq!(title.data, Some(HtmlHint::div("md-code-title")));
        assert_eq!(header.children[0].text_content(), "main.ts");

        let Some(code) = wrapper.children[1].as_code() else {
            panic!("Expected code, got {:?}", wrapper.children[1]);
        };
        assert_eq!(code.lang.as_deref(), Some("ts"));
        assert_eq!(code.value, "let a = 1;");
    }

    #[test]
    fn test_nested_code_is_wrapped_once() {
        let mut tree = Root::new(vec![Node::Blockquote(Blockquote {
            children: vec![Node::Code(make_code(Some("sh")))],
        })]);
        run(&mut tree);

        let Node::Blockquote(quote) = &tree.children[0] else {
            panic!("Expected blockquote, got {:?}", tree.children[0]);
        };
        let Node::Container(wrapper) = &quote.children[0] else {
            panic!("Expected container, got {:?}", quote.children[0]);
        };
        assert!(wrapper.children[1].as_code().is_some());
    }

    #[test]
    fn test_tree_without_code_is_unchanged() {
        let original = Root::new(vec![
            Node::heading(2, vec![Node::text("Heading")]),
            Node::paragraph(vec![Node::text("Body")]),
        ]);
        let mut tree = original.clone();
        run(&mut tree);
        assert_eq!(tree, original);
    }
}
