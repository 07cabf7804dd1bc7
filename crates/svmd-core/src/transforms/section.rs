/*
 * section.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Transforms for `::section` blocks.
 */

//! Section block transforms.
//!
//! A section block is a top-level paragraph whose first inline is a text
//! leaf starting with the `::section ` marker:
//!
//! ```markdown
//! ::section Getting started
//! ```
//!
//! [`SectionTransform`] turns the marker line into a `section` node that
//! lowers to `<div class="md-section">`. When the marker text continues on
//! further lines, only the first line becomes the section and the rest stays
//! in the paragraph.
//!
//! [`SectionMetaTransform`] records the text of every section node under the
//! `section` metadata key. The last section in document order wins.

use svmd_ast::HtmlHint;
use svmd_ast::mdast::{Node, Root};

use crate::Result;
use crate::context::DocumentContext;
use crate::meta::MetaPatch;
use crate::transform::Transform;

/// Marker that opens a section line.
pub const SECTION_MARKER: &str = "::section ";

/// Class name given to section containers.
pub const SECTION_CLASS: &str = "md-section";

/// Transform that converts `::section` paragraphs into section nodes.
pub struct SectionTransform;

impl SectionTransform {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SectionTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform<Root> for SectionTransform {
    fn name(&self) -> &str {
        "section"
    }

    fn transform(&self, tree: &mut Root, _ctx: &mut DocumentContext) -> Result<()> {
        let children = &mut tree.children;
        let mut i = 0;
        while i < children.len() {
            match take_section_line(&mut children[i]) {
                None => {}
                Some(SectionLine::Whole(text)) => {
                    children[i] = make_section(&text);
                }
                Some(SectionLine::FirstOf(text)) => {
                    // The shortened paragraph moves to i + 1 and is examined next.
                    children.insert(i, make_section(&text));
                }
            }
            i += 1;
        }
        Ok(())
    }
}

/// Transform that records section text as metadata.
pub struct SectionMetaTransform;

impl SectionMetaTransform {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SectionMetaTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform<Root> for SectionMetaTransform {
    fn name(&self) -> &str {
        "section-meta"
    }

    fn transform(&self, tree: &mut Root, ctx: &mut DocumentContext) -> Result<()> {
        let mut sections = Vec::new();
        tree.walk(&mut |node| {
            if node.as_section().is_some() {
                sections.push(node.text_content());
            }
        });

        for section in sections {
            ctx.merge_meta(MetaPatch::new().section(section));
        }
        Ok(())
    }
}

enum SectionLine {
    /// The marker text is the whole paragraph.
    Whole(String),
    /// The first line is the marker; the paragraph keeps the remaining lines.
    FirstOf(String),
}

/// Detach the section line from a section paragraph.
///
/// Returns `None` and leaves the node untouched if it is not a section paragraph.
fn take_section_line(node: &mut Node) -> Option<SectionLine> {
    let paragraph = node.as_paragraph_mut()?;
    let Some(Node::Text(first)) = paragraph.children.first_mut() else {
        return None;
    };
    if !first.value.starts_with(SECTION_MARKER) {
        return None;
    }

    match first.value.split_once('\n') {
        None => Some(SectionLine::Whole(first.value.clone())),
        Some((line, rest)) => {
            let line = line.to_string();
            first.value = rest.to_string();
            Some(SectionLine::FirstOf(line))
        }
    }
}

fn make_section(line: &str) -> Node {
    let body = line.replacen(SECTION_MARKER, "", 1);
    Node::section(HtmlHint::div(SECTION_CLASS), vec![Node::text(body)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PipelineConfig;
    use crate::context::DocumentInfo;

    fn make_para(text: &str) -> Node {
        Node::paragraph(vec![Node::text(text)])
    }

    fn run<T: Transform<Root>>(transform: &T, tree: &mut Root) -> Option<crate::DocumentMeta> {
        let doc = DocumentInfo::anonymous();
        let config = PipelineConfig::default();
        let mut ctx = DocumentContext::new(&doc, &config);
        transform.transform(tree, &mut ctx).unwrap();
        ctx.into_meta()
    }

    #[test]
    fn test_single_line_section_replaces_paragraph() {
        let mut tree = Root::new(vec![make_para("::section A")]);
        run(&SectionTransform::new(), &mut tree);

        assert_eq!(tree.children.len(), 1);
        let Node::Section(section) = &tree.children[0] else {
            panic!("Expected section, got {:?}", tree.children[0]);
        };
        assert_eq!(section.data.class_name, "md-section");
        assert_eq!(tree.children[0].text_content(), "A");
    }

    #[test]
    fn test_multi_line_section_splits_paragraph() {
        let mut tree = Root::new(vec![make_para("::section A\nB")]);
        run(&SectionTransform::new(), &mut tree);

        assert_eq!(tree.children.len(), 2);
        assert!(tree.children[0].as_section().is_some());
        assert_eq!(tree.children[0].text_content(), "A");
        assert!(tree.children[1].as_paragraph().is_some());
        assert_eq!(tree.children[1].text_content(), "B");
    }

    #[test]
    fn test_split_keeps_remaining_inlines() {
        let mut tree = Root::new(vec![Node::paragraph(vec![
            Node::text("::section Intro\nSee "),
            Node::Emphasis(svmd_ast::mdast::Emphasis {
                children: vec![Node::text("this")],
            }),
        ])]);
        run(&SectionTransform::new(), &mut tree);

        assert_eq!(tree.children.len(), 2);
        assert_eq!(tree.children[0].text_content(), "Intro");
        assert_eq!(tree.children[1].text_content(), "See this");
    }

    #[test]
    fn test_consecutive_marker_lines_become_sections() {
        let mut tree = Root::new(vec![make_para("::section A\n::section B\nbody")]);
        run(&SectionTransform::new(), &mut tree);

        assert_eq!(tree.children.len(), 3);
        assert_eq!(tree.children[0].text_content(), "A");
        assert_eq!(tree.children[1].text_content(), "B");
        assert!(tree.children[2].as_paragraph().is_some());
        assert_eq!(tree.children[2].text_content(), "body");
    }

    #[test]
    fn test_marker_must_be_first_inline() {
        let original = Root::new(vec![
            Node::paragraph(vec![
                Node::Strong(svmd_ast::mdast::Strong {
                    children: vec![Node::text("x")],
                }),
                Node::text("::section A"),
            ]),
            make_para("::sectionA"),
            make_para("text ::section A"),
        ]);
        let mut tree = original.clone();
        run(&SectionTransform::new(), &mut tree);
        assert_eq!(tree, original);
    }

    #[test]
    fn test_nested_paragraphs_are_not_sections() {
        let original = Root::new(vec![Node::Blockquote(svmd_ast::mdast::Blockquote {
            children: vec![make_para("::section A")],
        })]);
        let mut tree = original.clone();
        run(&SectionTransform::new(), &mut tree);
        assert_eq!(tree, original);
    }

    #[test]
    fn test_section_meta_last_wins() {
        let mut tree = Root::new(vec![make_para("::section First"), make_para("::section Second")]);
        run(&SectionTransform::new(), &mut tree);
        let meta = run(&SectionMetaTransform::new(), &mut tree).unwrap();
        assert_eq!(meta.section.as_deref(), Some("Second"));
    }

    #[test]
    fn test_section_meta_without_sections_writes_nothing() {
        let mut tree = Root::new(vec![make_para("plain")]);
        assert!(run(&SectionMetaTransform::new(), &mut tree).is_none());
    }
}
