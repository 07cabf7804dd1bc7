/*
 * copy_button.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Transforms that add copy-to-clipboard buttons to code blocks.
 */

//! Copy button transforms.
//!
//! These run on the render tree, after code wrappers produced by
//! [`CodeWrapTransform`](super::code_block::CodeWrapTransform) have been
//! lowered to `div.md-code-wrapper` elements. By then the highlighted code is
//! an opaque `{@html ...}` raw fragment, so it is edited as text.
//!
//! [`CopyButtonPrepareTransform`] imports the `CopyCode` component into the
//! document's script block once. [`CopyButtonTransform`] then gives each code
//! fragment an id and appends a matching `<CopyCode id="..." />` button to the
//! wrapper's header:
//!
//! ```text
//! <div class="md-code-wrapper">
//!   <div class="md-code-header">
//!     <div class="md-code-title">TypeScript</div>
//!     <CopyCode id="z0" />
//!   </div>
//!   {@html `<pre class="language-ts"><code id="z0">...</code></pre>`}
//! </div>
//! ```
//!
//! Wrappers missing their header or their code fragment are left alone.

use svmd_ast::hast::{Element, Node, Root};

use crate::Result;
use crate::context::{DocumentContext, Latch};
use crate::raw;
use crate::transform::Transform;
use super::code_block::{CODE_HEADER_CLASS, CODE_WRAPPER_CLASS};

/// Script line the copy button component needs.
pub const COPY_BUTTON_IMPORT: &str = "import CopyCode from \"$lib/CopyCode.svelte\";";

/// Transform that installs the copy button import once per document.
pub struct CopyButtonPrepareTransform;

impl CopyButtonPrepareTransform {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CopyButtonPrepareTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform<Root> for CopyButtonPrepareTransform {
    fn name(&self) -> &str {
        "copy-button-prepare"
    }

    fn transform(&self, tree: &mut Root, ctx: &mut DocumentContext) -> Result<()> {
        let mut has_wrapper = false;
        tree.visit_elements(&mut |element| {
            has_wrapper = has_wrapper || element.is_div_with_class(CODE_WRAPPER_CLASS);
        });

        if has_wrapper && ctx.first_occurrence(Latch::CopyButtonScaffolding) {
            install_scaffolding(tree);
        }
        Ok(())
    }
}

/// Transform that adds a copy button to every code wrapper.
pub struct CopyButtonTransform;

impl CopyButtonTransform {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CopyButtonTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform<Root> for CopyButtonTransform {
    fn name(&self) -> &str {
        "copy-button-add"
    }

    fn transform(&self, tree: &mut Root, ctx: &mut DocumentContext) -> Result<()> {
        tree.visit_elements_mut(&mut |element| {
            if element.is_div_with_class(CODE_WRAPPER_CLASS) {
                add_copy_button(element, ctx);
            }
        });
        Ok(())
    }
}

fn add_copy_button(wrapper: &mut Element, ctx: &mut DocumentContext) {
    let header = wrapper
        .children
        .iter()
        .position(|child| child.is_element_with_class(CODE_HEADER_CLASS));
    let code = wrapper.children.iter().position(|child| {
        child
            .as_raw()
            .is_some_and(|fragment| raw::is_embedded_code(&fragment.value))
    });
    let (Some(header), Some(code)) = (header, code) else {
        tracing::debug!("Code wrapper without header or code fragment; no copy button added");
        return;
    };

    let id = ctx.next_id();
    if let Some(fragment) = wrapper.children[code].as_raw_mut() {
        raw::tag_first_code(&mut fragment.value, &id);
    }
    if let Some(header) = wrapper.children[header].as_element_mut() {
        header.children.push(Node::raw(copy_button(&id)));
    }
}

fn copy_button(id: &str) -> String {
    format!("<CopyCode id=\"{id}\" />")
}

/// Put the copy button import into the top-level script block, creating one if needed.
fn install_scaffolding(tree: &mut Root) {
    let script = tree
        .children
        .iter_mut()
        .filter_map(Node::as_raw_mut)
        .find(|fragment| raw::is_script_block(&fragment.value));

    match script {
        Some(script) => {
            if !raw::splice_into_script(&mut script.value, COPY_BUTTON_IMPORT) {
                tracing::debug!("Script block has no opening tag at its start; copy button import skipped");
            }
        }
        None => tree
            .children
            .insert(0, Node::raw(raw::script_block(COPY_BUTTON_IMPORT))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PipelineConfig;
    use crate::context::DocumentInfo;

    const CODE: &str = "{@html `<pre class=\"language-ts\"><code>let a = 1;</code></pre>`}";

    fn make_header() -> Node {
        Element::with_class("div", CODE_HEADER_CLASS)
            .with_children(vec![
                Element::with_class("div", "md-code-title")
                    .with_children(vec![Node::text("TypeScript")])
                    .into(),
            ])
            .into()
    }

    fn make_wrapper(children: Vec<Node>) -> Node {
        Element::with_class("div", CODE_WRAPPER_CLASS)
            .with_children(children)
            .into()
    }

    fn raw_value(node: &Node) -> &str {
        let Some(fragment) = node.as_raw() else {
            panic!("Expected raw, got {:?}", node);
        };
        &fragment.value
    }

    fn count_raw(nodes: &[Node], needle: &str) -> usize {
        nodes
            .iter()
            .map(|node| match node {
                Node::Raw(fragment) => fragment.value.matches(needle).count(),
                Node::Element(element) => count_raw(&element.children, needle),
                Node::Text(_) => 0,
            })
            .sum()
    }

    #[test]
    fn test_button_and_code_share_an_id() {
        let mut tree = Root::new(vec![make_wrapper(vec![make_header(), Node::raw(CODE)])]);
        let doc = DocumentInfo::anonymous();
        let config = PipelineConfig::default();
        let mut ctx = DocumentContext::new(&doc, &config);
        CopyButtonTransform::new()
            .transform(&mut tree, &mut ctx)
            .unwrap();

        let Node::Element(wrapper) = &tree.children[0] else {
            panic!("Expected element, got {:?}", tree.children[0]);
        };
        let Node::Element(header) = &wrapper.children[0] else {
            panic!("Expected header, got {:?}", wrapper.children[0]);
        };
        assert_eq!(header.children.len(), 2);
        assert_eq!(raw_value(&header.children[1]), "<CopyCode id=\"z0\" />");
        assert_eq!(
            raw_value(&wrapper.children[1]),
            "{@html `<pre class=\"language-ts\"><code id=\"z0\">let a = 1;</code></pre>`}"
        );
    }

    #[test]
    fn test_each_wrapper_gets_its_own_id() {
        let mut tree = Root::new(vec![
            make_wrapper(vec![make_header(), Node::raw(CODE)]),
            Element::new("section")
                .with_children(vec![make_wrapper(vec![make_header(), Node::raw(CODE)])])
                .into(),
        ]);
        let doc = DocumentInfo::anonymous();
        let config = PipelineConfig::default();
        let mut ctx = DocumentContext::new(&doc, &config);
        CopyButtonTransform::new()
            .transform(&mut tree, &mut ctx)
            .unwrap();

        assert_eq!(count_raw(&tree.children, "<CopyCode id=\"z0\" />"), 1);
        assert_eq!(count_raw(&tree.children, "<CopyCode id=\"z1\" />"), 1);
        assert_eq!(count_raw(&tree.children, "<code id=\"z1\">"), 1);
    }

    #[test]
    fn test_wrapper_without_header_is_untouched() {
        let original = Root::new(vec![make_wrapper(vec![
            Element::with_class("div", "md-code-heading").into(),
            Node::raw(CODE),
        ])]);
        let mut tree = original.clone();
        let doc = DocumentInfo::anonymous();
        let config = PipelineConfig::default();
        let mut ctx = DocumentContext::new(&doc, &config);
        CopyButtonTransform::new()
            .transform(&mut tree, &mut ctx)
            .unwrap();

        assert_eq!(tree, original);
        assert_eq!(count_raw(&tree.children, "<CopyCode"), 0);
    }

    #[test]
    fn test_wrapper_without_code_fragment_is_untouched() {
        let original = Root::new(vec![make_wrapper(vec![
            make_header(),
            Node::raw("<pre><code>plain</code></pre>"),
        ])]);
        let mut tree = original.clone();
        let doc = DocumentInfo::anonymous();
        let config = PipelineConfig::default();
        let mut ctx = DocumentContext::new(&doc, &config);
        CopyButtonTransform::new()
            .transform(&mut tree, &mut ctx)
            .unwrap();
        assert_eq!(tree, original);
    }

    #[test]
    fn test_prepare_installs_one_import_for_many_wrappers() {
        let mut tree = Root::new(vec![
            make_wrapper(vec![make_header(), Node::raw(CODE)]),
            make_wrapper(vec![make_header(), Node::raw(CODE)]),
            make_wrapper(vec![make_header(), Node::raw(CODE)]),
        ]);
        let doc = DocumentInfo::anonymous();
        let config = PipelineConfig::default();
        let mut ctx = DocumentContext::new(&doc, &config);
        let transform = CopyButtonPrepareTransform::new();
        transform.transform(&mut tree, &mut ctx).unwrap();
        transform.transform(&mut tree, &mut ctx).unwrap();

        assert_eq!(tree.children.len(), 4);
        assert_eq!(
            raw_value(&tree.children[0]),
            "<script>\nimport CopyCode from \"$lib/CopyCode.svelte\";\n</script>"
        );
        assert_eq!(count_raw(&tree.children, COPY_BUTTON_IMPORT), 1);
    }

    #[test]
    fn test_prepare_splices_into_existing_script() {
        let mut tree = Root::new(vec![
            Node::raw("<script>\nimport { Tabs } from \"svseeds\";\n</script>"),
            make_wrapper(vec![make_header(), Node::raw(CODE)]),
        ]);
        let doc = DocumentInfo::anonymous();
        let config = PipelineConfig::default();
        let mut ctx = DocumentContext::new(&doc, &config);
        CopyButtonPrepareTransform::new()
            .transform(&mut tree, &mut ctx)
            .unwrap();

        assert_eq!(tree.children.len(), 2);
        assert_eq!(
            raw_value(&tree.children[0]),
            "<script>\nimport CopyCode from \"$lib/CopyCode.svelte\";\nimport { Tabs } from \"svseeds\";\n</script>"
        );
    }

    #[test]
    fn test_prepare_without_wrappers_is_noop() {
        let original = Root::new(vec![Element::new("p").into()]);
        let mut tree = original.clone();
        let doc = DocumentInfo::anonymous();
        let config = PipelineConfig::default();
        let mut ctx = DocumentContext::new(&doc, &config);
        CopyButtonPrepareTransform::new()
            .transform(&mut tree, &mut ctx)
            .unwrap();
        assert_eq!(tree, original);
    }
}
