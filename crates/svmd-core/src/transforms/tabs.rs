/*
 * tabs.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Transforms for `:::tabs` blocks.
 */

//! Tabs block transforms.
//!
//! A tab group is written as a run of top-level blocks between an open and a
//! close marker paragraph:
//!
//! ```markdown
//! :::tabs npm,pnpm
//!
//! npm install svseeds
//!
//! pnpm add svseeds
//!
//! :::
//! ```
//!
//! [`TabsPrepareTransform`] installs the component import and the shared
//! `current` state in the document's script block the first time a tab group
//! appears. [`TabsReplaceTransform`] rewrites the markers into the component's
//! open and close tags and wraps each block in between in its own snippet:
//!
//! ```text
//! <Tabs labels={["npm","pnpm"]} bind:current orientation="horizontal">
//! {#snippet panelz0()}
//! <p>npm install svseeds</p>
//! {/snippet}
//! {#snippet panelz1()}
//! <p>pnpm add svseeds</p>
//! {/snippet}
//! </Tabs>
//! ```
//!
//! The scan is flat. A second open marker inside a group is wrapped like any
//! other content, and a group that is never closed extends to the end of the
//! document.

use svmd_ast::mdast::{Node, Root};

use crate::Result;
use crate::context::{DocumentContext, Latch};
use crate::raw;
use crate::transform::Transform;

/// Prefix of the paragraph that opens a tab group.
pub const TABS_OPEN_MARKER: &str = ":::tabs ";

/// Text of the paragraph that closes a tab group.
pub const TABS_CLOSE_MARKER: &str = ":::";

/// Script lines the tab component needs.
pub const TABS_IMPORT: &str = "import { Tabs } from \"svseeds\";\nlet current = $state();";

const TABS_CLOSE_TAG: &str = "</Tabs>";
const SNIPPET_CLOSE: &str = "{/snippet}";

/// Transform that installs tab scaffolding once per document.
pub struct TabsPrepareTransform;

impl TabsPrepareTransform {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TabsPrepareTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform<Root> for TabsPrepareTransform {
    fn name(&self) -> &str {
        "tabs-prepare"
    }

    fn transform(&self, tree: &mut Root, ctx: &mut DocumentContext) -> Result<()> {
        let mut has_tabs = false;
        tree.walk(&mut |node| {
            has_tabs = has_tabs || open_marker_labels(node).is_some();
        });

        if has_tabs && ctx.first_occurrence(Latch::TabsScaffolding) {
            install_scaffolding(tree);
        }
        Ok(())
    }
}

/// Transform that rewrites tab markers and wraps tab panels in snippets.
pub struct TabsReplaceTransform;

impl TabsReplaceTransform {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TabsReplaceTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform<Root> for TabsReplaceTransform {
    fn name(&self) -> &str {
        "tabs-replace"
    }

    fn transform(&self, tree: &mut Root, ctx: &mut DocumentContext) -> Result<()> {
        let children = &mut tree.children;
        let mut inside_tabs = false;
        let mut i = 0;

        while i < children.len() {
            if !inside_tabs {
                if let Some(labels) = open_marker_labels(&children[i]) {
                    children[i] = Node::html(tabs_open_tag(&labels));
                    inside_tabs = true;
                }
            } else if is_close_marker(&children[i]) {
                children[i] = Node::html(TABS_CLOSE_TAG);
                inside_tabs = false;
            } else if !children[i].is_html() {
                let id = ctx.next_id();
                children.insert(i + 1, Node::html(SNIPPET_CLOSE));
                children.insert(i, Node::html(snippet_open(&id)));
                i += 2;
            }
            i += 1;
        }

        if inside_tabs {
            tracing::debug!("Tab group not closed; it extends to the end of the document");
        }
        Ok(())
    }
}

/// Label list of an open marker paragraph, or `None` for any other node.
fn open_marker_labels(node: &Node) -> Option<String> {
    node.as_paragraph()?;
    let text = node.text_content();
    text.starts_with(TABS_OPEN_MARKER)
        .then(|| text.replacen(TABS_OPEN_MARKER, "", 1))
}

fn is_close_marker(node: &Node) -> bool {
    node.as_paragraph().is_some() && node.text_content() == TABS_CLOSE_MARKER
}

/// Open tag of the tab component. Labels are split on `,` and quoted as written.
fn tabs_open_tag(labels: &str) -> String {
    let labels = labels
        .split(',')
        .map(|label| format!("\"{label}\""))
        .collect::<Vec<_>>()
        .join(",");
    format!("<Tabs labels={{[{labels}]}} bind:current orientation=\"horizontal\">")
}

fn snippet_open(id: &str) -> String {
    format!("{{#snippet panel{id}()}}")
}

/// Put the tab import into the top-level script block, creating one if needed.
fn install_scaffolding(tree: &mut Root) {
    let script = tree
        .children
        .iter_mut()
        .filter_map(Node::as_html_mut)
        .find(|html| raw::is_script_block(&html.value));

    match script {
        Some(script) => {
            if !raw::splice_into_script(&mut script.value, TABS_IMPORT) {
                tracing::debug!("Script block has no opening tag at its start; tab import skipped");
            }
        }
        None => tree
            .children
            .insert(0, Node::html(raw::script_block(TABS_IMPORT))),
    }
}
