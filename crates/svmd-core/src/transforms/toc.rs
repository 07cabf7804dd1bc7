/*
 * toc.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Transform that collects level-2 headings into the table of contents.
 */

//! Table of contents transform.
//!
//! Runs after [`HeadingIdTransform`](super::heading_id::HeadingIdTransform).
//! Every `h2` element with a non-empty `id` contributes one [`TocEntry`], in
//! document order. The `toc` key is written even when the list is empty.

use svmd_ast::hast::Root;

use crate::Result;
use crate::context::DocumentContext;
use crate::meta::{MetaPatch, TocEntry};
use crate::transform::Transform;

/// Transform that writes the `toc` metadata from level-2 headings.
pub struct TocMetaTransform;

impl TocMetaTransform {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TocMetaTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform<Root> for TocMetaTransform {
    fn name(&self) -> &str {
        "toc-meta"
    }

    fn transform(&self, tree: &mut Root, ctx: &mut DocumentContext) -> Result<()> {
        let mut entries = Vec::new();
        tree.visit_elements(&mut |element| {
            if element.heading_level() != Some(2) {
                return;
            }
            match element.id() {
                Some(id) if !id.is_empty() => {
                    entries.push(TocEntry::new(id, element.text_content()));
                }
                _ => {}
            }
        });

        tracing::trace!(entries = entries.len(), "Collected table of contents");
        ctx.merge_meta(MetaPatch::new().toc(entries));
        Ok(())
    }
}
