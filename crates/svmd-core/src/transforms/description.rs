/*
 * description.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Transform that harvests the first paragraph as the description.
 */

use svmd_ast::mdast::Root;

use crate::Result;
use crate::context::{DocumentContext, Latch};
use crate::meta::MetaPatch;
use crate::transform::Transform;

/// Transform that writes `description` from the first paragraph in the document.
pub struct DescriptionMetaTransform;

impl DescriptionMetaTransform {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DescriptionMetaTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform<Root> for DescriptionMetaTransform {
    fn name(&self) -> &str {
        "description-meta"
    }

    fn transform(&self, tree: &mut Root, ctx: &mut DocumentContext) -> Result<()> {
        let mut first = None;
        tree.walk(&mut |node| {
            if first.is_none() && node.as_paragraph().is_some() {
                first = Some(node.text_content());
            }
        });

        let Some(description) = first else {
            return Ok(());
        };
        if ctx.first_occurrence(Latch::Description) {
            ctx.merge_meta(MetaPatch::new().description(description));
        }
        Ok(())
    }
}
