/*
 * title.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Transform that derives title, slug and route path metadata.
 */

//! Title metadata transform.
//!
//! The level-1 heading supplies the document title. The slug comes from the
//! source file name with the configured suffix removed, and the route path
//! is the configured prefix followed by the slug:
//!
//! | source path                 | slug              | path                    |
//! |-----------------------------|-------------------|-------------------------|
//! | `docs/getting-started.sv.md`| `getting-started` | `/docs/getting-started` |
//! | (none)                      | `default`         | `/docs/default`         |
//!
//! Documents without a level-1 heading get none of the three keys.

use svmd_ast::mdast::{Node, Root};

use crate::Result;
use crate::config::PipelineConfig;
use crate::context::{DocumentContext, DocumentInfo};
use crate::meta::MetaPatch;
use crate::transform::Transform;

/// Transform that writes `title`, `slug` and `path` from the level-1 heading.
pub struct TitleMetaTransform;

impl TitleMetaTransform {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TitleMetaTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform<Root> for TitleMetaTransform {
    fn name(&self) -> &str {
        "title-meta"
    }

    fn transform(&self, tree: &mut Root, ctx: &mut DocumentContext) -> Result<()> {
        let mut titles = Vec::new();
        tree.walk(&mut |node| {
            if matches!(node, Node::Heading(heading) if heading.depth == 1) {
                titles.push(node.text_content());
            }
        });

        if titles.is_empty() {
            tracing::trace!("No level-1 heading; title metadata not set");
            return Ok(());
        }

        let slug = document_slug(ctx.document, ctx.config);
        let path = ctx.config.route_for(&slug);
        for title in titles {
            ctx.merge_meta(
                MetaPatch::new()
                    .title(title)
                    .slug(slug.clone())
                    .path(path.clone()),
            );
        }
        Ok(())
    }
}

/// Slug for a document: its file name minus the configured suffix.
pub fn document_slug(document: &DocumentInfo, config: &PipelineConfig) -> String {
    match document.file_name() {
        Some(name) => name.replacen(config.slug_suffix.as_str(), "", 1),
        None => config.default_slug.clone(),
    }
}
