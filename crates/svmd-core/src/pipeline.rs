/*
 * pipeline.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Document processing pipeline.
 */

//! Document processing pipeline.
//!
//! ## Pipeline Stages
//!
//! 1. **Markdown transforms**: section, section-meta, title-meta,
//!    description-meta, code-wrap, tabs-prepare, tabs-replace
//! 2. **Lower**: markdown tree → render tree (via [`lower`](crate::lower))
//! 3. **Render transforms**: heading-id, toc-meta, copy-button-prepare,
//!    copy-button-add
//!
//! The order within each stage is fixed: later transforms depend on node
//! shapes produced by earlier ones.
//!
//! ## Usage
//!
//! ```ignore
//! use svmd_core::{DocumentInfo, DocumentProcessor, PipelineConfig};
//!
//! let processor = DocumentProcessor::new(PipelineConfig::default());
//! let output = processor.process(tree, &DocumentInfo::from_path("intro.sv.md"))?;
//! println!("{}", output.to_html()?);
//! ```

use svmd_ast::{hast, mdast};

use crate::config::PipelineConfig;
use crate::context::{DocumentContext, DocumentInfo};
use crate::html_writer;
use crate::lower::lower;
use crate::meta::DocumentMeta;
use crate::transform::TransformPipeline;
use crate::transforms::{
    CodeWrapTransform, CopyButtonPrepareTransform, CopyButtonTransform, DescriptionMetaTransform,
    HeadingIdTransform, SectionMetaTransform, SectionTransform, TabsPrepareTransform,
    TabsReplaceTransform, TitleMetaTransform, TocMetaTransform,
};
use crate::{Result, SvmdError};

/// Pipeline over the markdown tree.
pub type MarkdownPipeline = TransformPipeline<mdast::Root>;

/// Pipeline over the render tree.
pub type RenderPipeline = TransformPipeline<hast::Root>;

/// Output from processing one document.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutput {
    /// The rewritten render tree
    pub tree: hast::Root,
    /// Metadata accumulated by the transforms
    pub meta: DocumentMeta,
}

impl RenderOutput {
    /// Serialize the render tree as markup.
    pub fn to_html(&self) -> Result<String> {
        html_writer::to_string(&self.tree).map_err(|e| SvmdError::Render(e.to_string()))
    }
}

/// Build the markdown-level pipeline.
pub fn build_markdown_pipeline() -> MarkdownPipeline {
    let mut pipeline = TransformPipeline::new();
    pipeline.push(Box::new(SectionTransform::new()));
    pipeline.push(Box::new(SectionMetaTransform::new()));
    pipeline.push(Box::new(TitleMetaTransform::new()));
    pipeline.push(Box::new(DescriptionMetaTransform::new()));
    pipeline.push(Box::new(CodeWrapTransform::new()));
    pipeline.push(Box::new(TabsPrepareTransform::new()));
    pipeline.push(Box::new(TabsReplaceTransform::new()));
    pipeline
}

/// Build the render-level pipeline.
pub fn build_render_pipeline() -> RenderPipeline {
    let mut pipeline = TransformPipeline::new();
    pipeline.push(Box::new(HeadingIdTransform::new()));
    pipeline.push(Box::new(TocMetaTransform::new()));
    pipeline.push(Box::new(CopyButtonPrepareTransform::new()));
    pipeline.push(Box::new(CopyButtonTransform::new()));
    pipeline
}

/// Run both pipelines over one document with the standard transform sets.
///
/// The context must be fresh for this document. On error the partially
/// filled context is dropped with the tree.
pub fn process_document(root: mdast::Root, ctx: &mut DocumentContext) -> Result<RenderOutput> {
    run_pipelines(
        &build_markdown_pipeline(),
        &build_render_pipeline(),
        root,
        ctx,
    )
}

fn run_pipelines(
    markdown: &MarkdownPipeline,
    render: &RenderPipeline,
    mut root: mdast::Root,
    ctx: &mut DocumentContext,
) -> Result<RenderOutput> {
    markdown.execute(&mut root, ctx)?;

    let mut tree = lower(root);
    render.execute(&mut tree, ctx)?;

    Ok(RenderOutput {
        tree,
        meta: ctx.meta().cloned().unwrap_or_default(),
    })
}

/// Reusable processor holding the configuration and both pipelines.
///
/// The pipelines are built once; every call to [`process`](Self::process)
/// gets its own [`DocumentContext`], so one processor can serve documents
/// on several threads.
pub struct DocumentProcessor {
    config: PipelineConfig,
    markdown: MarkdownPipeline,
    render: RenderPipeline,
}

impl DocumentProcessor {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            markdown: build_markdown_pipeline(),
            render: build_render_pipeline(),
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Process one document with a fresh context.
    pub fn process(&self, root: mdast::Root, document: &DocumentInfo) -> Result<RenderOutput> {
        tracing::debug!(input = ?document.input, "Processing document");
        let mut ctx = DocumentContext::new(document, &self.config);
        run_pipelines(&self.markdown, &self.render, root, &mut ctx)
    }
}

impl Default for DocumentProcessor {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}
