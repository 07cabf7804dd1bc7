//! Transform pipeline for svmd documents
//!
//! This crate turns a parsed extended-Markdown document into a render tree
//! ready for a component-based site, plus the metadata the site needs about
//! the page (title, route, description, table of contents).
//!
//! # Architecture
//!
//! The pipeline is organized around these key types:
//!
//! - [`Transform`] - A single tree rewrite, applied once per document
//! - [`TransformPipeline`] - An ordered list of transforms over one tree level
//! - [`DocumentContext`] - Per-document state: ids, one-time latches, metadata
//! - [`DocumentProcessor`] - Both pipelines plus configuration, reusable across documents
//!
//! # Example
//!
//! ```ignore
//! use svmd_core::{DocumentInfo, DocumentProcessor, PipelineConfig};
//!
//! let tree = comrak_to_svmd::parse_markdown(source);
//! let processor = DocumentProcessor::new(PipelineConfig::default());
//! let output = processor.process(tree, &DocumentInfo::from_path("intro.sv.md"))?;
//!
//! println!("{}", output.to_html()?);
//! println!("{}", serde_json::to_string(&output.meta)?);
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod html_writer;
pub mod lower;
pub mod meta;
pub mod pipeline;
pub mod raw;
pub mod transform;
pub mod transforms;

// Re-export commonly used types
pub use config::PipelineConfig;
pub use context::{DocumentContext, DocumentInfo, IdGenerator, Latch};
pub use error::{Result, SvmdError};
pub use meta::{DocumentMeta, MetaPatch, TocEntry};
pub use pipeline::{
    DocumentProcessor, MarkdownPipeline, RenderOutput, RenderPipeline, build_markdown_pipeline,
    build_render_pipeline, process_document,
};
pub use transform::{Transform, TransformPipeline};
pub use transforms::{
    CodeWrapTransform, CopyButtonPrepareTransform, CopyButtonTransform, DescriptionMetaTransform,
    HeadingIdTransform, SectionMetaTransform, SectionTransform, TabsPrepareTransform,
    TabsReplaceTransform, TitleMetaTransform, TocMetaTransform,
};
