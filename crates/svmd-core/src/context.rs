/*
 * context.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Per-document context threaded through every transform.
 */

//! Per-document context threaded through every transform.
//!
//! The `DocumentContext` owns all mutable state of one document run:
//! - the identifier generator (`z0`, `z1`, ...)
//! - the first-occurrence latches gating one-time scaffolding
//! - the metadata record, created on the first merge
//!
//! A fresh context must be built for every document. Nothing in it is
//! shared between documents, so documents can be processed in parallel.

use std::path::{Path, PathBuf};

use crate::config::PipelineConfig;
use crate::meta::{DocumentMeta, MetaPatch};

/// Information about the document being processed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentInfo {
    /// Source file path, if the document came from a file
    pub input: Option<PathBuf>,
}

impl DocumentInfo {
    pub fn from_path(input: impl Into<PathBuf>) -> Self {
        Self {
            input: Some(input.into()),
        }
    }

    /// A document with no source file (stdin, in-memory).
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Final component of the source path.
    pub fn file_name(&self) -> Option<&str> {
        self.input
            .as_deref()
            .and_then(Path::file_name)
            .and_then(|name| name.to_str())
    }
}

/// One-shot gates, one per consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Latch {
    /// First paragraph harvested as the description
    Description,
    /// Tabs component import installed
    TabsScaffolding,
    /// Copy button import installed
    CopyButtonScaffolding,
}

#[derive(Debug, Clone)]
struct Latches {
    description: bool,
    tabs_scaffolding: bool,
    copy_button_scaffolding: bool,
}

impl Default for Latches {
    fn default() -> Self {
        Self {
            description: true,
            tabs_scaffolding: true,
            copy_button_scaffolding: true,
        }
    }
}

/// Monotonic id source producing `z0`, `z1`, ...
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    next: usize,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> String {
        let id = format!("z{}", self.next);
        self.next += 1;
        id
    }
}

/// Context for processing a single document.
pub struct DocumentContext<'a> {
    /// Information about the document being processed
    pub document: &'a DocumentInfo,

    /// Pipeline configuration
    pub config: &'a PipelineConfig,

    ids: IdGenerator,
    latches: Latches,
    meta: Option<DocumentMeta>,
}

impl<'a> DocumentContext<'a> {
    pub fn new(document: &'a DocumentInfo, config: &'a PipelineConfig) -> Self {
        Self {
            document,
            config,
            ids: IdGenerator::new(),
            latches: Latches::default(),
            meta: None,
        }
    }

    /// Generate a fresh document-unique id.
    pub fn next_id(&mut self) -> String {
        self.ids.next_id()
    }

    /// Returns true exactly once per latch for this document.
    pub fn first_occurrence(&mut self, latch: Latch) -> bool {
        let armed = match latch {
            Latch::Description => &mut self.latches.description,
            Latch::TabsScaffolding => &mut self.latches.tabs_scaffolding,
            Latch::CopyButtonScaffolding => &mut self.latches.copy_button_scaffolding,
        };
        std::mem::replace(armed, false)
    }

    /// Merge a partial update into the metadata record, creating it if needed.
    pub fn merge_meta(&mut self, patch: MetaPatch) {
        self.meta.get_or_insert_with(DocumentMeta::default).merge(patch);
    }

    /// Metadata written so far, or `None` if no transform has written any.
    pub fn meta(&self) -> Option<&DocumentMeta> {
        self.meta.as_ref()
    }

    pub fn into_meta(self) -> Option<DocumentMeta> {
        self.meta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_sequential() {
        let doc = DocumentInfo::anonymous();
        let config = PipelineConfig::default();
        let mut ctx = DocumentContext::new(&doc, &config);
        assert_eq!(ctx.next_id(), "z0");
        assert_eq!(ctx.next_id(), "z1");
        assert_eq!(ctx.next_id(), "z2");
    }

    #[test]
    fn test_ids_do_not_leak_between_documents() {
        let doc = DocumentInfo::anonymous();
        let config = PipelineConfig::default();
        let mut first = DocumentContext::new(&doc, &config);
        first.next_id();
        first.next_id();

        let mut second = DocumentContext::new(&doc, &config);
        assert_eq!(second.next_id(), "z0");
    }

    #[test]
    fn test_latch_fires_once() {
        let doc = DocumentInfo::anonymous();
        let config = PipelineConfig::default();
        let mut ctx = DocumentContext::new(&doc, &config);
        assert!(ctx.first_occurrence(Latch::Description));
        assert!(!ctx.first_occurrence(Latch::Description));
        assert!(!ctx.first_occurrence(Latch::Description));
    }

    #[test]
    fn test_latches_are_independent() {
        let doc = DocumentInfo::anonymous();
        let config = PipelineConfig::default();
        let mut ctx = DocumentContext::new(&doc, &config);
        assert!(ctx.first_occurrence(Latch::TabsScaffolding));
        assert!(ctx.first_occurrence(Latch::CopyButtonScaffolding));
        assert!(ctx.first_occurrence(Latch::Description));
    }

    #[test]
    fn test_meta_is_created_lazily() {
        let doc = DocumentInfo::anonymous();
        let config = PipelineConfig::default();
        let mut ctx = DocumentContext::new(&doc, &config);
        assert!(ctx.meta().is_none());

        ctx.merge_meta(MetaPatch::new().section("Guides"));
        assert_eq!(
            ctx.meta().and_then(|m| m.section.as_deref()),
            Some("Guides")
        );
    }

    #[test]
    fn test_file_name() {
        let doc = DocumentInfo::from_path("/site/docs/getting-started.sv.md");
        assert_eq!(doc.file_name(), Some("getting-started.sv.md"));
        assert_eq!(DocumentInfo::anonymous().file_name(), None);
    }
}
