/*
 * meta.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Per-document metadata accumulated by transforms.
 */

//! Per-document metadata accumulated by transforms.
//!
//! Transforms never return metadata directly. Each one merges a [`MetaPatch`]
//! into the document context; the resulting [`DocumentMeta`] is handed to the
//! renderer alongside the tree.
//!
//! ## Serialized form
//!
//! ```json
//! {
//!   "title": "Getting started",
//!   "slug": "getting-started",
//!   "path": "/docs/getting-started",
//!   "description": "First paragraph text.",
//!   "section": "Guides",
//!   "toc": [{ "id": "install", "text": "Install" }]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// A level-2 heading entry in the table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    /// Anchor id of the heading
    pub id: String,
    /// Flattened heading text
    pub text: String,
}

impl TocEntry {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocumentMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toc: Option<Vec<TocEntry>>,
}

/// Partial metadata update. Only `Some` fields are applied.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MetaPatch {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub path: Option<String>,
    pub description: Option<String>,
    pub section: Option<String>,
    pub toc: Option<Vec<TocEntry>>,
}

impl MetaPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    pub fn toc(mut self, entries: Vec<TocEntry>) -> Self {
        self.toc = Some(entries);
        self
    }
}

impl DocumentMeta {
    /// Shallow merge. Scalar keys present in the patch overwrite; TOC entries append.
    pub fn merge(&mut self, patch: MetaPatch) {
        let MetaPatch {
            title,
            slug,
            path,
            description,
            section,
            toc,
        } = patch;

        if title.is_some() {
            self.title = title;
        }
        if slug.is_some() {
            self.slug = slug;
        }
        if path.is_some() {
            self.path = path;
        }
        if description.is_some() {
            self.description = description;
        }
        if section.is_some() {
            self.section = section;
        }
        if let Some(entries) = toc {
            self.toc.get_or_insert_with(Vec::new).extend(entries);
        }
    }
}
