/*
 * config.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Pipeline configuration.
 */

//! Pipeline configuration.
//!
//! The configuration controls how document-level metadata is derived:
//!
//! - `slug-suffix`: removed from the source file name to form the slug (default `.sv.md`)
//! - `default-slug`: slug used when the document has no source path (default `default`)
//! - `route-prefix`: prepended to the slug to form the route path (default `/docs/`)
//!
//! Configuration files are JSON:
//!
//! ```json
//! { "slug-suffix": ".md", "route-prefix": "/guide/" }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Result, SvmdError};

pub const DEFAULT_SLUG_SUFFIX: &str = ".sv.md";
pub const DEFAULT_SLUG: &str = "default";
pub const DEFAULT_ROUTE_PREFIX: &str = "/docs/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct PipelineConfig {
    pub slug_suffix: String,
    pub default_slug: String,
    pub route_prefix: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            slug_suffix: DEFAULT_SLUG_SUFFIX.to_string(),
            default_slug: DEFAULT_SLUG.to_string(),
            route_prefix: DEFAULT_ROUTE_PREFIX.to_string(),
        }
    }
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slug_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.slug_suffix = suffix.into();
        self
    }

    pub fn with_default_slug(mut self, slug: impl Into<String>) -> Self {
        self.default_slug = slug.into();
        self
    }

    pub fn with_route_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.route_prefix = prefix.into();
        self
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Check that route paths built from this configuration are well formed.
    pub fn validate(&self) -> Result<()> {
        if !self.route_prefix.starts_with('/') || !self.route_prefix.ends_with('/') {
            return Err(SvmdError::Config(format!(
                "route-prefix must start and end with '/', got {:?}",
                self.route_prefix
            )));
        }
        if self.default_slug.is_empty() {
            return Err(SvmdError::Config("default-slug must not be empty".into()));
        }
        Ok(())
    }

    /// Route path for a slug.
    pub fn route_for(&self, slug: &str) -> String {
        format!("{}{}", self.route_prefix, slug)
    }
}
