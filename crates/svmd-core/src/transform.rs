/*
 * transform.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Tree transformation pipeline infrastructure.
 */

//! Tree transformation pipeline infrastructure.
//!
//! This module provides the core abstractions for tree transformations:
//!
//! - [`Transform`] - The trait implemented by all transformations
//! - [`TransformPipeline`] - Ordered collection of transforms to execute
//!
//! # Architecture
//!
//! Transforms are run in a flat, ordered sequence (insertion order).
//! The same trait serves both tree levels: markdown transforms implement
//! `Transform<mdast::Root>` and render transforms implement
//! `Transform<hast::Root>`. Each transform can:
//! - Mutate the tree (replace, insert or wrap nodes)
//! - Merge metadata into the document context
//! - Draw fresh ids and consume one-time latches from the context
//!
//! Later transforms depend on node shapes produced by earlier ones, so the
//! order of insertion is part of the pipeline's contract.
//!
//! # Example
//!
//! ```ignore
//! use svmd_core::transform::{Transform, TransformPipeline};
//! use svmd_ast::mdast;
//!
//! struct MyTransform;
//!
//! impl Transform<mdast::Root> for MyTransform {
//!     fn name(&self) -> &str { "my-transform" }
//!
//!     fn transform(&self, tree: &mut mdast::Root, ctx: &mut DocumentContext) -> Result<()> {
//!         // Modify the tree...
//!         Ok(())
//!     }
//! }
//!
//! let mut pipeline = TransformPipeline::new();
//! pipeline.push(Box::new(MyTransform));
//! pipeline.execute(&mut tree, &mut ctx)?;
//! ```

use crate::Result;
use crate::context::DocumentContext;

/// Trait for tree transformations.
///
/// # Thread Safety
///
/// Transforms must be `Send + Sync` so one pipeline can serve documents
/// processed in parallel. All per-document state lives in the
/// [`DocumentContext`], never in the transform.
pub trait Transform<T>: Send + Sync {
    /// Human-readable name for this transform.
    ///
    /// Used for logging and debugging.
    fn name(&self) -> &str;

    /// Apply the transformation to the tree.
    ///
    /// # Errors
    ///
    /// Returns an error if the transformation fails.
    fn transform(&self, tree: &mut T, ctx: &mut DocumentContext) -> Result<()>;
}

/// A pipeline of transforms to execute in order.
pub struct TransformPipeline<T> {
    transforms: Vec<Box<dyn Transform<T>>>,
}

impl<T> TransformPipeline<T> {
    /// Create a new empty pipeline.
    pub fn new() -> Self {
        Self {
            transforms: Vec::new(),
        }
    }

    /// Add a transform to the pipeline.
    ///
    /// Transforms run in the order they are added.
    pub fn push(&mut self, transform: Box<dyn Transform<T>>) {
        self.transforms.push(transform);
    }

    /// Add multiple transforms to the pipeline.
    pub fn extend(&mut self, transforms: impl IntoIterator<Item = Box<dyn Transform<T>>>) {
        self.transforms.extend(transforms);
    }

    /// Get the number of transforms in the pipeline.
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Check if the pipeline is empty.
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Execute all transforms in insertion order.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered. Execution stops on error.
    pub fn execute(&self, tree: &mut T, ctx: &mut DocumentContext) -> Result<()> {
        for transform in &self.transforms {
            tracing::debug!(transform = transform.name(), "Running transform");
            transform.transform(tree, ctx)?;
        }

        Ok(())
    }

    /// List the names of all transforms in execution order.
    pub fn transform_names(&self) -> Vec<&str> {
        self.transforms.iter().map(|t| t.name()).collect()
    }
}

impl<T> Default for TransformPipeline<T> {
    fn default() -> Self {
        Self::new()
    }
}
