/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Tree type definitions for svmd.
 *
 * This crate provides pure data type definitions for the two trees the
 * svmd transform pipeline rewrites: the markdown-level tree (`mdast`)
 * produced by a Markdown parser, and the render-level tree (`hast`)
 * produced by lowering. It has minimal dependencies (serde, hashlink)
 * and can be used by any crate that needs to build or inspect documents.
 */

pub mod hast;
pub mod mdast;

pub use mdast::HtmlHint;
