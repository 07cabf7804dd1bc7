/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Convert comrak's CommonMark AST to the svmd markdown tree.
 *
 * This crate provides direct conversion from comrak's arena-based AST
 * to our owned mdast structures. Adjacent text and soft breaks are merged
 * into single text leaves, the way mdast represents them.
 */

mod block;
mod inline;

pub use block::convert_document;

use comrak::{Arena, Options, parse_document};
use svmd_ast::mdast::Root;

/// Front matter fence recognized (and skipped) by [`parse_markdown`].
pub const FRONT_MATTER_DELIMITER: &str = "---";

/// Parse Markdown source into a markdown tree.
///
/// Front matter delimited by `---` is skipped.
pub fn parse_markdown(source: &str) -> Root {
    let arena = Arena::new();
    let mut options = Options::default();
    options.extension.front_matter_delimiter = Some(FRONT_MATTER_DELIMITER.to_string());
    let root = parse_document(&arena, source, &options);
    convert_document(root)
}
