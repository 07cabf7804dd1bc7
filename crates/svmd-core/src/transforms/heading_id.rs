/*
 * heading_id.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Transform that assigns anchor ids to level-2 headings.
 */

//! Heading anchor transform.
//!
//! Each `h2` element gets an `id` derived from its text: runs of ASCII
//! letters, digits and spaces are kept and joined, spaces become hyphens and
//! the result is lower-cased.
//!
//! ```text
//! "Hello, World! 2.0"  ->  "hello-world-20"
//! ```
//!
//! A heading with nothing left after filtering gets a generated id instead.
//! Ids are not deduplicated: two headings with the same text share an id.

use once_cell::sync::Lazy;
use regex::Regex;
use svmd_ast::hast::{ID, Root};

use crate::Result;
use crate::context::DocumentContext;
use crate::transform::Transform;

static ID_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9 ]+").expect("valid heading id pattern"));

/// Transform that sets the `id` property of every `h2` element.
pub struct HeadingIdTransform;

impl HeadingIdTransform {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HeadingIdTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform<Root> for HeadingIdTransform {
    fn name(&self) -> &str {
        "heading-id"
    }

    fn transform(&self, tree: &mut Root, ctx: &mut DocumentContext) -> Result<()> {
        tree.visit_elements_mut(&mut |element| {
            if element.heading_level() != Some(2) {
                return;
            }
            let slug = heading_slug(&element.text_content());
            let id = if slug.is_empty() { ctx.next_id() } else { slug };
            element.set_property(ID, id);
        });
        Ok(())
    }
}

/// Anchor slug of a heading text. Empty when the text has no usable characters.
pub fn heading_slug(text: &str) -> String {
    ID_CHARS
        .find_iter(text)
        .map(|run| run.as_str())
        .collect::<String>()
        .replace(' ', "-")
        .to_lowercase()
}
