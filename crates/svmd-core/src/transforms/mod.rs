/*
 * transforms/mod.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Tree transforms for the markdown and render pipelines.
 */

//! Tree transforms for the markdown and render pipelines.
//!
//! Markdown-level transforms (`Transform<mdast::Root>`), in pipeline order:
//!
//! - [`SectionTransform`] - Converts `::section` paragraphs to section nodes
//! - [`SectionMetaTransform`] - Records section text as metadata
//! - [`TitleMetaTransform`] - Derives title, slug and path from the level-1 heading
//! - [`DescriptionMetaTransform`] - Records the first paragraph as the description
//! - [`CodeWrapTransform`] - Wraps code blocks in a titled container
//! - [`TabsPrepareTransform`] - Installs tab component scaffolding
//! - [`TabsReplaceTransform`] - Rewrites `:::tabs` blocks into tab markup
//!
//! Render-level transforms (`Transform<hast::Root>`), in pipeline order:
//!
//! - [`HeadingIdTransform`] - Assigns anchor ids to level-2 headings
//! - [`TocMetaTransform`] - Collects level-2 headings into the table of contents
//! - [`CopyButtonPrepareTransform`] - Installs copy button scaffolding
//! - [`CopyButtonTransform`] - Adds a copy button to each code block
//!
//! These transforms implement [`Transform`](crate::transform::Transform) and
//! can be added to a [`TransformPipeline`](crate::transform::TransformPipeline).

mod code_block;
mod copy_button;
mod description;
mod heading_id;
mod section;
mod tabs;
mod title;
mod toc;

pub use code_block::{
    CODE_HEADER_CLASS, CODE_TITLE_CLASS, CODE_WRAPPER_CLASS, CodeWrapTransform, code_title,
    language_name,
};
pub use copy_button::{COPY_BUTTON_IMPORT, CopyButtonPrepareTransform, CopyButtonTransform};
pub use description::DescriptionMetaTransform;
pub use heading_id::{HeadingIdTransform, heading_slug};
pub use section::{SECTION_CLASS, SECTION_MARKER, SectionMetaTransform, SectionTransform};
pub use tabs::{
    TABS_CLOSE_MARKER, TABS_IMPORT, TABS_OPEN_MARKER, TabsPrepareTransform, TabsReplaceTransform,
};
pub use title::{TitleMetaTransform, document_slug};
pub use toc::TocMetaTransform;
