/*
 * raw.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Text surgery on opaque markup fragments.
 */

//! Text surgery on opaque markup fragments.
//!
//! Script blocks and embedded code are already rendered markup by the time
//! the transforms see them, so they are edited as strings: anchored prefix and
//! suffix checks to find them, and insert-after-match or first-occurrence
//! replacement to change them. Nothing here reparses markup.

use once_cell::sync::Lazy;
use regex::Regex;

static SCRIPT_OPEN_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<script[^>]*>").expect("valid script tag pattern"));

const SCRIPT_START: &str = "<script";
const SCRIPT_END: &str = "</script>";
const EMBED_START: &str = "{@html";
const EMBED_END: &str = "}";
const CODE_OPEN_TAG: &str = "<code>";

/// A complete script block: starts with `<script` and ends with `</script>`.
pub fn is_script_block(value: &str) -> bool {
    value.starts_with(SCRIPT_START) && value.ends_with(SCRIPT_END)
}

/// Embedded code rendering: starts with `{@html` and ends with `}`.
pub fn is_embedded_code(value: &str) -> bool {
    value.starts_with(EMBED_START) && value.ends_with(EMBED_END)
}

/// A new script block containing `body`.
pub fn script_block(body: &str) -> String {
    format!("<script>\n{body}\n</script>")
}

/// Insert `body` on its own line right after the opening `<script ...>` tag.
///
/// Returns false, leaving `value` unchanged, when it does not start with an
/// opening script tag.
pub fn splice_into_script(value: &mut String, body: &str) -> bool {
    let Some(open) = SCRIPT_OPEN_TAG.find(value) else {
        return false;
    };
    let at = open.end();
    value.insert_str(at, &format!("\n{body}"));
    true
}

/// Add an `id` attribute to the first bare `<code>` tag.
///
/// Returns false when there is no bare `<code>` tag to rewrite.
pub fn tag_first_code(value: &mut String, id: &str) -> bool {
    let Some(at) = value.find(CODE_OPEN_TAG) else {
        return false;
    };
    value.replace_range(at..at + CODE_OPEN_TAG.len(), &format!("<code id=\"{id}\">"));
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_script_block() {
        assert!(is_script_block("<script>\nlet a = 1;\n</script>"));
        assert!(is_script_block("<script lang=\"ts\"></script>"));
        assert!(!is_script_block("<script>\nlet a = 1;"));
        assert!(!is_script_block("<style></style>"));
        assert!(!is_script_block(" <script></script>"));
    }

    #[test]
    fn test_is_embedded_code() {
        assert!(is_embedded_code("{@html `<pre><code>a</code></pre>`}"));
        assert!(!is_embedded_code("<pre><code>a</code></pre>"));
        assert!(!is_embedded_code("{@html `<pre>`"));
    }

    #[test]
    fn test_script_block() {
        assert_eq!(script_block("let a = 1;"), "<script>\nlet a = 1;\n</script>");
    }

    #[test]
    fn test_splice_after_plain_open_tag() {
        let mut value = "<script>\nlet a = 1;\n</script>".to_string();
        assert!(splice_into_script(&mut value, "import X from \"x\";"));
        assert_eq!(
            value,
            "<script>\nimport X from \"x\";\nlet a = 1;\n</script>"
        );
    }

    #[test]
    fn test_splice_after_open_tag_with_attributes() {
        let mut value = "<script lang=\"ts\">\n</script>".to_string();
        assert!(splice_into_script(&mut value, "let b;"));
        assert_eq!(value, "<script lang=\"ts\">\nlet b;\n</script>");
    }

    #[test]
    fn test_splice_only_touches_first_tag() {
        let mut value = "<script>a</script><script>b</script>".to_string();
        assert!(splice_into_script(&mut value, "x"));
        assert_eq!(value, "<script>\nxa</script><script>b</script>");
    }

    #[test]
    fn test_splice_requires_leading_tag() {
        let mut value = "<!-- c --><script></script>".to_string();
        assert!(!splice_into_script(&mut value, "x"));
        assert_eq!(value, "<!-- c --><script></script>");
    }

    #[test]
    fn test_tag_first_code() {
        let mut value = "{@html `<pre><code>a</code><code>b</code></pre>`}".to_string();
        assert!(tag_first_code(&mut value, "z3"));
        assert_eq!(
            value,
            "{@html `<pre><code id=\"z3\">a</code><code>b</code></pre>`}"
        );
    }

    #[test]
    fn test_tag_first_code_ignores_code_with_attributes() {
        let mut value = "{@html `<pre><code class=\"x\">a</code></pre>`}".to_string();
        assert!(!tag_first_code(&mut value, "z0"));
        assert_eq!(value, "{@html `<pre><code class=\"x\">a</code></pre>`}");
    }
}
