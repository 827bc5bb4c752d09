//! Text helpers shared by the tree serializer and page writers.

use std::sync::LazyLock;

use regex::Regex;

static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

/// Escape text for use in element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Remove markup tags, leaving the text between them.
///
/// Document titles may carry inline markup; window titles and meta keywords
/// need the plain text.
pub fn strip_tags(markup: &str) -> String {
    TAG_PATTERN.replace_all(markup, "").trim().to_string()
}
