//! Quarto header construction and injection.

use super::parser::has_frontmatter;

/// Output format written when the config does not override it.
pub const DEFAULT_FORMAT: &str = "html";

/// Build a front-matter block with a quoted `title` and a `format` field.
///
/// The block is followed by one blank line so the body can be appended
/// directly.
pub fn create_frontmatter(title: &str, format: &str) -> String {
    format!("---\ntitle: \"{}\"\nformat: {}\n---\n\n", escape_double_quoted(title), format)
}

/// Prepend a front-matter block unless `content` already has one.
///
/// Existing blocks are left untouched, so calling this twice is a no-op the
/// second time.
pub fn ensure_frontmatter(content: &str, title: &str, format: &str) -> String {
    if has_frontmatter(content) {
        return content.to_string();
    }
    let mut out = create_frontmatter(title, format);
    out.push_str(content);
    out
}

/// Escape a string for use inside a YAML double-quoted scalar.
fn escape_double_quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}
