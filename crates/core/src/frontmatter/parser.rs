//! Front-matter detection and parsing.

use super::types::{BlockSpan, Frontmatter, ParsedDocument};
use thiserror::Error;

/// Errors that can occur during front-matter parsing.
#[derive(Debug, Error)]
pub enum FrontmatterParseError {
    #[error("invalid YAML front matter: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),
}

/// Locate the front-matter block at the start of `content`.
///
/// The block must open with a `---` line (leading whitespace before it is
/// allowed) and close with a later line that is exactly `---`. Trailing
/// spaces and `\r` on either delimiter line are tolerated.
/// ```markdown
/// ---
/// key: value
/// ---
/// # Document content
/// ```
pub fn locate(content: &str) -> Option<BlockSpan> {
    let start = content.len() - content.trim_start().len();
    let rest = &content[start..];

    let mut lines = rest.split_inclusive('\n');
    let opening = lines.next()?;
    if !opening.ends_with('\n') || opening.trim_end() != "---" {
        return None;
    }

    let yaml_start = start + opening.len();
    let mut offset = yaml_start;
    for line in lines {
        if line.trim_end() == "---" {
            let end = offset + line.len();
            return Some(BlockSpan { start, yaml_start, yaml_end: offset, end });
        }
        offset += line.len();
    }

    // No closing ---, treat as no front matter
    None
}

/// Whether `content` begins with a complete front-matter block.
pub fn has_frontmatter(content: &str) -> bool {
    locate(content).is_some()
}

/// Parse front matter from markdown content.
///
/// The raw block is kept verbatim in [`ParsedDocument::header`] so callers can
/// write it back without reformatting.
pub fn parse(content: &str) -> Result<ParsedDocument, FrontmatterParseError> {
    let Some(span) = locate(content) else {
        return Ok(ParsedDocument {
            frontmatter: None,
            header: None,
            body: content.to_string(),
        });
    };

    let yaml_content = &content[span.yaml_start..span.yaml_end];
    let frontmatter: Frontmatter = if yaml_content.trim().is_empty() {
        Frontmatter::default()
    } else {
        serde_yaml::from_str(yaml_content.trim())?
    };

    Ok(ParsedDocument {
        frontmatter: Some(frontmatter),
        header: Some(content[..span.end].to_string()),
        body: content[span.end..].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_no_frontmatter() {
        let content = "# Hello\n\nSome content";
        let result = parse(content).unwrap();
        assert!(result.frontmatter.is_none());
        assert!(result.header.is_none());
        assert_eq!(result.body, content);
    }

    #[test]
    fn parse_simple_frontmatter() {
        let content = "---\ntitle: Hello\n---\n# Content";
        let result = parse(content).unwrap();
        let fm = result.frontmatter.unwrap();
        assert_eq!(fm.title(), Some("Hello"));
        assert_eq!(result.header.as_deref(), Some("---\ntitle: Hello\n---\n"));
        assert_eq!(result.body, "# Content");
    }

    #[test]
    fn parse_quarto_header() {
        let content = "---\ntitle: \"x\"\nformat: html\n---\n\nBody";
        let result = parse(content).unwrap();
        let fm = result.frontmatter.unwrap();
        assert_eq!(fm.title(), Some("x"));
        assert_eq!(fm.fields.get("format").and_then(|v| v.as_str()), Some("html"));
        assert_eq!(result.body, "\nBody");
    }

    #[test]
    fn parse_empty_frontmatter() {
        let content = "---\n---\n# Content";
        let result = parse(content).unwrap();
        assert!(result.frontmatter.unwrap().fields.is_empty());
        assert_eq!(result.body, "# Content");
    }

    #[test]
    fn parse_invalid_yaml_is_an_error() {
        let content = "---\ntitle: [unclosed\n---\nBody";
        assert!(has_frontmatter(content));
        assert!(matches!(parse(content), Err(FrontmatterParseError::InvalidYaml(_))));
    }

    #[test]
    fn detects_block_after_leading_whitespace() {
        assert!(has_frontmatter("\n\n---\ntitle: a\n---\nbody"));
        let span = locate("  \n---\na: 1\n---\n").unwrap();
        assert_eq!(span.start, 3);
    }

    #[test]
    fn detects_block_closing_at_end_of_file() {
        assert!(has_frontmatter("---\ntitle: a\n---"));
    }

    #[test]
    fn tolerates_crlf_and_trailing_spaces() {
        assert!(has_frontmatter("---  \r\ntitle: a\r\n--- \r\nbody"));
    }

    #[test]
    fn rejects_unclosed_block() {
        assert!(!has_frontmatter("---\ntitle: a\nno closing line"));
    }

    #[test]
    fn rejects_rule_not_at_start() {
        assert!(!has_frontmatter("# Heading\n---\na: 1\n---\n"));
    }

    #[test]
    fn rejects_opening_with_extra_text() {
        assert!(!has_frontmatter("----\na: 1\n---\n"));
        assert!(!has_frontmatter("--- title\na: 1\n---\n"));
    }

    #[test]
    fn closing_line_must_be_exact() {
        assert!(!has_frontmatter("---\na: 1\n--- not closing\n"));
        assert!(!has_frontmatter("---\na: 1\n ---\n"));
    }
}
