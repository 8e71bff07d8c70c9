//! Front-matter types and data structures.

use serde::Deserialize;
use serde_yaml::Value;
use std::collections::HashMap;

/// Represents parsed YAML front matter from a markdown document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Frontmatter {
    /// Fields as key-value pairs.
    #[serde(flatten)]
    pub fields: HashMap<String, Value>,
}

impl Frontmatter {
    /// The `title` field, when it is a string.
    pub fn title(&self) -> Option<&str> {
        self.fields.get("title").and_then(Value::as_str)
    }
}

/// Byte offsets of a front-matter block inside a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSpan {
    /// Offset of the opening `---` (after any leading whitespace).
    pub start: usize,
    /// Offset where the YAML between the delimiters begins.
    pub yaml_start: usize,
    /// Offset of the closing `---` line.
    pub yaml_end: usize,
    /// Offset just past the closing line, including its newline.
    pub end: usize,
}

/// Result of splitting front matter from markdown.
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    /// Parsed front matter (if present).
    pub frontmatter: Option<Frontmatter>,
    /// Everything up to and including the closing delimiter line, verbatim.
    pub header: Option<String>,
    /// The markdown body (everything after the front matter).
    pub body: String,
}
