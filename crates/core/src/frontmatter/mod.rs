//! Front-matter detection, parsing and injection.
//!
//! This module provides functionality to:
//! - Detect a leading `---` ... `---` block in a document
//! - Parse the block's YAML fields when they are needed
//! - Build and prepend a Quarto header when the block is absent

pub mod parser;
pub mod serializer;
pub mod types;

pub use parser::{FrontmatterParseError, has_frontmatter, locate, parse};
pub use serializer::{DEFAULT_FORMAT, create_frontmatter, ensure_frontmatter};
pub use types::{BlockSpan, Frontmatter, ParsedDocument};
