//! Turning a split document into the set of files to write.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::splitter::split;
use crate::error::ConvertError;
use crate::frontmatter::{self, DEFAULT_FORMAT, create_frontmatter, ensure_frontmatter};
use crate::slug::{CollisionPolicy, SlugAllocator};

/// Extension of every generated page.
pub const QMD_EXTENSION: &str = "qmd";

/// Heading of the link block appended to the main page.
pub const DEFAULT_RELATED_HEADING: &str = "Related Pages";

/// Settings that shape the generated pages.
#[derive(Debug, Clone)]
pub struct SplitOptions {
    /// Value of the `format` front-matter field.
    pub format: String,
    /// Heading text of the link block on the main page.
    pub related_heading: String,
    pub collision: CollisionPolicy,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            format: DEFAULT_FORMAT.to_string(),
            related_heading: DEFAULT_RELATED_HEADING.to_string(),
            collision: CollisionPolicy::default(),
        }
    }
}

/// A page ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub path: PathBuf,
    pub title: String,
    pub content: String,
}

/// Every page produced from one input document.
#[derive(Debug, Clone)]
pub struct SplitPlan {
    pub main: OutputFile,
    /// One page per section, in document order.
    pub sections: Vec<OutputFile>,
}

impl SplitPlan {
    /// Section pages followed by the main page.
    pub fn files(&self) -> impl Iterator<Item = &OutputFile> {
        self.sections.iter().chain(std::iter::once(&self.main))
    }
}

/// Build the pages for `content`, the text of `<base_dir>/<main_stem>.md`.
///
/// An existing front-matter block on the input stays on the main page and is
/// never scanned for headings.
pub fn plan_split(
    content: &str,
    main_stem: &str,
    base_dir: &Path,
    options: &SplitOptions,
) -> Result<SplitPlan, ConvertError> {
    let (header, body) = match frontmatter::locate(content) {
        Some(span) => (Some(&content[..span.end]), &content[span.end..]),
        None => (None, content),
    };

    let pieces = split(body);
    debug!(sections = pieces.sections.len(), "split document body");

    let main_title = capitalize_first(main_stem);
    let mut slugs = SlugAllocator::new(options.collision);
    slugs.reserve(main_stem, &main_title);

    let mut sections = Vec::with_capacity(pieces.sections.len());
    let mut links = Vec::with_capacity(pieces.sections.len());
    for section in pieces.sections {
        let stem = slugs.allocate(&section.title)?;
        let file_name = format!("{stem}.{QMD_EXTENSION}");

        let mut page_body = section.body;
        if !page_body.is_empty() {
            page_body.push('\n');
        }

        links.push(format!("[{}](./{})", section.title, file_name));
        sections.push(OutputFile {
            path: base_dir.join(&file_name),
            content: ensure_frontmatter(&page_body, &section.title, &options.format),
            title: section.title,
        });
    }

    let main_body = if links.is_empty() {
        pieces.main.to_string()
    } else {
        let preamble = pieces.main.trim_end();
        let related = format!("## {}\n\n{}\n", options.related_heading, links.join("\n\n"));
        if preamble.is_empty() { related } else { format!("{preamble}\n\n{related}") }
    };

    let main_content = match header {
        Some(header) if main_body.is_empty() || main_body.starts_with('\n') => {
            format!("{header}{main_body}")
        }
        Some(header) => format!("{header}\n{main_body}"),
        None => format!("{}{}", create_frontmatter(&main_title, &options.format), main_body),
    };

    Ok(SplitPlan {
        main: OutputFile {
            path: base_dir.join(format!("{main_stem}.{QMD_EXTENSION}")),
            title: main_title,
            content: main_content,
        },
        sections,
    })
}

/// Write every page of `plan`, section pages first.
pub fn write_plan(plan: &SplitPlan) -> Result<(), ConvertError> {
    for file in plan.files() {
        fs::write(&file.path, &file.content).map_err(|e| ConvertError::io(&file.path, e))?;
        info!(path = %file.path.display(), "wrote page");
    }
    Ok(())
}

/// Upper-case the first character only.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
