//! Writing a fetched page to a local Markdown file.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use tracing::info;

use super::NotionError;
use super::client::{PageSource, fetch_tree};
use super::render::render_blocks;
use crate::error::ConvertError;

const ID_LEN: usize = 32;

/// Reduce a page URL, dashed UUID or bare id to its 32 hex digits.
pub fn normalize_page_id(input: &str) -> Result<String, NotionError> {
    let trimmed = input.trim();
    let without_query = trimmed.split(['?', '#']).next().unwrap_or_default();
    let last_segment =
        without_query.trim_end_matches('/').rsplit('/').next().unwrap_or_default();

    let compact: String = last_segment.chars().filter(|c| *c != '-').collect();
    if compact.len() < ID_LEN || !compact.is_ascii() {
        return Err(NotionError::InvalidPageId(input.to_string()));
    }

    let id = &compact[compact.len() - ID_LEN..];
    if !id.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(NotionError::InvalidPageId(input.to_string()));
    }
    Ok(id.to_ascii_lowercase())
}

/// `notion-<first 8 id digits>-<YYYYmmdd-HHMMSS>.md`
pub fn default_export_name<Tz: TimeZone>(page_id: &str, now: DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let prefix: String = page_id.chars().take(8).collect();
    format!("notion-{prefix}-{}.md", now.format("%Y%m%d-%H%M%S"))
}

/// Append `.md` to a caller-supplied name unless it already ends with it.
pub fn export_file_name(name: &str) -> String {
    if name.ends_with(".md") { name.to_string() } else { format!("{name}.md") }
}

/// Fetch `page_id`, render it and write it to `dest`.
///
/// Parent directories are created. An existing `dest` is never overwritten.
pub fn export_page(
    source: &dyn PageSource,
    page_id: &str,
    dest: &Path,
) -> Result<PathBuf, ConvertError> {
    let blocks = fetch_tree(source, page_id)?;
    let mut markdown = render_blocks(&blocks)?;
    if !markdown.is_empty() {
        markdown.push('\n');
    }

    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ConvertError::io(parent, e))?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(dest)
        .map_err(|e| ConvertError::io(dest, e))?;
    file.write_all(markdown.as_bytes()).map_err(|e| ConvertError::io(dest, e))?;

    info!(
        page = page_id,
        path = %dest.display(),
        blocks = blocks.len(),
        "exported notion page"
    );
    Ok(dest.to_path_buf())
}
