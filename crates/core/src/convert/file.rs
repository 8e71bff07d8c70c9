//! Single-file conversion: front-matter injection and page splitting.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::walker::MD_EXTENSION;
use crate::error::ConvertError;
use crate::frontmatter::{self, create_frontmatter};
use crate::split::{QMD_EXTENSION, SplitOptions, SplitPlan, plan_split, write_plan};

/// What happened to the front matter of a converted file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrontmatterStatus {
    /// No block was present; a default one was prepended.
    Added,
    /// An existing block was kept as is.
    Preserved { title: Option<String> },
}

/// Result of converting one `.md` file to `.qmd`.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub input: PathBuf,
    pub output: PathBuf,
    pub frontmatter: FrontmatterStatus,
}

/// Check that `path` exists and carries the `.md` extension.
pub fn ensure_markdown_input(path: &Path) -> Result<(), ConvertError> {
    if !path.exists() {
        return Err(ConvertError::NotFound(path.to_path_buf()));
    }
    if path.extension().and_then(|e| e.to_str()) != Some(MD_EXTENSION) {
        return Err(ConvertError::WrongExtension {
            path: path.to_path_buf(),
            expected: MD_EXTENSION,
        });
    }
    Ok(())
}

/// Sibling `.qmd` path for a markdown input.
pub fn qmd_path_for(path: &Path) -> PathBuf {
    path.with_extension(QMD_EXTENSION)
}

fn file_stem(path: &Path) -> String {
    path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default()
}

/// Convert `path` to its sibling `.qmd`, prepending front matter titled with
/// the file stem when the file has none.
pub fn convert_file(path: &Path, format: &str) -> Result<Conversion, ConvertError> {
    ensure_markdown_input(path)?;

    let content = fs::read_to_string(path).map_err(|e| ConvertError::io(path, e))?;
    let output = qmd_path_for(path);

    let (status, converted) = match frontmatter::parse(&content) {
        Ok(doc) if doc.frontmatter.is_some() => {
            let title =
                doc.frontmatter.as_ref().and_then(|fm| fm.title()).map(str::to_string);
            debug!(path = %path.display(), "existing front matter found, preserving it");
            (FrontmatterStatus::Preserved { title }, content)
        }
        Ok(_) => {
            debug!(path = %path.display(), "no front matter found, adding default header");
            let mut converted = create_frontmatter(&file_stem(path), format);
            converted.push_str(&content);
            (FrontmatterStatus::Added, converted)
        }
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "front matter is not valid YAML, preserving it"
            );
            (FrontmatterStatus::Preserved { title: None }, content)
        }
    };

    fs::write(&output, converted).map_err(|e| ConvertError::io(&output, e))?;
    info!(input = %path.display(), output = %output.display(), "converted");

    Ok(Conversion { input: path.to_path_buf(), output, frontmatter: status })
}

/// Split `path` into a main page and one page per `## ` section, written
/// next to the input.
pub fn split_file(path: &Path, options: &SplitOptions) -> Result<SplitPlan, ConvertError> {
    ensure_markdown_input(path)?;

    let content = fs::read_to_string(path).map_err(|e| ConvertError::io(path, e))?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));

    let plan = plan_split(&content, &file_stem(path), base_dir, options)?;
    write_plan(&plan)?;
    Ok(plan)
}
