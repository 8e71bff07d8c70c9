//! Batch conversion of a file or directory tree.

use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use super::file::{Conversion, convert_file};
use super::walker::{MD_EXTENSION, MarkdownWalker, WalkedEntry};
use crate::error::ConvertError;
use crate::frontmatter::DEFAULT_FORMAT;
use crate::split::QMD_EXTENSION;

/// Settings for [`convert_path`].
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub recursive: bool,
    pub format: String,
    pub excluded_folders: Vec<PathBuf>,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            recursive: false,
            format: DEFAULT_FORMAT.to_string(),
            excluded_folders: Vec::new(),
        }
    }
}

/// Outcome for one file of a batch.
#[derive(Debug)]
pub enum BatchEntry {
    Converted(Conversion),
    /// Already a `.qmd` file.
    Skipped(PathBuf),
    Failed { path: PathBuf, error: ConvertError },
}

/// Everything a batch run did, in processing order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub entries: Vec<BatchEntry>,
}

impl BatchReport {
    pub fn converted(&self) -> usize {
        self.entries.iter().filter(|e| matches!(e, BatchEntry::Converted(_))).count()
    }

    pub fn skipped(&self) -> usize {
        self.entries.iter().filter(|e| matches!(e, BatchEntry::Skipped(_))).count()
    }

    pub fn failed(&self) -> usize {
        self.entries.iter().filter(|e| matches!(e, BatchEntry::Failed { .. })).count()
    }

    fn push_conversion(&mut self, path: PathBuf, format: &str) {
        match convert_file(&path, format) {
            Ok(conversion) => self.entries.push(BatchEntry::Converted(conversion)),
            Err(error) => {
                error!(path = %path.display(), error = %error, "conversion failed");
                self.entries.push(BatchEntry::Failed { path, error });
            }
        }
    }

    fn push_skip(&mut self, path: PathBuf) {
        info!(path = %path.display(), "skipping, already a .qmd file");
        self.entries.push(BatchEntry::Skipped(path));
    }
}

/// Convert a single file, or every `.md` file in a directory.
///
/// Errors for individual files are recorded in the report and do not stop
/// the batch. Only a missing `path`, or a file `path` that is neither `.md`
/// nor `.qmd`, fails the whole call.
pub fn convert_path(
    path: &Path,
    options: &BatchOptions,
) -> Result<BatchReport, ConvertError> {
    if !path.exists() {
        return Err(ConvertError::NotFound(path.to_path_buf()));
    }

    let mut report = BatchReport::default();

    if path.is_file() {
        match path.extension().and_then(|e| e.to_str()) {
            Some(QMD_EXTENSION) => report.push_skip(path.to_path_buf()),
            Some(MD_EXTENSION) => report.push_conversion(path.to_path_buf(), &options.format),
            _ => {
                return Err(ConvertError::WrongExtension {
                    path: path.to_path_buf(),
                    expected: MD_EXTENSION,
                });
            }
        }
        return Ok(report);
    }

    let walker = MarkdownWalker::with_exclusions(
        path,
        options.recursive,
        options.excluded_folders.clone(),
    );
    for entry in walker.walk() {
        match entry {
            WalkedEntry::Markdown(file) => report.push_conversion(file, &options.format),
            WalkedEntry::Quarto(file) => report.push_skip(file),
            WalkedEntry::Unreadable { path, error } => {
                warn!(path = %path.display(), error = %error, "cannot read directory entry");
                let error = ConvertError::io(&path, error.into());
                report.entries.push(BatchEntry::Failed { path, error });
            }
        }
    }

    Ok(report)
}
