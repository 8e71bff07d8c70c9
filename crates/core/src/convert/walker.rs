//! Directory walker for batch conversion.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::split::QMD_EXTENSION;

/// Extension of convertible inputs.
pub const MD_EXTENSION: &str = "md";

/// A file the walker found worth reporting.
#[derive(Debug)]
pub enum WalkedEntry {
    /// A `.md` file to convert.
    Markdown(PathBuf),
    /// A `.qmd` file, already converted.
    Quarto(PathBuf),
    /// A directory entry that could not be read.
    Unreadable { path: PathBuf, error: walkdir::Error },
}

/// Walker for discovering markdown files under a directory.
#[derive(Debug)]
pub struct MarkdownWalker {
    root: PathBuf,
    recursive: bool,
    /// Folders not to descend into (relative to root).
    excluded_folders: Vec<PathBuf>,
}

impl MarkdownWalker {
    pub fn new(root: &Path, recursive: bool) -> Self {
        Self::with_exclusions(root, recursive, Vec::new())
    }

    /// Create a walker with folder exclusions.
    ///
    /// Excluded folders can be specified as:
    /// - Relative paths from the root (e.g., "drafts/old")
    /// - Absolute paths (will be converted to relative)
    ///
    /// Absolute paths are compared against the canonical root, so a relative
    /// or symlinked `root` still matches them.
    pub fn with_exclusions(
        root: &Path,
        recursive: bool,
        excluded_folders: Vec<PathBuf>,
    ) -> Self {
        let canonical_root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
        let excluded_folders = excluded_folders
            .into_iter()
            .map(|p| if p.is_absolute() { relative_to(&canonical_root, p) } else { p })
            .collect();

        Self { root: root.to_path_buf(), recursive, excluded_folders }
    }

    /// Walk depth-first in file-name order.
    ///
    /// Files with other extensions are not reported. Unreadable entries are
    /// reported and the walk continues past them.
    pub fn walk(&self) -> Vec<WalkedEntry> {
        let max_depth = if self.recursive { usize::MAX } else { 1 };
        let mut entries = Vec::new();

        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(max_depth)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !self.is_excluded(e))
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(error) => {
                    let path = error.path().unwrap_or(&self.root).to_path_buf();
                    entries.push(WalkedEntry::Unreadable { path, error });
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.into_path();
            match path.extension().and_then(|e| e.to_str()) {
                Some(MD_EXTENSION) => entries.push(WalkedEntry::Markdown(path)),
                Some(QMD_EXTENSION) => entries.push(WalkedEntry::Quarto(path)),
                _ => {}
            }
        }

        entries
    }

    /// Check if an entry should be excluded from walking.
    fn is_excluded(&self, entry: &walkdir::DirEntry) -> bool {
        if self.excluded_folders.is_empty() || !entry.file_type().is_dir() {
            return false;
        }

        entry
            .path()
            .strip_prefix(&self.root)
            .is_ok_and(|relative| {
                self.excluded_folders.iter().any(|ex| relative.starts_with(ex))
            })
    }
}

/// `path` relative to `root` when it lies inside it, otherwise unchanged.
fn relative_to(root: &Path, path: PathBuf) -> PathBuf {
    let path = path.canonicalize().unwrap_or(path);
    match path.strip_prefix(root) {
        Ok(relative) => relative.to_path_buf(),
        Err(_) => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();

        fs::write(root.join("b.md"), "# B").unwrap();
        fs::write(root.join("a.md"), "# A").unwrap();
        fs::write(root.join("done.qmd"), "# Done").unwrap();
        fs::write(root.join("readme.txt"), "Not markdown").unwrap();

        fs::create_dir(root.join("sub")).unwrap();
        fs::write(root.join("sub/c.md"), "# C").unwrap();

        dir
    }

    fn names(entries: &[WalkedEntry], root: &Path) -> Vec<String> {
        entries
            .iter()
            .map(|e| match e {
                WalkedEntry::Markdown(p) | WalkedEntry::Quarto(p) => {
                    p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/")
                }
                WalkedEntry::Unreadable { path, .. } => format!("!{}", path.display()),
            })
            .collect()
    }

    #[test]
    fn non_recursive_stays_at_top_level() {
        let tree = create_test_tree();
        let entries = MarkdownWalker::new(tree.path(), false).walk();
        assert_eq!(names(&entries, tree.path()), ["a.md", "b.md", "done.qmd"]);
    }

    #[test]
    fn recursive_descends_in_name_order() {
        let tree = create_test_tree();
        let entries = MarkdownWalker::new(tree.path(), true).walk();
        assert_eq!(names(&entries, tree.path()), ["a.md", "b.md", "done.qmd", "sub/c.md"]);
    }

    #[test]
    fn classifies_quarto_files() {
        let tree = create_test_tree();
        let entries = MarkdownWalker::new(tree.path(), false).walk();
        assert!(matches!(&entries[2], WalkedEntry::Quarto(p) if p.ends_with("done.qmd")));
    }

    #[test]
    fn excluded_folders_are_not_descended() {
        let tree = create_test_tree();
        let root = tree.path();
        fs::create_dir_all(root.join("drafts/old")).unwrap();
        fs::write(root.join("drafts/keep.md"), "k").unwrap();
        fs::write(root.join("drafts/old/skip.md"), "s").unwrap();

        let walker =
            MarkdownWalker::with_exclusions(root, true, vec![PathBuf::from("drafts/old")]);
        let found = names(&walker.walk(), root);
        assert!(found.contains(&"drafts/keep.md".to_string()));
        assert!(!found.iter().any(|p| p.contains("skip")));

        let walker = MarkdownWalker::with_exclusions(root, true, vec![root.join("sub")]);
        let found = names(&walker.walk(), root);
        assert!(!found.iter().any(|p| p.starts_with("sub/")));
    }

    #[test]
    fn absolute_exclusion_matches_non_canonical_root() {
        let tree = create_test_tree();
        let base = tree.path();
        fs::create_dir_all(base.join("drafts")).unwrap();
        fs::write(base.join("drafts/wip.md"), "w").unwrap();

        // Same directory, spelled through a detour.
        let root = base.join("sub").join("..");
        let walker = MarkdownWalker::with_exclusions(&root, true, vec![base.join("drafts")]);
        let found = names(&walker.walk(), &root);
        assert!(found.contains(&"a.md".to_string()));
        assert!(!found.iter().any(|p| p.starts_with("drafts")), "found: {found:?}");
    }

    #[test]
    fn absolute_exclusion_outside_root_is_ignored() {
        let tree = create_test_tree();
        let elsewhere = TempDir::new().unwrap();

        let outside = vec![elsewhere.path().to_path_buf()];
        let walker = MarkdownWalker::with_exclusions(tree.path(), true, outside);
        let found = names(&walker.walk(), tree.path());
        assert_eq!(found, ["a.md", "b.md", "done.qmd", "sub/c.md"]);
    }
}
