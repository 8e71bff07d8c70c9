//! Markdown to Quarto conversion of single files and directory trees.

pub mod batch;
pub mod file;
pub mod walker;

pub use batch::{BatchEntry, BatchOptions, BatchReport, convert_path};
pub use file::{
    Conversion, FrontmatterStatus, convert_file, ensure_markdown_input, qmd_path_for,
    split_file,
};
pub use walker::{MD_EXTENSION, MarkdownWalker, WalkedEntry};
