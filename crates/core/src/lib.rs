//! Core library for mdqmd.
//!
//! Pure text transformations (slug derivation, front-matter handling, section
//! splitting) plus the file-level converters and the Notion exporter built
//! on top of them.

pub mod config;
pub mod convert;
pub mod error;
pub mod frontmatter;
pub mod notion;
pub mod slug;
pub mod split;

pub use error::{ConvertError, ErrorKind};
