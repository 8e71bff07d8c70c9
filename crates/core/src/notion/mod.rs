//! Exporting Notion pages to Markdown.

pub mod client;
pub mod export;
pub mod render;
pub mod types;

pub use client::{NotionClient, PageSource, fetch_tree};
pub use export::{default_export_name, export_file_name, export_page, normalize_page_id};
pub use render::{render_blocks, render_rich_text};
pub use types::Block;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotionError {
    #[error("environment variable {0} holding the Notion token is not set")]
    MissingToken(String),

    #[error("'{0}' is not a Notion page id or URL")]
    InvalidPageId(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Notion API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("malformed response: {0}")]
    Malformed(String),
}
