//! Notion API response shapes.

use serde::Deserialize;
use serde_json::{Map, Value};

use super::NotionError;

/// One page of `GET /blocks/{id}/children`.
#[derive(Debug, Deserialize)]
pub struct BlockList {
    pub results: Vec<Block>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// A Notion block. The type-specific payload sits under a key named after
/// the block type and is decoded on demand by [`Block::content`].
#[derive(Debug, Clone, Deserialize)]
pub struct Block {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub has_children: bool,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
    /// Filled in by the fetcher for blocks with `has_children`.
    #[serde(skip)]
    pub children: Vec<Block>,
}

impl Block {
    /// Decode the payload stored under this block's type key.
    pub fn content(&self) -> Result<BlockContent, NotionError> {
        let raw = self.payload.get(&self.kind).cloned().unwrap_or(Value::Object(Map::new()));
        serde_json::from_value(raw).map_err(|e| {
            NotionError::Malformed(format!("{} block {}: {e}", self.kind, self.id))
        })
    }

    /// Child pages and databases hold their own content, not inline children.
    pub fn holds_inline_children(&self) -> bool {
        self.has_children && !matches!(self.kind.as_str(), "child_page" | "child_database")
    }

    /// Block whose children hold this block's content. A synced block that
    /// mirrors another one lists the original's children.
    pub fn children_source(&self) -> &str {
        self.payload
            .get("synced_block")
            .and_then(|v| v.get("synced_from"))
            .and_then(|v| v.get("block_id"))
            .and_then(Value::as_str)
            .unwrap_or(&self.id)
    }
}

/// Union of the payload fields the renderer understands.
#[derive(Debug, Default, Deserialize)]
pub struct BlockContent {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
    #[serde(default)]
    pub checked: Option<bool>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub caption: Vec<RichText>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub expression: Option<String>,
    #[serde(default)]
    pub external: Option<FileRef>,
    #[serde(default)]
    pub file: Option<FileRef>,
    /// Cells of a `table_row`, one rich-text run per column.
    #[serde(default)]
    pub cells: Vec<Vec<RichText>>,
}

impl BlockContent {
    /// URL of a hosted or external file payload.
    pub fn file_url(&self) -> Option<&str> {
        self.external.as_ref().or(self.file.as_ref()).map(|f| f.url.as_str())
    }
}

#[derive(Debug, Deserialize)]
pub struct FileRef {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RichText {
    #[serde(default)]
    pub plain_text: String,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub annotations: Annotations,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Annotations {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub strikethrough: bool,
    #[serde(default)]
    pub code: bool,
}

/// Error body returned by the API on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    pub message: String,
}
