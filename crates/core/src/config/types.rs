use std::path::PathBuf;

use serde::Deserialize;

use crate::convert::BatchOptions;
use crate::frontmatter::DEFAULT_FORMAT;
use crate::slug::CollisionPolicy;
use crate::split::{DEFAULT_RELATED_HEADING, SplitOptions};

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub notion: NotionConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    /// Value of the `format` field in generated front matter.
    #[serde(default = "default_format")]
    pub format: String,
    /// Heading of the link block appended to split main pages.
    #[serde(default = "default_related_heading")]
    pub related_heading: String,
    #[serde(default)]
    pub collision: CollisionPolicy,
    /// Folders the batch converter does not descend into (relative to the
    /// converted directory, or absolute).
    #[serde(default)]
    pub excluded_folders: Vec<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            related_heading: default_related_heading(),
            collision: CollisionPolicy::default(),
            excluded_folders: Vec::new(),
        }
    }
}

fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}

fn default_related_heading() -> String {
    DEFAULT_RELATED_HEADING.to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Settings for the Notion page exporter.
#[derive(Debug, Deserialize, Clone)]
pub struct NotionConfig {
    /// Name of the environment variable holding the integration token.
    #[serde(default = "default_token_env")]
    pub token_env: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Value of the `Notion-Version` header.
    #[serde(default = "default_notion_version")]
    pub version: String,
    /// Directory exported pages are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            token_env: default_token_env(),
            api_base: default_api_base(),
            version: default_notion_version(),
            output_dir: default_output_dir(),
        }
    }
}

fn default_token_env() -> String {
    "NOTION_TOKEN".to_string()
}

fn default_api_base() -> String {
    "https://api.notion.com/v1".to_string()
}

fn default_notion_version() -> String {
    "2022-06-28".to_string()
}

fn default_output_dir() -> String {
    ".".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedNotion {
    pub token_env: String,
    pub api_base: String,
    pub version: String,
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// File the settings came from; `None` when running on defaults.
    pub source: Option<PathBuf>,
    pub format: String,
    pub related_heading: String,
    pub collision: CollisionPolicy,
    /// Batch exclusions with `~` and variables expanded.
    pub excluded_folders: Vec<PathBuf>,
    pub logging: LoggingConfig,
    pub notion: ResolvedNotion,
}

impl ResolvedConfig {
    pub fn split_options(&self) -> SplitOptions {
        SplitOptions {
            format: self.format.clone(),
            related_heading: self.related_heading.clone(),
            collision: self.collision,
        }
    }

    pub fn batch_options(&self, recursive: bool) -> BatchOptions {
        BatchOptions {
            recursive,
            format: self.format.clone(),
            excluded_folders: self.excluded_folders.clone(),
        }
    }
}
