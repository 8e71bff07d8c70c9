//! HTTP client for the Notion blocks API.

use std::env;
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use super::NotionError;
use super::types::{ApiErrorBody, Block, BlockList};

/// User agent string identifying this exporter.
const USER_AGENT: &str = concat!("mdqmd/", env!("CARGO_PKG_VERSION"));

const HTTP_TIMEOUT_SECS: u64 = 30;

/// Largest page size the API accepts.
const PAGE_SIZE: u32 = 100;

/// Anything that can list the children of a block.
pub trait PageSource {
    /// Direct children of `block_id`, in order, without their own children.
    fn children(&self, block_id: &str) -> Result<Vec<Block>, NotionError>;
}

/// Fetch the children of `block_id` and, recursively, of every child that
/// has inline children.
pub fn fetch_tree(
    source: &dyn PageSource,
    block_id: &str,
) -> Result<Vec<Block>, NotionError> {
    let mut blocks = source.children(block_id)?;
    for block in &mut blocks {
        if block.holds_inline_children() {
            let from = block.children_source().to_string();
            block.children = fetch_tree(source, &from)?;
        }
    }
    Ok(blocks)
}

/// Blocking client authenticated with an integration token.
pub struct NotionClient {
    client: Client,
    api_base: String,
    version: String,
    token: String,
}

impl NotionClient {
    pub fn new(token: String, api_base: &str, version: &str) -> Result<Self, NotionError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            version: version.to_string(),
            token,
        })
    }

    /// Build a client with the token read from the environment variable
    /// `token_env`.
    pub fn from_env(
        token_env: &str,
        api_base: &str,
        version: &str,
    ) -> Result<Self, NotionError> {
        let token = env::var(token_env)
            .ok()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| NotionError::MissingToken(token_env.to_string()))?;
        Self::new(token, api_base, version)
    }

    fn children_page(
        &self,
        block_id: &str,
        cursor: Option<&str>,
    ) -> Result<BlockList, NotionError> {
        let mut url =
            format!("{}/blocks/{}/children?page_size={}", self.api_base, block_id, PAGE_SIZE);
        if let Some(cursor) = cursor {
            url.push_str("&start_cursor=");
            url.push_str(cursor);
        }
        debug!(%url, "fetching block children");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .header("Notion-Version", &self.version)
            .send()?;

        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(api_error(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|e| NotionError::Malformed(e.to_string()))
    }
}

impl PageSource for NotionClient {
    fn children(&self, block_id: &str) -> Result<Vec<Block>, NotionError> {
        let mut blocks = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let page = self.children_page(block_id, cursor.as_deref())?;
            blocks.extend(page.results);

            match (page.has_more, page.next_cursor) {
                (true, Some(next)) => cursor = Some(next),
                _ => break,
            }
        }

        Ok(blocks)
    }
}

/// Turn a non-2xx response into an error, keeping the API's own message
/// when the body carries one.
fn api_error(status: u16, body: &str) -> NotionError {
    let message = match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(err) => match err.code {
            Some(code) => format!("{code}: {}", err.message),
            None => err.message,
        },
        Err(_) if body.trim().is_empty() => "empty response body".to_string(),
        Err(_) => body.trim().to_string(),
    };
    NotionError::Api { status, message }
}
