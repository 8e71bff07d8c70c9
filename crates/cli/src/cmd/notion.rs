//! Notion page export.

use std::path::Path;

use chrono::Local;
use mdqmd_core::ConvertError;
use mdqmd_core::config::ResolvedConfig;
use mdqmd_core::notion::{
    NotionClient, default_export_name, export_file_name, export_page, normalize_page_id,
};
use tracing::error;

use crate::NotionArgs;

pub fn run(config: Option<&Path>, verbose: bool, args: &NotionArgs) {
    let rc = super::init(config, verbose);

    match export(&rc, args) {
        Ok(path) => {
            println!("Page exported to {}", path.display());
            println!("OK   mdqmd notion");
        }
        Err(e) => {
            error!(page = %args.page_id, error = %e, "notion export failed");
            println!("FAIL mdqmd notion");
            eprintln!("Error: {e}");
            super::exit_failure();
        }
    }
}

fn export(
    rc: &ResolvedConfig,
    args: &NotionArgs,
) -> Result<std::path::PathBuf, ConvertError> {
    let page_id = normalize_page_id(&args.page_id)?;
    let notion = &rc.notion;
    let client =
        NotionClient::from_env(&notion.token_env, &notion.api_base, &notion.version)?;

    let file_name = match args.name.as_deref() {
        Some(name) => export_file_name(name),
        None => default_export_name(&page_id, Local::now()),
    };
    let dir = args.output_dir.as_deref().unwrap_or(&notion.output_dir);

    export_page(&client, &page_id, &dir.join(file_name))
}
