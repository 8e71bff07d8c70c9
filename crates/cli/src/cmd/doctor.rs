use mdqmd_core::config::{ConfigLoader, default_config_path};
use std::env;
use std::path::Path;

use crate::logging;

pub fn run(config: Option<&Path>, verbose: bool) {
    match ConfigLoader::load(config) {
        Ok(rc) => {
            logging::init(&rc, verbose);

            println!("OK   mdqmd doctor");
            println!(
                "path: {}",
                rc.source.as_ref().map_or_else(
                    || {
                        format!(
                            "{} (not found, using defaults)",
                            default_config_path().display()
                        )
                    },
                    |p| p.display().to_string()
                )
            );
            println!("logging.level: {}", rc.logging.level);
            if let Some(file) = &rc.logging.file {
                println!("logging.file: {}", file.display());
            }
            println!("output.format: {}", rc.format);
            println!("output.related_heading: {}", rc.related_heading);
            println!("output.collision: {}", rc.collision.as_str());
            for folder in &rc.excluded_folders {
                println!("output.excluded_folder: {}", folder.display());
            }
            println!("notion.api_base: {}", rc.notion.api_base);
            println!("notion.version: {}", rc.notion.version);
            println!("notion.output_dir: {}", rc.notion.output_dir.display());

            let token_set =
                env::var(&rc.notion.token_env).is_ok_and(|t| !t.trim().is_empty());
            println!(
                "notion.token_env: {} ({})",
                rc.notion.token_env,
                if token_set { "set" } else { "not set" }
            );
        }
        Err(e) => {
            println!("FAIL mdqmd doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            super::exit_failure();
        }
    }
}
