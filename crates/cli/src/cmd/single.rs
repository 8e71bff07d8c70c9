//! Single-file conversion.

use std::path::Path;

use mdqmd_core::convert::{FrontmatterStatus, convert_file};
use tracing::error;

pub fn run(config: Option<&Path>, verbose: bool, input: &Path) {
    let rc = super::init(config, verbose);

    match convert_file(input, &rc.format) {
        Ok(conversion) => {
            if let FrontmatterStatus::Preserved { title } = &conversion.frontmatter {
                println!(
                    "Front matter kept (title: {})",
                    title.as_deref().unwrap_or("<none>")
                );
            }
            println!("Created: {}", conversion.output.display());
            println!("OK   mdqmd single");
        }
        Err(e) => {
            error!(input = %input.display(), error = %e, "conversion failed");
            println!("FAIL mdqmd single");
            eprintln!("Error: {e}");
            super::exit_failure();
        }
    }
}
