//! Splitting a document into one page per section.

use std::path::Path;

use mdqmd_core::convert::split_file;
use tracing::error;

pub fn run(config: Option<&Path>, verbose: bool, input: &Path) {
    let rc = super::init(config, verbose);

    let plan = match split_file(input, &rc.split_options()) {
        Ok(plan) => plan,
        Err(e) => {
            error!(input = %input.display(), error = %e, kind = ?e.kind(), "split failed");
            println!("FAIL mdqmd split");
            eprintln!("Error: {e}");
            super::exit_failure();
        }
    };

    for section in &plan.sections {
        println!("Created: {}", section.path.display());
    }
    println!("Main file: {}", plan.main.path.display());
    println!("OK   mdqmd split");
}
