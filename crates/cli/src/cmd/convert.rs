//! Batch conversion of a file or directory.

use std::path::Path;

use mdqmd_core::convert::{BatchEntry, BatchReport, FrontmatterStatus, convert_path};
use tabled::{Table, Tabled, settings::Style};
use tracing::error;

use crate::ConvertArgs;

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Output")]
    output: String,
}

impl From<&BatchEntry> for EntryRow {
    fn from(entry: &BatchEntry) -> Self {
        match entry {
            BatchEntry::Converted(c) => Self {
                file: c.input.display().to_string(),
                status: match &c.frontmatter {
                    FrontmatterStatus::Added => "converted",
                    FrontmatterStatus::Preserved { .. } => "converted (front matter kept)",
                }
                .to_string(),
                output: c.output.display().to_string(),
            },
            BatchEntry::Skipped(path) => Self {
                file: path.display().to_string(),
                status: "skipped".to_string(),
                output: String::new(),
            },
            BatchEntry::Failed { path, error } => Self {
                file: path.display().to_string(),
                status: format!("failed: {error}"),
                output: String::new(),
            },
        }
    }
}

pub fn run(config: Option<&Path>, verbose: bool, args: &ConvertArgs) {
    let rc = super::init(config, verbose);
    let options = rc.batch_options(args.recursive);

    match convert_path(&args.path, &options) {
        Ok(report) => print_report(&report),
        Err(e) => {
            error!(path = %args.path.display(), error = %e, "conversion aborted");
            println!("FAIL mdqmd convert");
            eprintln!("Error: {e}");
            super::exit_failure();
        }
    }
}

fn print_report(report: &BatchReport) {
    if report.entries.is_empty() {
        println!("(no Markdown files found)");
    } else {
        let rows: Vec<EntryRow> = report.entries.iter().map(EntryRow::from).collect();
        println!("{}", Table::new(&rows).with(Style::rounded()));
    }

    println!(
        "Converted: {}  Skipped: {}  Failed: {}",
        report.converted(),
        report.skipped(),
        report.failed()
    );
    println!("OK   mdqmd convert");
}
