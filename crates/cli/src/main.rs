mod cmd;
mod logging;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "mdqmd", version, about = "Convert Markdown notes into Quarto pages")]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Convert a .md file, or every .md file in a directory, to .qmd
    Convert(ConvertArgs),

    /// Convert one .md file to .qmd
    Single {
        /// Markdown file to convert
        input: PathBuf,
    },

    /// Split a .md file into one .qmd page per `## ` section
    Split {
        /// Markdown file to split
        input: PathBuf,
    },

    /// Export a Notion page to a Markdown file
    Notion(NotionArgs),

    /// Validate configuration and print resolved settings
    Doctor,
}

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// File or directory to convert
    pub path: PathBuf,

    /// Descend into subdirectories
    #[arg(short, long)]
    pub recursive: bool,
}

#[derive(Debug, Args)]
pub struct NotionArgs {
    /// Page id, dashed UUID or page URL
    pub page_id: String,

    /// Output file name (".md" is appended when missing)
    #[arg(long)]
    pub name: Option<String>,

    /// Directory to write into (defaults to [notion].output_dir)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Doctor => cmd::doctor::run(config, cli.verbose),
        Commands::Convert(args) => cmd::convert::run(config, cli.verbose, &args),
        Commands::Single { input } => cmd::single::run(config, cli.verbose, &input),
        Commands::Split { input } => cmd::split::run(config, cli.verbose, &input),
        Commands::Notion(args) => cmd::notion::run(config, cli.verbose, &args),
    }

    logging::flush();
}
