use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::LevelFilter;

#[derive(Debug, Parser)]
#[command(name = "fileharvest")]
#[command(about = "Download documents, CAD models, archives and images linked from a listing page", long_about = None)]
pub struct Cli {
    /// RON configuration file; built-in defaults are used when omitted.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory under which the per-category folders are created.
    #[arg(long, global = true, value_name = "DIR")]
    pub output_root: Option<PathBuf>,

    /// Listing page to scrape.
    #[arg(long, global = true, value_name = "URL")]
    pub source_url: Option<String>,

    /// Prefix for links that carry no host.
    #[arg(long, global = true, value_name = "URL")]
    pub base_domain: Option<String>,

    /// Also append log output to this file.
    #[arg(long, global = true, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    #[arg(long, global = true, default_value = "info", value_name = "LEVEL")]
    pub log_level: LevelFilter,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Scrape the listing page and download every matching file (default).
    Scrape {
        /// Audit the document folder once the downloads are done.
        #[arg(long)]
        audit: bool,
    },

    /// Check downloaded PDFs and delete the ones that cannot be opened.
    Audit {
        /// Folder to audit; defaults to the configured document folder.
        dir: Option<PathBuf>,
    },

    /// Print the effective configuration as RON.
    PrintConfig,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Scrape { audit: false })
    }
}
