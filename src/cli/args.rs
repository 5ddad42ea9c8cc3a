use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pkgcatalog")]
#[command(about = "Keep a static site's package catalog in sync with GitHub")]
#[command(version)]
pub struct Args {
    /// Config file (default: ~/.config/pkgcatalog/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding the package files
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub content_dir: Option<PathBuf>,

    /// Only print results and errors
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new package to the catalog
    Add {
        /// Package name, also the file name (<name>.md)
        name: String,

        /// Custom import path (default: <import_prefix>/<name>)
        #[arg(long)]
        import_path: Option<String>,

        /// GitHub repository URL (default: https://github.com/<default_owner>/<name>)
        #[arg(long = "repo", value_name = "URL")]
        repo: Option<String>,

        /// Package author name (default: repository owner)
        #[arg(long)]
        author: Option<String>,

        /// Store the repository README as the page body
        #[arg(long)]
        with_readme: bool,

        /// Skip site build validation
        #[arg(long)]
        no_build: bool,
    },
    /// Update package metadata from GitHub (all packages if none are named)
    Update {
        /// Package names to update
        names: Vec<String>,

        /// Show what would be updated without making changes
        #[arg(long)]
        dry_run: bool,

        /// Also update author information from GitHub
        #[arg(long)]
        update_author: bool,

        /// Report repositories that return 404 as warnings
        #[arg(long)]
        update_missing: bool,

        /// Skip site build validation
        #[arg(long)]
        no_build: bool,
    },
}
