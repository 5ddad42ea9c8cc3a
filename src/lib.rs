//! # pkgcatalog - package catalog maintenance for static sites
//!
//! `pkgcatalog` keeps the package pages of a Hugo site (one Markdown file
//! with YAML frontmatter per package) in sync with their GitHub repositories.
//!
//! ## Quick Start
//!
//! ```bash
//! # Add a package (repository defaults to https://github.com/<default_owner>/<name>)
//! pkgcatalog add freecal
//!
//! # Add with an explicit import path and repository
//! pkgcatalog add tools --import-path go.ngs.io/tools --repo https://github.com/ngs/tools
//!
//! # Refresh every package, or only some
//! pkgcatalog update
//! pkgcatalog update freecal servedir
//!
//! # Preview changes
//! pkgcatalog update --dry-run
//! ```
//!
//! ## Configuration
//!
//! Settings are read from `~/.config/pkgcatalog/config.toml`:
//!
//! ```toml
//! [site]
//! content_dir = "content"
//! import_prefix = "go.ngs.io"
//!
//! [github]
//! token_env = "GITHUB_TOKEN"
//!
//! [build]
//! command = "hugo"
//! args = ["--gc", "--minify"]
//! ```

/// Package records and their frontmatter files.
pub mod catalog;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// File system utilities.
pub mod fs;

/// GitHub URL parsing and API client.
pub mod github;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// External site builder used to validate changes.
pub mod site;

/// Adding and updating catalog entries.
pub mod sync;

/// Terminal UI components (spinner, colors).
pub mod ui;
