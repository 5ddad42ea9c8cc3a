use anyhow::Result;
use std::path::PathBuf;

use super::load_config;
use crate::config::ResolveOptions;
use crate::github::GitHubClient;
use crate::sync::{UpdateOptions, update_packages};

pub struct UpdateCommandOptions {
    pub config: Option<PathBuf>,
    pub resolve: ResolveOptions,
    /// Packages to update; empty means all.
    pub names: Vec<String>,
    pub update: UpdateOptions,
}

/// Refreshes package metadata and fails if any package could not be updated.
pub async fn run_update(options: UpdateCommandOptions) -> Result<()> {
    let config = load_config(options.config.as_deref(), &options.resolve)?;
    let client = GitHubClient::new(&config.api_url, config.token.clone())?;

    crate::status!("Updating packages from GitHub...");
    if options.update.dry_run {
        crate::status!("(DRY RUN - no changes will be made)");
    }
    crate::status!();

    let report = update_packages(
        &client,
        &config.content_dir,
        &options.names,
        &options.update,
        config.builder.as_ref(),
    )
    .await?;

    report.into_result()?;
    Ok(())
}
