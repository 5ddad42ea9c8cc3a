use anyhow::Result;
use std::path::PathBuf;

use super::load_config;
use crate::config::ResolveOptions;
use crate::github::GitHubClient;
use crate::sync::{AddRequest, AddedPackage, add_package};
use crate::ui::{Spinner, Style};

pub struct AddOptions {
    pub config: Option<PathBuf>,
    pub resolve: ResolveOptions,
    pub request: AddRequest,
}

pub async fn run_add(options: AddOptions) -> Result<()> {
    let config = load_config(options.config.as_deref(), &options.resolve)?;
    let client = GitHubClient::new(&config.api_url, config.token.clone())?;

    crate::status!("Adding package '{}'...", options.request.name.trim());

    let spinner = Spinner::new("Fetching repository metadata from GitHub...");
    let result = add_package(&client, &options.request, &config).await;
    spinner.stop();
    let added = result?;

    for warning in &added.warnings {
        crate::warn!("{} {warning}", Style::warning("Warning:"));
    }
    if !added.record.version.is_empty() {
        crate::info!("Found version: {}", added.record.version);
    }
    println!(
        "{} Created {}",
        Style::success("✓"),
        added.path.display()
    );

    if let Some(builder) = &config.builder {
        builder.validate().await;
    }

    print_summary(&added);
    Ok(())
}

fn print_summary(added: &AddedPackage) {
    let record = &added.record;
    let path = added.path.display();

    println!();
    println!("{}", Style::header("=== Package Added Successfully ==="));
    println!("{} {}", Style::label("Name:"), Style::value(&record.title));
    println!("{} {}", Style::label("Import Path:"), record.import_path);
    println!("{} {}", Style::label("Repository:"), record.repo_url);
    if !record.version.is_empty() {
        println!("{} {}", Style::label("Version:"), record.version);
    }
    if !record.description.is_empty() {
        println!("{} {}", Style::label("Description:"), record.description);
    }

    println!();
    println!("{}", Style::header("Next steps:"));
    println!("1. Review the generated file: {path}");
    println!(
        "2. Commit the changes: git add {path} && git commit -m \"Add {} package\"",
        record.title
    );
    println!("3. Push to deploy: git push");
}
