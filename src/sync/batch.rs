use std::path::{Path, PathBuf};

use thiserror::Error;

use super::update::{PackageUpdate, UpdateOptions, UpdateStatus, process_package};
use crate::catalog::{ListError, list_packages, package_name};
use crate::github::MetadataSource;
use crate::site::{BuildOutcome, SiteBuilder};
use crate::ui::Style;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("failed to list packages: {0}")]
    List(#[from] ListError),
    #[error("no matching packages found")]
    NoMatchingPackages,
    #[error("{0} packages failed to update")]
    PackagesFailed(usize),
}

/// Outcome of a batch update.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub results: Vec<PackageUpdate>,
    pub updated: usize,
    pub skipped: usize,
    pub errors: usize,
    /// Site validation result, if the builder ran.
    pub build: Option<BuildOutcome>,
}

impl BatchReport {
    fn record(&mut self, result: PackageUpdate, update_missing: bool) {
        match result.status {
            UpdateStatus::Updated => self.updated += 1,
            UpdateStatus::Skipped => self.skipped += 1,
            UpdateStatus::Error => self.errors += 1,
            UpdateStatus::Missing if update_missing => self.updated += 1,
            UpdateStatus::Missing => self.skipped += 1,
        }
        self.results.push(result);
    }

    /// `Summary: 2 updated, 1 skipped, 1 errors`; zero skip/error counts are left out.
    pub fn summary(&self) -> String {
        let mut summary = format!("Summary: {} updated", self.updated);
        if self.skipped > 0 {
            summary.push_str(&format!(", {} skipped", self.skipped));
        }
        if self.errors > 0 {
            summary.push_str(&format!(", {} errors", self.errors));
        }
        summary
    }

    /// Fails if any package ended in an error.
    pub fn into_result(self) -> Result<Self, SyncError> {
        if self.errors > 0 {
            return Err(SyncError::PackagesFailed(self.errors));
        }
        Ok(self)
    }
}

/// Keeps the files whose package name is in `names`; all files if `names` is empty.
pub fn select_packages(files: Vec<PathBuf>, names: &[String]) -> Vec<PathBuf> {
    if names.is_empty() {
        return files;
    }

    files
        .into_iter()
        .filter(|file| {
            let name = package_name(file);
            names.iter().any(|requested| *requested == name)
        })
        .collect()
}

/// Line printed for one package outcome.
pub fn format_result(result: &PackageUpdate, update_missing: bool) -> String {
    let marker = match result.status {
        UpdateStatus::Updated => Style::success("✓"),
        UpdateStatus::Skipped => Style::hint("○"),
        UpdateStatus::Error => Style::error("✗"),
        UpdateStatus::Missing if update_missing => Style::warning("⚠"),
        UpdateStatus::Missing => Style::hint("○"),
    };
    format!("{marker} {} - {}", result.name, result.message)
}

/// Refreshes the packages named in `names` (all packages if empty) in `content_dir`.
///
/// Files are processed one after another and each outcome is printed as soon
/// as it is known. A failing package does not stop the batch. When something
/// changed outside a dry run, `builder` validates the site; a failed build is
/// only a warning.
///
/// Returns the report even when some packages failed; use
/// [`BatchReport::into_result`] to turn failures into an error.
pub async fn update_packages(
    source: &dyn MetadataSource,
    content_dir: &Path,
    names: &[String],
    options: &UpdateOptions,
    builder: Option<&SiteBuilder>,
) -> Result<BatchReport, SyncError> {
    let files = select_packages(list_packages(content_dir)?, names);
    if !names.is_empty() && files.is_empty() {
        return Err(SyncError::NoMatchingPackages);
    }

    let mut report = BatchReport::default();
    for file in &files {
        let result = process_package(source, file, options).await;
        println!("{}", format_result(&result, options.update_missing));
        report.record(result, options.update_missing);
    }

    if !options.dry_run
        && report.updated > 0
        && let Some(builder) = builder
    {
        println!();
        report.build = Some(builder.validate().await);
    }

    println!();
    println!("{}", report.summary());

    Ok(report)
}
