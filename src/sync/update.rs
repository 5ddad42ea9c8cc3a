use std::fmt;
use std::path::Path;

use crate::catalog::{PackageRecord, package_name, read_package, write_package};
use crate::github::{MetadataSource, RepoMeta, RepoRef};

/// Terminal outcome of syncing one package file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStatus {
    Updated,
    Skipped,
    Error,
    /// Repository gone upstream. Reported specially with `--update-missing`.
    Missing,
}

impl fmt::Display for UpdateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Updated => "updated",
            Self::Skipped => "skipped",
            Self::Error => "error",
            Self::Missing => "missing",
        };
        f.write_str(label)
    }
}

/// Result of syncing one package file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageUpdate {
    pub name: String,
    pub status: UpdateStatus,
    pub message: String,
}

impl PackageUpdate {
    fn new(name: &str, status: UpdateStatus, message: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            status,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateOptions {
    /// Report changes without writing them.
    pub dry_run: bool,
    /// Also overwrite `author` from the repository owner.
    pub update_author: bool,
    /// Report `Missing` outcomes as warnings instead of skips.
    pub update_missing: bool,
}

/// Copies remote repository attributes into `record`, returning the changed fields.
pub fn apply_repository(
    record: &mut PackageRecord,
    remote: &RepoMeta,
    update_author: bool,
) -> Vec<String> {
    let mut changes = Vec::new();

    if record.created_at != remote.created_at {
        record.created_at = remote.created_at;
        changes.push("created_at".to_string());
    }
    if record.updated_at != remote.updated_at {
        record.updated_at = remote.updated_at;
        changes.push("updated_at".to_string());
    }

    let description = remote.description();
    if record.description != description {
        record.description = description.to_string();
        changes.push(if description.is_empty() {
            "description cleared".to_string()
        } else {
            "description".to_string()
        });
    }

    if let Some(license) = remote.license_id()
        && record.license != license
    {
        record.license = license.to_string();
        changes.push("license".to_string());
    }

    if update_author {
        let author = remote.author();
        if record.author != author {
            record.author = author.to_string();
            changes.push("author".to_string());
        }
    }

    changes
}

/// Sets a newly discovered version, returning the change description.
///
/// An empty `version` means none was found and never clears the current one.
pub fn apply_version(record: &mut PackageRecord, version: &str) -> Option<String> {
    if version.is_empty() || record.version == version {
        return None;
    }

    let change = if record.version.is_empty() {
        format!("version: {version}")
    } else {
        format!("version: {} → {version}", record.version)
    };
    record.version = version.to_string();
    Some(change)
}

/// Refreshes the package file at `path` from `source`.
///
/// Never fails: every problem becomes an [`UpdateStatus::Error`] outcome so a
/// batch can carry on with the next file.
pub async fn process_package(
    source: &dyn MetadataSource,
    path: &Path,
    options: &UpdateOptions,
) -> PackageUpdate {
    let name = package_name(path);

    let mut record = match read_package(path) {
        Ok(record) => record,
        Err(e) => {
            return PackageUpdate::new(
                &name,
                UpdateStatus::Error,
                format!("failed to read package: {e}"),
            );
        }
    };

    if record.repo_url.is_empty() {
        return PackageUpdate::new(&name, UpdateStatus::Skipped, "no repository URL");
    }

    let repo = match RepoRef::parse(&record.repo_url) {
        Ok(repo) => repo,
        Err(e) => {
            return PackageUpdate::new(
                &name,
                UpdateStatus::Error,
                format!("invalid repository URL: {e}"),
            );
        }
    };

    // A vanished repository is an error whatever `update_missing` says.
    let remote = match source.fetch_repository(&repo).await {
        Ok(remote) => remote,
        Err(e) => {
            return PackageUpdate::new(
                &name,
                UpdateStatus::Error,
                format!("failed to fetch repository {}: {e}", record.repo_url),
            );
        }
    };

    let mut changes = apply_repository(&mut record, &remote, options.update_author);

    let version = source.fetch_latest_version(&repo).await;
    changes.extend(apply_version(&mut record, &version));

    if changes.is_empty() {
        return PackageUpdate::new(&name, UpdateStatus::Skipped, "already up to date");
    }

    if !options.dry_run
        && let Err(e) = write_package(path, &record)
    {
        return PackageUpdate::new(
            &name,
            UpdateStatus::Error,
            format!("failed to write package: {e}"),
        );
    }

    PackageUpdate::new(&name, UpdateStatus::Updated, changes.join(", "))
}
