use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::{FrontmatterError, PackageRecord, package_path, write_package};
use crate::config::ResolvedConfig;
use crate::github::{ClientError, MetadataSource, RepoRef, RepoUrlError};

#[derive(Debug, Error)]
pub enum AddError {
    #[error("package name is required")]
    MissingTitle,
    #[error("invalid package name '{0}': must be a plain file name")]
    InvalidTitle(String),
    #[error("invalid repository URL: {0}")]
    InvalidRepoUrl(#[from] RepoUrlError),
    #[error("package file already exists: {}", .0.display())]
    AlreadyExists(PathBuf),
    #[error("failed to fetch repository metadata from {url}: {source}")]
    FetchFailed {
        url: String,
        #[source]
        source: ClientError,
    },
    #[error("failed to write package file: {0}")]
    Write(#[from] FrontmatterError),
}

/// What to add. Empty optional strings count as not given.
#[derive(Debug, Clone, Default)]
pub struct AddRequest {
    pub name: String,
    pub import_path: Option<String>,
    pub repo_url: Option<String>,
    pub author: Option<String>,
    /// Seed the body with the repository README.
    pub with_readme: bool,
}

#[derive(Debug, Clone)]
pub struct AddedPackage {
    pub path: PathBuf,
    pub record: PackageRecord,
    /// Non-fatal problems (e.g. an unreadable README).
    pub warnings: Vec<String>,
}

fn given(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

/// Creates `<content_dir>/<name>.md` from the package's GitHub repository.
///
/// The repository must exist. Version and README are best effort.
pub async fn add_package(
    source: &dyn MetadataSource,
    request: &AddRequest,
    config: &ResolvedConfig,
) -> Result<AddedPackage, AddError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(AddError::MissingTitle);
    }
    if name.contains(['/', '\\']) || name.starts_with('.') {
        return Err(AddError::InvalidTitle(name.to_string()));
    }

    let import_path = given(request.import_path.as_ref()).map_or_else(
        || format!("{}/{name}", config.import_prefix.trim_end_matches('/')),
        str::to_string,
    );

    let (repo, repo_url) = match given(request.repo_url.as_ref()) {
        Some(url) => (RepoRef::parse(url)?, url.to_string()),
        None => {
            let repo = RepoRef::new(&config.default_owner, name);
            let url = repo.html_url();
            (repo, url)
        }
    };

    let path = package_path(&config.content_dir, name);
    if path.exists() {
        return Err(AddError::AlreadyExists(path));
    }

    let remote = source
        .fetch_repository(&repo)
        .await
        .map_err(|source| AddError::FetchFailed {
            url: repo_url.clone(),
            source,
        })?;

    let mut record = PackageRecord::new(name);
    record.documentation_url = format!(
        "{}/{import_path}",
        config.documentation_base.trim_end_matches('/')
    );
    record.import_path = import_path;
    record.repo_url = repo_url;
    record.description = remote.description().to_string();
    record.created_at = remote.created_at;
    record.updated_at = remote.updated_at;
    if let Some(license) = remote.license_id() {
        record.license = license.to_string();
    }
    record.author = given(request.author.as_ref())
        .unwrap_or_else(|| remote.author())
        .to_string();
    record.version = source.fetch_latest_version(&repo).await;

    let mut warnings = Vec::new();
    if request.with_readme {
        match source.fetch_readme(&repo).await {
            Ok(readme) => record.body = readme,
            Err(e) => warnings.push(format!("Could not fetch README: {e}")),
        }
    }

    write_package(&path, &record)?;

    Ok(AddedPackage {
        path,
        record,
        warnings,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::read_package;
    use crate::sync::fake::{FakeSource, repo_meta};
    use tempfile::TempDir;

    fn config(dir: &TempDir) -> ResolvedConfig {
        ResolvedConfig {
            content_dir: dir.path().join("content"),
            import_prefix: "go.ngs.io".to_string(),
            default_owner: "ngs".to_string(),
            documentation_base: "https://pkg.go.dev/".to_string(),
            api_url: "http://localhost".to_string(),
            token: None,
            builder: None,
        }
    }

    fn request(name: &str) -> AddRequest {
        AddRequest {
            name: name.to_string(),
            ..AddRequest::default()
        }
    }

    fn source() -> FakeSource {
        FakeSource::default()
            .with_repo("ngs/freecal", repo_meta("Find free time"))
            .with_version("ngs/freecal", "v0.3.1")
            .with_readme("ngs/freecal", "# freecal\n")
    }

    #[tokio::test]
    async fn test_add_with_defaults() {
        let dir = TempDir::new().unwrap();

        let added = add_package(&source(), &request("freecal"), &config(&dir))
            .await
            .unwrap();

        assert_eq!(added.path, dir.path().join("content").join("freecal.md"));
        let record = read_package(&added.path).unwrap();
        assert_eq!(record, added.record);
        assert_eq!(record.title, "freecal");
        assert_eq!(record.import_path, "go.ngs.io/freecal");
        assert_eq!(record.repo_url, "https://github.com/ngs/freecal");
        assert_eq!(
            record.documentation_url,
            "https://pkg.go.dev/go.ngs.io/freecal"
        );
        assert_eq!(record.description, "Find free time");
        assert_eq!(record.license, "MIT");
        assert_eq!(record.author, "Jane Doe");
        assert_eq!(record.version, "v0.3.1");
        assert_eq!(record.created_at, repo_meta("").created_at);
        assert!(record.body.is_empty());
    }

    #[tokio::test]
    async fn test_add_with_overrides_and_readme() {
        let dir = TempDir::new().unwrap();
        let request = AddRequest {
            name: "cal".to_string(),
            import_path: Some("go.ngs.io/tools/cal".to_string()),
            repo_url: Some("git@github.com:ngs/freecal.git".to_string()),
            author: Some("Someone Else".to_string()),
            with_readme: true,
        };

        let added = add_package(&source(), &request, &config(&dir))
            .await
            .unwrap();

        assert_eq!(added.record.import_path, "go.ngs.io/tools/cal");
        assert_eq!(added.record.repo_url, "git@github.com:ngs/freecal.git");
        assert_eq!(added.record.author, "Someone Else");
        assert_eq!(added.record.body, "# freecal\n");
        assert!(added.warnings.is_empty());
    }

    #[tokio::test]
    async fn test_add_readme_failure_is_warning() {
        let dir = TempDir::new().unwrap();
        let source = source().with_bad_readme("ngs/freecal", "utf-8");
        let request = AddRequest {
            with_readme: true,
            ..request("freecal")
        };

        let added = add_package(&source, &request, &config(&dir)).await.unwrap();

        assert!(added.record.body.is_empty());
        assert_eq!(added.warnings.len(), 1);
        assert!(added.warnings[0].contains("unexpected encoding"));
    }

    #[tokio::test]
    async fn test_add_existing_file_fails() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);
        add_package(&source(), &request("freecal"), &config)
            .await
            .unwrap();

        let err = add_package(&source(), &request("freecal"), &config)
            .await
            .unwrap_err();

        assert!(matches!(err, AddError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn test_add_missing_repository_fails() {
        let dir = TempDir::new().unwrap();

        let err = add_package(&source(), &request("ghost"), &config(&dir))
            .await
            .unwrap_err();

        assert!(matches!(err, AddError::FetchFailed { .. }));
        assert!(err.to_string().contains("https://github.com/ngs/ghost"));
        assert!(!dir.path().join("content").join("ghost.md").exists());
    }

    #[tokio::test]
    async fn test_add_rejects_bad_input() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);

        let err = add_package(&source(), &request("  "), &config)
            .await
            .unwrap_err();
        assert!(matches!(err, AddError::MissingTitle));

        let err = add_package(&source(), &request("../escape"), &config)
            .await
            .unwrap_err();
        assert!(matches!(err, AddError::InvalidTitle(_)));

        let bad_url = AddRequest {
            repo_url: Some("https://example.com/ngs/freecal".to_string()),
            ..request("freecal")
        };
        let err = add_package(&source(), &bad_url, &config).await.unwrap_err();
        assert!(matches!(err, AddError::InvalidRepoUrl(_)));
    }
}
