use std::fmt;
use std::str::FromStr;

use thiserror::Error;

const HTTPS_PREFIX: &str = "https://github.com/";
const SSH_PREFIX: &str = "git@github.com:";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepoUrlError {
    #[error("invalid GitHub URL format: {0}")]
    InvalidFormat(String),
}

/// An `owner/repo` pair on GitHub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Parses `https://github.com/<owner>/<repo>[.git]` or
    /// `git@github.com:<owner>/<repo>[.git]`.
    ///
    /// Extra path segments after the repository (e.g. `/tree/main`) are ignored.
    pub fn parse(url: &str) -> Result<Self, RepoUrlError> {
        let path = url
            .strip_prefix(HTTPS_PREFIX)
            .or_else(|| url.strip_prefix(SSH_PREFIX))
            .ok_or_else(|| RepoUrlError::InvalidFormat(url.to_string()))?;

        let mut segments = path.split('/');
        let owner = segments.next().unwrap_or_default();
        let repo = segments.next().unwrap_or_default();
        let repo = repo.strip_suffix(".git").unwrap_or(repo);

        if owner.is_empty() || repo.is_empty() {
            return Err(RepoUrlError::InvalidFormat(url.to_string()));
        }

        Ok(Self::new(owner, repo))
    }

    /// Canonical web URL of the repository.
    pub fn html_url(&self) -> String {
        format!("{HTTPS_PREFIX}{}/{}", self.owner, self.repo)
    }
}

impl FromStr for RepoRef {
    type Err = RepoUrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
