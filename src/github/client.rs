//! GitHub metadata source trait and `reqwest`-backed implementation.

use std::future::Future;
use std::pin::Pin;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use super::error::ClientError;
use super::repo_url::RepoRef;
use super::types::{Readme, Release, RepoMeta, Tag};

/// Default GitHub REST API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const USER_AGENT: &str = concat!("pkgcatalog/", env!("CARGO_PKG_VERSION"));

/// Boxed future returned by dyn-compatible async trait methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Source of remote repository metadata.
pub trait MetadataSource: Send + Sync {
    /// Fetch repository attributes. The repository must exist.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on network, status or parse failure.
    fn fetch_repository<'a>(
        &'a self,
        repo: &'a RepoRef,
    ) -> BoxFuture<'a, Result<RepoMeta, ClientError>>;

    /// Latest release tag, falling back to the first tag. Empty when neither exists.
    fn fetch_latest_version<'a>(&'a self, repo: &'a RepoRef) -> BoxFuture<'a, String>;

    /// Decoded README text. Empty when the repository has no readable README.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the README payload is malformed.
    fn fetch_readme<'a>(&'a self, repo: &'a RepoRef) -> BoxFuture<'a, Result<String, ClientError>>;
}

/// `reqwest`-backed implementation of [`MetadataSource`].
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    api_url: String,
    token: Option<String>,
}

impl GitHubClient {
    /// Create a client targeting `api_url`, authenticating with `token` if given.
    pub fn new(api_url: impl Into<String>, token: Option<String>) -> Result<Self, ClientError> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            api_url: api_url.into(),
            token,
        })
    }

    fn get(&self, path: &str) -> RequestBuilder {
        let url = format!("{}/{path}", self.api_url.trim_end_matches('/'));
        let request = self
            .http
            .get(url)
            .header(ACCEPT, "application/vnd.github+json");

        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        repo: &RepoRef,
    ) -> Result<T, ClientError> {
        let response = self.get(path).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(repo.to_string()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ClientError::Parse(e.to_string()))
    }

    async fn repository(&self, repo: &RepoRef) -> Result<RepoMeta, ClientError> {
        self.get_json(&format!("repos/{repo}"), repo).await
    }

    async fn latest_version(&self, repo: &RepoRef) -> String {
        let release = self
            .get_json::<Release>(&format!("repos/{repo}/releases/latest"), repo)
            .await;
        if let Ok(release) = release
            && !release.tag_name.is_empty()
        {
            return release.tag_name;
        }

        match self
            .get_json::<Vec<Tag>>(&format!("repos/{repo}/tags"), repo)
            .await
        {
            Ok(tags) => tags.into_iter().next().map(|tag| tag.name).unwrap_or_default(),
            Err(e) => {
                if !e.is_not_found() {
                    crate::warn!("Warning: Could not fetch version information for {repo}: {e}");
                }
                String::new()
            }
        }
    }

    async fn readme(&self, repo: &RepoRef) -> Result<String, ClientError> {
        let response = match self.get(&format!("repos/{repo}/readme")).send().await {
            Ok(response) if response.status().is_success() => response,
            _ => return Ok(String::new()),
        };
        let Ok(bytes) = response.bytes().await else {
            return Ok(String::new());
        };

        let readme: Readme = serde_json::from_slice(&bytes)
            .map_err(|e| ClientError::Parse(format!("readme: {e}")))?;
        decode_readme(&readme)
    }
}

impl MetadataSource for GitHubClient {
    fn fetch_repository<'a>(
        &'a self,
        repo: &'a RepoRef,
    ) -> BoxFuture<'a, Result<RepoMeta, ClientError>> {
        Box::pin(self.repository(repo))
    }

    fn fetch_latest_version<'a>(&'a self, repo: &'a RepoRef) -> BoxFuture<'a, String> {
        Box::pin(self.latest_version(repo))
    }

    fn fetch_readme<'a>(&'a self, repo: &'a RepoRef) -> BoxFuture<'a, Result<String, ClientError>> {
        Box::pin(self.readme(repo))
    }
}

/// GitHub wraps base64 README content at 60 columns, so whitespace is dropped first.
fn decode_readme(readme: &Readme) -> Result<String, ClientError> {
    if readme.encoding != "base64" {
        return Err(ClientError::UnexpectedEncoding(readme.encoding.clone()));
    }

    let compact: String = readme
        .content
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let bytes = STANDARD
        .decode(compact)
        .map_err(|e| ClientError::Decode(e.to_string()))?;

    String::from_utf8(bytes).map_err(|e| ClientError::Decode(e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn readme(content: &str, encoding: &str) -> Readme {
        Readme {
            content: content.to_string(),
            encoding: encoding.to_string(),
        }
    }

    #[test]
    fn test_decode_readme_wrapped_base64() {
        // "# Hello\n\nWorld" split across lines the way GitHub returns it
        let decoded = decode_readme(&readme("IyBIZWxs\nbwoKV29y\nbGQ=\n", "base64")).unwrap();
        assert_eq!(decoded, "# Hello\n\nWorld");
    }

    #[test]
    fn test_decode_readme_unexpected_encoding() {
        let err = decode_readme(&readme("plain", "utf-8")).unwrap_err();
        assert!(matches!(err, ClientError::UnexpectedEncoding(ref enc) if enc == "utf-8"));
    }

    #[test]
    fn test_decode_readme_invalid_base64() {
        let err = decode_readme(&readme("!!!not base64!!!", "base64")).unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[test]
    fn test_user_agent_names_crate() {
        assert!(USER_AGENT.starts_with("pkgcatalog/"));
    }
}
