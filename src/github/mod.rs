//! GitHub repository metadata: URL parsing, API client and response types.

mod client;
mod error;
mod repo_url;
mod types;

pub use client::{BoxFuture, DEFAULT_API_URL, GitHubClient, MetadataSource};
pub use error::ClientError;
pub use repo_url::{RepoRef, RepoUrlError};
pub use types::{License, Owner, RepoMeta};
