//! In-memory [`MetadataSource`] for orchestrator tests.

use std::collections::HashMap;

use chrono::{TimeZone, Utc};

use crate::github::{BoxFuture, ClientError, License, MetadataSource, Owner, RepoMeta, RepoRef};

#[derive(Default)]
pub struct FakeSource {
    repos: HashMap<String, RepoMeta>,
    versions: HashMap<String, String>,
    readmes: HashMap<String, Result<String, String>>,
}

impl FakeSource {
    pub fn with_repo(mut self, full_name: &str, meta: RepoMeta) -> Self {
        self.repos.insert(full_name.to_string(), meta);
        self
    }

    pub fn with_version(mut self, full_name: &str, version: &str) -> Self {
        self.versions
            .insert(full_name.to_string(), version.to_string());
        self
    }

    pub fn with_readme(mut self, full_name: &str, readme: &str) -> Self {
        self.readmes
            .insert(full_name.to_string(), Ok(readme.to_string()));
        self
    }

    /// README payload in an encoding the client rejects.
    pub fn with_bad_readme(mut self, full_name: &str, encoding: &str) -> Self {
        self.readmes
            .insert(full_name.to_string(), Err(encoding.to_string()));
        self
    }
}

impl MetadataSource for FakeSource {
    fn fetch_repository<'a>(
        &'a self,
        repo: &'a RepoRef,
    ) -> BoxFuture<'a, Result<RepoMeta, ClientError>> {
        Box::pin(async move {
            self.repos
                .get(&repo.to_string())
                .cloned()
                .ok_or_else(|| ClientError::NotFound(repo.to_string()))
        })
    }

    fn fetch_latest_version<'a>(&'a self, repo: &'a RepoRef) -> BoxFuture<'a, String> {
        Box::pin(async move {
            self.versions
                .get(&repo.to_string())
                .cloned()
                .unwrap_or_default()
        })
    }

    fn fetch_readme<'a>(&'a self, repo: &'a RepoRef) -> BoxFuture<'a, Result<String, ClientError>> {
        Box::pin(async move {
            match self.readmes.get(&repo.to_string()) {
                Some(Ok(readme)) => Ok(readme.clone()),
                Some(Err(encoding)) => Err(ClientError::UnexpectedEncoding(encoding.clone())),
                None => Ok(String::new()),
            }
        })
    }
}

/// Repository metadata with a license and a named owner.
pub fn repo_meta(description: &str) -> RepoMeta {
    RepoMeta {
        name: "freecal".to_string(),
        description: Some(description.to_string()),
        created_at: Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).single().unwrap_or_default(),
        updated_at: Utc.with_ymd_and_hms(2024, 6, 7, 8, 9, 10).single().unwrap_or_default(),
        license: Some(License {
            key: "mit".to_string(),
            name: "MIT License".to_string(),
            spdx_id: Some("MIT".to_string()),
        }),
        owner: Owner {
            login: "ngs".to_string(),
            name: Some("Jane Doe".to_string()),
        },
    }
}
