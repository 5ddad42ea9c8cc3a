use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Repository attributes from `GET /repos/{owner}/{repo}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepoMeta {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub license: Option<License>,
    pub owner: Owner,
}

impl RepoMeta {
    /// Description, with `null` treated as empty.
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    /// SPDX identifier of the license, if GitHub detected one.
    pub fn license_id(&self) -> Option<&str> {
        self.license.as_ref()?.spdx_id.as_deref()
    }

    /// Owner display name, falling back to the login.
    pub fn author(&self) -> &str {
        match self.owner.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.owner.login,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct License {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub name: String,
    pub spdx_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Owner {
    pub login: String,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct Release {
    #[serde(default)]
    pub tag_name: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct Tag {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct Readme {
    pub content: String,
    pub encoding: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_meta_with_nulls() {
        let json = r#"{
            "name": "bar",
            "description": null,
            "created_at": "2019-05-01T10:00:00Z",
            "updated_at": "2024-01-02T03:04:05Z",
            "license": null,
            "owner": {"login": "foo"}
        }"#;
        let meta: RepoMeta = serde_json::from_str(json).unwrap();

        assert_eq!(meta.description(), "");
        assert_eq!(meta.license_id(), None);
        assert_eq!(meta.author(), "foo");
    }

    #[test]
    fn test_repo_meta_full() {
        let json = r#"{
            "name": "bar",
            "description": "A bar",
            "created_at": "2019-05-01T10:00:00Z",
            "updated_at": "2024-01-02T03:04:05Z",
            "license": {"key": "mit", "name": "MIT License", "spdx_id": "MIT"},
            "owner": {"login": "foo", "name": "Foo Bar"},
            "stargazers_count": 10
        }"#;
        let meta: RepoMeta = serde_json::from_str(json).unwrap();

        assert_eq!(meta.description(), "A bar");
        assert_eq!(meta.license_id(), Some("MIT"));
        assert_eq!(meta.author(), "Foo Bar");
        assert_eq!(meta.created_at.to_rfc3339(), "2019-05-01T10:00:00+00:00");
    }

    #[test]
    fn test_author_ignores_empty_name() {
        let owner = Owner {
            login: "foo".to_string(),
            name: Some(String::new()),
        };
        let meta = RepoMeta {
            name: "bar".to_string(),
            description: None,
            created_at: DateTime::<Utc>::default(),
            updated_at: DateTime::<Utc>::default(),
            license: None,
            owner,
        };
        assert_eq!(meta.author(), "foo");
    }
}
