use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One cataloged package, stored as `<title>.md` in the content directory.
///
/// Every field except `body` lives in the YAML frontmatter. `body` is the
/// free text after the closing delimiter; an empty body means the file has
/// no body section at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRecord {
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub import_path: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub repo_url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub version: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub documentation_url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub license: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub author: String,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: DateTime<Utc>,
    #[serde(skip)]
    pub body: String,
}

impl PackageRecord {
    /// New record stamped with the current time.
    pub fn new(title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            title: title.into(),
            created_at: now,
            updated_at: now,
            ..Self::default()
        }
    }
}

/// Reads an explicit YAML `null` (or `~`) as an empty string.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
