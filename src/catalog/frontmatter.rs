//! Reads and writes package records as Markdown files with YAML frontmatter.
//!
//! ```text
//! ---
//! title: foo
//! import_path: go.ngs.io/foo
//! ...
//! ---
//!
//! optional body
//! ```

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::record::PackageRecord;
use crate::fs::atomic_write;

const OPENING: &str = "---\n";
const CLOSING: &str = "\n---";

#[derive(Debug, Error)]
pub enum FrontmatterError {
    #[error("no frontmatter found")]
    NoFrontmatter,
    #[error("invalid frontmatter format")]
    MalformedFrontmatter,
    #[error("failed to parse frontmatter: {0}")]
    Parse(#[source] serde_yaml::Error),
    #[error("failed to encode package: {0}")]
    Serialize(#[source] serde_yaml::Error),
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Decodes a package file's contents.
///
/// Up to two line breaks directly after the closing delimiter are dropped;
/// everything else after it becomes the record's body.
pub fn decode(content: &str) -> Result<PackageRecord, FrontmatterError> {
    let (yaml, body) = split(content)?;
    let mut record: PackageRecord = serde_yaml::from_str(yaml).map_err(FrontmatterError::Parse)?;
    record.body = body.to_string();
    Ok(record)
}

/// Encodes a record: frontmatter, then a blank line and the body if there is one.
pub fn encode(record: &PackageRecord) -> Result<String, FrontmatterError> {
    let yaml = serde_yaml::to_string(record).map_err(FrontmatterError::Serialize)?;

    let mut content = format!("{OPENING}{yaml}---\n");
    if !record.body.is_empty() {
        content.push('\n');
        content.push_str(&record.body);
    }
    Ok(content)
}

fn split(content: &str) -> Result<(&str, &str), FrontmatterError> {
    let rest = content
        .strip_prefix(OPENING)
        .ok_or(FrontmatterError::NoFrontmatter)?;
    let end = rest
        .find(CLOSING)
        .ok_or(FrontmatterError::MalformedFrontmatter)?;

    let yaml = &rest[..end];
    let after = &rest[end + CLOSING.len()..];
    let body = after.strip_prefix('\n').unwrap_or(after);
    let body = body.strip_prefix('\n').unwrap_or(body);

    Ok((yaml, body))
}

/// Reads and decodes the package file at `path`.
pub fn read_package(path: &Path) -> Result<PackageRecord, FrontmatterError> {
    let content = std::fs::read_to_string(path).map_err(|source| FrontmatterError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode(&content)
}

/// Encodes `record` and writes it to `path`, creating the parent directory if needed.
pub fn write_package(path: &Path, record: &PackageRecord) -> Result<(), FrontmatterError> {
    let content = encode(record)?;
    let write_error = |source| FrontmatterError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }
    atomic_write(path, &content).map_err(write_error)
}
