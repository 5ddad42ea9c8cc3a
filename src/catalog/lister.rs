use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Section index page that Hugo keeps next to the package files.
pub const INDEX_FILE: &str = "_index.md";

const EXTENSION: &str = ".md";

#[derive(Debug, Error)]
#[error("failed to read content directory {}: {source}", path.display())]
pub struct ListError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Lists package files directly inside `dir`, sorted by file name.
///
/// Only `*.md` files count, and the section index is skipped.
pub fn list_packages(dir: &Path) -> Result<Vec<PathBuf>, ListError> {
    let list_error = |source| ListError {
        path: dir.to_path_buf(),
        source,
    };

    let mut packages = Vec::new();
    for entry in fs::read_dir(dir).map_err(list_error)? {
        let entry = entry.map_err(list_error)?;
        if entry.file_type().map_err(list_error)?.is_dir() {
            continue;
        }

        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        if name.ends_with(EXTENSION) && name != INDEX_FILE {
            packages.push(entry.path());
        }
    }

    packages.sort();
    Ok(packages)
}

/// Package name of a file: its base name without extension.
pub fn package_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Path of the file holding the package titled `title`.
pub fn package_path(dir: &Path, title: &str) -> PathBuf {
    dir.join(format!("{title}{EXTENSION}"))
}
