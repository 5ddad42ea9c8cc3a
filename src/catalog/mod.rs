//! The on-disk package catalog: records, their frontmatter files, and the
//! content directory that holds them.

/// Frontmatter encoding and file I/O.
pub mod frontmatter;
mod lister;
mod record;

pub use frontmatter::{FrontmatterError, read_package, write_package};
pub use lister::{INDEX_FILE, ListError, list_packages, package_name, package_path};
pub use record::PackageRecord;
