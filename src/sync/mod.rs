//! Catalog synchronization: adding packages and refreshing existing ones
//! from GitHub.

mod add;
mod batch;
#[cfg(test)]
mod fake;
mod update;

pub use add::{AddError, AddRequest, AddedPackage, add_package};
pub use batch::{BatchReport, SyncError, format_result, select_packages, update_packages};
pub use update::{
    PackageUpdate, UpdateOptions, UpdateStatus, apply_repository, apply_version, process_package,
};
