//! Command-line interface definitions and handlers.

/// CLI argument parsing with clap.
pub mod args;

/// Subcommand implementations.
pub mod commands;

pub use args::{Args, Command};

use crate::github::ClientError;
use crate::sync::{AddError, SyncError};
use commands::ConfigError;

/// Maps a command failure to a sysexits-style process exit code.
pub fn exit_code(error: &anyhow::Error) -> i32 {
    if error.downcast_ref::<ConfigError>().is_some() {
        return exitcode::CONFIG;
    }
    if let Some(e) = error.downcast_ref::<AddError>() {
        return match e {
            AddError::MissingTitle
            | AddError::InvalidTitle(_)
            | AddError::InvalidRepoUrl(_)
            | AddError::AlreadyExists(_) => exitcode::USAGE,
            AddError::FetchFailed { .. } => exitcode::UNAVAILABLE,
            AddError::Write(_) => exitcode::IOERR,
        };
    }
    if let Some(e) = error.downcast_ref::<SyncError>() {
        return match e {
            SyncError::NoMatchingPackages => exitcode::USAGE,
            SyncError::List(_) => exitcode::NOINPUT,
            SyncError::PackagesFailed(_) => exitcode::DATAERR,
        };
    }
    if error.downcast_ref::<ClientError>().is_some() {
        return exitcode::UNAVAILABLE;
    }
    exitcode::SOFTWARE
}
