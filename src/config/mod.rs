//! Configuration file management.

mod manager;

pub use manager::{
    BuildConfig, ConfigFile, ConfigManager, DEFAULT_CONTENT_DIR, DEFAULT_DOCUMENTATION_BASE,
    DEFAULT_IMPORT_PREFIX, DEFAULT_OWNER, DEFAULT_TOKEN_ENV, GitHubConfig, ResolveOptions,
    ResolvedConfig, SiteConfig, resolve_config,
};
