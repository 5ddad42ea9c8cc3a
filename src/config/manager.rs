use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::github::DEFAULT_API_URL;
use crate::paths;
use crate::site::SiteBuilder;

pub const DEFAULT_CONTENT_DIR: &str = "content";
pub const DEFAULT_IMPORT_PREFIX: &str = "go.ngs.io";
pub const DEFAULT_OWNER: &str = "ngs";
pub const DEFAULT_DOCUMENTATION_BASE: &str = "https://pkg.go.dev";
pub const DEFAULT_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// The `[site]` section: where packages live and how new ones are named.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Directory holding one `<name>.md` file per package.
    pub content_dir: Option<PathBuf>,
    /// Prefix for default import paths (`<prefix>/<name>`).
    pub import_prefix: Option<String>,
    /// GitHub owner assumed when `add` is given no repository URL.
    pub default_owner: Option<String>,
    /// Documentation site; package docs live at `<base>/<import path>`.
    pub documentation_base: Option<String>,
}

/// The `[github]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GitHubConfig {
    /// REST API endpoint.
    pub api_url: Option<String>,
    /// Token stored directly in config (not recommended).
    #[serde(default)]
    pub token: Option<String>,
    /// Environment variable containing the token. Defaults to `GITHUB_TOKEN`.
    #[serde(default)]
    pub token_env: Option<String>,
}

impl GitHubConfig {
    /// Gets the API token, preferring the environment variable over the config file.
    pub fn get_token(&self) -> Option<String> {
        let env_var = self.token_env.as_deref().unwrap_or(DEFAULT_TOKEN_ENV);
        if let Ok(token) = std::env::var(env_var)
            && !token.is_empty()
        {
            return Some(token);
        }
        self.token.clone().filter(|token| !token.is_empty())
    }
}

/// The `[build]` section: the site builder run after changes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildConfig {
    pub enabled: Option<bool>,
    pub command: Option<String>,
    pub args: Option<Vec<String>>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/pkgcatalog/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub github: GitHubConfig,
    #[serde(default)]
    pub build: BuildConfig,
}

/// Resolved configuration after merging CLI arguments, config file and defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub content_dir: PathBuf,
    pub import_prefix: String,
    pub default_owner: String,
    pub documentation_base: String,
    pub api_url: String,
    pub token: Option<String>,
    /// `None` when site validation is disabled.
    pub builder: Option<SiteBuilder>,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Content directory override.
    pub content_dir: Option<PathBuf>,
    /// Skip site validation.
    pub no_build: bool,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// CLI options take precedence over config file values, which take
/// precedence over built-in defaults.
///
/// # Errors
///
/// Returns an error if a configured value is unusable (empty API URL or
/// empty build command).
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<ResolvedConfig> {
    let site = &config_file.site;

    let content_dir = options
        .content_dir
        .clone()
        .or_else(|| site.content_dir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONTENT_DIR));

    let api_url = config_file
        .github
        .api_url
        .clone()
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
        bail!(
            "Invalid configuration: github.api_url must be an http(s) URL, got '{api_url}'"
        );
    }

    let builder = if options.no_build || config_file.build.enabled == Some(false) {
        None
    } else {
        Some(resolve_builder(&config_file.build)?)
    };

    Ok(ResolvedConfig {
        content_dir,
        import_prefix: site
            .import_prefix
            .clone()
            .unwrap_or_else(|| DEFAULT_IMPORT_PREFIX.to_string()),
        default_owner: site
            .default_owner
            .clone()
            .unwrap_or_else(|| DEFAULT_OWNER.to_string()),
        documentation_base: site
            .documentation_base
            .clone()
            .unwrap_or_else(|| DEFAULT_DOCUMENTATION_BASE.to_string()),
        api_url,
        token: config_file.github.get_token(),
        builder,
    })
}

fn resolve_builder(build: &BuildConfig) -> Result<SiteBuilder> {
    match (&build.command, &build.args) {
        (None, None) => Ok(SiteBuilder::default()),
        (Some(command), _) if command.trim().is_empty() => {
            bail!(
                "Invalid configuration: build.command is empty\n\n\
                 Set build.enabled = false to skip site validation."
            )
        }
        (command, args) => Ok(SiteBuilder::new(
            command.as_deref().unwrap_or("hugo"),
            args.clone().unwrap_or_default(),
        )),
    }
}

/// Loads the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a config manager for the default location.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/pkgcatalog/config.toml`
    /// or `~/.config/pkgcatalog/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    /// Creates a config manager for an explicit file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })
    }

    /// Loads the config file, or defaults if it does not exist.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        match fs::metadata(&self.config_path) {
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(ConfigFile::default()),
            _ => self.load(),
        }
    }
}
