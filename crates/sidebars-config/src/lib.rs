//! Configuration management for sidebars.
//!
//! Parses `sidebars.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `source.path`
//! - `docs.content_dir`
//! - `export.output`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override sidebar source file.
    pub source: Option<PathBuf>,
    /// Override documentation content directory.
    pub content_dir: Option<PathBuf>,
    /// Override export output path.
    pub output: Option<PathBuf>,
    /// Override export format.
    pub format: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "sidebars.toml";

/// Export formats understood by the exporter.
const EXPORT_FORMATS: &[&str] = &["js", "json", "yaml", "yml"];

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Sidebar source configuration (paths are relative strings from TOML).
    source: SourceConfigRaw,
    /// Content directory configuration.
    docs: DocsConfigRaw,
    /// Export configuration.
    export: ExportConfigRaw,
    /// Construction rule settings.
    pub validation: ValidationConfig,

    /// Resolved source configuration (set after loading).
    #[serde(skip)]
    pub source_resolved: SourceConfig,
    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Resolved export configuration (set after loading).
    #[serde(skip)]
    pub export_resolved: ExportConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SourceConfigRaw {
    path: Option<String>,
}

/// Resolved sidebar source.
#[derive(Debug, Default)]
pub struct SourceConfig {
    /// Sidebar definition file. `None` selects the built-in sidebars.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    content_dir: Option<String>,
    extensions: Option<Vec<String>>,
}

/// Resolved content directory configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Directory the site generator resolves slugs against.
    pub content_dir: PathBuf,
    /// Document file extensions, without leading dot.
    pub extensions: Vec<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ExportConfigRaw {
    output: Option<String>,
    format: Option<String>,
}

/// Resolved export configuration.
#[derive(Debug, Default)]
pub struct ExportConfig {
    /// File the exported sidebars are written to.
    pub output: PathBuf,
    /// Export format name (`js`, `json` or `yaml`).
    pub format: String,
}

/// Construction rule settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Style class every sidebar heading must carry.
    pub heading_class: String,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            heading_class: "sidebar-title".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`source.path`").
        field: String,
        /// Error message (e.g., "${`SIDEBARS_SOURCE`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn default_extensions() -> Vec<String> {
    vec!["md".to_owned(), "mdx".to_owned()]
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `sidebars.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source) = &settings.source {
            self.source_resolved.path = Some(source.clone());
        }
        if let Some(content_dir) = &settings.content_dir {
            self.docs_resolved.content_dir.clone_from(content_dir);
        }
        if let Some(output) = &settings.output {
            self.export_resolved.output.clone_from(output);
        }
        if let Some(format) = &settings.format {
            self.export_resolved.format.clone_from(format);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            source: SourceConfigRaw::default(),
            docs: DocsConfigRaw::default(),
            export: ExportConfigRaw::default(),
            validation: ValidationConfig::default(),
            source_resolved: SourceConfig::default(),
            docs_resolved: DocsConfig {
                content_dir: base.join("docs"),
                extensions: default_extensions(),
            },
            export_resolved: ExportConfig {
                output: base.join("sidebars.js"),
                format: "js".to_owned(),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.validation.heading_class, "validation.heading_class")?;
        self.validate_docs()?;
        self.validate_export()?;
        Ok(())
    }

    fn validate_docs(&self) -> Result<(), ConfigError> {
        let extensions = &self.docs_resolved.extensions;
        if extensions.is_empty() {
            return Err(ConfigError::Validation(
                "docs.extensions cannot be empty".to_owned(),
            ));
        }
        for ext in extensions {
            require_non_empty(ext, "docs.extensions")?;
            if ext.starts_with('.') {
                return Err(ConfigError::Validation(format!(
                    "docs.extensions entries must not start with a dot: {ext}"
                )));
            }
        }
        Ok(())
    }

    fn validate_export(&self) -> Result<(), ConfigError> {
        let format = self.export_resolved.format.to_ascii_lowercase();
        if !EXPORT_FORMATS.contains(&format.as_str()) {
            return Err(ConfigError::Validation(format!(
                "export.format must be one of {}, found `{}`",
                EXPORT_FORMATS.join(", "),
                self.export_resolved.format
            )));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.source.path {
            self.source.path = Some(expand::expand_env(path, "source.path")?);
        }
        if let Some(ref dir) = self.docs.content_dir {
            self.docs.content_dir = Some(expand::expand_env(dir, "docs.content_dir")?);
        }
        if let Some(ref output) = self.export.output {
            self.export.output = Some(expand::expand_env(output, "export.output")?);
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.source_resolved = SourceConfig {
            path: self.source.path.as_deref().map(|p| config_dir.join(p)),
        };
        self.docs_resolved = DocsConfig {
            content_dir: resolve(self.docs.content_dir.as_deref(), "docs"),
            extensions: self
                .docs
                .extensions
                .clone()
                .unwrap_or_else(default_extensions),
        };
        self.export_resolved = ExportConfig {
            output: resolve(self.export.output.as_deref(), "sidebars.js"),
            format: self.export.format.clone().unwrap_or_else(|| "js".to_owned()),
        };
    }
}
