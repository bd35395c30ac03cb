//! Config and sidebar loading shared by all commands.

use std::borrow::Cow;
use std::path::PathBuf;

use clap::Args;
use sidebars_config::{CliSettings, Config};
use sidebars_nav::{SidebarError, SidebarSet, ValidationRules, builtin};
use tracing::info;

use crate::error::CliError;

/// Where to read configuration and sidebar definitions from.
#[derive(Args)]
pub(crate) struct SourceArgs {
    /// Path to configuration file (default: auto-discover sidebars.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Sidebar definition file, JSON or YAML (overrides config; default: built-in sidebars).
    #[arg(short, long, env = "SIDEBARS_SOURCE")]
    source: Option<PathBuf>,
}

impl SourceArgs {
    /// Load configuration with the source override and the given settings.
    pub(crate) fn load_config(&self, mut settings: CliSettings) -> Result<Config, CliError> {
        if settings.source.is_none() {
            settings.source.clone_from(&self.source);
        }
        Ok(Config::load(self.config.as_deref(), Some(&settings))?)
    }
}

/// Load and validate the sidebars selected by the configuration.
///
/// Falls back to the built-in sidebars when no source file is configured.
pub(crate) fn load_sidebars(config: &Config) -> Result<Cow<'static, SidebarSet>, CliError> {
    let rules = ValidationRules::new(config.validation.heading_class.clone());

    if let Some(path) = &config.source_resolved.path {
        info!(path = %path.display(), "Loading sidebars from file");
        Ok(Cow::Owned(SidebarSet::load(path, &rules)?))
    } else {
        info!("Using built-in sidebars");
        let set = builtin::sidebars();
        set.validate(&rules).map_err(SidebarError::from)?;
        Ok(Cow::Borrowed(set))
    }
}
