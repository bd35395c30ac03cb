//! `sidebars validate` command implementation.

use clap::Args;
use sidebars_config::CliSettings;
use sidebars_nav::SidebarError;

use super::source::{SourceArgs, load_sidebars};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the validate command.
#[derive(Args)]
pub(crate) struct ValidateArgs {
    #[command(flatten)]
    source: SourceArgs,
}

impl ValidateArgs {
    /// Execute the validate command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails or any construction rule is violated.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.source.load_config(CliSettings::default())?;

        match load_sidebars(&config) {
            Ok(set) => {
                for (product, sidebar) in set.iter() {
                    output.success(&format!(
                        "{product}: {} documents",
                        sidebar.documents().len()
                    ));
                }
                output.info(&format!("{} sidebars valid", set.len()));
                Ok(())
            }
            Err(CliError::Sidebar(SidebarError::Validation(report))) => {
                for error in report.errors() {
                    output.error(&format!("  {error}"));
                }
                Err(CliError::Validation(format!(
                    "{} sidebar rule violations found",
                    report.errors().len()
                )))
            }
            Err(err) => Err(err),
        }
    }
}
