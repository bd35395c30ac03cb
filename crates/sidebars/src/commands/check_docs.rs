//! `sidebars check-docs` command implementation.

use std::path::PathBuf;

use clap::Args;
use sidebars_config::CliSettings;
use sidebars_nav::{DocsIndex, check_documents};

use super::source::{SourceArgs, load_sidebars};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check-docs command.
#[derive(Args)]
pub(crate) struct CheckDocsArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Documentation content directory (overrides config).
    #[arg(long)]
    content_dir: Option<PathBuf>,
}

impl CheckDocsArgs {
    /// Execute the check-docs command.
    ///
    /// Orphaned documents are reported as warnings. Missing documents fail
    /// the command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading or scanning fails, or a slug has no file.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let cli_settings = CliSettings {
            content_dir: self.content_dir.clone(),
            ..Default::default()
        };
        let config = self.source.load_config(cli_settings)?;
        let set = load_sidebars(&config)?;

        let docs = &config.docs_resolved;
        let index = DocsIndex::scan(&docs.content_dir, &docs.extensions)?;
        output.info(&format!(
            "Scanned {} documents in {}",
            index.len(),
            index.root().display()
        ));

        let report = check_documents(&set, &index);
        for slug in &report.orphaned {
            output.warning(&format!("  not in any sidebar: {slug}"));
        }
        for missing in &report.missing {
            output.error(&format!("  {}: no document for {}", missing.product, missing.slug));
        }

        if report.is_complete() {
            output.success("All sidebar documents found");
            Ok(())
        } else {
            Err(CliError::Validation(format!(
                "{} sidebar documents missing",
                report.missing.len()
            )))
        }
    }
}
