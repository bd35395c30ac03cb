//! `sidebars export` command implementation.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use sidebars_config::CliSettings;
use sidebars_nav::ExportFormat;

use super::source::{SourceArgs, load_sidebars};
use crate::error::CliError;
use crate::output::Output;

/// Output path selecting stdout.
const STDOUT: &str = "-";

/// Arguments for the export command.
#[derive(Args)]
pub(crate) struct ExportArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Export format: js, json or yaml (overrides config).
    #[arg(short, long)]
    format: Option<String>,

    /// Output file, or `-` for stdout (overrides config).
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl ExportArgs {
    /// Execute the export command.
    ///
    /// # Errors
    ///
    /// Returns an error if the sidebars are invalid or cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let to_stdout = self.output.as_deref() == Some(Path::new(STDOUT));

        let cli_settings = CliSettings {
            output: self.output.clone().filter(|_| !to_stdout),
            format: self.format.clone(),
            ..Default::default()
        };
        let config = self.source.load_config(cli_settings)?;
        let set = load_sidebars(&config)?;

        let format: ExportFormat = config
            .export_resolved
            .format
            .parse()
            .map_err(CliError::Validation)?;
        let rendered = format.render(&set)?;

        if to_stdout {
            output.write_raw(&rendered)?;
            return Ok(());
        }

        let path = &config.export_resolved.output;
        write_export(path, &rendered)?;
        output.success(&format!(
            "Wrote {} sidebars ({format}) to {}",
            set.len(),
            path.display()
        ));
        Ok(())
    }
}

/// Write rendered sidebars, creating parent directories as needed.
fn write_export(path: &Path, rendered: &str) -> Result<(), CliError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, rendered)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_export_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("build/site/sidebars.js");

        write_export(&path, "module.exports = {};\n").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "module.exports = {};\n");
    }
}
