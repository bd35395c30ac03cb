//! `sidebars locate` command implementation.

use clap::Args;
use sidebars_config::CliSettings;
use sidebars_nav::Location;

use super::source::{SourceArgs, load_sidebars};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the locate command.
#[derive(Args)]
pub(crate) struct LocateArgs {
    /// Document slug (e.g. `yaradare/using/scan`).
    slug: String,

    #[command(flatten)]
    source: SourceArgs,
}

impl LocateArgs {
    /// Execute the locate command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails or no sidebar references the slug.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.source.load_config(CliSettings::default())?;
        let set = load_sidebars(&config)?;
        let location = set.locate(&self.slug)?;

        output.highlight(&self.slug);
        for line in location_lines(&location) {
            output.print(&line);
        }
        Ok(())
    }
}

fn location_lines(location: &Location<'_>) -> Vec<String> {
    let breadcrumbs = if location.breadcrumbs.is_empty() {
        "(top level)".to_owned()
    } else {
        location.breadcrumbs.join(" > ")
    };

    vec![
        format!("  product:     {}", location.product),
        format!("  breadcrumbs: {breadcrumbs}"),
        format!("  previous:    {}", location.pager.previous.unwrap_or("-")),
        format!("  next:        {}", location.pager.next.unwrap_or("-")),
    ]
}
