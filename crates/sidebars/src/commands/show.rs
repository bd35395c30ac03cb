//! `sidebars show` command implementation.

use clap::Args;
use sidebars_config::CliSettings;
use sidebars_nav::NavigationEntry;

use super::source::{SourceArgs, load_sidebars};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the show command.
#[derive(Args)]
pub(crate) struct ShowArgs {
    /// Product key (e.g. `yaradare`).
    product: String,

    #[command(flatten)]
    source: SourceArgs,
}

impl ShowArgs {
    /// Execute the show command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails or the product has no sidebar.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.source.load_config(CliSettings::default())?;
        let set = load_sidebars(&config)?;
        let sidebar = set.get(&self.product)?;

        output.highlight(&self.product);
        let mut lines = Vec::new();
        tree_lines(sidebar.entries(), 1, &mut lines);
        for line in &lines {
            output.print(line);
        }
        Ok(())
    }
}

/// Render entries as an indented outline.
fn tree_lines(entries: &[NavigationEntry], depth: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    for entry in entries {
        match entry {
            NavigationEntry::Heading { text, class_name } => {
                lines.push(format!("{indent}# {text} [{class_name}]"));
            }
            NavigationEntry::Document(slug) => lines.push(format!("{indent}- {slug}")),
            NavigationEntry::Category { label, items } => {
                lines.push(format!("{indent}+ {label}"));
                tree_lines(items, depth + 1, lines);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sidebars_nav::builtin;

    #[test]
    fn test_tree_lines_outline() {
        let sidebar = builtin::sidebars().get("yaradare").unwrap();
        let mut lines = Vec::new();

        tree_lines(sidebar.entries(), 0, &mut lines);

        assert_eq!(
            lines,
            vec![
                "# Deepfence Yaradare [sidebar-title]",
                "- yaradare/index",
                "- yaradare/quickstart",
                "+ Using YaRadare",
                "  - yaradare/using/build",
                "  - yaradare/using/scan",
                "+ Configuration",
                "  - yaradare/configure/cli",
                "  - yaradare/configure/output",
                "  - yaradare/configure/rules",
            ]
        );
    }

    #[test]
    fn test_tree_lines_nested_categories() {
        let entries = vec![NavigationEntry::category(
            "Outer",
            vec![NavigationEntry::category(
                "Inner",
                vec![NavigationEntry::document("p/deep")],
            )],
        )];
        let mut lines = Vec::new();

        tree_lines(&entries, 1, &mut lines);

        assert_eq!(lines, vec!["  + Outer", "    + Inner", "      - p/deep"]);
    }
}
