//! Sidebars CLI - documentation navigation tooling.
//!
//! Provides commands for:
//! - `validate`: Check sidebars against the construction rules
//! - `export`: Write sidebars in the site generator's format
//! - `show`: Print the sidebar of one product
//! - `locate`: Show where a document sits in the sidebars
//! - `check-docs`: Compare sidebar slugs with the content directory

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckDocsArgs, ExportArgs, LocateArgs, ShowArgs, ValidateArgs};
use output::Output;

/// Sidebars - documentation navigation tooling.
#[derive(Parser)]
#[command(name = "sidebars", version, about)]
struct Cli {
    /// Enable verbose output (show load and scan logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate sidebars against the construction rules.
    Validate(ValidateArgs),
    /// Export sidebars for the documentation site generator.
    Export(ExportArgs),
    /// Print the sidebar of a product.
    Show(ShowArgs),
    /// Show the product, breadcrumbs and neighbors of a document.
    Locate(LocateArgs),
    /// Check that sidebar slugs resolve to document files.
    CheckDocs(CheckDocsArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Validate(args) => args.execute(),
        Commands::Export(args) => args.execute(),
        Commands::Show(args) => args.execute(),
        Commands::Locate(args) => args.execute(),
        Commands::CheckDocs(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
