//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

/// Print the actions a file manager offers for a selection.
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "fileactions")]
#[command(about = "Resolve the file actions available for a scenario")]
pub struct Args {
    /// Scenario file to resolve
    pub scenario: PathBuf,

    /// Config file; defaults to the user config path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Trigger the default action after listing
    #[arg(long)]
    pub open: bool,

    /// Simulate a browser that blocks every new window
    #[arg(long)]
    pub block_popups: bool,
}
