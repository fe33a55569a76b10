mod render;
mod sweep;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(name = "icsweep")]
#[command(about = "Find all events from Google Calendar that exist in an ICS file")]
pub struct Cli {
    /// ICS file containing the events to search for
    pub ics: PathBuf,

    /// Google account email to use (defaults to the only stored session)
    #[arg(short, long)]
    pub account: Option<String>,

    /// Calendar to reconcile against
    #[arg(long, default_value = "primary")]
    pub calendar: String,

    /// Delete the matching events
    #[arg(long)]
    pub delete: bool,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Limit the number of events processed
    #[arg(long)]
    pub limit: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    sweep::run(cli).await
}
