//! Entry point: parse CLI and run the fetch.

use clap::Parser;
use nhl_stats::{
    cli::NhlStats,
    commands::fetch::handle_fetch,
    Result,
};

/// Run the CLI.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let app = NhlStats::parse();

    handle_fetch(app.into_fetch_params()).await?;

    Ok(())
}
