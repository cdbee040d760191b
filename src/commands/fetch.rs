//! Fetch one NHL API resource and save it as JSON.

use std::{
    io::{self, Write},
    path::PathBuf,
};

use reqwest::Client;
use serde_json::Value;

use crate::{
    core::{write_output, DEFAULT_OUTPUT_FILE},
    nhl::{build_client, fetch_json, RequestConfig},
    Result,
};

/// Parameters for a fetch-and-save run
#[derive(Debug, Clone)]
pub struct FetchParams {
    pub request: RequestConfig,
    pub output: PathBuf,
    pub verbose: bool,
}

impl Default for FetchParams {
    fn default() -> Self {
        Self {
            request: RequestConfig::default(),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            verbose: false,
        }
    }
}

/// Run the command against stdout.
pub async fn handle_fetch(params: FetchParams) -> Result<()> {
    let client = build_client()?;
    // `Stdout` locks per write, so nothing is held across the await
    let mut out = io::stdout();
    fetch_and_save(&client, &params, &mut out).await?;
    Ok(())
}

/// Fetch the payload, write it to `params.output`, then report to `out`.
///
/// The output file is only touched once the payload has been fetched and
/// decoded. Returns the payload that was written.
pub async fn fetch_and_save<W: Write>(
    client: &Client,
    params: &FetchParams,
    out: &mut W,
) -> Result<Value> {
    if params.verbose {
        writeln!(out, "Fetching {}...", params.request.url())?;
    }

    let payload = fetch_json(client, &params.request).await?;

    write_output(&params.output, &payload)?;

    writeln!(out, "Data saved to {}", params.output.display())?;
    writeln!(out, "{}", payload)?;

    Ok(payload)
}
