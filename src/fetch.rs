//! Board page fetcher.
//!
//! One GET per source per run, default client timeouts, no retry. A non-2xx
//! status or transport error is returned to the caller, which treats it as
//! "no data for this source this run".

use reqwest::Client;
use std::error::Error;
use tracing::{debug, instrument};

/// Fetch the raw markup of a board page.
#[instrument(level = "info", skip(client))]
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, Box<dyn Error>> {
    let response = client.get(url).send().await?.error_for_status()?;
    let body = response.text().await?;
    debug!(bytes = body.len(), "Fetched board page");
    Ok(body)
}
