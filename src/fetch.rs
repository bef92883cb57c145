//! HTTP retrieval of the wait-times page.

use crate::error::ScrapeError;
use reqwest::blocking::Client;
use std::time::Duration;

/// Page listing interview wait times for every visa-issuing post.
pub const WAIT_TIMES_URL: &str =
    "https://travel.state.gov/content/travel/en/us-visas/visa-information-resources/global-visa-wait-times.html";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the blocking client shared across all runs.
pub fn build_client() -> Result<Client, ScrapeError> {
    Ok(Client::builder().timeout(REQUEST_TIMEOUT).build()?)
}

/// GET `url` and return the body of a successful response.
pub fn fetch_page(client: &Client, url: &str) -> Result<String, ScrapeError> {
    let body = client.get(url).send()?.error_for_status()?.text()?;
    Ok(body)
}
