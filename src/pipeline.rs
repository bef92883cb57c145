//! One end-to-end scrape run, and the controller that drives the fixed
//! configuration set.

use crate::config::{self, ScraperConfig};
use crate::dataset::{self, Dataset};
use crate::error::ScrapeError;
use crate::{fetch, output, parse};
use reqwest::blocking::Client;
use scraper::Html;
use std::collections::BTreeMap;
use tracing::{error, info, warn};

/// HTML in, dataset out. Split from [`run_once`] so everything after the
/// fetch stays testable without a network.
pub fn scrape_document(html: &str, config: &ScraperConfig) -> Result<Dataset, ScrapeError> {
    let doc = Html::parse_document(html);
    let table = parse::find_table(&doc).ok_or(ScrapeError::TableNotFound)?;
    let (headers, rows) = parse::parse_table(table);
    dataset::build_dataset(headers, rows, config)
}

/// One run: fetch, parse, enrich, write. Nothing touches the filesystem
/// until the dataset is fully built.
pub fn run_once(client: &Client, config: &ScraperConfig) -> Result<Dataset, ScrapeError> {
    run_at(client, fetch::WAIT_TIMES_URL, config)
}

fn run_at(client: &Client, url: &str, config: &ScraperConfig) -> Result<Dataset, ScrapeError> {
    let html = fetch::fetch_page(client, url)?;
    let dataset = scrape_document(&html, config)?;
    let path = output::write_csv(&dataset, config)?;
    info!(rows = dataset.rows.len(), path = %path.display(), "wrote snapshot");
    Ok(dataset)
}

/// Run every built-in configuration in order, collecting each outcome by
/// name. A failed run is logged and recorded as `None`; the remaining
/// configurations always still execute.
pub fn run_all(client: &Client) -> BTreeMap<&'static str, Option<Dataset>> {
    run_all_at(client, fetch::WAIT_TIMES_URL)
}

fn run_all_at(client: &Client, url: &str) -> BTreeMap<&'static str, Option<Dataset>> {
    let configs = config::run_configs();
    let total = configs.len();

    let mut results = BTreeMap::new();
    for (name, config) in configs {
        info!(config = name, "starting run");
        match run_at(client, url, &config) {
            Ok(dataset) => {
                results.insert(name, Some(dataset));
            }
            Err(err) => {
                error!(config = name, error = %err, "run failed");
                results.insert(name, None);
            }
        }
    }

    let succeeded = results.values().filter(|outcome| outcome.is_some()).count();
    info!(succeeded, total, "all runs finished");
    if succeeded < total {
        warn!(failed = total - succeeded, "some runs failed; see errors above");
    }

    results
}
