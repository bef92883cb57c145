//! Assembles parsed rows into the output table.

use crate::config::ScraperConfig;
use crate::countries::{self, UNKNOWN_COUNTRY};
use crate::error::ScrapeError;
use tracing::{debug, info, warn};

/// Column the source table identifies each post by.
pub const CITY_COLUMN: &str = "City/Post";
/// Column synthesized from [`CITY_COLUMN`] when enrichment is on.
pub const COUNTRY_COLUMN: &str = "Country";

/// Scraped table with any derived columns applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Dataset {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }
}

/// Build the output table from parsed headers and rows.
///
/// Verifies every row matches the header width, appends the resolved
/// `Country` column when the configuration asks for it, then projects to the
/// selected columns if any were configured.
pub fn build_dataset(
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    config: &ScraperConfig,
) -> Result<Dataset, ScrapeError> {
    for (row, cells) in rows.iter().enumerate() {
        if cells.len() != columns.len() {
            return Err(ScrapeError::SchemaMismatch {
                row,
                expected: columns.len(),
                found: cells.len(),
            });
        }
    }
    let mut dataset = Dataset { columns, rows };

    if config.include_country {
        let city_idx = append_countries(&mut dataset)?;
        log_country_stats(&dataset, city_idx);
    }

    if let Some(selected) = &config.selected_columns {
        dataset = project(dataset, selected, config.include_country);
    }

    Ok(dataset)
}

/// Append the `Country` column; returns the `City/Post` column index.
fn append_countries(dataset: &mut Dataset) -> Result<usize, ScrapeError> {
    let city_idx = dataset
        .column_index(CITY_COLUMN)
        .ok_or_else(|| ScrapeError::MissingColumn(CITY_COLUMN.to_string()))?;

    for row in &mut dataset.rows {
        let country = countries::resolve_country(&row[city_idx]);
        row.push(country);
    }
    dataset.columns.push(COUNTRY_COLUMN.to_string());
    Ok(city_idx)
}

fn log_country_stats(dataset: &Dataset, city_idx: usize) {
    let total = dataset.rows.len();
    if total == 0 {
        debug!("no rows scraped; skipping country statistics");
        return;
    }

    // Country is always the last column right after enrichment.
    let country_idx = dataset.columns.len() - 1;
    let unknown: Vec<&str> = dataset
        .rows
        .iter()
        .filter(|row| row[country_idx] == UNKNOWN_COUNTRY)
        .map(|row| row[city_idx].as_str())
        .collect();

    info!(
        total,
        unknown = unknown.len(),
        "resolved countries for {:.2}% of posts",
        matched_rate(total, unknown.len())
    );
    if !unknown.is_empty() {
        warn!(cities = ?unknown, "posts without a country mapping");
    }
}

fn matched_rate(total: usize, unknown: usize) -> f64 {
    (total - unknown) as f64 / total as f64 * 100.0
}

/// Keep `City/Post`, `Country` (when enriched), and the requested columns,
/// in first-occurrence order with duplicates dropped. Requested columns that
/// are not in the table are dropped silently.
fn project(dataset: Dataset, selected: &[String], include_country: bool) -> Dataset {
    let mut wanted: Vec<&str> = vec![CITY_COLUMN];
    if include_country {
        wanted.push(COUNTRY_COLUMN);
    }
    wanted.extend(selected.iter().map(String::as_str));

    let mut seen: Vec<&str> = Vec::with_capacity(wanted.len());
    let mut indices = Vec::with_capacity(wanted.len());
    for name in wanted {
        if seen.contains(&name) {
            continue;
        }
        seen.push(name);
        if let Some(idx) = dataset.column_index(name) {
            indices.push(idx);
        }
    }

    let columns = indices
        .iter()
        .map(|&idx| dataset.columns[idx].clone())
        .collect();
    let rows = dataset
        .rows
        .iter()
        .map(|row| indices.iter().map(|&idx| row[idx].clone()).collect())
        .collect();
    Dataset { columns, rows }
}
