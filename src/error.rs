use thiserror::Error;

/// Everything that can take down a single scrape run. The run controller
/// logs these and keeps going with the remaining configurations.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("no table found on the page")]
    TableNotFound,

    #[error("row {row} has {found} cells but the header has {expected}")]
    SchemaMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("required column `{0}` is missing from the table")]
    MissingColumn(String),

    #[error("csv serialization failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("file operation failed: {0}")]
    Io(#[from] std::io::Error),
}
