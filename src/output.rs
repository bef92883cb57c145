//! CSV snapshot writing.

use crate::config::ScraperConfig;
use crate::dataset::Dataset;
use crate::error::ScrapeError;
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

/// Insert `_YYYYMMDD_HHMMSS` before the extension of `base`.
fn timestamped_filename(base: &str, now: DateTime<Local>) -> String {
    let stamp = now.format("%Y%m%d_%H%M%S");
    let path = Path::new(base);
    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(base);
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => format!("{stem}_{stamp}.{ext}"),
        None => format!("{stem}_{stamp}"),
    }
}

/// Write `dataset` under `config.output_dir`, creating the directory (and
/// parents) on demand. Returns the path of the written file.
pub fn write_csv(dataset: &Dataset, config: &ScraperConfig) -> Result<PathBuf, ScrapeError> {
    fs::create_dir_all(&config.output_dir)?;
    let path = config
        .output_dir
        .join(timestamped_filename(&config.output_file, Local::now()));

    let mut writer = csv::Writer::from_path(&path)?;
    writer.write_record(&dataset.columns)?;
    for row in &dataset.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use chrono::TimeZone;

    #[test]
    fn timestamp_goes_before_the_extension() {
        let now = Local.with_ymd_and_hms(2024, 3, 9, 14, 30, 5).unwrap();
        assert_eq!(
            timestamped_filename("visa_wait_times.csv", now),
            "visa_wait_times_20240309_143005.csv"
        );
        assert_eq!(
            timestamped_filename("snapshot", now),
            "snapshot_20240309_143005"
        );
    }

    #[test]
    fn writes_header_and_rows() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let config = ScraperConfig::default().with_output_dir(dir.path().join("nested"));
        let dataset = Dataset {
            columns: vec!["City/Post".to_string(), "Country".to_string()],
            rows: vec![vec!["Paris".to_string(), "France".to_string()]],
        };

        let path = write_csv(&dataset, &config)?;
        let contents = std::fs::read_to_string(&path)?;
        assert_eq!(contents, "City/Post,Country\nParis,France\n");
        assert!(path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap()
            .starts_with("visa_wait_times_"));
        Ok(())
    }
}
