use std::path::PathBuf;

/// Options for one scrape run. Immutable once built.
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    /// Columns to keep in the output. `None` keeps everything.
    pub selected_columns: Option<Vec<String>>,
    /// Derive a `Country` column from `City/Post`.
    pub include_country: bool,
    /// Base output filename; a timestamp is inserted before the extension.
    pub output_file: String,
    /// Directory the snapshot is written into, created on demand.
    pub output_dir: PathBuf,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            selected_columns: None,
            include_country: true,
            output_file: "visa_wait_times.csv".to_string(),
            output_dir: PathBuf::from("output"),
        }
    }
}

impl ScraperConfig {
    pub fn with_selected_columns(mut self, columns: Vec<String>) -> Self {
        self.selected_columns = Some(columns);
        self
    }

    pub fn with_include_country(mut self, include_country: bool) -> Self {
        self.include_country = include_country;
        self
    }

    pub fn with_output_file(mut self, output_file: impl Into<String>) -> Self {
        self.output_file = output_file.into();
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }
}

/// The built-in runs, in execution order.
pub fn run_configs() -> Vec<(&'static str, ScraperConfig)> {
    vec![
        ("default", ScraperConfig::default()),
        (
            "selected_columns",
            ScraperConfig::default()
                .with_selected_columns(vec![
                    "Interview Required Visitors (B1/B2)".to_string()
                ])
                .with_output_file("visa_wait_times_selected.csv"),
        ),
        (
            "no_country",
            ScraperConfig::default()
                .with_include_country(false)
                .with_output_file("visa_wait_times_no_country.csv"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ScraperConfig::default();
        assert!(config.include_country);
        assert!(config.selected_columns.is_none());
        assert_eq!(config.output_file, "visa_wait_times.csv");
    }

    #[test]
    fn three_fixed_runs() {
        let configs = run_configs();
        let names: Vec<&str> = configs.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["default", "selected_columns", "no_country"]);

        let (_, no_country) = &configs[2];
        assert!(!no_country.include_country);
    }
}
