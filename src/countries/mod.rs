//! City → country resolution for visa-issuing posts.

mod table;

use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::warn;

/// Sentinel country for cities the lookup table does not cover.
pub const UNKNOWN_COUNTRY: &str = "Unknown";

static CITY_COUNTRIES: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| table::CITY_COUNTRY_PAIRS.iter().copied().collect());

/// Resolve a raw `City/Post` cell to a country name.
///
/// Tries the trimmed string against the table, then a fixed sequence of
/// variants: the trimmed string again, hyphens replaced by spaces, the part
/// before the first comma, the part before the first parenthesis. First hit
/// wins. Anything unmatched resolves to [`UNKNOWN_COUNTRY`] with a warning.
pub fn resolve_country(raw: &str) -> String {
    let city = raw.trim();
    if let Some(country) = CITY_COUNTRIES.get(city) {
        return (*country).to_string();
    }

    let variants = [
        city.to_string(),
        city.replace('-', " "),
        city.split(',').next().unwrap_or(city).trim().to_string(),
        city.split('(').next().unwrap_or(city).trim().to_string(),
    ];
    for variant in &variants {
        if let Some(country) = CITY_COUNTRIES.get(variant.as_str()) {
            return (*country).to_string();
        }
    }

    warn!(city, "no country mapping for city");
    UNKNOWN_COUNTRY.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match() {
        assert_eq!(resolve_country("Mexico City"), "Mexico");
        assert_eq!(resolve_country("  Paris  "), "France");
    }

    #[test]
    fn parenthesis_variant() {
        assert_eq!(resolve_country("Chennai ( Madras)"), "India");
        assert_eq!(resolve_country("Mumbai (Bombay)"), "India");
    }

    #[test]
    fn comma_variant() {
        assert_eq!(resolve_country("Chennai, India"), "India");
    }

    #[test]
    fn hyphen_variant() {
        assert_eq!(resolve_country("Ulan-Bator"), "Mongolia");
        assert_eq!(resolve_country("Port-Au-Prince"), "Haiti");
    }

    #[test]
    fn unknown_is_total_and_deterministic() {
        assert_eq!(resolve_country("Nonexistent Town"), UNKNOWN_COUNTRY);
        assert_eq!(resolve_country("Nonexistent Town"), UNKNOWN_COUNTRY);
        assert_eq!(resolve_country(""), UNKNOWN_COUNTRY);
        assert_eq!(resolve_country("   "), UNKNOWN_COUNTRY);
        assert_eq!(resolve_country("(,-"), UNKNOWN_COUNTRY);
    }

    #[test]
    fn table_has_no_duplicate_keys() {
        let mut keys: Vec<&str> = super::table::CITY_COUNTRY_PAIRS
            .iter()
            .map(|(city, _)| *city)
            .collect();
        keys.sort_unstable();
        let before = keys.len();
        keys.dedup();
        assert_eq!(before, keys.len());
    }
}
