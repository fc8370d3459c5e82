//! CLI output formatting.
//!
//! Output is information-centric: every country leads with its positional
//! index and name, with derived paths or dataset details as context. Each
//! command has a pure `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.
//!
//! ## Build
//!
//! ```text
//! Home → index.html
//! 001 Japan → flags/japan.html
//! 002 France → flags/france.html
//!
//! Generated 2 country pages
//! ```
//!
//! ## Check
//!
//! ```text
//! 001 Japan
//!     Capital: Tokyo
//!     Currency: Japanese yen (¥)
//!
//! 1 country, all fields present, slugs unique
//! ```

use crate::config::SiteConfig;
use crate::generate::detail_path;
use crate::types::Country;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Format build output: one line per generated document plus a summary.
pub fn format_build_output(countries: &[Country], config: &SiteConfig) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Home → index.html".to_string());
    for (i, country) in countries.iter().enumerate() {
        lines.push(format!(
            "{} {} → {}",
            format_index(i + 1),
            country.name,
            detail_path(country, config)
        ));
    }

    lines.push(String::new());
    let noun = if countries.len() == 1 {
        "country page"
    } else {
        "country pages"
    };
    lines.push(format!("Generated {} {}", countries.len(), noun));

    lines
}

/// Format check output: dataset inventory with per-country context lines.
pub fn format_check_output(countries: &[Country]) -> Vec<String> {
    let mut lines = Vec::new();

    for (i, country) in countries.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), country.name));
        lines.push(format!("    Capital: {}", country.capital));
        lines.push(format!(
            "    Currency: {} ({})",
            country.currency.name, country.currency.symbol
        ));
    }

    lines.push(String::new());
    let noun = if countries.len() == 1 {
        "country"
    } else {
        "countries"
    };
    lines.push(format!(
        "{} {}, all fields present, slugs unique",
        countries.len(),
        noun
    ));

    lines
}

pub fn print_build_output(countries: &[Country], config: &SiteConfig) {
    for line in format_build_output(countries, config) {
        println!("{}", line);
    }
}

pub fn print_check_output(countries: &[Country]) {
    for line in format_check_output(countries) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_countries;

    #[test]
    fn build_output_lists_pages_in_order() {
        let config = SiteConfig::default();
        let lines = format_build_output(&sample_countries(), &config);

        assert_eq!(lines[0], "Home → index.html");
        assert_eq!(lines[1], "001 Japan → flags/japan.html");
        assert_eq!(lines[2], "002 France → flags/france.html");
        assert_eq!(lines[3], "003 Brazil → flags/brazil.html");
        assert_eq!(lines.last().unwrap(), "Generated 3 country pages");
    }

    #[test]
    fn build_output_empty_dataset() {
        let config = SiteConfig::default();
        let lines = format_build_output(&[], &config);

        assert_eq!(lines[0], "Home → index.html");
        assert_eq!(lines.last().unwrap(), "Generated 0 country pages");
    }

    #[test]
    fn build_output_singular_noun() {
        let config = SiteConfig::default();
        let lines = format_build_output(&sample_countries()[..1], &config);
        assert_eq!(lines.last().unwrap(), "Generated 1 country page");
    }

    #[test]
    fn check_output_shows_context_lines() {
        let lines = format_check_output(&sample_countries());

        assert_eq!(lines[0], "001 Japan");
        assert_eq!(lines[1], "    Capital: Tokyo");
        assert_eq!(lines[2], "    Currency: Japanese yen (¥)");
        assert_eq!(
            lines.last().unwrap(),
            "3 countries, all fields present, slugs unique"
        );
    }
}
