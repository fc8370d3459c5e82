//! Site configuration module.
//!
//! Handles loading and validating an optional `site.toml`. Every option has
//! a stock default, so a config file is only needed to override text or the
//! output layout. Unknown keys are rejected to catch typos early.
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! title = "Country Flag Finder - Capitals & Currencies"
//! header = "Country Flag Finder"
//! description = "Search any country to see its flag, capital city, and currency. Explore popular countries and learn fun facts about each one!"
//! blurb = "Discover flags of countries from around the world. Learn about their capitals, currencies, and fun facts. Use the search above to quickly find any country and explore its unique history."
//! footer = "© 2025 Country Flag Finder"
//! search_placeholder = "Enter country name..."
//!
//! # Subdirectory of the output root that holds the per-country pages
//! detail_dir = "flags"
//!
//! # External stylesheet linked from every generated page
//! stylesheet = "https://cdn.jsdelivr.net/npm/tailwindcss@2.2.19/dist/tailwind.min.css"
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `site.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Index page `<title>` and meta title.
    pub title: String,
    /// Banner text at the top of the index page, typically shorter than
    /// the title.
    pub header: String,
    /// Meta-description of the index page.
    pub description: String,
    /// Text block shown below the country grid.
    pub blurb: String,
    /// Footer line.
    pub footer: String,
    /// Placeholder text of the search input.
    pub search_placeholder: String,
    /// Subdirectory of the output root holding per-country pages.
    pub detail_dir: String,
    /// URI of the external stylesheet linked from every page.
    pub stylesheet: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Country Flag Finder - Capitals & Currencies".to_string(),
            header: "Country Flag Finder".to_string(),
            description: "Search any country to see its flag, capital city, and currency. \
                          Explore popular countries and learn fun facts about each one!"
                .to_string(),
            blurb: "Discover flags of countries from around the world. Learn about their \
                    capitals, currencies, and fun facts. Use the search above to quickly \
                    find any country and explore its unique history."
                .to_string(),
            footer: "© 2025 Country Flag Finder".to_string(),
            search_placeholder: "Enter country name...".to_string(),
            detail_dir: "flags".to_string(),
            stylesheet: "https://cdn.jsdelivr.net/npm/tailwindcss@2.2.19/dist/tailwind.min.css"
                .to_string(),
        }
    }
}

impl SiteConfig {
    /// Load a config file, falling back to stock defaults when the file
    /// does not exist. A present-but-invalid file is an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: SiteConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate config values the generator relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.detail_dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "detail_dir must not be empty".into(),
            ));
        }
        if self.detail_dir.contains(['/', '\\']) {
            return Err(ConfigError::Validation(
                "detail_dir must be a single path segment".into(),
            ));
        }
        if self.stylesheet.trim().is_empty() {
            return Err(ConfigError::Validation(
                "stylesheet must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Return a documented stock `site.toml` for the `gen-config` subcommand.
pub fn stock_config_toml() -> String {
    let defaults = SiteConfig::default();
    format!(
        r#"# flag-finder site configuration
# All options are optional - the values below are the stock defaults.

# Index page <title> and meta title.
title = {title}

# Banner text at the top of the index page.
header = {header}

# Meta-description of the index page.
description = {description}

# Text block shown below the country grid.
blurb = {blurb}

# Footer line.
footer = {footer}

# Placeholder text of the search input.
search_placeholder = {placeholder}

# Subdirectory of the output root that holds the per-country pages.
detail_dir = {detail_dir}

# External stylesheet linked from every generated page.
stylesheet = {stylesheet}
"#,
        title = toml_string(&defaults.title),
        header = toml_string(&defaults.header),
        description = toml_string(&defaults.description),
        blurb = toml_string(&defaults.blurb),
        footer = toml_string(&defaults.footer),
        placeholder = toml_string(&defaults.search_placeholder),
        detail_dir = toml_string(&defaults.detail_dir),
        stylesheet = toml_string(&defaults.stylesheet),
    )
}

fn toml_string(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(toml: &str) -> (TempDir, std::path::PathBuf) {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("site.toml");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(toml.as_bytes()).unwrap();
        (tmp, path)
    }

    #[test]
    fn missing_file_yields_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = SiteConfig::load_or_default(&tmp.path().join("absent.toml")).unwrap();
        assert_eq!(config.title, "Country Flag Finder - Capitals & Currencies");
        assert_eq!(config.header, "Country Flag Finder");
        assert_eq!(config.detail_dir, "flags");
    }

    #[test]
    fn partial_config_overrides_only_named_keys() {
        let (_tmp, path) = write_config("title = \"World Atlas\"\n");
        let config = SiteConfig::load_or_default(&path).unwrap();
        assert_eq!(config.title, "World Atlas");
        assert_eq!(config.header, "Country Flag Finder");
        assert_eq!(config.detail_dir, "flags");
        assert_eq!(config.footer, "© 2025 Country Flag Finder");
    }

    #[test]
    fn unknown_keys_rejected() {
        let (_tmp, path) = write_config("titel = \"typo\"\n");
        assert!(matches!(
            SiteConfig::load_or_default(&path),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn empty_detail_dir_rejected() {
        let (_tmp, path) = write_config("detail_dir = \"\"\n");
        assert!(matches!(
            SiteConfig::load_or_default(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn nested_detail_dir_rejected() {
        let config = SiteConfig {
            detail_dir: "a/b".to_string(),
            ..SiteConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn stock_config_round_trips() {
        let parsed: SiteConfig = toml::from_str(&stock_config_toml()).unwrap();
        let defaults = SiteConfig::default();
        assert_eq!(parsed.title, defaults.title);
        assert_eq!(parsed.header, defaults.header);
        assert_eq!(parsed.detail_dir, defaults.detail_dir);
        assert_eq!(parsed.stylesheet, defaults.stylesheet);
    }
}
