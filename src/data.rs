//! Country dataset loading and validation.
//!
//! The dataset is a JSON array of country records (see [`crate::types`]).
//! Loading validates two things the generator depends on:
//!
//! - **Required fields**: every field must be non-empty after trimming.
//!   An empty name would produce an empty slug and an unnamed page; an
//!   empty flag URI a broken image. Rejecting at load time keeps the
//!   renderers free of per-field checks.
//! - **Slug uniqueness**: two names that collapse to the same slug (e.g.
//!   `"South Korea"` and `"south   korea"`) would silently overwrite each
//!   other's detail page. This is surfaced as [`DataError::DuplicateSlug`]
//!   instead.
//!
//! An empty list is valid and produces an index-only site.

use crate::slug::slugify;
use crate::types::Country;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("country #{index} ({name:?}) has an empty '{field}' field")]
    EmptyField {
        /// 1-based position in the dataset.
        index: usize,
        /// Name of the offending record, or the index again when the name
        /// itself is the empty field.
        name: String,
        field: &'static str,
    },
    #[error("countries {first:?} and {second:?} both resolve to slug '{slug}'")]
    DuplicateSlug {
        first: String,
        second: String,
        slug: String,
    },
}

/// Load and validate a country dataset from a JSON file.
pub fn load(path: &Path) -> Result<Vec<Country>, DataError> {
    let content = fs::read_to_string(path)?;
    let countries: Vec<Country> = serde_json::from_str(&content)?;
    validate(&countries)?;
    Ok(countries)
}

/// Validate an in-memory country list (required fields, unique slugs).
pub fn validate(countries: &[Country]) -> Result<(), DataError> {
    for (i, country) in countries.iter().enumerate() {
        let fields: [(&'static str, &str); 6] = [
            ("name", &country.name),
            ("capital", &country.capital),
            ("currency.name", &country.currency.name),
            ("currency.symbol", &country.currency.symbol),
            ("flag", &country.flag),
            ("description", &country.description),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(DataError::EmptyField {
                    index: i + 1,
                    name: if country.name.trim().is_empty() {
                        format!("#{}", i + 1)
                    } else {
                        country.name.clone()
                    },
                    field,
                });
            }
        }
    }

    let mut seen: HashMap<String, &str> = HashMap::new();
    for country in countries {
        let slug = slugify(&country.name);
        if let Some(first) = seen.insert(slug.clone(), &country.name) {
            return Err(DataError::DuplicateSlug {
                first: first.to_string(),
                second: country.name.clone(),
                slug,
            });
        }
    }

    Ok(())
}
