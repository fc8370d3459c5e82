//! Shared types for the country dataset.
//!
//! These are deserialized from the `countries.json` dataset at startup and
//! serialized back into the index page's embedded data island, so the field
//! names are part of both the input format and the generated output.

use serde::{Deserialize, Serialize};

/// One country record from the dataset.
///
/// Records are read-only for the duration of a run; the generator derives
/// documents from them and never mutates the list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Country {
    /// Display name; also the source of the URL slug.
    pub name: String,
    /// Capital city display string.
    pub capital: String,
    pub currency: Currency,
    /// URI of the flag image. Referenced from generated pages, never
    /// fetched or validated.
    pub flag: String,
    /// Free text shown as the page body and reused verbatim as the
    /// meta-description.
    pub description: String,
}

/// Currency of a country, e.g. `Japanese yen (¥)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Currency {
    pub name: String,
    pub symbol: String,
}
