//! Shared test utilities for the flag-finder test suite.
//!
//! Provides the reference dataset (Japan, France, Brazil) used across
//! module tests, both as a full list and as single-country lookups.

use crate::types::{Country, Currency};

/// The reference three-country dataset.
pub fn sample_countries() -> Vec<Country> {
    vec![
        Country {
            name: "Japan".to_string(),
            capital: "Tokyo".to_string(),
            currency: Currency {
                name: "Japanese yen".to_string(),
                symbol: "¥".to_string(),
            },
            flag: "https://flagcdn.com/w320/jp.png".to_string(),
            description: "Japan's flag is white with a red circle. Tokyo is the capital. \
                          Japanese yen (¥) is the currency."
                .to_string(),
        },
        Country {
            name: "France".to_string(),
            capital: "Paris".to_string(),
            currency: Currency {
                name: "Euro".to_string(),
                symbol: "€".to_string(),
            },
            flag: "https://flagcdn.com/w320/fr.png".to_string(),
            description: "France's flag is blue, white, and red. Paris is the capital. \
                          Euro (€) is the currency."
                .to_string(),
        },
        Country {
            name: "Brazil".to_string(),
            capital: "Brasília".to_string(),
            currency: Currency {
                name: "Brazilian real".to_string(),
                symbol: "R$".to_string(),
            },
            flag: "https://flagcdn.com/w320/br.png".to_string(),
            description: "Brazil's flag is green with a yellow diamond and a blue globe. \
                          Brasília is the capital. Brazilian real (R$) is the currency."
                .to_string(),
        },
    ]
}

/// Find a country from the sample dataset by name. Panics if not found.
pub fn sample_country(name: &str) -> Country {
    sample_countries()
        .into_iter()
        .find(|c| c.name == name)
        .unwrap_or_else(|| panic!("no sample country named '{name}'"))
}
