//! HTML site generation.
//!
//! Takes a validated country list and a [`SiteConfig`] and writes the
//! complete static site in a single synchronous pass:
//!
//! ```text
//! dist/
//! ├── index.html           # Search/listing page
//! └── flags/               # One page per country (config.detail_dir)
//!     ├── japan.html
//!     ├── france.html
//!     └── brazil.html
//! ```
//!
//! The run is deterministic: the same list and config produce byte-identical
//! files, and reruns overwrite in place. Directory creation is idempotent.
//! Any filesystem failure aborts the run; no cleanup of already-written
//! pages is attempted, so a failed run can leave a partial output tree.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping, so
//! country-supplied text (names, descriptions) can never inject markup.
//!
//! ## Embedded Search
//!
//! The index page carries the country list as a JSON data island
//! (`<script type="application/json">`) plus a small vanilla-JS filter
//! embedded at compile time from `static/search.js`. The script renders one
//! card per country on load and re-renders the grid on every keystroke,
//! filtering by case-insensitive substring of the name. The grid element
//! itself is generated empty.

use crate::config::SiteConfig;
use crate::slug::slugify;
use crate::types::Country;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use serde::Serialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

const JS: &str = include_str!("../static/search.js");

/// Generate the full site into `output_dir`.
///
/// Writes detail pages in list order, then the index page. The caller is
/// expected to have validated the list (see [`crate::data::validate`]);
/// colliding slugs would otherwise overwrite each other silently here.
pub fn generate(
    countries: &[Country],
    config: &SiteConfig,
    output_dir: &Path,
) -> Result<(), GenerateError> {
    let detail_dir = output_dir.join(&config.detail_dir);
    fs::create_dir_all(&detail_dir)?;

    for country in countries {
        let page = render_detail(country, config);
        let file_name = format!("{}.html", slugify(&country.name));
        fs::write(detail_dir.join(file_name), page.into_string())?;
    }

    let index = render_index(countries, config)?;
    fs::write(output_dir.join("index.html"), index.into_string())?;

    Ok(())
}

/// Relative path of a country's detail page from the output root.
pub fn detail_path(country: &Country, config: &SiteConfig) -> String {
    format!("{}/{}.html", config.detail_dir, slugify(&country.name))
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure shared by all pages.
fn base_document(title: &str, description: &str, stylesheet: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                meta name="description" content=(description);
                link href=(stylesheet) rel="stylesheet";
            }
            body class="bg-gray-100 font-sans" {
                (content)
            }
        }
    }
}

/// Renders the page-top banner.
fn banner(text: &str) -> Markup {
    html! {
        header class="bg-blue-600 text-white p-6 text-center text-3xl font-bold" { (text) }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders the detail page for one country.
pub fn render_detail(country: &Country, config: &SiteConfig) -> Markup {
    let title = format!("{} - Flag, Capital & Currency", country.name);
    let flag_alt = format!("Flag of {}", country.name);

    let content = html! {
        (banner(&country.name))
        main class="max-w-3xl mx-auto p-6 text-center bg-white rounded shadow mt-6" {
            img src=(country.flag) alt=(flag_alt) class="mx-auto mb-4 h-40 object-cover";
            h2 class="text-2xl font-semibold mb-2" { "Capital: " (country.capital) }
            h3 class="text-xl font-medium mb-4" {
                "Currency: " (country.currency.name) " (" (country.currency.symbol) ")"
            }
            p class="text-gray-700 mb-4" { (country.description) }
            a href="../index.html" class="text-blue-600 hover:underline" { "Back to homepage" }
        }
    };

    base_document(&title, &country.description, &config.stylesheet, content)
}

/// Renders the index/search page.
///
/// The country grid is emitted empty; `static/search.js` populates it from
/// the embedded data island on load and re-renders it on every search input.
pub fn render_index(
    countries: &[Country],
    config: &SiteConfig,
) -> Result<Markup, serde_json::Error> {
    let data = embedded_json(countries)?;

    let content = html! {
        (banner(&config.header))
        main class="max-w-5xl mx-auto p-6" {
            div class="mb-8" {
                input id="search-input" type="text"
                    placeholder=(config.search_placeholder)
                    class="w-full p-4 rounded shadow focus:outline-none";
            }
            h2 class="text-2xl font-semibold mb-4" { "Countries" }
            div id="country-grid" data-detail-dir=(config.detail_dir)
                class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-6" {}
            div class="mt-10 text-gray-700 text-lg" { (config.blurb) }
        }
        footer class="bg-gray-200 text-center p-4 mt-10" { (config.footer) }
        script type="application/json" id="country-data" { (PreEscaped(data)) }
        script { (PreEscaped(JS)) }
    };

    Ok(base_document(
        &config.title,
        &config.description,
        &config.stylesheet,
        content,
    ))
}

/// Snapshot of a country as the search script needs it: display name, flag
/// URI, and the precomputed slug so the script never re-derives paths.
#[derive(Serialize)]
struct CountryCard<'a> {
    name: &'a str,
    flag: &'a str,
    slug: String,
}

/// Serialize the country list for the index page's data island.
///
/// `<` is escaped as `\u003c` so a literal `</script>` inside a field
/// cannot terminate the data block early.
fn embedded_json(countries: &[Country]) -> Result<String, serde_json::Error> {
    let cards: Vec<CountryCard> = countries
        .iter()
        .map(|c| CountryCard {
            name: &c.name,
            flag: &c.flag,
            slug: slugify(&c.name),
        })
        .collect();
    Ok(serde_json::to_string(&cards)?.replace('<', "\\u003c"))
}

// ============================================================================
// Tests
// ============================================================================
