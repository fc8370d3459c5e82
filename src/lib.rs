//! # Flag Finder
//!
//! A minimal static site generator for country flag reference sites. A JSON
//! dataset of countries goes in; a self-contained static site comes out: one
//! detail page per country plus a searchable index page.
//!
//! # Architecture: One-Shot Pipeline
//!
//! ```text
//! countries.json  →  validate  →  render  →  dist/
//!                                            ├── index.html
//!                                            └── flags/<slug>.html
//! ```
//!
//! The whole run is a single synchronous pass: load and validate the
//! dataset, ensure the output directories exist, write each detail page in
//! dataset order, then write the index. The same input always produces
//! byte-identical output, and reruns overwrite in place, so the build is
//! safe to repeat.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`data`] | Dataset loading — JSON parsing, required-field and slug-uniqueness validation |
//! | [`generate`] | Renders detail pages and the index with Maud, writes the output tree |
//! | [`config`] | `site.toml` loading with stock defaults and validation |
//! | [`types`] | Dataset records (`Country`, `Currency`) |
//! | [`slug`] | URL slug derivation from country names |
//! | [`output`] | CLI output formatting — per-page and inventory display |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system, rather than Handlebars or Tera. Malformed HTML is a
//! build error, template variables are Rust expressions, and all
//! interpolation is auto-escaped — dataset text can never inject markup.
//!
//! ## Validation Up Front
//!
//! Two classes of bad input are rejected before anything is written: empty
//! required fields (which would render as blank page sections) and country
//! names whose slugs collide (which would make one detail page silently
//! overwrite another). The renderers can then assume a clean dataset.
//!
//! ## Embedded Search Snapshot
//!
//! The index page is still fully static: the country list is serialized
//! into the page as a JSON data island, and ~40 lines of vanilla JavaScript
//! render the card grid and filter it by name substring on each keystroke.
//! The published site needs no server and makes no requests after load
//! beyond the flag images and one stylesheet, both referenced by URI.

pub mod config;
pub mod data;
pub mod generate;
pub mod output;
pub mod slug;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
