//! URL slug derivation from country names.
//!
//! Detail pages are written to `<detail_dir>/<slug>.html` and the index page
//! links to the same path, so every place that needs a slug goes through this
//! one function to keep the two sides consistent.

/// Derive a URL-safe slug from a display name.
///
/// Lowercases the name and collapses each run of whitespace to a single
/// hyphen. Leading and trailing whitespace is dropped rather than turned
/// into a dangling hyphen.
///
/// - `"South Korea"` → `"south-korea"`
/// - `"Japan"` → `"japan"`
/// - `"  Papua   New Guinea "` → `"papua-new-guinea"`
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_word_lowercased() {
        assert_eq!(slugify("Japan"), "japan");
    }

    #[test]
    fn spaces_become_hyphens() {
        assert_eq!(slugify("South Korea"), "south-korea");
    }

    #[test]
    fn whitespace_runs_collapse() {
        assert_eq!(slugify("Papua   New\tGuinea"), "papua-new-guinea");
    }

    #[test]
    fn surrounding_whitespace_dropped() {
        assert_eq!(slugify("  France "), "france");
    }

    #[test]
    fn already_lowercase_unchanged() {
        assert_eq!(slugify("brazil"), "brazil");
    }

    #[test]
    fn empty_name_yields_empty_slug() {
        assert_eq!(slugify(""), "");
    }
}
