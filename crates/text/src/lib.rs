//! Text handling for CV content: rich-text sanitizing for the interactive
//! preview, flattening to plain text for print, and date formatting.
//!
//! The two rich-text paths are deliberately asymmetric. [`sanitize_html`]
//! keeps a small allow-list of inline markup; [`flatten_for_print`] removes
//! all of it and keeps only paragraph and line structure.

pub mod date;
pub mod entities;
pub mod flatten;
mod markup;
pub mod sanitize;

pub use date::{Locale, format_date_range, format_month_year};
pub use entities::{decode_entities, escape_html};
pub use flatten::{flatten_all, flatten_for_print};
pub use sanitize::{SafeHtml, is_safe_href, sanitize_html};

/// Splits a comma-separated list into trimmed, non-empty items.
pub fn split_tags(details: &str) -> Vec<String> {
    details
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_trimmed_and_empties_dropped() {
        assert_eq!(
            split_tags(" Rust, ,Go ,, TypeScript "),
            vec!["Rust", "Go", "TypeScript"]
        );
        assert!(split_tags(" , ").is_empty());
    }
}
