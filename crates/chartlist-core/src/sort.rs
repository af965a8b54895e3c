//! Row ordering by a single column.
//!
//! Rows are compared by the sort value of the cell at the chosen key using a
//! locale-style collation: letters compare case- and accent-insensitively
//! first, then accents, then case (lowercase before uppercase). Descending
//! order negates the ascending comparator; the underlying sort is stable, so
//! tied rows keep their relative order either way.

use std::cmp::Ordering;

use chartlist_model::{Row, SortBy, SortOrder};
use tracing::debug;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Return `rows` ordered by the cell at `key`. The input is left untouched.
///
/// Rows without a cell for `key` sort as an empty string.
pub fn sort_rows(rows: &[Row], key: &str, order: SortOrder) -> Vec<Row> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = locale_compare(
            a.sort_value(key).unwrap_or_default(),
            b.sort_value(key).unwrap_or_default(),
        );
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
    debug!(key, ?order, rows = sorted.len(), "sorted rows");
    sorted
}

pub fn apply_sort(rows: &[Row], sort_by: &SortBy) -> Vec<Row> {
    sort_rows(rows, &sort_by.key, sort_by.order)
}

/// Compare two strings the way a user expects a list to be ordered.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    primary_weights(a)
        .cmp(primary_weights(b))
        .then_with(|| secondary_weights(a).cmp(secondary_weights(b)))
        .then_with(|| tertiary_weights(a).cmp(tertiary_weights(b)))
        .then_with(|| a.cmp(b))
}

/// Punctuation and symbols sort before digits, digits before letters.
fn char_class(ch: char) -> u8 {
    if ch.is_alphabetic() {
        2
    } else if ch.is_numeric() {
        1
    } else {
        0
    }
}

fn base_chars(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().filter(|ch| !is_combining_mark(*ch))
}

fn primary_weights(s: &str) -> impl Iterator<Item = (u8, char)> + '_ {
    base_chars(s)
        .flat_map(char::to_lowercase)
        .map(|ch| (char_class(ch), ch))
}

fn secondary_weights(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn tertiary_weights(s: &str) -> impl Iterator<Item = bool> + '_ {
    base_chars(s).map(char::is_uppercase)
}
