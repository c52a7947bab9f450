//! Ordering of directory members

use std::cmp::Ordering;

use super::entry::Entry;

/// Compare two names ignoring case and one leading `.`.
///
/// The dot is only skipped for comparison; names are never modified.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let a = a.strip_prefix('.').unwrap_or(a);
    let b = b.strip_prefix('.').unwrap_or(b);
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Sort a listing in display order.
///
/// Names equal under [`compare_names`] fall back to the raw name, so the
/// result does not depend on the order the filesystem returned them.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(|a, b| {
        compare_names(&a.name, &b.name).then_with(|| a.raw_name.cmp(&b.raw_name))
    });
}
