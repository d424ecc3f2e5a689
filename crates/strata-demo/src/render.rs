//! Text rendering of list ranges for the walkthrough output.

use std::fmt::Display;

use strata_collections::{ArrayList, CollectionError};

/// Render the inclusive range `[start, end]` of `list`.
///
/// A range that starts at index 0 opens with `[`, otherwise with `..., `.
/// A range that ends at the last element closes with `]`, otherwise with
/// `, ...`. Out-of-range bounds surface as the list's own error.
pub fn format_range<T: Clone + Display>(
    list: &ArrayList<T>,
    start: usize,
    end: usize,
) -> Result<String, CollectionError> {
    let mut buf = String::from(if start == 0 { "[" } else { "..., " });
    for index in start..=end {
        if index > start {
            buf.push_str(", ");
        }
        buf.push_str(&list.get(index)?.to_string());
    }
    buf.push_str(if end + 1 == list.len() { "]" } else { ", ..." });
    Ok(buf)
}

/// Render the whole list, `[]` when empty.
pub fn format_list<T: Clone + Display>(list: &ArrayList<T>) -> Result<String, CollectionError> {
    match list.len() {
        0 => Ok(String::from("[]")),
        len => format_range(list, 0, len - 1),
    }
}
