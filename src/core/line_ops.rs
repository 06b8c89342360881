//! Line-level catalog operations
//!
//! Pure functions over the full catalog text, shared by the sync and async
//! record stores. Each takes the current contents and returns what the
//! store should do with them; none of them touch storage.

use crate::io::csv_format::{first_field, join_lines, parse_line, split_lines};
use crate::types::{Record, RecordKey};

/// Find the first record whose id loosely equals `key`
///
/// When the first matching line is empty (such as the one after the final
/// terminator), the record is absent. Later lines are not searched.
pub fn lookup(contents: &str, key: &RecordKey) -> Option<Record> {
    split_lines(contents)
        .into_iter()
        .find(|line| key.loose_eq(first_field(line)))
        .filter(|line| !line.is_empty())
        .map(parse_line)
}

/// Replace every line whose id strictly equals `key` with `replacement`
///
/// Returns the new contents and the number of lines replaced. Lines that do
/// not match, including empty ones, are kept in place.
pub fn rewrite(contents: &str, key: &RecordKey, replacement: &str) -> (String, usize) {
    let mut replaced = 0;
    let lines: Vec<&str> = split_lines(contents)
        .into_iter()
        .map(|line| {
            if key.strict_eq(first_field(line)) {
                replaced += 1;
                replacement
            } else {
                line
            }
        })
        .collect();

    (join_lines(&lines), replaced)
}

/// Remove the first line whose id loosely equals `key`
///
/// Returns `None` when no line matches. Later lines with the same id are
/// left alone.
pub fn remove(contents: &str, key: &RecordKey) -> Option<String> {
    let mut lines = split_lines(contents);
    let index = lines
        .iter()
        .position(|line| key.loose_eq(first_field(line)))?;
    lines.remove(index);
    Some(join_lines(&lines))
}

/// All non-empty lines parsed as records, in file order
pub fn records(contents: &str) -> Vec<Record> {
    split_lines(contents)
        .into_iter()
        .filter(|line| !line.is_empty())
        .map(parse_line)
        .collect()
}
