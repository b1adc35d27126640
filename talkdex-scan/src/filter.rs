//! Directory filtering utilities for talk discovery

use chrono::NaiveDate;
use std::path::Path;

/// A year container is named with exactly four digits forming a calendar year
pub fn is_year_name(name: &str) -> bool {
    if name.len() != 4 || !name.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    name.parse::<i32>()
        .ok()
        .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
        .is_some()
}

/// Skip hidden entries such as `.git` or editor scratch directories
pub fn should_include_entry<P: AsRef<Path>>(entry_path: P) -> bool {
    !entry_path
        .as_ref()
        .file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}
