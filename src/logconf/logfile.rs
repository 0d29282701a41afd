//! Dated log file names.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

/// Name of the `n`th log file of `date`: `2022-07-21_001.log`.
pub fn log_file_name(date: NaiveDate, n: u32) -> String {
    format!("{}_{:03}.log", date.format("%Y-%m-%d"), n)
}

/// First `<date>_<NNN>.log` in `dir` that does not exist yet, counting from 001.
///
/// Past 999 the counter keeps growing and the number gets wider.
pub fn next_log_path(dir: &Path, date: NaiveDate) -> PathBuf {
    let mut n = 1;
    loop {
        let candidate = dir.join(log_file_name(date, n));
        if !candidate.exists() {
            return candidate;
        }
        n += 1;
    }
}
