//! Display formatting for file metadata.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, Utc};

const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Human-readable byte count: `0 B`, `512 B`, `1.5 KB`, `10.0 MB`.
#[must_use]
pub fn file_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    #[allow(clippy::cast_precision_loss)]
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}

/// Calendar date such as `Jan 15, 2024`.
#[must_use]
pub fn short_date(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y").to_string()
}

/// Whole-number percentage for a `0.0..=1.0` confidence score.
#[must_use]
pub fn percent(score: f32) -> String {
    format!("{:.0}%", (score.clamp(0.0, 1.0) * 100.0).round())
}
