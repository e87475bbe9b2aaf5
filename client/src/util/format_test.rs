use chrono::TimeZone;

use super::*;

#[test]
fn file_size_bytes_below_one_kilobyte() {
    assert_eq!(file_size(0), "0 B");
    assert_eq!(file_size(1023), "1023 B");
}

#[test]
fn file_size_scales_units() {
    assert_eq!(file_size(1024), "1.0 KB");
    assert_eq!(file_size(1536), "1.5 KB");
    assert_eq!(file_size(1_024_000), "1000.0 KB");
    assert_eq!(file_size(10 * 1024 * 1024), "10.0 MB");
    assert_eq!(file_size(3 * 1024 * 1024 * 1024), "3.0 GB");
}

#[test]
fn short_date_drops_time_and_padding() {
    let at = Utc.with_ymd_and_hms(2024, 1, 5, 23, 59, 0).unwrap();
    assert_eq!(short_date(&at), "Jan 5, 2024");
}

#[test]
fn percent_rounds_and_clamps() {
    assert_eq!(percent(0.87), "87%");
    assert_eq!(percent(0.876), "88%");
    assert_eq!(percent(1.4), "100%");
    assert_eq!(percent(-0.2), "0%");
}
