//! Parsing helpers for the numeric-looking strings kept in report records.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::FRAME_SIZE;

/// Parse a report number such as "1,234.5" or "98.7".
///
/// Commas are thousands separators in these reports.
pub fn parse_number(s: &str) -> Option<Decimal> {
    let cleaned: String = s
        .trim()
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    Decimal::from_str(&cleaned).ok()
}

/// Parse a non-negative integer count, allowing thousands separators.
pub fn parse_count(s: &str) -> Option<u32> {
    let cleaned: String = s.trim().chars().filter(|c| *c != ',').collect();
    cleaned.parse().ok()
}

/// Parse a frame grid like "2x12" into `(rows, columns)`.
pub fn parse_frame_size(s: &str) -> Option<(u32, u32)> {
    let caps = FRAME_SIZE.captures(s)?;
    Some((caps[1].parse().ok()?, caps[2].parse().ok()?))
}
