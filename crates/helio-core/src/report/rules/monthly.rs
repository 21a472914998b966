//! Monthly production table rule.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use super::FieldExtractor;
use super::patterns::MONTH_ROW;
use crate::models::report::MonthRecord;

/// Calendar month as labelled in the production table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Month number, 1 for January.
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Month::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| format!("unknown month: {}", s))
    }
}

/// Extractor for monthly production rows.
pub struct MonthlyProductionExtractor;

impl MonthlyProductionExtractor {
    pub const NAME: &'static str = "monthly_production";

    pub fn new() -> Self {
        Self
    }
}

impl Default for MonthlyProductionExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for MonthlyProductionExtractor {
    type Output = MonthRecord;

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let rows: Vec<MonthRecord> = MONTH_ROW
            .captures_iter(text)
            .map(|caps| MonthRecord {
                month: caps[1].to_string(),
                ghi: caps[2].to_string(),
                poa: caps[3].to_string(),
                shaded: caps[4].to_string(),
                nameplate_kwh: caps[5].to_string(),
                grid_kwh: caps[6].to_string(),
            })
            .collect();

        debug!("Matched {} monthly production rows", rows.len());
        rows
    }
}

/// Extract monthly production rows in text order.
pub fn extract_monthly_production(text: &str) -> Vec<MonthRecord> {
    MonthlyProductionExtractor::new().extract_all(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_row() {
        let rows = extract_monthly_production("January  120.3  110.5  5.2  1,234.0  1,100.5");
        assert_eq!(
            rows,
            vec![MonthRecord {
                month: "January".to_string(),
                ghi: "120.3".to_string(),
                poa: "110.5".to_string(),
                shaded: "5.2".to_string(),
                nameplate_kwh: "1,234.0".to_string(),
                grid_kwh: "1,100.5".to_string(),
            }]
        );
    }

    #[test]
    fn test_rows_in_text_order_with_duplicates() {
        let text = "March 1 2 3 4 5\nJanuary 1 2 3 4 5\nMarch 9 9 9 9 9\n";
        let months: Vec<String> = extract_monthly_production(text)
            .into_iter()
            .map(|r| r.month)
            .collect();
        assert_eq!(months, vec!["March", "January", "March"]);
    }

    #[test]
    fn test_month_must_be_whole_word() {
        assert!(extract_monthly_production("Mayday 1 2 3 4 5").is_empty());
        assert!(extract_monthly_production("Month  GHI  POA").is_empty());
    }

    #[test]
    fn test_row_needs_five_numbers() {
        assert!(extract_monthly_production("April  80.1  95.2  93.0  75,000.0").is_empty());
    }

    #[test]
    fn test_month_parse() {
        assert_eq!("September".parse::<Month>(), Ok(Month::September));
        assert_eq!(Month::September.number(), 9);
        assert_eq!(Month::December.to_string(), "December");
        assert!("Sept".parse::<Month>().is_err());
    }
}
