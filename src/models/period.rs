//! Summary period representation
//!
//! A period is either one calendar month or "all time". Month windows are
//! half-open: `[first day of month, first day of next month)`.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The window used to filter transactions for a summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Period {
    /// A single calendar month (e.g. "2024-01")
    Month { year: i32, month: u32 },

    /// No filtering: every transaction belongs to the period
    AllTime,
}

impl Period {
    /// Create a monthly period
    pub fn month(year: i32, month: u32) -> Self {
        Self::Month { year, month }
    }

    /// The month containing today
    pub fn current_month() -> Self {
        let today = chrono::Local::now().date_naive();
        Self::Month {
            year: today.year(),
            month: today.month(),
        }
    }

    /// Inclusive start of the window, None for all time
    pub fn start(&self) -> Option<NaiveDate> {
        match self {
            Self::Month { year, month } => NaiveDate::from_ymd_opt(*year, *month, 1),
            Self::AllTime => None,
        }
    }

    /// Exclusive end of the window (first day of the next month), None for
    /// all time
    pub fn end_exclusive(&self) -> Option<NaiveDate> {
        match self {
            Self::Month { year, month } => {
                if *month == 12 {
                    NaiveDate::from_ymd_opt(year + 1, 1, 1)
                } else {
                    NaiveDate::from_ymd_opt(*year, month + 1, 1)
                }
            }
            Self::AllTime => None,
        }
    }

    /// Check whether a date falls inside the window
    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.start(), self.end_exclusive()) {
            (Some(start), Some(end)) => date >= start && date < end,
            _ => true,
        }
    }

    /// Check whether a date falls strictly before the window. All-time has
    /// no prior window
    pub fn is_before(&self, date: NaiveDate) -> bool {
        match self.start() {
            Some(start) => date < start,
            None => false,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Month { year, month } => write!(f, "{:04}-{:02}", year, month),
            Self::AllTime => write!(f, "all time"),
        }
    }
}

impl FromStr for Period {
    type Err = String;

    /// Parse "YYYY-MM" or "all"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") || s.eq_ignore_ascii_case("all-time") {
            return Ok(Self::AllTime);
        }

        let (year_str, month_str) = s
            .split_once('-')
            .ok_or_else(|| format!("invalid period '{}', expected YYYY-MM or 'all'", s))?;
        let year: i32 = year_str
            .parse()
            .map_err(|_| format!("invalid year in period '{}'", s))?;
        let month: u32 = month_str
            .parse()
            .map_err(|_| format!("invalid month in period '{}'", s))?;

        if !(1..=12).contains(&month) {
            return Err(format!("month out of range in period '{}'", s));
        }

        Ok(Self::Month { year, month })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_bounds() {
        let p = Period::month(2024, 1);
        assert_eq!(p.start(), Some(date(2024, 1, 1)));
        assert_eq!(p.end_exclusive(), Some(date(2024, 2, 1)));
    }

    #[test]
    fn test_december_rolls_into_next_year() {
        let p = Period::month(2023, 12);
        assert_eq!(p.end_exclusive(), Some(date(2024, 1, 1)));
    }

    #[test]
    fn test_contains_is_half_open() {
        let p = Period::month(2024, 1);
        assert!(p.contains(date(2024, 1, 1)));
        assert!(p.contains(date(2024, 1, 31)));
        assert!(!p.contains(date(2024, 2, 1)));
        assert!(!p.contains(date(2023, 12, 31)));
    }

    #[test]
    fn test_all_time_contains_everything() {
        let p = Period::AllTime;
        assert!(p.contains(date(1970, 1, 1)));
        assert!(p.contains(date(2999, 12, 31)));
        assert!(!p.is_before(date(2024, 1, 1)));
    }

    #[test]
    fn test_is_before() {
        let p = Period::month(2024, 1);
        assert!(p.is_before(date(2023, 12, 31)));
        assert!(!p.is_before(date(2024, 1, 1)));
    }

    #[test]
    fn test_parse() {
        assert_eq!("2024-01".parse::<Period>().unwrap(), Period::month(2024, 1));
        assert_eq!("all".parse::<Period>().unwrap(), Period::AllTime);
        assert!("2024-13".parse::<Period>().is_err());
        assert!("january".parse::<Period>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Period::month(2024, 1).to_string(), "2024-01");
        assert_eq!(Period::AllTime.to_string(), "all time");
    }
}
