use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::error::BudgetError;

/// Days in a non-leap year before month m begins, 1-indexed by month.
/// The final entry (365) counts the days before January of the next year.
const DAYS_BEFORE: [u32; 13] = [
    0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334, 365,
];

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

pub fn days_in_month(month: u32, year: i32) -> u32 {
    if month == 2 && is_leap_year(year) {
        return 29;
    }
    DAYS_BEFORE[month as usize] - DAYS_BEFORE[month as usize - 1]
}

/// A calendar month. Ordering is chronological: (year, month).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    /// Parses a `YYYYMM` selector like `202105`.
    pub fn parse(raw: &str) -> Result<Self, BudgetError> {
        let invalid = || BudgetError::InvalidMonth(raw.to_string());

        if raw.len() != 6 || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let year: i32 = raw[..4].parse().map_err(|_| invalid())?;
        let month: u32 = raw[4..].parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }

        Ok(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Ledger file name for this month, e.g. `202105.txt`.
    pub fn file_name(self) -> String {
        format!("{:04}{:02}.txt", self.year, self.month)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Expands a `YYYYMM-YYYYMM` range into the chronological inclusive
/// sequence of months. The end month must not precede the start month.
pub fn month_range(raw: &str) -> Result<Vec<YearMonth>, BudgetError> {
    let invalid = || BudgetError::InvalidRange(raw.to_string());

    let parts: Vec<&str> = raw.split('-').collect();
    let &[first, second] = parts.as_slice() else {
        return Err(invalid());
    };
    if first.len() != 6 || second.len() != 6 {
        return Err(invalid());
    }

    let start = YearMonth::parse(first).map_err(|_| invalid())?;
    let end = YearMonth::parse(second).map_err(|_| invalid())?;
    if end < start {
        return Err(invalid());
    }

    let mut months = Vec::new();
    let mut ym = start;
    while ym <= end {
        months.push(ym);
        ym = ym.next();
    }

    Ok(months)
}
