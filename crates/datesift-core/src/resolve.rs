//! Date resolver: turns a matched fragment and a field role into one
//! calendar date.
//!
//! | Granularity | START | END |
//! |-------------|-------|-----|
//! | day         | as written | as written |
//! | month       | 1st of month | last day of month |
//! | quarter     | 1st of the quarter's last month | last day of that month |
//! | year        | 1 January | 31 December |
//!
//! Anything that cannot be read or does not form a real calendar date is a
//! [`Miss`]; the caller keeps the original text.

use std::sync::LazyLock;

use chrono::{Months, NaiveDate};
use regex::{Regex, RegexBuilder};

use crate::parse::{expand_year, parse_parts};
use crate::patterns::{QUARTER, YEAR_FLEX};
use crate::types::{DateMatch, FieldRole, Granularity};

/// Last calendar month of each quarter.
pub const QUARTER_CONVENTION: [(u32, u32); 4] = [(1, 3), (2, 6), (3, 9), (4, 12)];

static QUARTER_MARKER: LazyLock<Regex> = LazyLock::new(|| case_insensitive(QUARTER));
static QUARTER_YEAR: LazyLock<Regex> = LazyLock::new(|| case_insensitive(YEAR_FLEX));

fn case_insensitive(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .expect("quarter fragments are static and valid")
}

/// Outcome of resolving one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Resolved(NaiveDate),
    Unchanged(Miss),
}

/// Why a matched fragment did not resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Miss {
    /// The fragment could not be read into date components.
    Unparseable,
    /// The components do not form a real date (e.g. 30 February).
    InvalidDate,
    /// A quarter fragment without an isolable quarter digit.
    NoQuarter,
    /// A quarter fragment without an isolable year.
    NoYear,
}

impl std::fmt::Display for Miss {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Miss::Unparseable => write!(f, "unparseable fragment"),
            Miss::InvalidDate => write!(f, "not a calendar date"),
            Miss::NoQuarter => write!(f, "no quarter digit"),
            Miss::NoYear => write!(f, "no year"),
        }
    }
}

impl From<Result<NaiveDate, Miss>> for Resolution {
    fn from(result: Result<NaiveDate, Miss>) -> Self {
        match result {
            Ok(date) => Resolution::Resolved(date),
            Err(miss) => Resolution::Unchanged(miss),
        }
    }
}

/// Resolve `m` into a calendar date for a field with the given `role`.
pub fn resolve(m: &DateMatch<'_>, role: FieldRole, day_first: bool) -> Resolution {
    resolve_inner(m, role, day_first).into()
}

fn resolve_inner(m: &DateMatch<'_>, role: FieldRole, day_first: bool) -> Result<NaiveDate, Miss> {
    match m.shape.granularity() {
        Granularity::Day => {
            let parts = parse_parts(m.text, day_first).ok_or(Miss::Unparseable)?;
            let (month, day) = parts.month.zip(parts.day).ok_or(Miss::Unparseable)?;
            NaiveDate::from_ymd_opt(parts.year, month, day).ok_or(Miss::InvalidDate)
        }
        Granularity::Month => {
            let parts = parse_parts(m.text, day_first).ok_or(Miss::Unparseable)?;
            let month = parts.month.ok_or(Miss::Unparseable)?;
            month_bound(parts.year, month, role)
        }
        Granularity::Quarter => {
            let (quarter, year) = quarter_parts(m.text)?;
            month_bound(year, quarter_end_month(quarter).ok_or(Miss::NoQuarter)?, role)
        }
        Granularity::Year => {
            let parts = parse_parts(m.text, day_first).ok_or(Miss::Unparseable)?;
            let (month, day) = match role {
                FieldRole::Start => (1, 1),
                FieldRole::End => (12, 31),
            };
            NaiveDate::from_ymd_opt(parts.year, month, day).ok_or(Miss::InvalidDate)
        }
    }
}

/// First or last day of `month` in `year`, depending on `role`.
pub fn month_bound(year: i32, month: u32, role: FieldRole) -> Result<NaiveDate, Miss> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or(Miss::InvalidDate)?;
    match role {
        FieldRole::Start => Ok(first),
        FieldRole::End => last_day_of_month(first).ok_or(Miss::InvalidDate),
    }
}

fn last_day_of_month(first: NaiveDate) -> Option<NaiveDate> {
    first.checked_add_months(Months::new(1))?.pred_opt()
}

/// The last month of `quarter` (1–4).
pub fn quarter_end_month(quarter: u32) -> Option<u32> {
    QUARTER_CONVENTION
        .iter()
        .find(|(q, _)| *q == quarter)
        .map(|(_, month)| *month)
}

/// Isolate the quarter digit and the year of a quarter fragment.
///
/// The marker (`Q3`, `~Quarter3 of`) is located and removed, then the
/// remainder is searched for a two- or four-digit year.
pub fn quarter_parts(fragment: &str) -> Result<(u32, i32), Miss> {
    let marker = QUARTER_MARKER.find(fragment).ok_or(Miss::NoQuarter)?;
    let quarter = marker
        .as_str()
        .chars()
        .find_map(|c| c.to_digit(10))
        .ok_or(Miss::NoQuarter)?;

    let rest = format!("{}{}", &fragment[..marker.start()], &fragment[marker.end()..]);
    let year = QUARTER_YEAR.find(&rest).ok_or(Miss::NoYear)?;
    let value = year.as_str().parse().map_err(|_| Miss::NoYear)?;
    Ok((quarter, expand_year(value, year.as_str().len())))
}
