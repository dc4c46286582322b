//! Core types for datesift-core.
//!
//! This module defines the fundamental data structures shared across the
//! recognizer: the named pattern [`Shape`]s in priority order, the
//! [`FieldRole`] used to expand partial dates, the per-field [`FieldMeta`]
//! flags, and the [`DateMatch`] produced by the extractor.

use serde::Deserialize;
use std::str::FromStr;

/// A named category of textual date representation.
///
/// The declaration order is the matching priority: fully-qualified
/// day-month-year forms first, then month-year, then quarter-year, and the
/// bare year last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Shape {
    MonthNameDayYear,
    DayMonthNameYear,
    DayMonthYear,
    MonthDayYear,
    YearMonthDay,
    DayMonthNameShortYear,
    DayMonthShortYear,
    MonthDayShortYear,
    ShortYearMonthDay,
    MonthNameYear,
    YearMonthName,
    MonthYear,
    YearMonth,
    QuarterYear,
    Year,
}

/// How much of a calendar date a [`Shape`] pins down on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    Day,
    Month,
    Quarter,
    Year,
}

impl Shape {
    /// Every shape, in matching priority order.
    pub const ALL: [Shape; 15] = [
        Shape::MonthNameDayYear,
        Shape::DayMonthNameYear,
        Shape::DayMonthYear,
        Shape::MonthDayYear,
        Shape::YearMonthDay,
        Shape::DayMonthNameShortYear,
        Shape::DayMonthShortYear,
        Shape::MonthDayShortYear,
        Shape::ShortYearMonthDay,
        Shape::MonthNameYear,
        Shape::YearMonthName,
        Shape::MonthYear,
        Shape::YearMonth,
        Shape::QuarterYear,
        Shape::Year,
    ];

    /// The configuration name of this shape, e.g. `"DDMMMYYYY"`.
    pub fn name(self) -> &'static str {
        match self {
            Shape::MonthNameDayYear => "MMMDD,YYYY",
            Shape::DayMonthNameYear => "DDMMMYYYY",
            Shape::DayMonthYear => "DDMMYYYY",
            Shape::MonthDayYear => "MMDDYYYY",
            Shape::YearMonthDay => "YYYYMMDD",
            Shape::DayMonthNameShortYear => "DDMMMYY",
            Shape::DayMonthShortYear => "DDMMYY",
            Shape::MonthDayShortYear => "MMDDYY",
            Shape::ShortYearMonthDay => "YYMMDD",
            Shape::MonthNameYear => "MMMYYYY",
            Shape::YearMonthName => "YYYYMMM",
            Shape::MonthYear => "MMYYYY",
            Shape::YearMonth => "YYYYMM",
            Shape::QuarterYear => "QYYYY",
            Shape::Year => "YYYY",
        }
    }

    pub fn granularity(self) -> Granularity {
        match self {
            Shape::MonthNameYear | Shape::YearMonthName | Shape::MonthYear | Shape::YearMonth => {
                Granularity::Month
            }
            Shape::QuarterYear => Granularity::Quarter,
            Shape::Year => Granularity::Year,
            _ => Granularity::Day,
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shape {
    type Err = UnknownShape;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Shape::ALL
            .into_iter()
            .find(|shape| shape.name() == s)
            .ok_or_else(|| UnknownShape(s.to_string()))
    }
}

/// A shape name with no known template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownShape(pub String);

/// Whether a date field marks the start or the end of a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldRole {
    Start,
    End,
}

impl std::fmt::Display for FieldRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldRole::Start => write!(f, "start"),
            FieldRole::End => write!(f, "end"),
        }
    }
}

/// Declared metadata for one field of a scraped record.
///
/// When both explicit flags are set, `end_date_field` wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct FieldMeta {
    /// The field carries a date and should be offered to the normalizer.
    #[serde(default)]
    pub date_field: bool,
    #[serde(default)]
    pub start_date_field: bool,
    #[serde(default)]
    pub end_date_field: bool,
}

impl FieldMeta {
    /// A date field with no explicit role.
    pub fn date() -> Self {
        Self {
            date_field: true,
            ..Self::default()
        }
    }

    /// A date field explicitly marking the start of a range.
    pub fn start() -> Self {
        Self {
            date_field: true,
            start_date_field: true,
            ..Self::default()
        }
    }

    /// A date field explicitly marking the end of a range.
    pub fn end() -> Self {
        Self {
            date_field: true,
            end_date_field: true,
            ..Self::default()
        }
    }

    /// The explicit role, if either flag is set.
    pub fn explicit_role(&self) -> Option<FieldRole> {
        if self.end_date_field {
            Some(FieldRole::End)
        } else if self.start_date_field {
            Some(FieldRole::Start)
        } else {
            None
        }
    }
}

/// The first date-like substring found in a text, with the shape that matched it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateMatch<'t> {
    pub shape: Shape,
    /// The exact matched substring.
    pub text: &'t str,
}
