//! Pattern table: the ordered set of compiled date matchers.
//!
//! Each [`Shape`] has a template assembled from a handful of shared
//! fragments. The table always keeps the canonical priority order of
//! [`Shape::ALL`]; the enabled list only decides which entries are present.

use regex::{Regex, RegexBuilder};

use crate::error::ConfigError;
use crate::types::Shape;

// ---------------------------------------------------------------------------
// Template fragments
// ---------------------------------------------------------------------------

/// One or more of `-`, `/`, `.` or whitespace, in any combination.
const DELIM: &str = r"(?:\s*[-/.\s]+\s*)";
const DAY: &str = r"(?:3[01]|[12][0-9]|0?[1-9])";
const DAY_ORDINAL: &str = r"(?:0?[1-9]|[12][0-9]|3[01])(?:st|nd|rd|th)?";
const MONTH_NUM: &str = r"(?:0?[1-9]|1[012])";
const MONTH_NAME: &str = r"(?:Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|Jun(?:e)?|Jul(?:y)?|Aug(?:ust)?|Sep(?:tember)?|Sept|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)";
/// ASCII digits only; `\d` would also take Arabic-Indic and fullwidth digits.
const YEAR4: &str = r"[0-9]{4}";
const YEAR2: &str = r"[0-9]{2}";
/// Two or four digit year.
pub(crate) const YEAR_FLEX: &str = r"(?:(?:19|20)?[0-9]{2})";
/// `Q3`, `Quarter3`, `~Q3 of`. The digit is glued to the marker.
pub(crate) const QUARTER: &str = r"~?\bQ(?:uarter)?[1-4]\s*(?:of)?";

/// The regular expression source for `shape`, anchored on word boundaries.
pub fn template(shape: Shape) -> String {
    let body = match shape {
        Shape::MonthNameDayYear => format!("{MONTH_NAME}{DELIM}{DAY_ORDINAL}[,.]?{DELIM}{YEAR_FLEX}"),
        Shape::DayMonthNameYear => format!("{DAY}{DELIM}{MONTH_NAME}{DELIM}{YEAR4}"),
        Shape::DayMonthYear => format!("{DAY}{DELIM}{MONTH_NUM}{DELIM}{YEAR4}"),
        Shape::MonthDayYear => format!("{MONTH_NUM}{DELIM}{DAY}{DELIM}{YEAR4}"),
        Shape::YearMonthDay => format!("{YEAR4}{DELIM}{MONTH_NUM}{DELIM}{DAY}"),
        Shape::DayMonthNameShortYear => format!("{DAY}{DELIM}{MONTH_NAME}{DELIM}{YEAR2}"),
        Shape::DayMonthShortYear => format!("{DAY}{DELIM}{MONTH_NUM}{DELIM}{YEAR2}"),
        Shape::MonthDayShortYear => format!("{MONTH_NUM}{DELIM}{DAY}{DELIM}{YEAR2}"),
        Shape::ShortYearMonthDay => format!("{YEAR2}{DELIM}{MONTH_NUM}{DELIM}{DAY}"),
        Shape::MonthNameYear => format!("{MONTH_NAME},?{DELIM}{YEAR4}"),
        Shape::YearMonthName => format!("{YEAR4}{DELIM}{MONTH_NAME}"),
        Shape::MonthYear => format!("{MONTH_NUM}{DELIM}{YEAR_FLEX}"),
        Shape::YearMonth => format!("{YEAR4}{DELIM}{MONTH_NUM}"),
        // The quarter marker carries its own leading boundary so `~Q3` still matches.
        Shape::QuarterYear => return format!(r"{QUARTER}{DELIM}{YEAR_FLEX}\b"),
        Shape::Year => YEAR4.to_string(),
    };
    format!(r"\b{body}\b")
}

// ---------------------------------------------------------------------------
// PatternTable
// ---------------------------------------------------------------------------

/// Ordered `(shape, matcher)` pairs. Built once, read-only afterwards.
#[derive(Debug, Clone)]
pub struct PatternTable {
    entries: Vec<(Shape, Regex)>,
}

impl PatternTable {
    /// Compile the matchers for the named shapes.
    ///
    /// Fails with [`ConfigError::UnknownShapes`] listing every name that has
    /// no template. Duplicate names are harmless.
    pub fn build<S: AsRef<str>>(enabled: &[S]) -> Result<Self, ConfigError> {
        let mut wanted = Vec::with_capacity(enabled.len());
        let mut unknown = Vec::new();
        for name in enabled {
            match name.as_ref().parse::<Shape>() {
                Ok(shape) => wanted.push(shape),
                Err(err) => unknown.push(err.0),
            }
        }
        if !unknown.is_empty() {
            return Err(ConfigError::UnknownShapes(unknown));
        }

        let mut entries = Vec::with_capacity(wanted.len());
        for shape in Shape::ALL {
            if wanted.contains(&shape) {
                entries.push((shape, compile(shape)?));
            }
        }
        Ok(Self { entries })
    }

    /// The full table with every shape enabled.
    pub fn all() -> Result<Self, ConfigError> {
        Self::build(&Shape::ALL.map(Shape::name))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Shape, &Regex)> {
        self.entries.iter().map(|(shape, re)| (*shape, re))
    }

    pub fn shapes(&self) -> impl Iterator<Item = Shape> + '_ {
        self.entries.iter().map(|(shape, _)| *shape)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn compile(shape: Shape) -> Result<Regex, ConfigError> {
    RegexBuilder::new(&template(shape))
        .case_insensitive(true)
        .build()
        .map_err(|source| ConfigError::Pattern { shape, source })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
