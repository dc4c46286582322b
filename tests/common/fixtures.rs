//! Static corpora of date field values as they appear on vendor lifecycle pages.
//!
//! Each entry is `(field text, expected output under the default config when
//! the field resolves to END)`.

/// Values with an explicit day; role never changes the output.
pub const CORPUS_FULL_DATES: &[(&str, &str)] = &[
    ("05-Mar-2024", "05-Mar-24"),
    ("March 5th, 2024", "05-Mar-24"),
    ("Released on Sep 30. 2019", "30-Sep-19"),
    ("2024-03-15", "15-Mar-24"),
    ("2024/3/5", "05-Mar-24"),
    ("12/25/2024", "25-Dec-24"),
    ("25.12.2024", "25-Dec-24"),
    ("31-Mar-24", "31-Mar-24"),
    ("1 January 1999", "01-Jan-99"),
];

/// Month-granularity values resolved as END.
pub const CORPUS_MONTH_YEAR: &[(&str, &str)] = &[
    ("Mar-2024", "31-Mar-24"),
    ("February 2024", "29-Feb-24"),
    ("Feb, 2023", "28-Feb-23"),
    ("2024 June", "30-Jun-24"),
    ("04/2024", "30-Apr-24"),
    ("2024-11", "30-Nov-24"),
    ("Sept 2025", "30-Sep-25"),
];

/// Quarter values resolved as END.
pub const CORPUS_QUARTERS: &[(&str, &str)] = &[
    ("Q1 2024", "31-Mar-24"),
    ("Q2 2024", "30-Jun-24"),
    ("Q3 2024", "30-Sep-24"),
    ("Q4 2024", "31-Dec-24"),
    ("~Q2 of 2025", "30-Jun-25"),
    ("Quarter3 2023", "30-Sep-23"),
    ("Q3 24", "30-Sep-24"),
];

/// Values no pattern matches; they must come back byte-for-byte.
pub const CORPUS_NO_DATE: &[&str] = &[
    "Not Available",
    "",
    "TBD",
    "See vendor notice",
    "N/A",
    "Version 10",
];

/// Values a pattern matches but that are not real dates.
pub const CORPUS_IMPOSSIBLE: &[&str] = &[
    "Feb 30, 2024",
    "31/02/2024",
    "April 31st, 2023",
    "31-Jun-2024",
];
