//! General free-text date parser.
//!
//! Reads a matched fragment such as `March 5th, 2024`, `05-03-24` or
//! `2024 Mar` into its year, month and day components. Components the text
//! does not carry are left as `None`; completing them is the resolver's job.

use phf::phf_map;

/// Two-digit years below this become 20xx, the rest 19xx.
pub const CENTURY_PIVOT: u32 = 69;

static MONTHS: phf::Map<&'static str, u32> = phf_map! {
    "jan" => 1, "january" => 1,
    "feb" => 2, "february" => 2,
    "mar" => 3, "march" => 3,
    "apr" => 4, "april" => 4,
    "may" => 5,
    "jun" => 6, "june" => 6,
    "jul" => 7, "july" => 7,
    "aug" => 8, "august" => 8,
    "sep" => 9, "sept" => 9, "september" => 9,
    "oct" => 10, "october" => 10,
    "nov" => 11, "november" => 11,
    "dec" => 12, "december" => 12,
};

/// Date components read from a fragment. Values are not range-checked
/// beyond what the assignment rules need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParts {
    pub year: i32,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

#[derive(Debug, Clone, Copy)]
struct Number {
    value: u32,
    digits: usize,
}

impl Number {
    fn is_year(self) -> bool {
        self.digits > 2 || self.value > 31
    }
}

/// Expand a year as written. Two-digit years pivot on [`CENTURY_PIVOT`].
pub fn expand_year(value: u32, digits: usize) -> i32 {
    let value = value as i32;
    if digits > 2 {
        value
    } else if value < CENTURY_PIVOT as i32 {
        2000 + value
    } else {
        1900 + value
    }
}

/// Look up a month name or abbreviation, case-insensitively.
pub fn month_from_name(word: &str) -> Option<u32> {
    MONTHS.get(word.to_ascii_lowercase().as_str()).copied()
}

/// Parse `fragment` into date components.
///
/// `day_first` decides `dd/mm` against `mm/dd` when three bare numbers are
/// ambiguous. Returns `None` when the fragment holds an unknown word, more
/// than one month name, or a number combination with no reading.
pub fn parse_parts(fragment: &str, day_first: bool) -> Option<DateParts> {
    let mut numbers = Vec::with_capacity(3);
    let mut month_name = None;

    for token in fragment
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|t| !t.is_empty())
    {
        if let Some(number) = read_number(token) {
            numbers.push(number);
        } else if token.eq_ignore_ascii_case("of") {
            continue;
        } else if let Some(month) = month_from_name(token) {
            if month_name.replace(month).is_some() {
                return None;
            }
        } else {
            return None;
        }
    }

    match month_name {
        Some(month) => with_month_name(month, &numbers),
        None => numeric_only(&numbers, day_first),
    }
}

/// `5`, `05`, `2024`, `5th`.
fn read_number(token: &str) -> Option<Number> {
    let digits = token.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let (num, suffix) = token.split_at(digits);
    if !suffix.is_empty() && !["st", "nd", "rd", "th"].iter().any(|s| suffix.eq_ignore_ascii_case(s)) {
        return None;
    }
    let value = num.parse().ok()?;
    Some(Number { value, digits })
}

fn with_month_name(month: u32, numbers: &[Number]) -> Option<DateParts> {
    let (day, year) = match *numbers {
        [year] => (None, year),
        [a, b] if a.is_year() && !b.is_year() => (Some(b), a),
        [a, b] => (Some(a), b),
        _ => return None,
    };
    Some(DateParts {
        year: expand_year(year.value, year.digits),
        month: Some(month),
        day: day.map(|d| d.value),
    })
}

fn numeric_only(numbers: &[Number], day_first: bool) -> Option<DateParts> {
    match *numbers {
        [year] => Some(DateParts {
            year: expand_year(year.value, year.digits),
            month: None,
            day: None,
        }),
        [a, b] => {
            let (month, year) = if a.is_year() && !b.is_year() { (b, a) } else { (a, b) };
            Some(DateParts {
                year: expand_year(year.value, year.digits),
                month: Some(month.value),
                day: None,
            })
        }
        [a, b, c] => {
            if a.is_year() {
                let (month, day) = swap_if_needed(b.value, c.value);
                Some(DateParts {
                    year: expand_year(a.value, a.digits),
                    month: Some(month),
                    day: Some(day),
                })
            } else {
                let (month, day) = if day_first { (b.value, a.value) } else { (a.value, b.value) };
                let (month, day) = swap_if_needed(month, day);
                Some(DateParts {
                    year: expand_year(c.value, c.digits),
                    month: Some(month),
                    day: Some(day),
                })
            }
        }
        _ => None,
    }
}

/// Swap month and day when the month cannot be a month but the day can.
fn swap_if_needed(month: u32, day: u32) -> (u32, u32) {
    if month > 12 && (1..=12).contains(&day) {
        (day, month)
    } else {
        (month, day)
    }
}
