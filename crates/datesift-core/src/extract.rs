//! Date extractor: finds the first date-like substring in free text.

use crate::patterns::PatternTable;
use crate::types::DateMatch;

/// Return the first shape, in table order, whose matcher finds anything in
/// `text`, together with the exact matched substring.
///
/// Later shapes are never consulted once one matches, even if they would
/// match earlier in the text. `None` means the text holds no date.
pub fn extract<'t>(table: &PatternTable, text: &'t str) -> Option<DateMatch<'t>> {
    table.iter().find_map(|(shape, re)| {
        re.find(text).map(|m| DateMatch {
            shape,
            text: m.as_str(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Shape;
    use rstest::rstest;

    #[rstest]
    #[case("Released 05-Mar-2024, originally announced 2023", Shape::DayMonthNameYear, "05-Mar-2024")]
    #[case("GA on March 5th, 2024", Shape::MonthNameDayYear, "March 5th, 2024")]
    #[case("2024-03-15", Shape::YearMonthDay, "2024-03-15")]
    #[case("12/25/2024", Shape::MonthDayYear, "12/25/2024")]
    #[case("31-Mar-24", Shape::DayMonthNameShortYear, "31-Mar-24")]
    #[case("until Mar-2024", Shape::MonthNameYear, "Mar-2024")]
    #[case("2024 March", Shape::YearMonthName, "2024 March")]
    #[case("03/2024", Shape::MonthYear, "03/2024")]
    #[case("2024-03", Shape::YearMonth, "2024-03")]
    #[case("Q3 2024", Shape::QuarterYear, "Q3 2024")]
    #[case("sometime in 2024", Shape::Year, "2024")]
    #[case::glued_to_letter("firmware v5.1.20", Shape::MonthYear, "1.20")]
    fn first_matching_shape_wins(#[case] text: &str, #[case] shape: Shape, #[case] matched: &str) {
        let table = PatternTable::all().unwrap();
        let found = extract(&table, text).expect("a date should be found");
        assert_eq!(found.shape, shape);
        assert_eq!(found.text, matched);
    }

    #[test]
    fn no_date_is_none() {
        let table = PatternTable::all().unwrap();
        assert_eq!(extract(&table, "Not Available"), None);
        assert_eq!(extract(&table, ""), None);
    }

    #[test]
    fn disabled_shapes_are_skipped() {
        let table = PatternTable::build(&["YYYY"]).unwrap();
        let found = extract(&table, "05-Mar-2024").unwrap();
        assert_eq!(found.shape, Shape::Year);
        assert_eq!(found.text, "2024");
    }
}
