//! Domain-specific assertion macros for datesift harnesses.
//!
//! These add context to failures: which field, which role, and what the
//! normalizer actually matched.

/// Assert that normalising `text` in `field` yields `expected`.
///
/// ```rust
/// assert_normalized!(n, "end_of_support", FieldMeta::date(), "Mar-2024" => "31-Mar-24");
/// ```
#[macro_export]
macro_rules! assert_normalized {
    ($n:expr, $field:expr, $meta:expr, $text:expr => $expected:expr) => {{
        let n: &datesift::DateNormalizer = &$n;
        let meta: datesift::FieldMeta = $meta;
        let text: &str = $text;
        let actual = n.normalize($field, &meta, text);
        if actual != $expected {
            panic!(
                "assert_normalized! failed:\n  field:    {:?}\n  text:     {:?}\n  expected: {:?}\n  actual:   {:?}\n  outcome:  {:?}",
                $field,
                text,
                $expected,
                actual,
                n.analyze($field, &meta, text),
            );
        }
    }};
}

/// Assert that `text` comes back exactly as given.
#[macro_export]
macro_rules! assert_unchanged {
    ($n:expr, $field:expr, $text:expr) => {{
        let n: &datesift::DateNormalizer = &$n;
        let text: &str = $text;
        let meta = datesift::FieldMeta::date();
        let actual = n.normalize($field, &meta, text);
        if actual != text {
            panic!(
                "assert_unchanged! failed:\n  field:  {:?}\n  input:  {:?}\n  output: {:?}\n  outcome: {:?}",
                $field,
                text,
                actual,
                n.analyze($field, &meta, text),
            );
        }
    }};
}
