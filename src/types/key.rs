//! Record lookup keys
//!
//! Callers look records up either by a textual id or by a numeric one. The
//! two comparison modes used by the store behave differently for numeric
//! keys:
//!
//! - **loose** (`get`, `delete`, the duplicate check in `add`): a numeric key
//!   is compared against the field's numeric value, so `1` matches `"1"`,
//!   `" 1"` and `"1.0"`.
//! - **strict** (`update`): only a textual key equal to the field matches;
//!   a numeric key never matches any field.

use std::fmt;

/// Id supplied by the caller to locate a record
#[derive(Debug, Clone, PartialEq)]
pub enum RecordKey {
    Text(String),
    Number(f64),
}

impl RecordKey {
    /// Coercive comparison against the id field of a line
    pub fn loose_eq(&self, field: &str) -> bool {
        match self {
            RecordKey::Text(text) => text == field,
            RecordKey::Number(number) => coerce_number(field).is_some_and(|value| value == *number),
        }
    }

    /// Exact comparison against the id field of a line
    pub fn strict_eq(&self, field: &str) -> bool {
        match self {
            RecordKey::Text(text) => text == field,
            RecordKey::Number(_) => false,
        }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKey::Text(text) => f.write_str(text),
            RecordKey::Number(number) if number.is_nan() => f.write_str("NaN"),
            RecordKey::Number(number) if number.is_infinite() => {
                f.write_str(if *number > 0.0 { "Infinity" } else { "-Infinity" })
            }
            // -0 renders as 0
            RecordKey::Number(number) if *number == 0.0 => f.write_str("0"),
            RecordKey::Number(number) => {
                let magnitude = number.abs();
                if magnitude >= 1e21 || magnitude < 1e-6 {
                    write_exponent(f, *number)
                } else {
                    write!(f, "{}", number)
                }
            }
        }
    }
}

/// Shortest exponent form with an explicit sign: `1e+21`, `1.5e-7`
fn write_exponent(f: &mut fmt::Formatter<'_>, number: f64) -> fmt::Result {
    let formatted = format!("{:e}", number);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            write!(f, "{}e+{}", mantissa, exponent)
        }
        _ => f.write_str(&formatted),
    }
}

impl From<&str> for RecordKey {
    fn from(text: &str) -> Self {
        RecordKey::Text(text.to_string())
    }
}

impl From<String> for RecordKey {
    fn from(text: String) -> Self {
        RecordKey::Text(text)
    }
}

impl From<&String> for RecordKey {
    fn from(text: &String) -> Self {
        RecordKey::Text(text.clone())
    }
}

impl From<&RecordKey> for RecordKey {
    fn from(key: &RecordKey) -> Self {
        key.clone()
    }
}

impl From<f64> for RecordKey {
    fn from(number: f64) -> Self {
        RecordKey::Number(number)
    }
}

macro_rules! numeric_key_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for RecordKey {
                fn from(number: $ty) -> Self {
                    RecordKey::Number(number as f64)
                }
            }
        )*
    };
}

numeric_key_from!(i32, i64, u32, u64, usize);

/// Numeric value of a text field, or `None` when it is not a number
///
/// Surrounding whitespace is ignored, a blank field counts as zero, and the
/// `0x`/`0o`/`0b` prefixes and `Infinity` are recognised.
fn coerce_number(field: &str) -> Option<f64> {
    let trimmed = field.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if trimmed.is_empty() {
        return Some(0.0);
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = trimmed.strip_prefix(prefix) {
            if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
                return None;
            }
            return u128::from_str_radix(digits, radix).ok().map(|value| value as f64);
        }
    }

    match trimmed {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    // f64::from_str also accepts "inf" and "nan", which are not numbers here
    if !trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return None;
    }

    trimmed.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::same_text(RecordKey::from("1"), "1", true)]
    #[case::different_text(RecordKey::from("1"), "2", false)]
    #[case::text_is_not_trimmed(RecordKey::from("1"), " 1", false)]
    #[case::number_matches_text(RecordKey::from(1), "1", true)]
    #[case::number_ignores_whitespace(RecordKey::from(1), " 1 ", true)]
    #[case::number_matches_decimal_form(RecordKey::from(1), "1.0", true)]
    #[case::number_matches_exponent(RecordKey::from(100), "1e2", true)]
    #[case::number_matches_hex(RecordKey::from(26), "0x1A", true)]
    #[case::zero_matches_blank(RecordKey::from(0), "", true)]
    #[case::number_rejects_words(RecordKey::from(1), "one", false)]
    #[case::number_rejects_inf(RecordKey::from(f64::INFINITY), "inf", false)]
    #[case::number_accepts_infinity(RecordKey::from(f64::INFINITY), "Infinity", true)]
    #[case::nan_never_matches(RecordKey::from(f64::NAN), "NaN", false)]
    fn test_loose_eq(#[case] key: RecordKey, #[case] field: &str, #[case] expected: bool) {
        assert_eq!(key.loose_eq(field), expected);
    }

    #[rstest]
    #[case::same_text(RecordKey::from("1"), "1", true)]
    #[case::different_text(RecordKey::from("1"), "01", false)]
    #[case::number_never_matches(RecordKey::from(1), "1", false)]
    fn test_strict_eq(#[case] key: RecordKey, #[case] field: &str, #[case] expected: bool) {
        assert_eq!(key.strict_eq(field), expected);
    }

    #[rstest]
    #[case(RecordKey::from("abc"), "abc")]
    #[case(RecordKey::from(1), "1")]
    #[case(RecordKey::from(1.5), "1.5")]
    #[case(RecordKey::from(-0.0), "0")]
    #[case(RecordKey::from(f64::NEG_INFINITY), "-Infinity")]
    #[case::large(RecordKey::from(1e21), "1e+21")]
    #[case::large_fraction(RecordKey::from(-1.5e300), "-1.5e+300")]
    #[case::below_exponent_threshold(RecordKey::from(1e20), "100000000000000000000")]
    #[case::small(RecordKey::from(1e-7), "1e-7")]
    #[case::small_fraction(RecordKey::from(2.5e-8), "2.5e-8")]
    #[case::above_exponent_threshold(RecordKey::from(0.000001), "0.000001")]
    fn test_display(#[case] key: RecordKey, #[case] expected: &str) {
        assert_eq!(key.to_string(), expected);
    }
}
