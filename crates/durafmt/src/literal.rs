//! Duration literals
//!
//! Parses and writes the conventional duration-literal grammar, a signed
//! sequence of decimal numbers each followed by a unit:
//!
//! ```text
//! [-+]? ( [0-9]* ( . [0-9]* )? unit )+      unit = ns | us | µs | μs | ms | s | m | h
//! ```
//!
//! Examples: `"300ms"`, `"-1.5h"`, `"2h45m"`, `"354h22m3.24s"`. There are no
//! day, week or year units and no whitespace. The bare literal `"0"` is
//! accepted here; [`crate::FormattedDuration::from_string`] rejects it
//! because it names no unit.

use chrono::TimeDelta;

use crate::error::LiteralError;

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000 * NANOS_PER_MICRO;
const NANOS_PER_SECOND: u128 = 1_000 * NANOS_PER_MILLI;

/// Largest magnitude representable as signed 64-bit nanoseconds.
const MAX_MAGNITUDE: u128 = 1 << 63;

/// Fraction digits past this point cannot change the result.
const MAX_FRACTION_DIGITS: usize = 19;

/// Parse a duration literal.
///
/// # Examples
///
/// ```
/// use chrono::TimeDelta;
/// use durafmt_ru::literal::parse_literal;
///
/// assert_eq!(parse_literal("1h30m").unwrap(), TimeDelta::minutes(90));
/// assert_eq!(parse_literal("-1.5s").unwrap(), TimeDelta::milliseconds(-1500));
/// assert!(parse_literal("1d").is_err());
/// ```
///
/// # Errors
///
/// Returns a [`LiteralError`] when the text is empty, contains a malformed
/// number, lacks or misspells a unit, or exceeds the signed 64-bit
/// nanosecond range.
pub fn parse_literal(text: &str) -> Result<TimeDelta, LiteralError> {
    let (negative, mut rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    if rest == "0" {
        return Ok(TimeDelta::zero());
    }
    if rest.is_empty() {
        return Err(LiteralError::Empty { input: text.to_string() });
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let (whole, after_whole) = split_digits(rest);
        let (fraction, after_number) = match after_whole.strip_prefix('.') {
            Some(tail) => split_digits(tail),
            None => ("", after_whole),
        };
        // Either side of the point may be empty, but not both.
        if whole.is_empty() && fraction.is_empty() {
            return Err(LiteralError::InvalidNumber { input: text.to_string() });
        }

        let unit_len = after_number
            .find(|ch: char| ch == '.' || ch.is_ascii_digit())
            .unwrap_or(after_number.len());
        if unit_len == 0 {
            return Err(LiteralError::MissingUnit { input: text.to_string() });
        }
        let (unit, tail) = after_number.split_at(unit_len);
        let unit_nanos = unit_nanos(unit).ok_or_else(|| LiteralError::UnknownUnit {
            unit: unit.to_string(),
            input: text.to_string(),
        })?;

        let overflow = || LiteralError::Overflow { input: text.to_string() };
        let value = decimal_value(whole)
            .and_then(|whole| whole.checked_mul(unit_nanos))
            .and_then(|value| value.checked_add(fraction_value(fraction, unit_nanos)))
            .ok_or_else(overflow)?;
        total = total.checked_add(value).filter(|total| *total <= MAX_MAGNITUDE).ok_or_else(overflow)?;

        rest = tail;
    }

    let nanos = i128::try_from(total)
        .ok()
        .map(|magnitude| if negative { -magnitude } else { magnitude })
        .and_then(|nanos| i64::try_from(nanos).ok())
        .ok_or_else(|| LiteralError::Overflow { input: text.to_string() })?;

    Ok(TimeDelta::nanoseconds(nanos))
}

/// Write the canonical literal for a signed microsecond count.
///
/// Zero is `"0s"`; magnitudes below one second use a single `µs` or `ms`
/// term; anything longer is written as hours, minutes and (fractional)
/// seconds, e.g. `"1h0m0s"` or `"-1m40s"`. The output always parses back to
/// the same value.
///
/// # Examples
///
/// ```
/// use durafmt_ru::literal::to_literal;
///
/// assert_eq!(to_literal(0), "0s");
/// assert_eq!(to_literal(1_500), "1.5ms");
/// assert_eq!(to_literal(-100_000_000), "-1m40s");
/// assert_eq!(to_literal(3_600_000_000), "1h0m0s");
/// ```
#[must_use]
pub fn to_literal(micros: i128) -> String {
    if micros == 0 {
        return "0s".to_string();
    }

    let sign = if micros < 0 { "-" } else { "" };
    let magnitude = micros.unsigned_abs();

    if magnitude < 1_000 {
        return format!("{sign}{magnitude}µs");
    }
    if magnitude < 1_000_000 {
        return format!("{sign}{}ms", with_fraction(magnitude, 1_000, 3));
    }

    let minutes = magnitude / 60_000_000;
    let seconds = with_fraction(magnitude % 60_000_000, 1_000_000, 6);
    match (minutes / 60, minutes % 60) {
        (0, 0) => format!("{sign}{seconds}s"),
        (0, minutes) => format!("{sign}{minutes}m{seconds}s"),
        (hours, minutes) => format!("{sign}{hours}h{minutes}m{seconds}s"),
    }
}

/// Signed microseconds of `delta`, truncating sub-microsecond nanoseconds
/// toward zero.
pub(crate) fn micros_of(delta: TimeDelta) -> i128 {
    i128::from(delta.num_seconds()) * 1_000_000 + i128::from(delta.subsec_nanos() / 1_000)
}

fn split_digits(text: &str) -> (&str, &str) {
    let end = text.find(|ch: char| !ch.is_ascii_digit()).unwrap_or(text.len());
    text.split_at(end)
}

fn unit_nanos(unit: &str) -> Option<u128> {
    let nanos = match unit {
        "ns" => 1,
        // U+00B5 micro sign and U+03BC Greek mu
        "us" | "µs" | "μs" => NANOS_PER_MICRO,
        "ms" => NANOS_PER_MILLI,
        "s" => NANOS_PER_SECOND,
        "m" => 60 * NANOS_PER_SECOND,
        "h" => 3_600 * NANOS_PER_SECOND,
        _ => return None,
    };
    Some(nanos)
}

fn decimal_value(digits: &str) -> Option<u128> {
    digits.bytes().try_fold(0u128, |acc, digit| {
        acc.checked_mul(10)?.checked_add(u128::from(digit - b'0'))
    })
}

/// `0.<digits>` of one unit, in nanoseconds, truncated.
fn fraction_value(digits: &str, unit_nanos: u128) -> u128 {
    let digits = &digits[..digits.len().min(MAX_FRACTION_DIGITS)];
    let (numerator, scale) = digits.bytes().fold((0u128, 1u128), |(numerator, scale), digit| {
        (numerator * 10 + u128::from(digit - b'0'), scale * 10)
    });
    numerator * unit_nanos / scale
}

fn with_fraction(value: u128, per_unit: u128, width: usize) -> String {
    let whole = value / per_unit;
    let fraction = value % per_unit;
    if fraction == 0 {
        return whole.to_string();
    }
    let digits = format!("{fraction:0width$}");
    format!("{whole}.{}", digits.trim_end_matches('0'))
}

#[cfg(test)]
mod tests {
    //! Unit tests for literal.
    use super::*;

    /// Validates single-term literals for every accepted unit.
    ///
    /// Assertions:
    /// - Confirms `parse_literal("5s")` equals 5 seconds.
    /// - Confirms the three spellings of microseconds agree.
    #[test]
    fn test_parse_single_units() {
        assert_eq!(parse_literal("7ns").unwrap(), TimeDelta::nanoseconds(7));
        assert_eq!(parse_literal("3us").unwrap(), TimeDelta::microseconds(3));
        assert_eq!(parse_literal("3µs").unwrap(), TimeDelta::microseconds(3));
        assert_eq!(parse_literal("3μs").unwrap(), TimeDelta::microseconds(3));
        assert_eq!(parse_literal("500ms").unwrap(), TimeDelta::milliseconds(500));
        assert_eq!(parse_literal("5s").unwrap(), TimeDelta::seconds(5));
        assert_eq!(parse_literal("10m").unwrap(), TimeDelta::minutes(10));
        assert_eq!(parse_literal("2h").unwrap(), TimeDelta::hours(2));
    }

    /// Validates composite literals, including repeated and unordered
    /// units.
    ///
    /// Assertions:
    /// - Confirms `"3h4m5s"` is 3h + 4m + 5s.
    /// - Confirms `"0m2m34h"` is 34h + 2m.
    #[test]
    fn test_parse_compound() {
        assert_eq!(
            parse_literal("3h4m5s").unwrap(),
            TimeDelta::hours(3) + TimeDelta::minutes(4) + TimeDelta::seconds(5)
        );
        assert_eq!(parse_literal("0m2m34h").unwrap(), TimeDelta::hours(34) + TimeDelta::minutes(2));
        assert_eq!(
            parse_literal("6h7m8s9ms").unwrap(),
            TimeDelta::hours(6)
                + TimeDelta::minutes(7)
                + TimeDelta::seconds(8)
                + TimeDelta::milliseconds(9)
        );
    }

    /// Validates fractional values on either side of the point.
    #[test]
    fn test_parse_fractions() {
        assert_eq!(
            parse_literal("354h22m3.24s").unwrap(),
            TimeDelta::hours(354)
                + TimeDelta::minutes(22)
                + TimeDelta::seconds(3)
                + TimeDelta::milliseconds(240)
        );
        assert_eq!(parse_literal("1.5h").unwrap(), TimeDelta::minutes(90));
        assert_eq!(parse_literal(".5s").unwrap(), TimeDelta::milliseconds(500));
        assert_eq!(parse_literal("5.s").unwrap(), TimeDelta::seconds(5));
        assert_eq!(parse_literal("4.000000h").unwrap(), TimeDelta::hours(4));
        assert_eq!(parse_literal("0.3333333333333333333333h").unwrap(), TimeDelta::nanoseconds(1_199_999_999_999));
    }

    /// Validates signs and the bare zero literal.
    #[test]
    fn test_parse_signs() {
        assert_eq!(parse_literal("-100s").unwrap(), TimeDelta::seconds(-100));
        assert_eq!(parse_literal("+100s").unwrap(), TimeDelta::seconds(100));
        assert_eq!(parse_literal("-0m2s").unwrap(), TimeDelta::seconds(-2));
        assert_eq!(parse_literal("0").unwrap(), TimeDelta::zero());
        assert_eq!(parse_literal("-0").unwrap(), TimeDelta::zero());
        assert_eq!(parse_literal("-0h").unwrap(), TimeDelta::zero());
    }

    /// Validates the parse errors scenario.
    ///
    /// Assertions:
    /// - Ensures empty and sign-only literals are `Empty`.
    /// - Ensures `"1"` is `MissingUnit` and `"1d"` is `UnknownUnit`.
    /// - Ensures whitespace and stray points are rejected.
    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_literal(""), Err(LiteralError::Empty { .. })));
        assert!(matches!(parse_literal("-"), Err(LiteralError::Empty { .. })));
        assert!(matches!(parse_literal("1"), Err(LiteralError::MissingUnit { .. })));
        assert!(matches!(parse_literal("1h2"), Err(LiteralError::MissingUnit { .. })));
        assert!(matches!(
            parse_literal("1d"),
            Err(LiteralError::UnknownUnit { ref unit, .. }) if unit == "d"
        ));
        assert!(matches!(parse_literal("1w"), Err(LiteralError::UnknownUnit { .. })));
        assert!(matches!(parse_literal("1wk"), Err(LiteralError::UnknownUnit { .. })));
        assert!(matches!(parse_literal("1y"), Err(LiteralError::UnknownUnit { .. })));
        assert!(matches!(parse_literal("1h 30m"), Err(LiteralError::UnknownUnit { .. })));
        assert!(matches!(parse_literal(".s"), Err(LiteralError::InvalidNumber { .. })));
        assert!(matches!(parse_literal("h"), Err(LiteralError::InvalidNumber { .. })));
        assert!(matches!(parse_literal("--1s"), Err(LiteralError::InvalidNumber { .. })));
    }

    /// Validates the signed 64-bit nanosecond range.
    ///
    /// Assertions:
    /// - Confirms the extreme negative value is accepted.
    /// - Ensures one nanosecond past either end overflows.
    #[test]
    fn test_parse_overflow() {
        assert_eq!(parse_literal("-9223372036854775808ns").unwrap(), TimeDelta::nanoseconds(i64::MIN));
        assert_eq!(parse_literal("9223372036854775807ns").unwrap(), TimeDelta::nanoseconds(i64::MAX));
        assert!(matches!(parse_literal("9223372036854775808ns"), Err(LiteralError::Overflow { .. })));
        assert!(matches!(parse_literal("-9223372036854775809ns"), Err(LiteralError::Overflow { .. })));
        assert!(matches!(parse_literal("3000000h"), Err(LiteralError::Overflow { .. })));
        assert!(matches!(
            parse_literal("99999999999999999999999999999999999999999h"),
            Err(LiteralError::Overflow { .. })
        ));
    }

    /// Validates the canonical literal writer.
    #[test]
    fn test_to_literal() {
        assert_eq!(to_literal(0), "0s");
        assert_eq!(to_literal(1), "1µs");
        assert_eq!(to_literal(-999), "-999µs");
        assert_eq!(to_literal(1_000), "1ms");
        assert_eq!(to_literal(1_001), "1.001ms");
        assert_eq!(to_literal(1_000_000), "1s");
        assert_eq!(to_literal(1_500_000), "1.5s");
        assert_eq!(to_literal(-1_001_002), "-1.001002s");
        assert_eq!(to_literal(60_000_000), "1m0s");
        assert_eq!(to_literal(3_600_000_000), "1h0m0s");
        assert_eq!(to_literal(8_759 * 3_600_000_000), "8759h0m0s");
    }

    /// Validates that written literals parse back to the same value.
    #[test]
    fn test_to_literal_parses_back() {
        let samples = [1, 999, 1_001, 123_456, 1_000_001, 59_999_999, 3_661_000_001, 31_536_000_000_000];
        for micros in samples {
            for signed in [micros, -micros] {
                let parsed = parse_literal(&to_literal(signed)).unwrap();
                assert_eq!(micros_of(parsed), signed, "literal {}", to_literal(signed));
            }
        }
    }

    /// Validates that sub-microsecond remainders truncate toward zero.
    #[test]
    fn test_micros_of_truncates() {
        assert_eq!(micros_of(TimeDelta::nanoseconds(1_999)), 1);
        assert_eq!(micros_of(TimeDelta::nanoseconds(-1_999)), -1);
        assert_eq!(micros_of(TimeDelta::nanoseconds(999)), 0);
        assert_eq!(micros_of(TimeDelta::seconds(-100)), -100_000_000);
    }
}
