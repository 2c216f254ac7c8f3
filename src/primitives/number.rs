//! Styled number scanning.
//!
//! Scanning happens in two steps. `scan` strips the decorations the styles
//! allow (white space, signs, parentheses, currency symbol) and splits the
//! body into integral digits, fractional digits and an exponent. The typed
//! front ends then turn that into a value:
//!
//! - `parse_integer` accumulates digits with overflow checks and accepts a
//!   fractional part only if it is all zeros.
//! - `parse_float` rebuilds a canonical literal and hands it to `str::parse`.
//!
//! Hex input (`ALLOW_HEX_SPECIFIER`) is digits only, no sign, no `0x` prefix.
//! It is read as the two's-complement bit pattern of the target width, so
//! `"FF"` is `-1i8`.

use super::{Culture, NumberStyles};
use std::str::FromStr;

/// Integer targets of the numeric scanner. Implemented by `integer_capabilities!`.
pub(crate) trait Integer: Sized {
    /// Build a value from a sign and an absolute value; `None` when out of range.
    fn from_magnitude(negative: bool, magnitude: u128) -> Option<Self>;
    /// Reinterpret raw bits; `None` when they do not fit the target width.
    fn from_bits(bits: u128) -> Option<Self>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScannedNumber {
    pub negative: bool,
    pub integral: String,
    pub fraction: String,
    pub exponent: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Scan {
    Decimal(ScannedNumber),
    Hex(String),
}

// Beyond this every finite value has already overflowed or underflowed.
const EXPONENT_LIMIT: i32 = 100_000;

fn is_white(c: char) -> bool {
    matches!(c, '\u{9}'..='\u{d}' | ' ')
}

pub(crate) fn scan(text: &str, styles: NumberStyles, culture: &Culture) -> Option<Scan> {
    let mut s = text.trim_end_matches('\0');
    if styles.contains(NumberStyles::ALLOW_LEADING_WHITE) {
        s = s.trim_start_matches(is_white);
    }
    if styles.contains(NumberStyles::ALLOW_TRAILING_WHITE) {
        s = s.trim_end_matches(is_white);
    }

    if styles.contains(NumberStyles::ALLOW_HEX_SPECIFIER) {
        if s.is_empty() || !s.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        return Some(Scan::Hex(s.to_string()));
    }

    let mut negative = false;
    let mut signed = false;
    let mut currency = false;
    let mut parens = false;

    if styles.contains(NumberStyles::ALLOW_PARENTHESES) {
        if let Some(rest) = s.strip_prefix('(') {
            parens = true;
            s = rest;
        }
    }

    loop {
        if !signed && styles.contains(NumberStyles::ALLOW_LEADING_SIGN) {
            if let Some(rest) = culture.strip_negative(s) {
                negative = true;
                signed = true;
                s = rest;
                continue;
            }
            if let Some(rest) = s.strip_prefix(culture.positive_sign) {
                signed = true;
                s = rest;
                continue;
            }
        }
        if !currency && styles.contains(NumberStyles::ALLOW_CURRENCY_SYMBOL) {
            if let Some(rest) = s.strip_prefix(culture.currency_symbol) {
                currency = true;
                s = if styles.contains(NumberStyles::ALLOW_LEADING_WHITE) { rest.trim_start_matches(is_white) } else { rest };
                continue;
            }
        }
        break;
    }

    if parens {
        s = s.strip_suffix(')')?;
    }

    loop {
        if !signed && styles.contains(NumberStyles::ALLOW_TRAILING_SIGN) {
            if let Some(rest) = culture.strip_negative_suffix(s) {
                negative = true;
                signed = true;
                s = rest;
                continue;
            }
            if let Some(rest) = s.strip_suffix(culture.positive_sign) {
                signed = true;
                s = rest;
                continue;
            }
        }
        if !currency && styles.contains(NumberStyles::ALLOW_CURRENCY_SYMBOL) {
            if let Some(rest) = s.strip_suffix(culture.currency_symbol) {
                currency = true;
                s = if styles.contains(NumberStyles::ALLOW_TRAILING_WHITE) { rest.trim_end_matches(is_white) } else { rest };
                continue;
            }
        }
        break;
    }

    if parens {
        if signed {
            return None;
        }
        negative = true;
    }

    let (number, rest) = scan_body(s, styles, culture)?;
    if !rest.is_empty() {
        return None;
    }
    Some(Scan::Decimal(ScannedNumber { negative, ..number }))
}

/// Split digits, decimal part and exponent off the front of `s`.
fn scan_body<'t>(s: &'t str, styles: NumberStyles, culture: &Culture) -> Option<(ScannedNumber, &'t str)> {
    let allow_decimal = styles.contains(NumberStyles::ALLOW_DECIMAL_POINT);
    let mut integral = String::new();
    let mut fraction = String::new();
    let mut rest = s;

    while let Some(c) = rest.chars().next() {
        if c.is_ascii_digit() {
            integral.push(c);
            rest = &rest[1..];
            continue;
        }
        // The decimal separator wins when both separators share a character.
        if allow_decimal && rest.starts_with(culture.decimal_separator) {
            break;
        }
        if styles.contains(NumberStyles::ALLOW_THOUSANDS) && !integral.is_empty() {
            if let Some(after) = culture.strip_group(rest) {
                rest = after;
                continue;
            }
        }
        break;
    }

    if allow_decimal {
        if let Some(after) = rest.strip_prefix(culture.decimal_separator) {
            rest = after;
            while let Some(c) = rest.chars().next().filter(char::is_ascii_digit) {
                fraction.push(c);
                rest = &rest[1..];
            }
        }
    }

    if integral.is_empty() && fraction.is_empty() {
        return None;
    }

    let mut exponent = 0i32;
    if styles.contains(NumberStyles::ALLOW_EXPONENT) {
        if let Some(after) = rest.strip_prefix(['e', 'E']) {
            let (exp_negative, digits) = match culture.strip_negative(after) {
                Some(d) => (true, d),
                None => (false, after.strip_prefix(culture.positive_sign).unwrap_or(after)),
            };
            let len = digits.bytes().take_while(u8::is_ascii_digit).count();
            if len == 0 {
                return None;
            }
            for b in digits[..len].bytes() {
                exponent = (exponent * 10 + i32::from(b - b'0')).min(EXPONENT_LIMIT);
            }
            if exp_negative {
                exponent = -exponent;
            }
            rest = &digits[len..];
        }
    }

    Some((ScannedNumber { negative: false, integral, fraction, exponent }, rest))
}

impl ScannedNumber {
    /// Absolute integral value, or `None` if the number has a non-zero
    /// fractional part or does not fit in `u128`.
    fn integer_magnitude(&self) -> Option<u128> {
        let mut digits: Vec<u8> = self.integral.bytes().chain(self.fraction.bytes()).map(|b| b - b'0').collect();
        let scale = i64::from(self.exponent) - self.fraction.len() as i64;

        if scale < 0 {
            let keep = digits.len().saturating_sub((-scale) as usize);
            if digits[keep..].iter().any(|&d| d != 0) {
                return None;
            }
            digits.truncate(keep);
        }

        let mut value: u128 = 0;
        for d in digits {
            value = value.checked_mul(10)?.checked_add(u128::from(d))?;
        }

        if scale > 0 && value != 0 {
            for _ in 0..scale {
                value = value.checked_mul(10)?;
            }
        }
        Some(value)
    }

    fn to_literal(&self) -> String {
        let integral = if self.integral.is_empty() { "0" } else { self.integral.as_str() };
        let fraction = if self.fraction.is_empty() { "0" } else { self.fraction.as_str() };
        let sign = if self.negative { "-" } else { "" };
        format!("{sign}{integral}.{fraction}e{}", self.exponent)
    }
}

/// Parse an integer of any width under `styles` and `culture`.
pub(crate) fn parse_integer<T: Integer>(text: &str, styles: NumberStyles, culture: &Culture) -> Option<T> {
    match scan(text, styles, culture)? {
        Scan::Hex(digits) => {
            let mut bits: u128 = 0;
            for c in digits.chars() {
                bits = bits.checked_mul(16)?.checked_add(u128::from(c.to_digit(16)?))?;
            }
            T::from_bits(bits)
        }
        Scan::Decimal(number) => T::from_magnitude(number.negative, number.integer_magnitude()?),
    }
}

/// Parse a floating-point value under `styles` and `culture`.
///
/// `NaN`, `Infinity` and `∞` (optionally negated) are recognized regardless of
/// styles. Values beyond the target range become infinities.
pub(crate) fn parse_float<F: FromStr>(text: &str, styles: NumberStyles, culture: &Culture) -> Option<F> {
    if styles.contains(NumberStyles::ALLOW_HEX_SPECIFIER) {
        return None;
    }

    if let Some(special) = special_float(text, culture) {
        return special.parse::<F>().ok();
    }

    match scan(text, styles, culture)? {
        Scan::Decimal(number) => number.to_literal().parse::<F>().ok(),
        Scan::Hex(_) => None,
    }
}

fn special_float(text: &str, culture: &Culture) -> Option<&'static str> {
    let trimmed = text.trim_end_matches('\0').trim_matches(is_white);
    let is_infinity = |s: &str| s.eq_ignore_ascii_case("infinity") || s == "\u{221e}";

    if trimmed.eq_ignore_ascii_case("nan") {
        return Some("NaN");
    }
    if is_infinity(trimmed) {
        return Some("inf");
    }
    if let Some(rest) = trimmed.strip_prefix(culture.positive_sign) {
        if is_infinity(rest) {
            return Some("inf");
        }
    }
    if let Some(rest) = culture.strip_negative(trimmed) {
        if is_infinity(rest) {
            return Some("-inf");
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invariant() -> &'static Culture {
        Culture::invariant()
    }

    fn culture(name: &str) -> &'static Culture {
        Culture::by_name(name).unwrap()
    }

    #[test]
    fn integer_style_examples() {
        let cases: Vec<(Option<i64>, &str, NumberStyles)> = vec![
            (Some(9998), "0009998", NumberStyles::INTEGER),
            (None, "00A9998", NumberStyles::INTEGER),
            (Some(-42), "  -42  ", NumberStyles::INTEGER),
            (Some(42), "+42", NumberStyles::INTEGER),
            (None, "42-", NumberStyles::INTEGER),
            (Some(-42), "42-", NumberStyles::NUMBER),
            (None, " 42", NumberStyles::empty()),
            (None, "1,000", NumberStyles::INTEGER),
            (Some(1000), "1,000", NumberStyles::NUMBER),
            (Some(1000), "1,000.00", NumberStyles::NUMBER),
            (None, "1,000.50", NumberStyles::NUMBER),
            (None, "1.0", NumberStyles::INTEGER),
            (Some(1500), "1.5e3", NumberStyles::FLOAT),
            (None, "1.5e0", NumberStyles::FLOAT),
            (Some(-7), "(7)", NumberStyles::CURRENCY),
            (None, "(-7)", NumberStyles::CURRENCY),
            (Some(12), "\u{a4}12", NumberStyles::CURRENCY),
            (None, "", NumberStyles::INTEGER),
            (None, "-", NumberStyles::INTEGER),
            (None, "1e", NumberStyles::FLOAT),
        ];

        for (expected, input, styles) in cases {
            let got: Option<i64> = parse_integer(input, styles, invariant());
            assert_eq!(got, expected, "input '{}' with {:?}", input, styles);
        }
    }

    #[test]
    fn integer_range_is_checked() {
        assert_eq!(parse_integer::<u8>("255", NumberStyles::INTEGER, invariant()), Some(255));
        assert_eq!(parse_integer::<u8>("256", NumberStyles::INTEGER, invariant()), None);
        assert_eq!(parse_integer::<u8>("-1", NumberStyles::INTEGER, invariant()), None);
        assert_eq!(parse_integer::<u8>("-0", NumberStyles::INTEGER, invariant()), Some(0));
        assert_eq!(parse_integer::<i8>("-128", NumberStyles::INTEGER, invariant()), Some(-128));
        assert_eq!(parse_integer::<i8>("128", NumberStyles::INTEGER, invariant()), None);
        assert_eq!(
            parse_integer::<i128>("-170141183460469231731687303715884105728", NumberStyles::INTEGER, invariant()),
            Some(i128::MIN)
        );
        assert_eq!(
            parse_integer::<u128>("340282366920938463463374607431768211456", NumberStyles::INTEGER, invariant()),
            None
        );
    }

    #[test]
    fn hex_is_a_bit_pattern() {
        assert_eq!(parse_integer::<i8>("FF", NumberStyles::HEX_NUMBER, invariant()), Some(-1));
        assert_eq!(parse_integer::<u16>("00ff", NumberStyles::HEX_NUMBER, invariant()), Some(255));
        assert_eq!(parse_integer::<i32>("7FFFFFFF", NumberStyles::HEX_NUMBER, invariant()), Some(i32::MAX));
        assert_eq!(parse_integer::<u8>("100", NumberStyles::HEX_NUMBER, invariant()), None);
        assert_eq!(parse_integer::<i32>("0x10", NumberStyles::HEX_NUMBER, invariant()), None);
        assert_eq!(parse_integer::<i32>("-1", NumberStyles::HEX_NUMBER, invariant()), None);
    }

    #[test]
    fn culture_separators_drive_floats() {
        let styles = NumberStyles::FLOAT | NumberStyles::ALLOW_THOUSANDS;

        let got: Option<f64> = parse_float("0009998,0001", styles, culture("de-DE"));
        assert_eq!(got, Some(9998.0001));

        let got: Option<f64> = parse_float("1.234.567,5", styles, culture("de-DE"));
        assert_eq!(got, Some(1234567.5));

        let got: Option<f64> = parse_float("0009998,0001", styles, invariant());
        assert_eq!(got, Some(99980001.0));

        let got: Option<f64> = parse_float("1\u{a0}234,5", styles, culture("fr-FR"));
        assert_eq!(got, Some(1234.5));

        let got: Option<f64> = parse_float("\u{2212}2,5", styles, culture("sv-SE"));
        assert_eq!(got, Some(-2.5));
    }

    #[test]
    fn float_shapes() {
        let styles = NumberStyles::FLOAT;
        let cases: Vec<(Option<f64>, &str)> = vec![
            (Some(0.5), ".5"),
            (Some(5.0), "5."),
            (Some(-1.25e-3), "-1.25E-3"),
            (Some(12.0), " 12 "),
            (None, "."),
            (None, "1.2.3"),
            (None, "00A9998,0001"),
            (None, "1_000"),
        ];
        for (expected, input) in cases {
            assert_eq!(parse_float::<f64>(input, styles, invariant()), expected, "input '{}'", input);
        }
    }

    #[test]
    fn special_float_values() {
        let styles = NumberStyles::FLOAT;
        assert!(parse_float::<f64>("NaN", styles, invariant()).unwrap().is_nan());
        assert_eq!(parse_float::<f64>("Infinity", styles, invariant()), Some(f64::INFINITY));
        assert_eq!(parse_float::<f32>("-infinity", styles, invariant()), Some(f32::NEG_INFINITY));
        assert_eq!(parse_float::<f64>("\u{221e}", styles, invariant()), Some(f64::INFINITY));
        assert_eq!(parse_float::<f64>("1e400", styles, invariant()), Some(f64::INFINITY));
        assert_eq!(parse_float::<f64>("inf", styles, invariant()), None);
    }

    #[test]
    fn hex_never_applies_to_floats() {
        assert_eq!(parse_float::<f64>("FF", NumberStyles::HEX_NUMBER, invariant()), None);
    }
}
