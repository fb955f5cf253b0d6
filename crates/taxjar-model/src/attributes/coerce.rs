//! Numeric normalization of response values.
//!
//! TaxJar responses mix real JSON numbers with numeric-looking strings
//! (`"10"`, `"0.0725"`). Every top-level value goes through [`coerce_value`]
//! once, at construction: anything that parses as a float is stored as a
//! number, as an integer when it has no fractional part.
//!
//! ## Accepted Grammar
//!
//! | Form | Example | Result |
//! |------|---------|--------|
//! | Decimal | `"10"`, `"-3"`, `" 42 "` | `Int` |
//! | Fraction | `"10.5"`, `".5"` | `Float` |
//! | Exponent | `"1e3"`, `"2.5E-1"` | `Int(1000)`, `Float(0.25)` |
//! | Underscores | `"1_000"` | `Int(1000)` |
//! | Hex | `"0x1A"` | `Int(26)` |
//!
//! Rejected (kept as strings): `""`, `"1."`, `"1__0"`, `"_1"`, `"inf"`,
//! `"NaN"`, `"1e400"` and anything else that is not a finite number.

use super::{AttrValue, Fields};

/// Coerce every value of a field set.
pub fn coerce_fields(fields: Fields) -> Fields {
    fields
        .into_iter()
        .map(|(key, value)| {
            let coerced = coerce_value(value);
            (key, coerced)
        })
        .collect()
}

/// Coerce a single value.
///
/// Only scalars are touched. `Null`, `Bool`, `List` and `Map` come back
/// unchanged, as does any string that does not parse.
pub fn coerce_value(value: AttrValue) -> AttrValue {
    match value {
        AttrValue::Float(f) => float_or_int(f),
        AttrValue::String(s) => match parse_float(&s) {
            Some(f) => {
                tracing::trace!(input = %s, "coerced numeric string");
                float_or_int(f)
            }
            None => AttrValue::String(s),
        },
        other => other,
    }
}

/// Store integral floats as integers.
///
/// Values outside the `i64` range stay floats.
fn float_or_int(f: f64) -> AttrValue {
    const I64_BOUND: f64 = 9_223_372_036_854_775_808.0; // 2^63

    if f % 1.0 == 0.0 && (-I64_BOUND..I64_BOUND).contains(&f) {
        AttrValue::Int(f as i64)
    } else {
        AttrValue::Float(f)
    }
}

/// Parse a string as a finite float, or `None` if it isn't numeric-looking.
pub fn parse_float(input: &str) -> Option<f64> {
    let trimmed = input.trim_matches(|c: char| c.is_ascii_whitespace());
    if trimmed.is_empty() {
        return None;
    }

    let (negative, unsigned) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    if let Some(hex) = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        return parse_hex(hex).map(|v| if negative { -v } else { v });
    }

    let digits = normalize_decimal(unsigned)?;
    let value: f64 = digits.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(if negative { -value } else { value })
}

fn parse_hex(hex: &str) -> Option<f64> {
    let cleaned = strip_underscores(hex, |c| c.is_ascii_hexdigit())?;
    u64::from_str_radix(&cleaned, 16).ok().map(|v| v as f64)
}

/// Validate an unsigned decimal literal and return it without underscores.
///
/// Shape: `digits? ('.' digits)? (('e'|'E') sign? digits)?`, with at least
/// one mantissa digit and at least one digit after a dot.
fn normalize_decimal(s: &str) -> Option<String> {
    let (mantissa, exponent) = match s.find(|c: char| c == 'e' || c == 'E') {
        Some(pos) => (&s[..pos], Some(&s[pos + 1..])),
        None => (s, None),
    };

    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (mantissa, None),
    };

    let int_digits = if int_part.is_empty() {
        String::new()
    } else {
        strip_underscores(int_part, |c| c.is_ascii_digit())?
    };

    let frac_digits = match frac_part {
        Some(frac) => Some(strip_underscores(frac, |c| c.is_ascii_digit())?),
        None => None,
    };

    if int_digits.is_empty() && frac_digits.is_none() {
        return None;
    }

    let mut out = if int_digits.is_empty() {
        "0".to_string()
    } else {
        int_digits
    };
    if let Some(frac) = frac_digits {
        out.push('.');
        out.push_str(&frac);
    }

    if let Some(exp) = exponent {
        let (sign, exp_digits) = match exp.as_bytes().first() {
            Some(b'-') => ("-", &exp[1..]),
            Some(b'+') => ("", &exp[1..]),
            _ => ("", exp),
        };
        let exp_digits = strip_underscores(exp_digits, |c| c.is_ascii_digit())?;
        out.push('e');
        out.push_str(sign);
        out.push_str(&exp_digits);
    }

    Some(out)
}

/// Remove single underscores between digits. Returns `None` for empty input,
/// a character outside `is_digit`, or a leading, trailing, or doubled
/// underscore.
fn strip_underscores(s: &str, is_digit: impl Fn(char) -> bool) -> Option<String> {
    if s.is_empty() || s.starts_with('_') || s.ends_with('_') || s.contains("__") {
        return None;
    }

    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        if ch == '_' {
            continue;
        }
        if !is_digit(ch) {
            return None;
        }
        out.push(ch);
    }
    Some(out)
}
