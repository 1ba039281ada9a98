//! Decimal string normalization and fixed-precision padding.
//!
//! Asset amounts are carried as strings end to end so that values with more
//! than 53 significant bits never pass through a float. All four helpers
//! accept anything `Display` (native integers, strings, wrapper types) and
//! return normalized strings.
//!
//! A normalized decimal has no leading zeros in the integer part (a bare `0`
//! excepted), no trailing zeros in the fraction, and no decimal point when
//! the fraction is empty. Comma group separators are accepted on input and
//! removed from the output.

use std::fmt::Display;

use crate::error::DecimalError;

/// Checks the integer part grammar: starts with a digit, every comma
/// separator has a digit on both sides.
fn valid_integer_part(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.is_empty() || !bytes[0].is_ascii_digit() {
        return false;
    }
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'0'..=b'9' => {}
            b',' => {
                if i + 1 >= bytes.len() || !bytes[i + 1].is_ascii_digit() {
                    return false;
                }
            }
            _ => return false,
        }
    }
    true
}

fn normalize(raw: &str) -> Result<String, DecimalError> {
    let invalid = || DecimalError::InvalidFormat {
        value: raw.to_string(),
    };

    let value = if raw.starts_with('.') {
        format!("0{raw}")
    } else {
        raw.to_string()
    };

    let mut parts = value.splitn(3, '.');
    let integer = parts.next().unwrap_or_default();
    let fraction = parts.next();
    if parts.next().is_some() {
        return Err(invalid());
    }

    if !valid_integer_part(integer) {
        return Err(invalid());
    }
    let integer: String = integer.chars().filter(|c| *c != ',').collect();
    let integer = integer.trim_start_matches('0');
    let integer = if integer.is_empty() { "0" } else { integer };

    let fraction = match fraction {
        Some(f) => {
            if !f.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            let trimmed = f.trim_end_matches('0');
            (!trimmed.is_empty()).then_some(trimmed)
        }
        None => None,
    };

    Ok(match fraction {
        Some(f) => format!("{integer}.{f}"),
        None => integer.to_string(),
    })
}

/// Normalizes and validates a decimal string.
///
/// # Examples
///
/// ```rust
/// use chain_format::udecimal_string;
///
/// assert_eq!(udecimal_string("00123.4500").unwrap(), "123.45");
/// assert_eq!(udecimal_string(".5").unwrap(), "0.5");
/// ```
pub fn udecimal_string<T: Display>(value: T) -> Result<String, DecimalError> {
    normalize(&value.to_string())
}

/// Pads a decimal to exactly `precision` fractional digits.
///
/// The value is normalized first; a fraction longer than `precision` fails
/// with [`DecimalError::PrecisionExceeded`]. With `precision == 0` and no
/// fraction the integer part is returned unchanged.
///
/// # Examples
///
/// ```rust
/// use chain_format::udecimal_pad;
///
/// assert_eq!(udecimal_pad(10, 3).unwrap(), "10.000");
/// assert_eq!(udecimal_pad("1.23", 2).unwrap(), "1.23");
/// ```
pub fn udecimal_pad<T: Display>(value: T, precision: usize) -> Result<String, DecimalError> {
    let value = udecimal_string(value)?;

    let Some(dot) = value.find('.') else {
        if precision == 0 {
            return Ok(value);
        }
        return Ok(format!("{value}.{}", "0".repeat(precision)));
    };

    let fraction_len = value.len() - dot - 1;
    if fraction_len > precision {
        return Err(DecimalError::PrecisionExceeded { value, precision });
    }

    let mut padded = value;
    padded.push_str(&"0".repeat(precision - fraction_len));
    Ok(padded)
}

/// Pads to `precision` and removes the decimal point, producing the raw
/// fixed-point integer string used on the wire.
pub fn udecimal_imply<T: Display>(value: T, precision: usize) -> Result<String, DecimalError> {
    Ok(udecimal_pad(value, precision)?.replace('.', ""))
}

/// Inverse of [`udecimal_imply`]: reinserts the decimal point `precision`
/// digits from the right of a pure digit string and normalizes the result.
///
/// # Examples
///
/// ```rust
/// use chain_format::udecimal_unimply;
///
/// assert_eq!(udecimal_unimply("12300", 4).unwrap(), "1.23");
/// assert_eq!(udecimal_unimply("5", 4).unwrap(), "0.0005");
/// ```
pub fn udecimal_unimply<T: Display>(value: T, precision: usize) -> Result<String, DecimalError> {
    let mut value = value.to_string();
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DecimalError::InvalidFormat { value });
    }

    if value.len() < precision {
        value = format!("{}{value}", "0".repeat(precision - value.len()));
    }

    let dot = value.len() - precision;
    value.insert(dot, '.');
    normalize(&value)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_normalize_basic() {
        assert_eq!(udecimal_string("00123.4500").unwrap(), "123.45");
        assert_eq!(udecimal_string(".5").unwrap(), "0.5");
        assert_eq!(udecimal_string("0").unwrap(), "0");
        assert_eq!(udecimal_string("000").unwrap(), "0");
        assert_eq!(udecimal_string("10.000").unwrap(), "10");
        assert_eq!(udecimal_string("12.").unwrap(), "12");
        assert_eq!(udecimal_string("0.0").unwrap(), "0");
    }

    #[test]
    fn test_normalize_numeric_inputs() {
        assert_eq!(udecimal_string(10u32).unwrap(), "10");
        assert_eq!(udecimal_string(0.5f64).unwrap(), "0.5");
        assert_eq!(udecimal_string(u64::MAX).unwrap(), "18446744073709551615");
    }

    #[test]
    fn test_normalize_comma_separators() {
        assert_eq!(udecimal_string("1,000,000.50").unwrap(), "1000000.5");
        assert_eq!(udecimal_string("1,000").unwrap(), "1000");
    }

    #[test]
    fn test_normalize_invalid() {
        for bad in ["", "1.2.3", "a.5", "1.2a", "-5", ",5", "5,", "1,,2", "1. 2"] {
            assert!(
                matches!(udecimal_string(bad), Err(DecimalError::InvalidFormat { .. })),
                "expected rejection for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_pad() {
        assert_eq!(udecimal_pad(10, 3).unwrap(), "10.000");
        assert_eq!(udecimal_pad("1.23", 2).unwrap(), "1.23");
        assert_eq!(udecimal_pad("1.2", 4).unwrap(), "1.2000");
        assert_eq!(udecimal_pad("10", 0).unwrap(), "10");
        assert_eq!(udecimal_pad("10.000", 0).unwrap(), "10");
    }

    #[test]
    fn test_pad_precision_exceeded() {
        assert!(matches!(
            udecimal_pad("1.234", 2),
            Err(DecimalError::PrecisionExceeded { precision: 2, .. })
        ));
        assert!(matches!(
            udecimal_pad("1.5", 0),
            Err(DecimalError::PrecisionExceeded { precision: 0, .. })
        ));
    }

    #[test]
    fn test_imply() {
        assert_eq!(udecimal_imply("1.23", 4).unwrap(), "12300");
        assert_eq!(udecimal_imply(10, 3).unwrap(), "10000");
        assert_eq!(udecimal_imply("0.0005", 4).unwrap(), "00005");
        assert_eq!(udecimal_imply("1", 0).unwrap(), "1");
    }

    #[test]
    fn test_unimply() {
        assert_eq!(udecimal_unimply("12300", 4).unwrap(), "1.23");
        assert_eq!(udecimal_unimply("5", 4).unwrap(), "0.0005");
        assert_eq!(udecimal_unimply("10000", 4).unwrap(), "1");
        assert_eq!(udecimal_unimply(123u32, 0).unwrap(), "123");
        assert_eq!(udecimal_unimply("0", 4).unwrap(), "0");
    }

    #[test]
    fn test_unimply_invalid() {
        for bad in ["", "1.23", "12a", "-5"] {
            assert!(
                matches!(
                    udecimal_unimply(bad, 4),
                    Err(DecimalError::InvalidFormat { .. })
                ),
                "expected rejection for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_imply_unimply_roundtrip() {
        for (value, precision) in [("1.23", 4), ("0.0005", 4), ("10", 3), ("123", 0)] {
            let implied = udecimal_imply(value, precision).unwrap();
            assert_eq!(
                udecimal_unimply(&implied, precision).unwrap(),
                udecimal_string(value).unwrap(),
                "roundtrip failed for {} at precision {}",
                value,
                precision
            );
        }
    }

    proptest! {
        #[test]
        fn prop_normalize_idempotent(raw in r"0{0,2}[0-9]{1,6}(\.[0-9]{0,5})?") {
            let once = udecimal_string(&raw).unwrap();
            prop_assert_eq!(udecimal_string(&once).unwrap(), once);
        }

        #[test]
        fn prop_imply_unimply(digits in "[0-9]{1,12}", precision in 0usize..8) {
            let normalized = udecimal_string(&digits).unwrap();
            let implied = udecimal_imply(&normalized, precision).unwrap();
            // Shifting the point out and back in is lossless.
            let back = udecimal_unimply(&implied, precision).unwrap();
            let reimplied = udecimal_imply(&back, precision).unwrap();
            prop_assert_eq!(udecimal_string(&reimplied).unwrap(),
                udecimal_string(&implied).unwrap());
        }
    }
}
