//! Normalization of heterogeneous numeric inputs into a canonical `u64`.
//!
//! JSON transports are inconsistent about 64-bit values: parsers emit native
//! numbers for values that fit in 53 bits and strings for anything larger.
//! [`ULong`] models the legal input shapes as an explicit variant type so the
//! decode path can accept any of them without silent truncation.

use crate::error::ULongError;

/// Largest integer a 64-bit float can hold without rounding (2^53 - 1).
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A heterogeneous unsigned 64-bit input.
///
/// Callers can pass any of the three shapes wherever `impl Into<ULong>` is
/// accepted; conversion to the canonical `u64` happens in [`ULong::to_u64`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ULong<'a> {
    /// A native unsigned 64-bit value, already canonical.
    Long(u64),
    /// A floating-point numeric, as produced by JSON parsers for small values.
    Number(f64),
    /// A digit string, interpreted in a caller-supplied radix.
    Text(&'a str),
}

impl From<u64> for ULong<'_> {
    fn from(value: u64) -> Self {
        ULong::Long(value)
    }
}

impl From<f64> for ULong<'_> {
    fn from(value: f64) -> Self {
        ULong::Number(value)
    }
}

impl<'a> From<&'a str> for ULong<'a> {
    fn from(value: &'a str) -> Self {
        ULong::Text(value)
    }
}

impl<'a> From<&'a String> for ULong<'a> {
    fn from(value: &'a String) -> Self {
        ULong::Text(value)
    }
}

impl ULong<'_> {
    /// Converts the input into a canonical `u64`.
    ///
    /// `radix` applies to the [`ULong::Text`] shape only and must be in
    /// `2..=36`. Native values pass through unchanged. Floating-point inputs
    /// above 2^53 - 1 are rejected with [`ULongError::Overflow`] rather than
    /// silently truncated; negative, non-finite, or fractional inputs fail
    /// with [`ULongError::NotAnInteger`].
    pub fn to_u64(self, radix: u32) -> Result<u64, ULongError> {
        if !(2..=36).contains(&radix) {
            return Err(ULongError::UnsupportedRadix { radix });
        }
        match self {
            ULong::Long(value) => Ok(value),
            ULong::Number(value) => {
                if value > MAX_SAFE_INTEGER {
                    return Err(ULongError::Overflow { value });
                }
                if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
                    return Err(ULongError::NotAnInteger { value });
                }
                Ok(value as u64)
            }
            ULong::Text(value) => {
                u64::from_str_radix(value, radix).map_err(|_| ULongError::InvalidDigits {
                    value: value.to_string(),
                    radix,
                })
            }
        }
    }
}
