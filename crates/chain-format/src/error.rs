//! Error types for the name codec and decimal utilities.

use thiserror::Error;

/// Error while encoding or decoding a packed name.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NameError {
    #[error("name length {len} exceeds maximum {max} characters")]
    TooLong { len: usize, max: usize },

    #[error("invalid character {ch:?} in name")]
    InvalidCharacter { ch: char },

    #[error("character {ch:?} does not fit the 4-bit final name slot")]
    FinalSlotOverflow { ch: char },

    #[error("invalid name value: {0}")]
    Value(#[from] ULongError),
}

/// Error while normalizing a heterogeneous input into a `u64`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ULongError {
    #[error("numeric value {value} exceeds the maximum safe integer 2^53 - 1")]
    Overflow { value: f64 },

    #[error("numeric value {value} is not an unsigned integer")]
    NotAnInteger { value: f64 },

    #[error("{value:?} is not a valid unsigned integer in radix {radix}")]
    InvalidDigits { value: String, radix: u32 },

    #[error("radix {radix} is outside the supported range 2..=36")]
    UnsupportedRadix { radix: u32 },
}

/// Error while normalizing or re-scaling a decimal string.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecimalError {
    #[error("invalid decimal {value:?}")]
    InvalidFormat { value: String },

    #[error("decimal {value:?} exceeds precision {precision}")]
    PrecisionExceeded { value: String, precision: usize },
}
