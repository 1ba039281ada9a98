//! Name and decimal-amount codecs for blockchain client tooling.
//!
//! This crate provides two independent, pure codecs:
//!
//! - **Name codec**: packs a human-readable identifier of up to 13 characters
//!   from a 32-symbol alphabet (`.12345a-z`) into a `u64` and back. The chain
//!   stores account and resource names this way; the layout is twelve 5-bit
//!   fields plus one 4-bit field, serialized little-endian on the wire.
//! - **Decimal utilities**: normalization, fixed-precision padding, and
//!   imply/unimply decimal-point shifting for asset amounts, performed on
//!   strings so large values never lose precision in a float.
//!
//! # Quick Start
//!
//! ```rust
//! use chain_format::{decode_name, encode_name, udecimal_pad, udecimal_unimply};
//!
//! // Pack a name into its wire representation and back.
//! let packed = encode_name("eosio", true).unwrap();
//! assert_eq!(decode_name(packed, true).unwrap(), "eosio");
//!
//! // Format an asset amount at a fixed precision.
//! assert_eq!(udecimal_pad("1.3", 4).unwrap(), "1.3000");
//! assert_eq!(udecimal_unimply("13000", 4).unwrap(), "1.3");
//! ```
//!
//! # Modules
//!
//! - [`name`]: the packed name codec and `is_name` validation
//! - [`decimal`]: unsigned decimal string normalization and padding
//! - [`ulong`]: normalization of heterogeneous `u64` inputs
//! - [`error`]: error types
//!
//! All functions are synchronous and side-effect free; there is no shared
//! state, so everything is safe to call from any number of threads.

pub mod decimal;
pub mod error;
pub mod name;
pub mod ulong;

// Re-export the full function surface at the crate root
pub use decimal::{udecimal_imply, udecimal_pad, udecimal_string, udecimal_unimply};
pub use error::{DecimalError, NameError, ULongError};
pub use name::{
    MAX_NAME_LEN, NAME_ALPHABET, decode_name, decode_name_hex, encode_name, encode_name_hex,
    is_name, is_name_with,
};
pub use ulong::{MAX_SAFE_INTEGER, ULong};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
