//! Compact 64-bit name codec.
//!
//! Blockchains in this family store account and resource identifiers as
//! `u64` values rather than strings. A name is at most 13 characters from a
//! 32-symbol alphabet, packed as twelve 5-bit fields followed by one 4-bit
//! field (12 * 5 + 4 = 64 bits). The wire format serializes the value
//! little-endian, so encoding defaults to the byte-swapped representation.
//!
//! Trailing `.` characters (alphabet index 0) are insignificant: `"abc"` and
//! `"abc.."` pack to the same value, and decoding always strips them.

use lazy_static::lazy_static;

use crate::error::NameError;
use crate::ulong::ULong;

/// The 32-symbol name alphabet. Index 0 is `.`, indices 1-31 are `1-5a-z`.
pub const NAME_ALPHABET: &str = ".12345abcdefghijklmnopqrstuvwxyz";

/// Maximum name length in characters.
pub const MAX_NAME_LEN: usize = 13;

lazy_static! {
    /// Reverse lookup from ASCII byte to alphabet index (-1 for non-members).
    static ref ALPHABET_INDEX: [i8; 128] = {
        let mut table = [-1i8; 128];
        for (i, b) in NAME_ALPHABET.bytes().enumerate() {
            table[b as usize] = i as i8;
        }
        table
    };
}

/// Returns the alphabet index (0-31) of a character, or `None` if the
/// character is not in the alphabet.
fn char_index(ch: char) -> Option<u64> {
    if !ch.is_ascii() {
        return None;
    }
    let idx = ALPHABET_INDEX[ch as usize];
    (idx >= 0).then_some(idx as u64)
}

/// Encodes a name into its packed `u64` representation.
///
/// Positions beyond the end of the input pack as `.` (index 0), so short
/// names occupy the high bits and the low bits are zero. The 13th character,
/// if present, must fit the 4-bit final field (`.`, `1`-`5`, or `a`-`j`).
///
/// With `little_endian` (the wire default) the returned value is the
/// byte-swapped packed value; pass `false` for the big-endian form used by
/// the chain's native `string_to_name`.
///
/// # Examples
///
/// ```rust
/// use chain_format::encode_name;
///
/// assert_eq!(encode_name("eosio", false).unwrap(), 6138663577826885632);
/// assert_eq!(encode_name("eosio", true).unwrap(), 0xEA3055);
/// ```
pub fn encode_name(name: &str, little_endian: bool) -> Result<u64, NameError> {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() > MAX_NAME_LEN {
        return Err(NameError::TooLong {
            len: chars.len(),
            max: MAX_NAME_LEN,
        });
    }

    let mut value: u64 = 0;
    for i in 0..MAX_NAME_LEN {
        let idx = match chars.get(i) {
            Some(&ch) => char_index(ch).ok_or(NameError::InvalidCharacter { ch })?,
            None => 0,
        };
        let width = if i < MAX_NAME_LEN - 1 { 5 } else { 4 };
        if idx >> width != 0 {
            // Only reachable in the final slot: indices 16-31 need 5 bits.
            return Err(NameError::FinalSlotOverflow { ch: chars[i] });
        }
        value = (value << width) | idx;
    }

    Ok(if little_endian {
        value.swap_bytes()
    } else {
        value
    })
}

/// Decodes a packed `u64` back into its name string.
///
/// Accepts a native `u64`, a decimal digit string, or an `f64` (rejected
/// above 2^53 - 1). Trailing `.` characters are stripped from the result, so
/// the returned name is 0-13 characters with no trailing dots.
///
/// # Examples
///
/// ```rust
/// use chain_format::decode_name;
///
/// assert_eq!(decode_name("6138663577826885632", false).unwrap(), "eosio");
/// assert_eq!(decode_name(0xEA3055u64, true).unwrap(), "eosio");
/// ```
pub fn decode_name<'a>(
    value: impl Into<ULong<'a>>,
    little_endian: bool,
) -> Result<String, NameError> {
    let packed = value.into().to_u64(10)?;
    let mut tmp = if little_endian {
        packed.swap_bytes()
    } else {
        packed
    };

    let alphabet = NAME_ALPHABET.as_bytes();
    let mut out = [0u8; MAX_NAME_LEN];
    // The final 4-bit field sits in the low bits, so extraction runs from the
    // last name position back to the first.
    for i in (0..MAX_NAME_LEN).rev() {
        let (mask, shift) = if i == MAX_NAME_LEN - 1 {
            (0x0F, 4)
        } else {
            (0x1F, 5)
        };
        out[i] = alphabet[(tmp & mask) as usize];
        tmp >>= shift;
    }

    // out is all alphabet bytes, so this is valid ASCII.
    let name = std::str::from_utf8(&out).unwrap_or_default();
    Ok(name.trim_end_matches('.').to_string())
}

/// Encodes a name as a lowercase hex string (little-endian packed value,
/// without leading zeros).
pub fn encode_name_hex(name: &str) -> Result<String, NameError> {
    Ok(format!("{:x}", encode_name(name, true)?))
}

/// Decodes a hex string representation of a packed name.
pub fn decode_name_hex(hex: &str, little_endian: bool) -> Result<String, NameError> {
    let value = ULong::Text(hex).to_u64(16)?;
    decode_name(value, little_endian)
}

/// Returns true iff `value` is a valid name (would encode without error).
pub fn is_name(value: &str) -> bool {
    encode_name(value, true).is_ok()
}

/// Like [`is_name`], but hands the failure to an observer before returning
/// `false`, for callers that surface validation messages.
pub fn is_name_with(value: &str, err: impl FnOnce(&NameError)) -> bool {
    match encode_name(value, true) {
        Ok(_) => true,
        Err(error) => {
            err(&error);
            false
        }
    }
}
