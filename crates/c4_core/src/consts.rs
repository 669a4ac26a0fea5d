// crates/c4_core/src/consts.rs

/// Bytes in a SHA-512 digest.
pub const DIGEST_LEN: usize = 64;

/// Full identifier length, prefix included (SMPTE ST 2114:2017).
pub const ID_LEN: usize = 90;

pub const ID_PREFIX: &str = "c4";
pub const PREFIX_LEN: usize = 2;

/// Base-58 digits after the prefix.
pub const SUFFIX_LEN: usize = ID_LEN - PREFIX_LEN;

pub const BASE: u64 = 58;

/// Symbol alphabet; index is the digit value. `0`, `I`, `O` and `l` are excluded.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// The zero digit, used for left padding.
pub const ZERO_SYMBOL: u8 = ALPHABET[0];

/// Contiguous code-point blocks of the alphabet: (first, last, digit value of `first`).
pub const SYMBOL_RANGES: [(u8, u8, u8); 6] = [
    (b'1', b'9', 0),  // digits
    (b'A', b'H', 9),  // before I
    (b'J', b'N', 17), // between I and O
    (b'P', b'Z', 22), // after O
    (b'a', b'k', 33), // before l
    (b'm', b'z', 44), // after l
];

/// Digit value of an alphabet symbol, `None` for anything outside the ranges.
#[inline]
pub fn symbol_value(c: u8) -> Option<u8> {
    SYMBOL_RANGES
        .iter()
        .find(|(lo, hi, _)| (*lo..=*hi).contains(&c))
        .map(|(lo, _, base)| base + (c - lo))
}

const _: () = { assert!(ALPHABET.len() as u64 == BASE); };
