//! Digest <-> identifier codec.
//!
//! An identifier is `c4` followed by the 88-digit base-58 value of the
//! digest, left-padded with the zero symbol `1`.

use crate::consts::{symbol_value, ALPHABET, BASE, ID_LEN, ID_PREFIX, PREFIX_LEN, ZERO_SYMBOL};
use crate::digest::Digest;
use crate::errors::{C4Error, Result};
use crate::id::C4Id;
use crate::u512::U512;

/// Encodes a digest as a 90-character identifier. Total over all digests.
pub fn encode(digest: &Digest) -> C4Id {
    let mut out = [ZERO_SYMBOL; ID_LEN];
    out[..PREFIX_LEN].copy_from_slice(ID_PREFIX.as_bytes());

    let mut value = U512::from_be_bytes(digest.as_bytes());
    let mut pos = ID_LEN;
    // 58^88 > 2^512, so the suffix never runs out before the value does
    while !value.is_zero() && pos > PREFIX_LEN {
        pos -= 1;
        let digit = value.div_rem_small(BASE);
        out[pos] = ALPHABET[digit as usize];
    }

    // every byte is ASCII from the alphabet or the prefix
    let text = out.iter().map(|&b| b as char).collect();
    C4Id::from_parts(text, *digest)
}

/// Decodes an identifier back into its digest.
pub fn decode(identifier: &str) -> Result<Digest> {
    let bytes = identifier.as_bytes();
    if bytes.len() != ID_LEN {
        return Err(C4Error::malformed(format!(
            "expected {ID_LEN} bytes, got {}",
            bytes.len()
        )));
    }
    if !identifier.starts_with(ID_PREFIX) {
        return Err(C4Error::malformed(format!("missing {ID_PREFIX:?} prefix")));
    }

    let mut value = U512::ZERO;
    for (position, &c) in bytes.iter().enumerate().skip(PREFIX_LEN) {
        let digit = symbol_value(c).ok_or_else(|| C4Error::InvalidSymbol {
            symbol: invalid_char_at(identifier, position),
            position,
        })?;
        if !value.mul_add_small(BASE, digit as u64) {
            return Err(C4Error::IntegerOverflow);
        }
    }
    Ok(Digest(value.to_be_bytes()))
}

// A non-ASCII byte may sit in the middle of a multi-byte char; report the whole char.
fn invalid_char_at(s: &str, byte_pos: usize) -> char {
    s.char_indices()
        .take_while(|(i, _)| *i <= byte_pos)
        .last()
        .map(|(_, c)| c)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{DIGEST_LEN, SUFFIX_LEN};
    use crate::digest::sha512;

    const ALFA_ID: &str = "c43zYcLni5LF9rR4Lg4B8h3Jp8SBwjcnyyeh4bc6gTPHndKuKdjUWx1kJPYhZxYt3zV6tQXpDs2shPsPYjgG81wZM1";
    const MAX_ID: &str = "c467rpwLCuS5DGA8KGZXKsVQ7dnPb9goRLoKfgGbLfQg9WoLUgNY77E2jT11fem3coV9nAkguBACzrU1iyZM4B8roQ";

    #[test]
    fn encodes_alfa() {
        assert_eq!(encode(&sha512(b"alfa")).as_str(), ALFA_ID);
    }

    #[test]
    fn decodes_alfa() {
        assert_eq!(decode(ALFA_ID).unwrap(), sha512(b"alfa"));
    }

    #[test]
    fn zero_digest_is_all_padding() {
        let id = encode(&Digest::ZERO);
        assert_eq!(id.as_str(), format!("c4{}", "1".repeat(SUFFIX_LEN)));
        assert_eq!(decode(id.as_str()).unwrap(), Digest::ZERO);
    }

    #[test]
    fn max_digest_encodes_to_max_id() {
        let max = Digest([0xff; DIGEST_LEN]);
        assert_eq!(encode(&max).as_str(), MAX_ID);
        assert_eq!(decode(MAX_ID).unwrap(), max);
    }

    #[test]
    fn small_values_are_right_aligned() {
        let mut one = [0u8; DIGEST_LEN];
        one[63] = 1;
        let id = encode(&Digest(one));
        assert!(id.as_str().ends_with("112"));
        assert_eq!(id.as_str().len(), ID_LEN);

        let mut fifty_eight = [0u8; DIGEST_LEN];
        fifty_eight[63] = 58;
        assert!(encode(&Digest(fifty_eight)).as_str().ends_with("1121"));
    }

    #[test]
    fn rejects_wrong_length() {
        let long = format!("{ALFA_ID}1");
        let short = &ALFA_ID[..ID_LEN - 1];
        assert!(matches!(decode(&long), Err(C4Error::MalformedIdentifier { .. })));
        assert!(matches!(decode(short), Err(C4Error::MalformedIdentifier { .. })));
        assert!(matches!(decode(""), Err(C4Error::MalformedIdentifier { .. })));
    }

    #[test]
    fn rejects_wrong_prefix() {
        let swapped = format!("4c{}", &ALFA_ID[2..]);
        let upper = format!("C4{}", &ALFA_ID[2..]);
        assert!(matches!(decode(&swapped), Err(C4Error::MalformedIdentifier { .. })));
        assert!(matches!(decode(&upper), Err(C4Error::MalformedIdentifier { .. })));
    }

    #[test]
    fn rejects_confusable_symbols() {
        for bad in ['0', 'I', 'O', 'l'] {
            let mut s = ALFA_ID.to_string();
            s.replace_range(10..11, &bad.to_string());
            assert_eq!(
                decode(&s),
                Err(C4Error::InvalidSymbol { symbol: bad, position: 10 }),
                "symbol {bad}"
            );
        }
    }

    #[test]
    fn rejects_non_ascii_without_panicking() {
        // 'é' is two bytes, so pad the suffix back to 90 bytes with one fewer symbol
        let s = format!("c4é{}", "1".repeat(SUFFIX_LEN - 2));
        assert_eq!(s.len(), ID_LEN);
        assert_eq!(decode(&s), Err(C4Error::InvalidSymbol { symbol: 'é', position: 2 }));
    }

    #[test]
    fn rejects_values_above_512_bits() {
        let all_z = format!("c4{}", "z".repeat(SUFFIX_LEN));
        assert_eq!(decode(&all_z), Err(C4Error::IntegerOverflow));

        let high = format!("c46{}", "z".repeat(SUFFIX_LEN - 1));
        assert_eq!(decode(&high), Err(C4Error::IntegerOverflow));

        // one past the largest encodable value
        let past_max = format!("{}R", &MAX_ID[..ID_LEN - 1]);
        assert_eq!(decode(&past_max), Err(C4Error::IntegerOverflow));
    }
}
