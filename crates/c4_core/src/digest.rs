use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest as _, Sha512};

use crate::consts::DIGEST_LEN;
use crate::errors::{C4Error, Result};

/// A SHA-512 digest, byte 0 most significant. `Ord` is numeric order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest(pub [u8; DIGEST_LEN]);

impl Digest {
    pub const ZERO: Self = Self([0; DIGEST_LEN]);

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let arr: [u8; DIGEST_LEN] = bytes
            .try_into()
            .map_err(|_| C4Error::InvalidDigestLength { len: bytes.len() })?;
        Ok(Self(arr))
    }

    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s.trim()).map_err(|e| C4Error::InvalidHex(e.to_string()))?;
        Self::from_slice(&bytes)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        s.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        Digest::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// SHA-512 of `bytes`.
pub fn sha512(bytes: &[u8]) -> Digest {
    let mut hasher = Sha512::new();
    hasher.update(bytes);
    Digest(hasher.finalize().into())
}

/// Canonical pair-ordering rule of the C4 hash-of-hashes.
///
/// This is a canonicalization rule, NOT a magnitude comparison. Bytes are
/// scanned from index 63 (least significant) down to index 0. The result is
/// `Greater` as soon as a byte of `a` exceeds the byte of `b` at the same
/// index and `Equal` otherwise; there is no `Less` outcome. Published C4
/// identifiers for sets were produced with exactly this rule, so it must not
/// be changed to numeric order or made symmetric.
pub fn canonical_cmp(a: &Digest, b: &Digest) -> Ordering {
    for i in (0..DIGEST_LEN).rev() {
        if a.0[i] > b.0[i] {
            return Ordering::Greater;
        }
    }
    Ordering::Equal
}

/// Orders a pair as a stable two-element sort under [`canonical_cmp`]:
/// the second digest moves first only when it ranks strictly before the first.
pub fn canonical_pair(first: Digest, second: Digest) -> (Digest, Digest) {
    if canonical_cmp(&second, &first) == Ordering::Less {
        (second, first)
    } else {
        (first, second)
    }
}

/// SHA-512 over the canonically ordered concatenation of two digests.
pub fn hash_pair(a: &Digest, b: &Digest) -> Digest {
    let (lo, hi) = canonical_pair(*a, *b);
    let mut hasher = Sha512::new();
    hasher.update(lo.0);
    hasher.update(hi.0);
    Digest(hasher.finalize().into())
}
