use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec;
use crate::digest::Digest;
use crate::errors::{C4Error, Result};

/// A validated C4 identifier.
///
/// Construction always goes through [`codec::decode`]-level validation, so
/// every `C4Id` carries the one digest it decodes to. Ordering is code-point
/// order of the text (the digest field is a function of it), which for
/// fixed-width identifiers is also numeric order.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct C4Id {
    text: String,
    digest: Digest,
}

impl C4Id {
    pub fn parse(s: &str) -> Result<Self> {
        let digest = codec::decode(s)?;
        Ok(Self { text: s.to_owned(), digest })
    }

    /// `text` must be the encoding of `digest`.
    pub(crate) fn from_parts(text: String, digest: Digest) -> Self {
        Self { text, digest }
    }

    pub fn from_digest(digest: &Digest) -> Self {
        codec::encode(digest)
    }

    #[inline]
    pub fn digest(&self) -> Digest {
        self.digest
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl FromStr for C4Id {
    type Err = C4Error;
    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for C4Id {
    type Error = C4Error;
    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for C4Id {
    type Error = C4Error;
    fn try_from(s: String) -> Result<Self> {
        let digest = codec::decode(&s)?;
        Ok(Self { text: s, digest })
    }
}

impl From<Digest> for C4Id {
    fn from(d: Digest) -> Self {
        codec::encode(&d)
    }
}

impl From<&Digest> for C4Id {
    fn from(d: &Digest) -> Self {
        codec::encode(d)
    }
}

impl From<C4Id> for String {
    fn from(id: C4Id) -> Self {
        id.text
    }
}

impl AsRef<str> for C4Id {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for C4Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl fmt::Debug for C4Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C4Id({})", self.text)
    }
}

impl Serialize for C4Id {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        s.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for C4Id {
    fn deserialize<D: Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        C4Id::try_from(s).map_err(serde::de::Error::custom)
    }
}
