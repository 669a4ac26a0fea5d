use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum C4Error {
    #[error("Malformed identifier: {reason}")]
    MalformedIdentifier { reason: String },

    #[error("Invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("Identifier value exceeds 512 bits")]
    IntegerOverflow,

    #[error("Cannot reduce an empty identifier set")]
    EmptyInput,

    #[error("Digest must be 64 bytes, got {len}")]
    InvalidDigestLength { len: usize },

    #[error("Hex: {0}")]
    InvalidHex(String),
}

impl C4Error {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedIdentifier { reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, C4Error>;
