//! C4 content identifiers (SMPTE ST 2114:2017).
//!
//! - [`encode`] / [`decode`]: 64-byte SHA-512 digest <-> 90-character id
//! - [`reduce`]: fold a set of ids into one "hash of hashes" id

pub mod codec;
pub mod config;
pub mod consts;
pub mod digest;
pub mod errors;
pub mod hasher;
pub mod id;
pub mod reduce;
pub mod u512;

pub use codec::{decode, encode};
pub use config::ReduceConfig;
pub use digest::{canonical_cmp, sha512, Digest};
pub use errors::{C4Error, Result};
pub use hasher::{id_of, id_of_reader, C4Hasher};
pub use id::C4Id;
pub use reduce::{combine_pair, reduce, reduce_digests, Reducer};
