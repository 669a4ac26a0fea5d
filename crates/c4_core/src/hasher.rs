//! Streaming SHA-512 hasher producing C4 identifiers.

use std::io;

use sha2::{Digest as _, Sha512};

use crate::codec::encode;
use crate::digest::Digest;
use crate::id::C4Id;

/// Incremental hasher. `Clone` forks the running state.
#[derive(Clone, Default)]
pub struct C4Hasher {
    inner: Sha512,
}

impl C4Hasher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, chunk: impl AsRef<[u8]>) -> &mut Self {
        self.inner.update(chunk.as_ref());
        self
    }

    pub fn reset(&mut self) {
        self.inner = Sha512::new();
    }

    pub fn digest(self) -> Digest {
        Digest(self.inner.finalize().into())
    }

    pub fn id(self) -> C4Id {
        encode(&self.digest())
    }
}

impl io::Write for C4Hasher {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// C4 identifier of a byte string.
pub fn id_of(bytes: &[u8]) -> C4Id {
    encode(&crate::digest::sha512(bytes))
}

/// Hashes everything `reader` yields.
pub fn id_of_reader<R: io::Read>(mut reader: R) -> io::Result<C4Id> {
    let mut hasher = C4Hasher::new();
    io::copy(&mut reader, &mut hasher)?;
    Ok(hasher.id())
}
