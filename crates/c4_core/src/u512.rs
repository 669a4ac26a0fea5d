//! Fixed-width 512-bit unsigned integer used for base-58 conversion.
//!
//! Limbs are stored most significant first so that the byte layout matches
//! the big-endian digest directly.

use byteorder::{BigEndian as BE, ByteOrder};

use crate::consts::DIGEST_LEN;

const LIMBS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct U512([u64; LIMBS]);

impl U512 {
    pub const ZERO: Self = Self([0; LIMBS]);

    pub fn from_be_bytes(bytes: &[u8; DIGEST_LEN]) -> Self {
        let mut limbs = [0u64; LIMBS];
        BE::read_u64_into(bytes, &mut limbs);
        Self(limbs)
    }

    pub fn to_be_bytes(&self) -> [u8; DIGEST_LEN] {
        let mut out = [0u8; DIGEST_LEN];
        BE::write_u64_into(&self.0, &mut out);
        out
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&l| l == 0)
    }

    /// Divides in place by `divisor` and returns the remainder.
    ///
    /// `divisor` must be non-zero.
    pub fn div_rem_small(&mut self, divisor: u64) -> u64 {
        debug_assert!(divisor != 0);
        let d = divisor as u128;
        let mut rem: u128 = 0;
        for limb in self.0.iter_mut() {
            let cur = (rem << 64) | (*limb as u128);
            *limb = (cur / d) as u64;
            rem = cur % d;
        }
        rem as u64
    }

    /// Computes `self * mul + add` in place.
    ///
    /// Returns `false` (leaving `self` unspecified) when the result does not
    /// fit in 512 bits.
    #[must_use]
    pub fn mul_add_small(&mut self, mul: u64, add: u64) -> bool {
        let mut carry = add as u128;
        for limb in self.0.iter_mut().rev() {
            let cur = (*limb as u128) * (mul as u128) + carry;
            *limb = cur as u64;
            carry = cur >> 64;
        }
        carry == 0
    }
}
