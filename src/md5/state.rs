//! The running 128-bit chaining value.

use super::word::{word_to_le, Word, WORD_BYTES};

/// Size of a serialized state (and of the digest) in bytes.
pub const MD5_OUTPUT_SIZE: usize = 16;

/// The four chaining words A, B, C, D.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigestState {
    pub a: Word,
    pub b: Word,
    pub c: Word,
    pub d: Word,
}

impl DigestState {
    /// Initial chaining value from RFC 1321 section 3.3.
    pub const INITIAL: DigestState = DigestState {
        a: 0x67452301,
        b: 0xefcdab89,
        c: 0x98badcfe,
        d: 0x10325476,
    };

    /// Word-wise addition modulo 2^32.
    #[inline(always)]
    pub fn wrapping_add(self, other: DigestState) -> DigestState {
        DigestState {
            a: self.a.wrapping_add(other.a),
            b: self.b.wrapping_add(other.b),
            c: self.c.wrapping_add(other.c),
            d: self.d.wrapping_add(other.d),
        }
    }

    /// Serializes the state: low-order byte of A first, high-order byte of D last.
    pub fn to_le_bytes(self) -> [u8; MD5_OUTPUT_SIZE] {
        let mut output = [0u8; MD5_OUTPUT_SIZE];
        for (chunk, word) in output
            .chunks_exact_mut(WORD_BYTES)
            .zip([self.a, self.b, self.c, self.d])
        {
            chunk.copy_from_slice(&word_to_le(word));
        }
        output
    }
}

impl Default for DigestState {
    fn default() -> Self {
        Self::INITIAL
    }
}
