//! Words, blocks and the little-endian byte layout MD5 fixes for both.
//!
//! The conversions here never rely on the host's native byte order: input bytes
//! are always assembled into words least-significant byte first, and words are
//! always written back the same way.

/// A 32-bit MD5 word. All arithmetic on words wraps modulo 2^32.
pub type Word = u32;

/// Number of words in one block.
pub const BLOCK_WORDS: usize = 16;

/// Number of bytes in one block (512 bits).
pub const BLOCK_BYTES: usize = BLOCK_WORDS * WORD_BYTES;

/// Number of bytes in one word.
pub const WORD_BYTES: usize = 4;

/// One 512-bit block of message, as 16 little-endian words.
pub type Block = [Word; BLOCK_WORDS];

/// Builds a word from four bytes, low-order byte first.
#[inline(always)]
pub fn word_from_le(bytes: [u8; WORD_BYTES]) -> Word {
    Word::from(bytes[0])
        | Word::from(bytes[1]) << 8
        | Word::from(bytes[2]) << 16
        | Word::from(bytes[3]) << 24
}

/// Splits a word into four bytes, low-order byte first.
#[inline(always)]
pub fn word_to_le(word: Word) -> [u8; WORD_BYTES] {
    [
        word as u8,
        (word >> 8) as u8,
        (word >> 16) as u8,
        (word >> 24) as u8,
    ]
}

/// Transposes a 64-byte buffer into a block.
pub fn block_from_le(bytes: &[u8; BLOCK_BYTES]) -> Block {
    let mut block = [0; BLOCK_WORDS];
    for (word, chunk) in block.iter_mut().zip(bytes.chunks_exact(WORD_BYTES)) {
        *word = word_from_le([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    block
}

/// Splits a 64-bit quantity into its (low, high) words.
#[inline(always)]
pub fn split_u64(value: u64) -> (Word, Word) {
    (value as Word, (value >> 32) as Word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_from_le_is_little_endian() {
        assert_eq!(word_from_le([0x01, 0x23, 0x45, 0x67]), 0x6745_2301);
        assert_eq!(word_from_le([0xff, 0, 0, 0]), 0xff);
    }

    #[test]
    fn test_word_to_le_matches_from_le() {
        let word = 0xefcd_ab89;
        assert_eq!(word_to_le(word), [0x89, 0xab, 0xcd, 0xef]);
        assert_eq!(word_from_le(word_to_le(word)), word);
    }

    #[test]
    fn test_block_from_le_orders_words() {
        let mut bytes = [0u8; BLOCK_BYTES];
        bytes[0] = b'a';
        bytes[4] = b'b';
        bytes[63] = 0x80;
        let block = block_from_le(&bytes);
        assert_eq!(block[0], 0x61);
        assert_eq!(block[1], 0x62);
        assert_eq!(block[15], 0x8000_0000);
        assert!(block[2..15].iter().all(|&w| w == 0));
    }

    #[test]
    fn test_split_u64() {
        assert_eq!(split_u64(0x0000_0001_0000_0200), (0x200, 1));
        assert_eq!(split_u64(u64::MAX), (Word::MAX, Word::MAX));
    }
}
