//! Streaming conversion of a byte source into padded MD5 blocks.
//!
//! [`BlockLoader`] reads at most one block (64 bytes) at a time and keeps a
//! running bit count, so inputs of any size are hashed in constant memory. The
//! block sequence it yields always ends with the RFC 1321 padding: a `0x80`
//! marker byte, zero fill, and the 64-bit message length in bits stored in
//! words 14 (low) and 15 (high) of the last block.
//!
//! # Example
//!
//! ```
//! use md5sum::md5::BlockLoader;
//!
//! let mut loader = BlockLoader::new(&b"abc"[..]);
//! let block = loader.load_next_chunk().unwrap();
//! assert_eq!(block[0], 0x8063_6261);
//! assert_eq!(block[14], 24);
//! assert!(!loader.has_more_data());
//! ```

use std::io::{self, Read};
use std::iter::FusedIterator;

use log::{debug, trace};

use super::word::{block_from_le, split_u64, Block, BLOCK_BYTES, BLOCK_WORDS};
use crate::error::{Error, Result};

/// The byte appended right after the last message byte.
const PADDING_MARKER: u8 = 0x80;

/// Bits of a block available before the 64-bit length suffix.
const LENGTH_OFFSET_BITS: usize = 448;

/// Word positions of the length suffix, low-order word first.
const LENGTH_LOW_WORD: usize = BLOCK_WORDS - 2;
const LENGTH_HIGH_WORD: usize = BLOCK_WORDS - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoaderState {
    /// Message bytes remain to be read.
    Reading,
    /// The marker has been written but the length did not fit; one length-only
    /// block follows.
    Padding,
    /// The length block has been produced.
    Done,
}

/// Produces the padded block sequence of a byte source.
#[derive(Debug)]
pub struct BlockLoader<R> {
    source: R,
    state: LoaderState,
    buffer: [u8; BLOCK_BYTES],
    message_bits: u64,
}

impl<R: Read> BlockLoader<R> {
    /// Creates a loader positioned at the start of `source`.
    pub fn new(source: R) -> Self {
        Self {
            source,
            state: LoaderState::Reading,
            buffer: [0u8; BLOCK_BYTES],
            message_bits: 0,
        }
    }

    /// Returns `true` until the block carrying the length suffix has been loaded.
    pub fn has_more_data(&self) -> bool {
        self.state != LoaderState::Done
    }

    /// Message bits consumed so far, modulo 2^64.
    pub fn message_bits(&self) -> u64 {
        self.message_bits
    }

    /// Loads the next block of the sequence.
    ///
    /// A read failure ends the sequence: the error is returned and the loader
    /// is left exhausted.
    ///
    /// # Errors
    ///
    /// - [`Error::Io`] if the source fails.
    /// - [`Error::LoaderExhausted`] if called after the final block.
    pub fn load_next_chunk(&mut self) -> Result<Block> {
        let (next, block) = match self.state {
            LoaderState::Reading => match self.read_message_block() {
                Ok(transition) => transition,
                Err(err) => {
                    debug!("read failed after {} bits: {err}", self.message_bits);
                    self.state = LoaderState::Done;
                    return Err(err);
                }
            },
            LoaderState::Padding => self.length_block(),
            LoaderState::Done => return Err(Error::LoaderExhausted),
        };

        if next != self.state {
            debug!(
                "loader {:?} -> {:?} at {} message bits",
                self.state, next, self.message_bits
            );
        }
        trace!("block {:08x?}", block);
        self.state = next;
        Ok(block)
    }

    /// Handles the Reading state.
    ///
    /// A full read emits the block unchanged. A short read gets the marker, and
    /// the length too when the marker leaves words 14 and 15 free.
    fn read_message_block(&mut self) -> Result<(LoaderState, Block)> {
        let read = self.fill_buffer()?;
        self.message_bits = self.message_bits.wrapping_add(8 * read as u64);

        if read == BLOCK_BYTES {
            return Ok((LoaderState::Reading, block_from_le(&self.buffer)));
        }

        self.buffer[read] = PADDING_MARKER;
        let mut block = block_from_le(&self.buffer);

        if (read + 1) * 8 > LENGTH_OFFSET_BITS {
            Ok((LoaderState::Padding, block))
        } else {
            self.write_length(&mut block);
            Ok((LoaderState::Done, block))
        }
    }

    /// Handles the Padding state: a zero block holding only the length.
    fn length_block(&self) -> (LoaderState, Block) {
        let mut block = [0; BLOCK_WORDS];
        self.write_length(&mut block);
        (LoaderState::Done, block)
    }

    fn write_length(&self, block: &mut Block) {
        let (low, high) = split_u64(self.message_bits);
        block[LENGTH_LOW_WORD] = low;
        block[LENGTH_HIGH_WORD] = high;
    }

    /// Reads until the buffer is full or the source is exhausted, zero-filling
    /// whatever was not read. Returns the number of bytes read.
    fn fill_buffer(&mut self) -> Result<usize> {
        self.buffer.fill(0);
        let mut filled = 0;
        while filled < BLOCK_BYTES {
            match self.source.read(&mut self.buffer[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(filled)
    }
}

impl<R: Read> Iterator for BlockLoader<R> {
    type Item = Result<Block>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_more_data() {
            return None;
        }
        Some(self.load_next_chunk())
    }
}

impl<R: Read> FusedIterator for BlockLoader<R> {}
