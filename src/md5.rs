//! MD5 message digest (RFC 1321) over streaming byte sources.
//!
//! The digest is built from two pieces:
//! - [`BlockLoader`] turns any [`std::io::Read`] into a sequence of padded
//!   512-bit blocks, holding only one block in memory at a time.
//! - [`compress`] folds one block into the 128-bit chaining state using the
//!   four rounds of sixteen steps.
//!
//! [`digest_reader`] wires the two together.
//!
//! **Note**: MD5 is broken as a cryptographic hash. Use it as a checksum only.
//!
//! # Example
//!
//! ```
//! use md5sum::md5::digest_reader;
//!
//! let digest = digest_reader(&b"message digest"[..]).unwrap();
//! assert_eq!(digest.to_hex(), "f96b697d7cb7938d525a2f31aaf161d0");
//! ```

pub mod auxiliary;
pub mod block_loader;
pub mod compress;
pub mod digest;
pub mod sine_table;
pub mod state;
pub mod word;

pub use block_loader::BlockLoader;
pub use compress::compress;
pub use digest::{digest_file, digest_reader, Digest};
pub use sine_table::SINE_TABLE;
pub use state::{DigestState, MD5_OUTPUT_SIZE};
pub use word::{Block, Word, BLOCK_BYTES, BLOCK_WORDS};
