//! Drives the block loader through the compression function.

use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::debug;

use super::block_loader::BlockLoader;
use super::compress::compress;
use super::state::{DigestState, MD5_OUTPUT_SIZE};
use crate::error::Result;

/// A finished 128-bit MD5 digest.
///
/// Formats as 32 lowercase hexadecimal characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; MD5_OUTPUT_SIZE]);

impl Digest {
    /// The 16 digest bytes, low-order byte of A first.
    pub fn as_bytes(&self) -> &[u8; MD5_OUTPUT_SIZE] {
        &self.0
    }

    pub fn into_bytes(self) -> [u8; MD5_OUTPUT_SIZE] {
        self.0
    }

    /// Lowercase hexadecimal rendering.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<DigestState> for Digest {
    fn from(state: DigestState) -> Self {
        Digest(state.to_le_bytes())
    }
}

impl From<Digest> for [u8; MD5_OUTPUT_SIZE] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

/// Computes the MD5 digest of everything `reader` yields.
///
/// Blocks are loaded one at a time, so memory use does not depend on the
/// input length.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if reading fails; no partial digest
/// is produced.
///
/// # Example
///
/// ```
/// use md5sum::md5::digest_reader;
///
/// let digest = digest_reader(&b"abc"[..]).unwrap();
/// assert_eq!(digest.to_string(), "900150983cd24fb0d6963f7d28e17f72");
/// ```
pub fn digest_reader<R: Read>(reader: R) -> Result<Digest> {
    let mut loader = BlockLoader::new(reader);
    let mut state = DigestState::INITIAL;
    let mut blocks: u64 = 0;

    while loader.has_more_data() {
        let block = loader.load_next_chunk()?;
        state = compress(state, &block);
        blocks += 1;
    }

    let digest = Digest::from(state);
    debug!(
        "digested {} bits in {} blocks: {}",
        loader.message_bits(),
        blocks,
        digest
    );
    Ok(digest)
}

/// Opens `path` and computes the digest of its contents.
pub fn digest_file<P: AsRef<Path>>(path: P) -> Result<Digest> {
    let path = path.as_ref();
    debug!("hashing {}", path.display());
    let file = File::open(path)?;
    digest_reader(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::{self, Write};

    fn md5_hex(input: &[u8]) -> String {
        digest_reader(input).unwrap().to_hex()
    }

    #[test]
    fn test_md5_empty() {
        assert_eq!(md5_hex(b""), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn test_md5_a() {
        assert_eq!(md5_hex(b"a"), "0cc175b9c0f1b6a831c399e269772661");
    }

    #[test]
    fn test_md5_abc() {
        assert_eq!(md5_hex(b"abc"), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn test_md5_message_digest() {
        assert_eq!(
            md5_hex(b"message digest"),
            "f96b697d7cb7938d525a2f31aaf161d0"
        );
    }

    #[test]
    fn test_md5_alphabet() {
        assert_eq!(
            md5_hex(b"abcdefghijklmnopqrstuvwxyz"),
            "c3fcd3d76192e4007dfb496cca67e13b"
        );
    }

    #[test]
    fn test_md5_alphanumeric() {
        assert_eq!(
            md5_hex(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789"),
            "d174ab98d277d9f5a5611c2c9f419d9f"
        );
    }

    #[test]
    fn test_md5_eighty_digits() {
        let input = b"1234567890".repeat(8);
        assert_eq!(md5_hex(&input), "57edf4a22be3c955ac49da2e2107b67a");
    }

    #[test]
    fn test_md5_million_a() {
        let input = vec![b'a'; 1_000_000];
        assert_eq!(md5_hex(&input), "7707d6ae4e027c70eea2a935c2296f21");
    }

    #[test]
    fn test_md5_56_byte_boundary() {
        // 56 bytes is the shortest input whose length needs its own block
        let input = [b'a'; 56];
        assert_eq!(md5_hex(&input), "3b0c8ac703f828b04c6c197006d17218");
    }

    #[test]
    fn test_output_is_32_lowercase_hex_chars() {
        for len in [0usize, 1, 55, 56, 63, 64, 65, 127, 128, 1000] {
            let text = md5_hex(&vec![0x5a; len]);
            assert_eq!(text.len(), 32);
            assert!(text
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        }
    }

    #[test]
    fn test_deterministic() {
        let input = b"The quick brown fox jumps over the lazy dog";
        assert_eq!(md5_hex(input), md5_hex(input));
        assert_eq!(md5_hex(input), "9e107d9d372bb6826bd81d3542a419d6");
    }

    #[test]
    fn test_single_byte_change_avalanches() {
        let a = digest_reader(&b"a"[..]).unwrap();
        let b = digest_reader(&b"b"[..]).unwrap();
        let differing = a
            .as_bytes()
            .iter()
            .zip(b.as_bytes())
            .filter(|(x, y)| x != y)
            .count();
        assert!(differing >= 12, "only {differing} bytes differ");
    }

    #[test]
    fn test_digest_formatting() {
        let digest = digest_reader(&b""[..]).unwrap();
        assert_eq!(format!("{digest}"), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(format!("{digest:x}"), digest.to_hex());
        assert_eq!(digest.as_ref(), &digest.into_bytes()[..]);
        let bytes: [u8; MD5_OUTPUT_SIZE] = digest.into();
        assert_eq!(bytes[0], 0xd4);
        assert_eq!(bytes[15], 0x7e);
    }

    #[test]
    fn test_read_failure_is_not_hashed() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("broken pipe"))
            }
        }
        assert!(matches!(digest_reader(Broken), Err(Error::Io(_))));
    }

    #[test]
    fn test_digest_file() {
        let path = std::env::temp_dir().join(format!("md5sum-digest-{}.txt", std::process::id()));
        {
            let mut file = File::create(&path).unwrap();
            file.write_all(b"message digest").unwrap();
        }
        let digest = digest_file(&path);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(
            digest.unwrap().to_hex(),
            "f96b697d7cb7938d525a2f31aaf161d0"
        );
    }

    #[test]
    fn test_digest_missing_file() {
        let path = std::env::temp_dir().join("md5sum-does-not-exist/nothing.bin");
        match digest_file(path) {
            Err(Error::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }
}
