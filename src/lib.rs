pub mod error;
pub mod md5;

pub use error::{Error, Result};
pub use md5::{digest_file, digest_reader, Digest};
