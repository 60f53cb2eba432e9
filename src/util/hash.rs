//! Digest helpers for identifying external binaries.
//!
//! The NetBeans external-binaries list keys artifacts by SHA-1, so this is
//! SHA-1 by necessity, not preference.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use sha1::{Digest, Sha1};
use thiserror::Error;

/// A digest with a length outside the recognized 128/160-bit set.
#[derive(Debug, Error)]
#[error("unrecognised length for binary data: {0} bits")]
pub struct DigestLengthError(pub usize);

/// Hex-encode a 128-bit or 160-bit digest as a lowercase string.
///
/// Any other input length is an error; truncated digests must never be
/// silently accepted when matching against an externals list.
pub fn encode_digest(binary: &[u8]) -> Result<String, DigestLengthError> {
    let bits = binary.len() * 8;
    if bits != 128 && bits != 160 {
        return Err(DigestLengthError(bits));
    }
    Ok(hex::encode(binary))
}

/// Compute the SHA-1 digest of a file, hex-encoded lowercase.
pub fn sha1_file(path: &Path) -> Result<String> {
    let file = File::open(path)
        .with_context(|| format!("failed to open file for hashing: {}", path.display()))?;

    let mut reader = BufReader::new(file);
    let mut hasher = Sha1::new();
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    let digest = hasher.finalize();
    // SHA-1 is always 160 bits; the length check cannot fail here
    Ok(encode_digest(&digest).map_err(anyhow::Error::from)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn encode_sha1_length() {
        let digest = [0xabu8; 20];
        let encoded = encode_digest(&digest).unwrap();
        assert_eq!(encoded.len(), 40);
        assert_eq!(encoded, "ab".repeat(20));
    }

    #[test]
    fn encode_md5_length() {
        let digest = [0x01u8; 16];
        let encoded = encode_digest(&digest).unwrap();
        assert_eq!(encoded.len(), 32);
    }

    #[test]
    fn encode_rejects_other_lengths() {
        let err = encode_digest(&[0u8; 8]).unwrap_err();
        assert_eq!(err.0, 64);
        assert!(encode_digest(&[]).is_err());
        assert!(encode_digest(&[0u8; 32]).is_err());
    }

    #[test]
    fn sha1_of_known_content() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("lib.jar");
        std::fs::write(&path, "hello").unwrap();

        let digest = sha1_file(&path).unwrap();
        assert_eq!(digest, "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d");
    }
}
