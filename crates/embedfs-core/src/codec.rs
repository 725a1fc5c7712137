//! Payload codec: gzip compression wrapped in padded base64 text.
//!
//! Encoded payloads are printable ASCII, safe to place verbatim inside a
//! quoted string literal in generated source. The wire format is gzip on the
//! inside and standard padded base64 on the outside, so [`decode`] applies
//! base64 first, then inflates. Any producer emitting RFC 4648 base64 over a
//! gzip stream is bit-compatible with this module.
//!
//! # Examples
//!
//! ```rust
//! use embedfs_core::codec;
//!
//! let token = codec::encode(b"hello")?;
//! assert!(token.is_ascii());
//! assert_eq!(codec::decode(&token)?, b"hello");
//! # Ok::<(), embedfs_core::Error>(())
//! ```

use std::io::{Read, Write};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;

use crate::{Error, Result};

/// Compresses raw bytes and renders them as a printable text token.
///
/// Empty input is valid and encodes to a token that decodes back to empty.
///
/// # Errors
///
/// Returns [`Error::Codec`] if the compressor rejects the stream. With an
/// in-memory sink this only happens under resource exhaustion, but the
/// failure is surfaced rather than swallowed.
pub fn encode(raw: &[u8]) -> Result<String> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(raw).map_err(|err| Error::Codec {
        message: format!("gzip deflate failed: {err}"),
    })?;
    let compressed = encoder.finish().map_err(|err| Error::Codec {
        message: format!("gzip finish failed: {err}"),
    })?;
    Ok(STANDARD.encode(compressed))
}

/// Recovers the original bytes from a token produced by [`encode`].
///
/// # Errors
///
/// Returns [`Error::Codec`] if the token contains characters outside the
/// base64 alphabet, if padding is wrong, or if the compressed stream is
/// truncated or corrupt. The input is never partially decoded: on failure
/// the caller gets an error and nothing else.
pub fn decode(token: &str) -> Result<Vec<u8>> {
    let compressed = STANDARD.decode(token).map_err(|err| Error::Codec {
        message: format!("base64 decode failed: {err}"),
    })?;
    let mut decoder = GzDecoder::new(compressed.as_slice());
    let mut raw = Vec::new();
    decoder.read_to_end(&mut raw).map_err(|err| Error::Codec {
        message: format!("gzip inflate failed: {err}"),
    })?;
    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic pseudo-random bytes for binary round-trip coverage.
    fn pseudo_random_bytes(len: usize, mut seed: u64) -> Vec<u8> {
        let mut out = Vec::with_capacity(len);
        while out.len() < len {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            out.extend_from_slice(&seed.to_le_bytes());
        }
        out.truncate(len);
        out
    }

    #[test]
    fn test_round_trip_text() {
        let token = encode(b"hello world").unwrap();
        assert_eq!(decode(&token).unwrap(), b"hello world");
    }

    #[test]
    fn test_round_trip_empty() {
        let token = encode(b"").unwrap();
        assert!(!token.is_empty());
        assert_eq!(decode(&token).unwrap(), b"");
    }

    #[test]
    fn test_round_trip_binary_with_nulls() {
        let mut raw: Vec<u8> = (0..=255u8).collect();
        raw.extend_from_slice(&[0, 0, 0, 255, 0]);
        let token = encode(&raw).unwrap();
        assert_eq!(decode(&token).unwrap(), raw);
    }

    #[test]
    fn test_round_trip_pseudo_random() {
        let raw = pseudo_random_bytes(10_000, 0x5eed);
        let token = encode(&raw).unwrap();
        assert_eq!(decode(&token).unwrap(), raw);
    }

    #[test]
    fn test_token_is_printable_ascii() {
        let token = encode(&pseudo_random_bytes(512, 7)).unwrap();
        assert!(token.chars().all(|c| c.is_ascii_graphic()));
    }

    #[test]
    fn test_compresses_repetitive_input() {
        let raw = vec![b'a'; 64 * 1024];
        let token = encode(&raw).unwrap();
        assert!(token.len() < raw.len() / 10);
    }

    #[test]
    fn test_decode_rejects_bad_alphabet() {
        let err = decode("not@valid@base64!").unwrap_err();
        assert!(err.is_codec());
        assert!(err.to_string().contains("base64"));
    }

    #[test]
    fn test_decode_rejects_non_gzip_payload() {
        // Valid base64, but the inner bytes are not a gzip stream.
        let token = STANDARD.encode(b"plain junk");
        let err = decode(&token).unwrap_err();
        assert!(err.is_codec());
        assert!(err.to_string().contains("gzip"));
    }

    #[test]
    fn test_decode_rejects_truncated_stream() {
        let token = encode(&pseudo_random_bytes(4096, 42)).unwrap();
        let compressed = STANDARD.decode(&token).unwrap();
        let truncated = STANDARD.encode(&compressed[..compressed.len() / 2]);
        assert!(decode(&truncated).unwrap_err().is_codec());
    }

    #[test]
    fn test_decode_rejects_empty_token() {
        // Empty text is valid base64 but not a gzip stream.
        assert!(decode("").unwrap_err().is_codec());
    }
}
