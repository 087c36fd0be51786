//! Strict UTF-8 checks with a best-effort guess at what the bytes are instead.

use chardetng::EncodingDetector;

const DEFAULT_SAMPLE_SIZE: usize = 8192;

/// Borrow `bytes` as text if they are well-formed UTF-8.
///
/// On failure returns the byte offset of the first invalid sequence.
pub fn as_utf8(bytes: &[u8]) -> Result<&str, usize> {
    std::str::from_utf8(bytes).map_err(|err| err.valid_up_to())
}

/// Guess the encoding of bytes that failed UTF-8 validation.
///
/// Strategy:
/// 1. Check for BOM markers first (most reliable)
/// 2. Fall back to chardetng on a leading sample
///
/// Returns a lowercase encoding label such as "utf-16le" or "windows-1251".
pub fn guess_encoding(bytes: &[u8]) -> String {
    if bytes.starts_with(&[0xff, 0xfe]) {
        return "utf-16le".to_string();
    }
    if bytes.starts_with(&[0xfe, 0xff]) {
        return "utf-16be".to_string();
    }

    let sample = &bytes[..bytes.len().min(DEFAULT_SAMPLE_SIZE)];
    let mut detector = EncodingDetector::new();
    detector.feed(sample, sample.len() == bytes.len());
    detector.guess(None, true).name().to_lowercase()
}
