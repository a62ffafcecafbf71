//! Test decoders for the store's legacy byte encoding.

use caissa_store::TextDecoder;

/// Decodes header bytes as (lossy) UTF-8.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8Decoder;

impl TextDecoder for Utf8Decoder {
    fn decode(&self, bytes: &[u8]) -> String {
        String::from_utf8_lossy(bytes).into_owned()
    }
}

/// Decodes header bytes as Latin-1, one char per byte. Closer to what the
/// real store delivers for Western player names.
#[derive(Debug, Clone, Copy, Default)]
pub struct Latin1Decoder;

impl TextDecoder for Latin1Decoder {
    fn decode(&self, bytes: &[u8]) -> String {
        bytes.iter().map(|&b| b as char).collect()
    }
}
