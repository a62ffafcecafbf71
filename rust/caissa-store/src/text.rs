//! Legacy text decoding.

/// Decodes header bytes from the store's legacy single-byte encoding.
///
/// Decoding is a pure function of the input bytes; implementations carry no
/// per-call state. The store keeps its strings in a pre-Unicode encoding,
/// so the conversion lives behind this seam rather than in the view layer.
pub trait TextDecoder {
    fn decode(&self, bytes: &[u8]) -> String;
}
