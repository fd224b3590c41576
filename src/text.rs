//! Byte-sequence reversal.
//!
//! The C boundary deals in raw `char` buffers with explicit lengths, so the
//! Rust layer works on bytes rather than `str`: the caller's data need not be
//! valid UTF-8 and is never interpreted, only reordered.

/// Return a new buffer holding `original` in reverse order.
pub fn reverse_bytes(original: &[u8]) -> Vec<u8> {
    original.iter().rev().copied().collect()
}
