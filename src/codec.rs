//! Conversion between display hex and hashing byte order
//!
//! Hashes are shown big-endian (the order block explorers print txids in)
//! but hashed little-endian, the order they have on the wire.

use crate::{Error, Result};

/// Width of every value in the tree, in bytes
pub const HASH_LEN: usize = 32;

/// Reverse a buffer in place. Works for any length.
pub fn reverse_bytes(bytes: &mut [u8]) {
    let len = bytes.len();
    for i in 0..len / 2 {
        bytes.swap(i, len - 1 - i);
    }
}

/// Reversed copy of a buffer
pub fn reversed(bytes: &[u8]) -> Vec<u8> {
    let mut out = bytes.to_vec();
    reverse_bytes(&mut out);
    out
}

/// Parse a 64-char display hex string into little-endian hash bytes.
///
/// Accepts upper or lower case. Anything that is not valid hex or does not
/// decode to exactly [`HASH_LEN`] bytes is rejected with
/// [`Error::MalformedInput`].
pub fn decode_display_to_le_bytes(hex_str: &str) -> Result<[u8; HASH_LEN]> {
    let bytes = hex::decode(hex_str).map_err(|e| Error::malformed(hex_str, e))?;
    if bytes.len() != HASH_LEN {
        return Err(Error::malformed(
            hex_str,
            format!("expected {} bytes, got {}", HASH_LEN, bytes.len()),
        ));
    }
    let mut arr = [0u8; HASH_LEN];
    arr.copy_from_slice(&bytes);
    reverse_bytes(&mut arr);
    Ok(arr)
}

/// Render little-endian hash bytes as lowercase display hex
pub fn encode_le_bytes_to_display(bytes: &[u8; HASH_LEN]) -> String {
    let mut be = *bytes;
    reverse_bytes(&mut be);
    hex::encode(be)
}
