//! Double-SHA-256 pair hashing

use crate::codec::{decode_display_to_le_bytes, encode_le_bytes_to_display, HASH_LEN};
use crate::Result;
use sha2::{Digest, Sha256};

/// SHA-256 applied twice
pub fn sha256d(data: &[u8]) -> [u8; HASH_LEN] {
    let first = Sha256::digest(data);
    Sha256::digest(first).into()
}

/// Combine two display values into their parent's display value.
///
/// Both inputs are decoded to little-endian, concatenated left first,
/// double hashed, and the digest is rendered back in display order.
pub fn merge(left: &str, right: &str) -> Result<String> {
    let left_bytes = decode_display_to_le_bytes(left)?;
    let right_bytes = decode_display_to_le_bytes(right)?;

    let mut cat = [0u8; HASH_LEN * 2];
    cat[..HASH_LEN].copy_from_slice(&left_bytes);
    cat[HASH_LEN..].copy_from_slice(&right_bytes);

    let parent = encode_le_bytes_to_display(&sha256d(&cat));
    tracing::trace!(left, right, parent = %parent, "merged pair");
    Ok(parent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_sha256d_known_vector() {
        // sha256d("hello")
        assert_eq!(
            hex::encode(sha256d(b"hello")),
            "9595c9df90075148eb06860365df33584b75bff782a510c6cd4883a419833d50"
        );
    }

    #[test]
    fn test_merge_deterministic() {
        let a = "aa".repeat(32);
        let b = "bb".repeat(32);
        assert_eq!(merge(&a, &b).unwrap(), merge(&a, &b).unwrap());
    }

    #[test]
    fn test_merge_is_order_sensitive() {
        let a = "aa".repeat(32);
        let b = "bb".repeat(32);
        assert_ne!(merge(&a, &b).unwrap(), merge(&b, &a).unwrap());
    }

    #[test]
    fn test_merge_output_shape() {
        let out = merge(&"AA".repeat(32), &"bb".repeat(32)).unwrap();
        assert_eq!(out.len(), HASH_LEN * 2);
        assert_eq!(out, out.to_lowercase());
    }

    #[test]
    fn test_merge_case_insensitive_input() {
        let lower = merge(&"ab".repeat(32), &"cd".repeat(32)).unwrap();
        let upper = merge(&"AB".repeat(32), &"CD".repeat(32)).unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_merge_matches_manual_computation() {
        let a = "01".repeat(16) + &"02".repeat(16);
        let b = "03".repeat(32);

        let mut cat = decode_display_to_le_bytes(&a).unwrap().to_vec();
        cat.extend_from_slice(&decode_display_to_le_bytes(&b).unwrap());
        let mut expected = sha256d(&cat);
        expected.reverse();

        assert_eq!(merge(&a, &b).unwrap(), hex::encode(expected));
    }

    #[test]
    fn test_merge_rejects_malformed_side() {
        let good = "aa".repeat(32);
        let bad = "zz".repeat(32);
        assert!(matches!(
            merge(&good, &bad),
            Err(Error::MalformedInput { .. })
        ));
        assert!(matches!(
            merge("abcd", &good),
            Err(Error::MalformedInput { .. })
        ));
    }
}
