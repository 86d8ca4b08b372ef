//! # merkle_root
//!
//! Bitcoin-style Merkle roots over transaction ids.
//!
//! Txids are given as 64-character hex in display (big-endian) order.
//! Pairs are hashed with double SHA-256 over their little-endian bytes, and
//! every parent is rendered back in display order, so the root can be
//! compared directly with the `merkleroot` field shown by block explorers.
//!
//! ## Core Concepts
//!
//! - **Codec**: display hex <-> little-endian bytes
//! - **Merge**: parent value of two children
//! - **Tree**: level-by-level reduction, duplicating the last node of odd levels
//!
//! ## Example
//!
//! ```
//! use merkle_root::{build_root, merge};
//!
//! let a = "aa".repeat(32);
//! let b = "bb".repeat(32);
//! let root = build_root([&a, &b])?;
//! assert_eq!(root.value(), merge(&a, &b)?);
//! # Ok::<(), merkle_root::Error>(())
//! ```

pub mod codec;
pub mod hasher;
pub mod tree;

mod error;

pub use codec::{
    decode_display_to_le_bytes, encode_le_bytes_to_display, reverse_bytes, reversed, HASH_LEN,
};
pub use error::{Error, Result};
pub use hasher::{merge, sha256d};
pub use tree::{build_from_nodes, build_root, MerkleNode};
