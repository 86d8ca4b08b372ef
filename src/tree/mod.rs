//! Binary Merkle tree over transaction ids
//!
//! Each level is paired left to right. A level with an odd node count
//! pairs its last node with itself, as Bitcoin block headers require.

mod builder;
mod node;

pub use builder::{build_from_nodes, build_root};
pub use node::MerkleNode;
