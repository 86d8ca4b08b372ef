//! Tree node type

use crate::codec::decode_display_to_le_bytes;
use crate::hasher::merge;
use crate::Result;
use serde::Serialize;
use std::sync::Arc;

/// A vertex of the binary Merkle tree
///
/// A node is either a leaf (no children) or a branch with exactly two
/// children. When a level has an odd node count, the last node becomes
/// both children of its parent: the two slots hold the same `Arc` and the
/// parent is marked `duplicated`.
#[derive(Clone, Debug, Serialize)]
pub struct MerkleNode {
    /// Hash in big-endian display hex
    value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    left: Option<Arc<MerkleNode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    right: Option<Arc<MerkleNode>>,
    /// Set only when the right slot is the odd-node copy of the left
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    duplicated: bool,
}

impl MerkleNode {
    /// Create a leaf, validating that the value decodes to a 32-byte hash.
    ///
    /// The value is kept exactly as given, including its letter case.
    pub fn leaf(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        decode_display_to_le_bytes(&value)?;
        Ok(MerkleNode {
            value,
            left: None,
            right: None,
            duplicated: false,
        })
    }

    /// Create a branch whose value is the pair hash of its children
    ///
    /// Passing the same node twice is an ordinary pair of two positions,
    /// not the odd-node rule; use [`MerkleNode::duplicate`] for that.
    pub fn branch(left: Arc<MerkleNode>, right: Arc<MerkleNode>) -> Result<Self> {
        let value = merge(&left.value, &right.value)?;
        Ok(MerkleNode {
            value,
            left: Some(left),
            right: Some(right),
            duplicated: false,
        })
    }

    /// Parent of an unpaired last node, hashed with itself
    pub fn duplicate(child: Arc<MerkleNode>) -> Result<Self> {
        let value = merge(&child.value, &child.value)?;
        Ok(MerkleNode {
            value,
            left: Some(Arc::clone(&child)),
            right: Some(child),
            duplicated: true,
        })
    }

    /// The node's hash in display hex
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn left(&self) -> Option<&Arc<MerkleNode>> {
        self.left.as_ref()
    }

    pub fn right(&self) -> Option<&Arc<MerkleNode>> {
        self.right.as_ref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none()
    }

    /// True when this node came from the odd-node duplication rule
    pub fn is_duplicated(&self) -> bool {
        self.duplicated
    }

    /// Number of levels on the longest path below this node (0 for a leaf)
    ///
    /// Subtrees joined with `build_from_nodes` may differ in height, so
    /// both sides are measured.
    pub fn depth(&self) -> usize {
        match (&self.left, &self.right) {
            (Some(l), _) if self.duplicated => 1 + l.depth(),
            (Some(l), Some(r)) => 1 + l.depth().max(r.depth()),
            _ => 0,
        }
    }

    /// Number of leaf positions under this node
    ///
    /// The copy made by the odd-node rule is not counted; a node supplied
    /// twice as two real positions is.
    pub fn leaf_count(&self) -> usize {
        match (&self.left, &self.right) {
            (Some(l), _) if self.duplicated => l.leaf_count(),
            (Some(l), Some(r)) => l.leaf_count() + r.leaf_count(),
            _ => 1,
        }
    }
}
