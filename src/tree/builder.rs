//! Level-by-level reduction of leaves to a Merkle root

use super::MerkleNode;
use crate::{Error, Result};
use std::sync::Arc;
use tracing::debug;

/// Build the Merkle tree over `leaves` and return its root.
///
/// Leaves are display-hex txids in their original order. Every leaf is
/// validated before any hashing; the first malformed one fails the call.
/// A single leaf is its own root.
///
/// ```
/// let root = merkle_root::build_root([
///     "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b",
/// ])?;
/// assert_eq!(
///     root.value(),
///     "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b"
/// );
/// # Ok::<(), merkle_root::Error>(())
/// ```
pub fn build_root<I, S>(leaves: I) -> Result<MerkleNode>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let nodes = leaves
        .into_iter()
        .map(|value| MerkleNode::leaf(value.as_ref()).map(Arc::new))
        .collect::<Result<Vec<_>>>()?;
    build_from_nodes(nodes)
}

/// Reduce already-built nodes (leaves or subtrees) to a single root.
///
/// Nodes are paired in order; an odd last node is paired with itself.
pub fn build_from_nodes(mut level: Vec<Arc<MerkleNode>>) -> Result<MerkleNode> {
    if level.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut height = 0;
    while level.len() > 1 {
        let len = level.len();
        let parents = len.div_ceil(2);
        debug!(
            height,
            nodes = len,
            duplicated = len % 2 == 1,
            "reducing level"
        );

        // Parent i only reads slots 2i and 2i+1, both >= i.
        for i in 0..parents {
            let left = Arc::clone(&level[2 * i]);
            let parent = match level.get(2 * i + 1) {
                Some(right) => MerkleNode::branch(left, Arc::clone(right))?,
                None => MerkleNode::duplicate(left)?,
            };
            level[i] = Arc::new(parent);
        }
        level.truncate(parents);
        height += 1;
    }

    let root = level.pop().ok_or(Error::EmptyInput)?;
    Ok(Arc::try_unwrap(root).unwrap_or_else(|shared| (*shared).clone()))
}
