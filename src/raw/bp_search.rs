//! Stateless search routines over a [`RawBpTree`].
//!
//! Kept apart from the structural code: everything here only reads the tree.
//! Three access paths exist — keyed descent, a linear reverse lookup that
//! maps a value back to its key, and the leaf-chain range scan.

use core::borrow::Borrow;

use alloc::vec::Vec;

use super::bp_tree::{BpNode, RawBpTree};

/// Keyed point lookup: descend by separators, then exact-match in the leaf.
pub(crate) fn find<'t, K, V, Q>(tree: &'t RawBpTree<K, V>, key: &Q) -> Option<&'t V>
where
    K: Ord + Borrow<Q>,
    Q: ?Sized + Ord,
{
    let leaf_handle = tree.leaf_for(key)?;
    let leaf = tree.node(leaf_handle).as_leaf();
    let index = RawBpTree::<K, V>::leaf_index(&leaf.keys, key);
    if index < leaf.keys.len() && leaf.keys[index].borrow() == key {
        Some(tree.value(leaf.values[index]))
    } else {
        None
    }
}

/// Reverse lookup: scan the leaf chain left to right and return the key of
/// the first entry whose value equals `value`. O(n).
pub(crate) fn find_by_value<'t, K, V>(tree: &'t RawBpTree<K, V>, value: &V) -> Option<&'t K>
where
    K: Ord,
    V: PartialEq,
{
    let mut current = tree.leftmost_leaf();
    while let Some(handle) = current {
        let leaf = tree.node(handle).as_leaf();
        for (key, &vh) in leaf.keys.iter().zip(&leaf.values) {
            if tree.value(vh) == value {
                return Some(key);
            }
        }
        current = leaf.next;
    }
    None
}

/// Collects every value whose key lies in `[start, end]`, ascending.
///
/// Descends toward the first leaf that could hold `start`, then walks the
/// chain until a key passes `end`.
pub(crate) fn range_search<'t, K, V, Q>(tree: &'t RawBpTree<K, V>, start: &Q, end: &Q) -> Vec<&'t V>
where
    K: Ord + Borrow<Q>,
    Q: ?Sized + Ord,
{
    let mut result = Vec::new();
    let Some(root) = tree.root() else {
        return result;
    };

    // Range descent takes the first child whose separator reaches `start`,
    // one child to the left of where an equal key would be inserted.
    let mut current = root;
    let mut leaf = loop {
        match tree.node(current) {
            BpNode::Internal(internal) => {
                let index = internal.keys.partition_point(|k| k.borrow() < start);
                current = internal.children[index];
            }
            BpNode::Leaf(leaf) => break Some(leaf),
        }
    };

    while let Some(l) = leaf {
        for (key, &vh) in l.keys.iter().zip(&l.values) {
            let key = key.borrow();
            if key > end {
                return result;
            }
            if key >= start {
                result.push(tree.value(vh));
            }
        }
        leaf = l.next.map(|next| tree.node(next).as_leaf());
    }

    result
}
