use core::borrow::Borrow;
use core::cmp::Ordering;

use super::arena::Arena;
use super::handle::Handle;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Color {
    Red,
    Black,
}

/// A Red-Black tree node.
///
/// `left`/`right` are the owning links; `parent` is a back-reference used by
/// the fixup loops and the in-order successor walk, never for ownership.
#[derive(Clone)]
pub(crate) struct RbNode<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    color: Color,
    left: Option<Handle>,
    right: Option<Handle>,
    parent: Option<Handle>,
}

impl<K, V> RbNode<K, V> {
    fn new(key: K, value: V, parent: Option<Handle>) -> Self {
        // Fresh nodes are RED; insertion fixup restores the height invariant.
        Self { key, value, color: Color::Red, left: None, right: None, parent }
    }
}

/// The Red-Black tree backing `TreeMap`.
///
/// Invariants restored after every public operation:
/// 1. binary-search-tree key order,
/// 2. the root is BLACK (or the tree is empty),
/// 3. a RED node never has a RED child,
/// 4. every root-to-nil path crosses the same number of BLACK nodes.
#[derive(Clone)]
pub(crate) struct RawRbTree<K, V> {
    nodes: Arena<RbNode<K, V>>,
    root: Option<Handle>,
    len: usize,
}

impl<K, V> RawRbTree<K, V> {
    pub(crate) const fn new() -> Self {
        Self { nodes: Arena::new(), root: None, len: 0 }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    #[inline]
    pub(crate) fn node(&self, handle: Handle) -> &RbNode<K, V> {
        self.nodes.get(handle)
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, handle: Handle) -> &mut RbNode<K, V> {
        self.nodes.get_mut(handle)
    }

    #[inline]
    fn left(&self, handle: Handle) -> Option<Handle> {
        self.nodes.get(handle).left
    }

    #[inline]
    fn right(&self, handle: Handle) -> Option<Handle> {
        self.nodes.get(handle).right
    }

    #[inline]
    fn parent(&self, handle: Handle) -> Option<Handle> {
        self.nodes.get(handle).parent
    }

    #[inline]
    fn is_red(&self, handle: Handle) -> bool {
        self.nodes.get(handle).color == Color::Red
    }

    /// Absent children count as BLACK.
    #[inline]
    fn nil_safe_is_red(&self, handle: Option<Handle>) -> bool {
        handle.is_some_and(|h| self.is_red(h))
    }

    #[inline]
    fn nil_safe_is_black(&self, handle: Option<Handle>) -> bool {
        !self.nil_safe_is_red(handle)
    }

    #[inline]
    fn set_color(&mut self, handle: Handle, color: Color) {
        self.nodes.get_mut(handle).color = color;
    }

    /// Leftmost node of the whole tree (smallest key).
    pub(crate) fn first(&self) -> Option<Handle> {
        self.root.map(|root| self.subtree_min(root))
    }

    /// Rightmost node of the whole tree (largest key).
    pub(crate) fn last(&self) -> Option<Handle> {
        let mut node = self.root?;
        while let Some(right) = self.right(node) {
            node = right;
        }
        Some(node)
    }

    fn subtree_min(&self, mut node: Handle) -> Handle {
        while let Some(left) = self.left(node) {
            node = left;
        }
        node
    }

    /// In-order successor: leftmost of the right subtree, else the first
    /// ancestor reached from a left child.
    pub(crate) fn successor(&self, handle: Handle) -> Option<Handle> {
        if let Some(right) = self.right(handle) {
            return Some(self.subtree_min(right));
        }
        let mut node = handle;
        let mut parent = self.parent(node);
        while let Some(p) = parent {
            if self.left(p) == Some(node) {
                return Some(p);
            }
            node = p;
            parent = self.parent(p);
        }
        None
    }
}

impl<K: Ord, V> RawRbTree<K, V> {
    pub(crate) fn find<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            current = match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(handle),
            };
        }
        None
    }

    /// Inserts or overwrites. Returns the previous value for a duplicate key;
    /// overwrites touch no structure and run no fixup.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        let Some(root) = self.root else {
            let handle = self.nodes.alloc(RbNode::new(key, value, None));
            self.set_color(handle, Color::Black);
            self.root = Some(handle);
            self.len = 1;
            return None;
        };

        // Descend to the attachment point.
        let mut current = root;
        loop {
            let node = self.nodes.get_mut(current);
            match key.cmp(&node.key) {
                Ordering::Equal => {
                    return Some(core::mem::replace(&mut node.value, value));
                }
                Ordering::Less => match node.left {
                    Some(left) => current = left,
                    None => {
                        let handle = self.nodes.alloc(RbNode::new(key, value, Some(current)));
                        self.nodes.get_mut(current).left = Some(handle);
                        self.len += 1;
                        self.insert_fix(handle);
                        return None;
                    }
                },
                Ordering::Greater => match node.right {
                    Some(right) => current = right,
                    None => {
                        let handle = self.nodes.alloc(RbNode::new(key, value, Some(current)));
                        self.nodes.get_mut(current).right = Some(handle);
                        self.len += 1;
                        self.insert_fix(handle);
                        return None;
                    }
                },
            }
        }
    }

    /// Restores coloring after an insertion, walking the RED-RED violation
    /// upward through the uncle cases.
    fn insert_fix(&mut self, mut node: Handle) {
        while self.nil_safe_is_red(self.parent(node)) {
            let Some(parent) = self.parent(node) else { break };
            let Some(grandparent) = self.parent(parent) else { break };

            if Some(parent) == self.left(grandparent) {
                let uncle = self.right(grandparent);
                if self.nil_safe_is_red(uncle) {
                    // RED uncle: recolor and push the violation up.
                    self.set_color(parent, Color::Black);
                    if let Some(u) = uncle {
                        self.set_color(u, Color::Black);
                    }
                    self.set_color(grandparent, Color::Red);
                    node = grandparent;
                } else {
                    if Some(node) == self.right(parent) {
                        // Triangle: rotate into the line case.
                        node = parent;
                        self.rotate_left(node);
                    }
                    if let Some(parent) = self.parent(node) {
                        self.set_color(parent, Color::Black);
                        if let Some(grandparent) = self.parent(parent) {
                            self.set_color(grandparent, Color::Red);
                            self.rotate_right(grandparent);
                        }
                    }
                }
            } else {
                let uncle = self.left(grandparent);
                if self.nil_safe_is_red(uncle) {
                    self.set_color(parent, Color::Black);
                    if let Some(u) = uncle {
                        self.set_color(u, Color::Black);
                    }
                    self.set_color(grandparent, Color::Red);
                    node = grandparent;
                } else {
                    if Some(node) == self.left(parent) {
                        node = parent;
                        self.rotate_right(node);
                    }
                    if let Some(parent) = self.parent(node) {
                        self.set_color(parent, Color::Black);
                        if let Some(grandparent) = self.parent(parent) {
                            self.set_color(grandparent, Color::Red);
                            self.rotate_left(grandparent);
                        }
                    }
                }
            }
        }

        if let Some(root) = self.root {
            self.set_color(root, Color::Black);
        }
    }

    fn rotate_left(&mut self, node: Handle) {
        let Some(right) = self.right(node) else {
            return;
        };

        // Right's left subtree becomes node's right subtree.
        let right_left = self.left(right);
        self.nodes.get_mut(node).right = right_left;
        if let Some(rl) = right_left {
            self.nodes.get_mut(rl).parent = Some(node);
        }

        // Right takes node's place under node's parent.
        let node_parent = self.parent(node);
        self.nodes.get_mut(right).parent = node_parent;
        match node_parent {
            None => self.root = Some(right),
            Some(parent) => {
                if self.left(parent) == Some(node) {
                    self.nodes.get_mut(parent).left = Some(right);
                } else {
                    self.nodes.get_mut(parent).right = Some(right);
                }
            }
        }

        self.nodes.get_mut(right).left = Some(node);
        self.nodes.get_mut(node).parent = Some(right);
    }

    fn rotate_right(&mut self, node: Handle) {
        let Some(left) = self.left(node) else {
            return;
        };

        let left_right = self.right(left);
        self.nodes.get_mut(node).left = left_right;
        if let Some(lr) = left_right {
            self.nodes.get_mut(lr).parent = Some(node);
        }

        let node_parent = self.parent(node);
        self.nodes.get_mut(left).parent = node_parent;
        match node_parent {
            None => self.root = Some(left),
            Some(parent) => {
                if self.right(parent) == Some(node) {
                    self.nodes.get_mut(parent).right = Some(left);
                } else {
                    self.nodes.get_mut(parent).left = Some(left);
                }
            }
        }

        self.nodes.get_mut(left).right = Some(node);
        self.nodes.get_mut(node).parent = Some(left);
    }

    /// Removes `key`, returning its value.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let node = self.find(key)?;

        // Splice: the node physically unlinked. A two-child node delegates to
        // its in-order successor, which has no left child by construction.
        let splice = match (self.left(node), self.right(node)) {
            (Some(_), Some(right)) => self.subtree_min(right),
            _ => node,
        };

        // The splice's only child moves into its place.
        let subtree = self.left(splice).or_else(|| self.right(splice));
        let subtree_parent = if self.parent(splice) != Some(node) { self.parent(splice) } else { Some(splice) };

        self.replace_child(subtree, splice);
        let removed_black = !self.is_red(splice);

        if splice != node {
            // The successor adopts the removed node's position, links, and color.
            self.transplant(splice, node);
        }

        self.len -= 1;

        // A BLACK node left the tree and its replacement cannot absorb the
        // deficit: run the double-black fixup from the vacated position.
        if removed_black {
            self.remove_fix(subtree, subtree_parent);
        }

        let removed = self.nodes.take(node);
        Some(removed.value)
    }

    /// Puts `source` where `dest` hangs under its parent (either may be the root).
    fn replace_child(&mut self, source: Option<Handle>, dest: Handle) {
        if Some(dest) == self.root {
            self.root = source;
        } else if let Some(parent) = self.parent(dest) {
            if self.left(parent) == Some(dest) {
                self.nodes.get_mut(parent).left = source;
            } else {
                self.nodes.get_mut(parent).right = source;
            }
        }

        if let Some(s) = source {
            self.nodes.get_mut(s).parent = self.parent(dest);
        }
    }

    /// Moves `source` into `dest`'s structural position: parent link, both
    /// children, and color.
    fn transplant(&mut self, source: Handle, dest: Handle) {
        self.replace_child(Some(source), dest);

        let dest_node = self.nodes.get(dest);
        let (dest_left, dest_right, dest_color) = (dest_node.left, dest_node.right, dest_node.color);

        self.nodes.get_mut(source).left = dest_left;
        if let Some(l) = dest_left {
            self.nodes.get_mut(l).parent = Some(source);
        }
        self.nodes.get_mut(source).right = dest_right;
        if let Some(r) = dest_right {
            self.nodes.get_mut(r).parent = Some(source);
        }
        self.nodes.get_mut(source).color = dest_color;
    }

    /// Double-black fixup. `node` is the replacement position (possibly nil,
    /// hence the `(node, parent)` pair) carrying the missing BLACK.
    fn remove_fix(&mut self, mut node: Option<Handle>, mut parent: Option<Handle>) {
        while parent.is_some() && self.nil_safe_is_black(node) {
            let Some(p) = parent else { break };

            if node == self.left(p) {
                let Some(mut sibling) = self.right(p) else { break };

                if self.is_red(sibling) {
                    // RED sibling: rotate it above, exposing a BLACK sibling.
                    self.set_color(sibling, Color::Black);
                    self.set_color(p, Color::Red);
                    self.rotate_left(p);
                    sibling = match self.right(p) {
                        Some(s) => s,
                        None => break,
                    };
                }

                if self.nil_safe_is_black(self.left(sibling)) && self.nil_safe_is_black(self.right(sibling)) {
                    // Both sibling children BLACK: push the deficit up.
                    self.set_color(sibling, Color::Red);
                    node = Some(p);
                    parent = self.parent(p);
                } else {
                    if self.nil_safe_is_black(self.right(sibling)) {
                        // Near child RED, far child BLACK: rotate the sibling.
                        if let Some(near) = self.left(sibling) {
                            self.set_color(near, Color::Black);
                        }
                        self.set_color(sibling, Color::Red);
                        self.rotate_right(sibling);
                        sibling = match self.right(p) {
                            Some(s) => s,
                            None => break,
                        };
                    }
                    // Far child RED: terminal rotation absorbs the deficit.
                    let parent_color = self.nodes.get(p).color;
                    self.set_color(sibling, parent_color);
                    self.set_color(p, Color::Black);
                    if let Some(far) = self.right(sibling) {
                        self.set_color(far, Color::Black);
                    }
                    self.rotate_left(p);
                    node = self.root;
                    parent = None;
                }
            } else {
                let Some(mut sibling) = self.left(p) else { break };

                if self.is_red(sibling) {
                    self.set_color(sibling, Color::Black);
                    self.set_color(p, Color::Red);
                    self.rotate_right(p);
                    sibling = match self.left(p) {
                        Some(s) => s,
                        None => break,
                    };
                }

                if self.nil_safe_is_black(self.right(sibling)) && self.nil_safe_is_black(self.left(sibling)) {
                    self.set_color(sibling, Color::Red);
                    node = Some(p);
                    parent = self.parent(p);
                } else {
                    if self.nil_safe_is_black(self.left(sibling)) {
                        if let Some(near) = self.right(sibling) {
                            self.set_color(near, Color::Black);
                        }
                        self.set_color(sibling, Color::Red);
                        self.rotate_left(sibling);
                        sibling = match self.left(p) {
                            Some(s) => s,
                            None => break,
                        };
                    }
                    let parent_color = self.nodes.get(p).color;
                    self.set_color(sibling, parent_color);
                    self.set_color(p, Color::Black);
                    if let Some(far) = self.left(sibling) {
                        self.set_color(far, Color::Black);
                    }
                    self.rotate_right(p);
                    node = self.root;
                    parent = None;
                }
            }
        }

        if let Some(n) = node {
            self.set_color(n, Color::Black);
        }
    }
}
