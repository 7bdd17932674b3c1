use core::fmt::Debug;
use crate::storage::{Storage, DefaultStorage};
use super::{BinaryTree, Node, NodeRef};

/// A *mutable* reference to a node in a binary tree.
///
/// Gives mutable access to the values of the node and its descendants. The structure of the tree is only ever changed through the builder methods of [`BinaryTree`].
///
/// [`BinaryTree`]: struct.BinaryTree.html " "
#[derive(Debug)]
pub struct NodeRefMut<'a, T, K = usize, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    tree: &'a mut BinaryTree<T, K, S>,
    key: K,
}
impl<'a, T, K, S> NodeRefMut<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Creates a new `NodeRefMut` pointing to the specified key in the storage, or `None` if it does not exist.
    #[inline(always)]
    pub fn new_raw(tree: &'a mut BinaryTree<T, K, S>, key: K) -> Option<Self> {
        if tree.storage.contains_key(&key) {
            Some(unsafe {
                // SAFETY: we just did key checking
                Self::new_raw_unchecked(tree, key)
            })
        } else {
            None
        }
    }
    /// Creates a new `NodeRefMut` pointing to the specified key in the storage without doing key checking.
    ///
    /// # Safety
    /// Causes *immediate* undefined behavior if the specified key is not present in the storage.
    #[inline(always)]
    pub unsafe fn new_raw_unchecked(tree: &'a mut BinaryTree<T, K, S>, key: K) -> Self {
        Self { tree, key }
    }
    /// Returns a reference to the raw storage key for the node.
    #[inline(always)]
    pub fn raw_key(&self) -> &K {
        &self.key
    }
    /// Consumes the reference and returns the underlying raw storage key for the node.
    #[inline(always)]
    pub fn into_raw_key(self) -> K {
        self.key
    }
    /// Returns `true` if the node has a left child, `false` otherwise.
    #[inline(always)]
    pub fn has_left_child(&self) -> bool {
        self.node().left_child.is_some()
    }
    /// Returns `true` if the node has a right child, `false` otherwise.
    #[inline(always)]
    pub fn has_right_child(&self) -> bool {
        self.node().right_child.is_some()
    }
    /// Returns a reference to the data stored in the node.
    #[inline(always)]
    pub fn value(&self) -> &T {
        &self.node().value
    }
    /// Returns a *mutable* reference to the data stored in the node.
    #[inline(always)]
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.node_mut().value
    }
    /// Returns a *mutable* reference to the left child, or `None` if the node does not have one.
    pub fn left_child_mut(&mut self) -> Option<NodeRefMut<'_, T, K, S>> {
        let key = self.node().left_child.clone()?;
        Some(self.child_mut(key))
    }
    /// Returns a *mutable* reference to the right child, or `None` if the node does not have one.
    pub fn right_child_mut(&mut self) -> Option<NodeRefMut<'_, T, K, S>> {
        let key = self.node().right_child.clone()?;
        Some(self.child_mut(key))
    }

    fn child_mut(&mut self, key: K) -> NodeRefMut<'_, T, K, S> {
        // SAFETY: child keys are guaranteed to be valid; a key check to make sure that
        // properly holds is below.
        debug_assert!(
            self.tree.storage.contains_key(&key),
            "\
debug key check failed: tried to reference key {:?} which is not present in the storage",
            &key,
        );
        unsafe { NodeRefMut::new_raw_unchecked(self.tree, key) }
    }
    #[inline(always)]
    fn node(&self) -> &Node<T, K> {
        unsafe {
            // SAFETY: all existing NodeRefMuts are guaranteed to not be dangling
            self.tree.storage.get_unchecked(&self.key)
        }
    }
    #[inline(always)]
    fn node_mut(&mut self) -> &mut Node<T, K> {
        unsafe {
            // SAFETY: as above
            self.tree.storage.get_unchecked_mut(&self.key)
        }
    }
}
impl<'a, T, K, S> From<&'a NodeRefMut<'_, T, K, S>> for NodeRef<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline(always)]
    fn from(op: &'a NodeRefMut<'_, T, K, S>) -> Self {
        unsafe {
            // SAFETY: the mutable reference is only ever created for valid keys
            NodeRef::new_raw_unchecked(op.tree, op.key.clone())
        }
    }
}
impl<'a, T, K, S> From<NodeRefMut<'a, T, K, S>> for NodeRef<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline(always)]
    fn from(op: NodeRefMut<'a, T, K, S>) -> Self {
        unsafe {
            // SAFETY: as above
            NodeRef::new_raw_unchecked(op.tree, op.key)
        }
    }
}
