use core::fmt::Debug;
use crate::storage::{Storage, DefaultStorage};
use arrayvec::ArrayVec;
use super::{BinaryTree, Node};

/// A reference to a node in a binary tree.
///
/// Since this type does not point to the node directly, but rather the tree the node is in and the key of the node in the storage, it can be used to walk the tree.
#[derive(Debug)]
pub struct NodeRef<'a, T, K = usize, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    tree: &'a BinaryTree<T, K, S>,
    key: K,
}
impl<'a, T, K, S> NodeRef<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Creates a new `NodeRef` pointing to the specified key in the storage, or `None` if it's out of bounds.
    #[inline]
    pub fn new_raw(tree: &'a BinaryTree<T, K, S>, key: K) -> Option<Self> {
        if tree.storage.contains_key(&key) {
            Some(unsafe {
                // SAFETY: we just did a key check
                Self::new_raw_unchecked(tree, key)
            })
        } else {
            None
        }
    }
    /// Creates a new `NodeRef` pointing to the specified key in the storage without doing bounds checking.
    ///
    /// # Safety
    /// Causes *immediate* undefined behavior if the specified key is not present in the storage.
    #[inline(always)]
    pub unsafe fn new_raw_unchecked(tree: &'a BinaryTree<T, K, S>, key: K) -> Self {
        Self { tree, key }
    }
    /// Returns a reference the raw storage key for the node.
    #[inline(always)]
    pub fn raw_key(&self) -> &K {
        &self.key
    }
    /// Consumes the reference and returns the underlying raw storage key for the node.
    #[inline(always)]
    pub fn into_raw_key(self) -> K {
        self.key
    }
    /// Returns `true` if the node is the root node, `false` otherwise.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.tree.root.as_ref() == Some(&self.key)
    }
    /// Returns `true` if the node is a *leaf*, i.e. does not have child nodes; `false` otherwise.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        !self.has_left_child() && !self.has_right_child()
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
    pub fn value(&self) -> &'a T {
        &self.node().value
    }
    /// Returns a reference to the left child, or `None` if the node does not have one.
    pub fn left_child(&self) -> Option<Self> {
        self.child_ref(self.node().left_child.as_ref())
    }
    /// Returns a reference to the right child, or `None` if the node does not have one.
    pub fn right_child(&self) -> Option<Self> {
        self.child_ref(self.node().right_child.as_ref())
    }
    /// Returns references to the children which are present, left one first.
    ///
    /// # Example
    /// ```rust
    /// # use birch::BinaryTree;
    /// let mut tree = BinaryTree::<_>::new();
    /// tree.add_root('m').add_right(&'m', 'j').unwrap();
    ///
    /// let root = tree.root().unwrap();
    /// let children = root.children();
    /// assert_eq!(children.len(), 1);
    /// assert_eq!(*children[0].value(), 'j');
    /// ```
    pub fn children(&self) -> ArrayVec<[Self; 2]> {
        self.left_child()
            .into_iter()
            .chain(self.right_child())
            .collect()
    }

    fn child_ref(&self, key: Option<&K>) -> Option<Self> {
        key.map(|x| unsafe {
            // SAFETY: child keys are guaranteed to be valid; a key check to make sure that
            // properly holds is below.
            debug_assert!(
                self.tree.storage.contains_key(x),
                "\
debug key check failed: tried to reference key {:?} which is not present in the storage",
                x,
            );
            Self::new_raw_unchecked(self.tree, x.clone())
        })
    }
    #[inline(always)]
    fn node(&self) -> &'a Node<T, K> {
        unsafe {
            // SAFETY: all existing NodeRefs are guaranteed to not be dangling
            self.tree.storage.get_unchecked(&self.key)
        }
    }
}
impl<T, K, S> Copy for NodeRef<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Copy + Debug + Eq,
{}
impl<T, K, S> Clone for NodeRef<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline(always)]
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            key: self.key.clone(),
        }
    }
}
