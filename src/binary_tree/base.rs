use core::{borrow::Borrow, fmt::Debug};
use crate::{
    storage::{Storage, DefaultStorage},
    util::trace,
};
use super::{
    node::Side,
    AddNodeError,
    Node,
    NodeRef,
    NodeRefMut,
};

/// A binary tree.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
#[derive(Clone, Debug)]
pub struct BinaryTree<T, K = usize, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    pub(super) storage: S,
    pub(super) root: Option<K>,
}
impl<T, K, S> BinaryTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Creates an empty binary tree.
    ///
    /// # Example
    /// ```rust
    /// # use birch::BinaryTree;
    /// // The turbofish there is needed to state that we are using the default storage method
    /// // instead of asking the compiler to infer it, which would be impossible.
    /// let tree = BinaryTree::<u32>::new();
    /// assert!(tree.is_empty());
    /// assert!(tree.root().is_none());
    /// ```
    pub fn new() -> Self {
        Self {
            storage: S::new(),
            root: None,
        }
    }
    /// Creates an empty binary tree with room for at least `capacity` nodes.
    ///
    /// # Panics
    /// Fixed-capacity storages panic if they cannot hold that many nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: S::with_capacity(capacity),
            root: None,
        }
    }
    /// Returns `true` if the tree has no nodes, `false` otherwise.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
    /// Returns the number of nodes in the tree.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.storage.len()
    }
    /// Returns the number of nodes the tree can hold before its storage has to grow.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }
    /// Makes room for at least `additional` more nodes.
    ///
    /// # Panics
    /// Fixed-capacity storages panic if the nodes would not fit.
    ///
    /// # Example
    /// ```rust
    /// # use birch::BinaryTree;
    /// let mut tree = BinaryTree::<u32>::new();
    /// tree.reserve(16);
    /// assert!(tree.capacity() >= 16);
    /// ```
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.storage.reserve(additional)
    }
    /// Returns a reference to the root node of the tree, or `None` if the tree is empty.
    #[inline]
    pub fn root(&self) -> Option<NodeRef<'_, T, K, S>> {
        self.root.clone().map(move |root| unsafe {
            // SAFETY: the root key always comes from the storage
            NodeRef::new_raw_unchecked(self, root)
        })
    }
    /// Returns a *mutable* reference to the root node of the tree, or `None` if the tree is empty.
    #[inline]
    pub fn root_mut(&mut self) -> Option<NodeRefMut<'_, T, K, S>> {
        let root = self.root.clone()?;
        Some(unsafe {
            // SAFETY: as above
            NodeRefMut::new_raw_unchecked(self, root)
        })
    }

    /// Creates the root node with the specified value, or replaces the value of the root node if there already is one.
    ///
    /// # Example
    /// ```rust
    /// # use birch::BinaryTree;
    /// let mut tree = BinaryTree::<_>::new();
    /// tree.add_root("Hello").add_root("Welcome");
    /// assert_eq!(tree.len(), 1);
    /// assert_eq!(tree.root().map(|root| *root.value()), Some("Welcome"));
    /// ```
    pub fn add_root(&mut self, value: T) -> &mut Self {
        match self.root.clone() {
            Some(root) => {
                self.node_mut(&root).value = value;
                trace!("replaced the value of the root node {:?}", root);
            }
            None => {
                let root = self.storage.add(Node::leaf(value));
                trace!("created the root node {:?}", root);
                self.root = Some(root);
            }
        }
        self
    }
    /// Gives the first node holding `existing` (in pre-order) a left child with the specified value. If that node already has a left child, the child's value is replaced instead.
    ///
    /// # Errors
    /// Will fail if the tree is empty or if no node holds `existing`.
    ///
    /// # Example
    /// ```rust
    /// # use birch::BinaryTree;
    /// let mut tree = BinaryTree::<_>::new();
    /// tree.add_root(10)
    ///     .add_left(&10, 6)?
    ///     .add_left(&6, 3)?
    ///     .add_right(&6, 8)?;
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [3, 6, 8, 10]);
    /// # Ok::<(), birch::binary_tree::AddNodeError>(())
    /// ```
    pub fn add_left<Q>(&mut self, existing: &Q, value: T) -> Result<&mut Self, AddNodeError>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.add_child(existing, value, Side::Left)
    }
    /// Gives the first node holding `existing` (in pre-order) a right child with the specified value. If that node already has a right child, the child's value is replaced instead.
    ///
    /// # Errors
    /// Will fail if the tree is empty or if no node holds `existing`.
    pub fn add_right<Q>(&mut self, existing: &Q, value: T) -> Result<&mut Self, AddNodeError>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.add_child(existing, value, Side::Right)
    }
    /// Returns a reference to the first node (in pre-order) holding the specified value, or `None` if there is no such node.
    pub fn find<Q>(&self, value: &Q) -> Option<NodeRef<'_, T, K, S>>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.find_key(value).map(|key| unsafe {
            // SAFETY: the key was produced by a cursor over this tree
            NodeRef::new_raw_unchecked(self, key)
        })
    }

    fn add_child<Q>(&mut self, existing: &Q, value: T, side: Side) -> Result<&mut Self, AddNodeError>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        if self.is_empty() {
            trace!("cannot add a {:?} child, the tree has no root", side);
            return Err(AddNodeError::NoRoot);
        }
        let parent = self.find_key(existing).ok_or_else(|| {
            trace!("cannot add a {:?} child, no node holds the requested value", side);
            AddNodeError::NodeNotFound
        })?;
        match self.node(&parent).child(side).cloned() {
            Some(child) => {
                self.node_mut(&child).value = value;
                trace!("replaced the value of the {:?} child {:?} of {:?}", side, child, parent);
            }
            None => {
                let child = self.storage.add(Node::leaf(value));
                trace!("created {:?} as the {:?} child of {:?}", child, side, parent);
                *self.node_mut(&parent).child_slot_mut(side) = Some(child);
            }
        }
        Ok(self)
    }
    fn find_key<Q>(&self, value: &Q) -> Option<K>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let mut cursor = self.begin_preorder();
        while let Some(key) = cursor.key() {
            if Borrow::<Q>::borrow(&self.node(key).value) == value {
                return Some(key.clone());
            }
            cursor.advance();
        }
        None
    }
    #[track_caller]
    pub(super) fn node(&self, key: &K) -> &Node<T, K> {
        self.storage
            .get(key)
            .unwrap_or_else(|| panic!("invalid node key: {:?}", key))
    }
    #[track_caller]
    pub(super) fn node_mut(&mut self, key: &K) -> &mut Node<T, K> {
        self.storage
            .get_mut(key)
            .unwrap_or_else(|| panic!("invalid node key: {:?}", key))
    }
}
impl<T, K, S> Default for BinaryTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}
