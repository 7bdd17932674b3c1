use core::fmt::Debug;
use crate::{
    storage::Storage,
    traversal::{Cursor, CursorMut, Iter, Order},
};
use super::{BinaryTree, Node};

/// Cursor factories.
///
/// Every `begin` method returns a cursor positioned at the first node of its order, and every `end` method returns an exhausted cursor, which compares equal to any other exhausted cursor. The plain `begin`/`end` pair walks the tree in-order.
///
/// Mutable cursors borrow the tree exclusively, so they cannot be compared against an `end` cursor of the same tree; use [`Cursor::is_end`] or [`Cursor::next_mut`] with them instead.
///
/// [`Cursor::is_end`]: ../traversal/struct.Cursor.html#method.is_end " "
/// [`Cursor::next_mut`]: ../traversal/struct.Cursor.html#method.next_mut " "
impl<T, K, S> BinaryTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Returns an iterator over the values of the tree, in-order.
    ///
    /// # Example
    /// ```rust
    /// # use birch::BinaryTree;
    /// let mut tree = BinaryTree::<_>::new();
    /// tree.add_root(2).add_left(&2, 1).unwrap().add_right(&2, 3).unwrap();
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    /// ```
    #[inline(always)]
    pub fn iter(&self) -> Iter<'_, Self> {
        self.begin()
    }
    /// Returns a read-only cursor at the first node in-order.
    #[inline(always)]
    pub fn begin(&self) -> Iter<'_, Self> {
        Cursor::new(self, Order::default())
    }
    /// Returns an exhausted read-only in-order cursor.
    #[inline(always)]
    pub fn end(&self) -> Iter<'_, Self> {
        Cursor::end(self, Order::default())
    }
    /// Returns a read-only cursor at the first node in pre-order, which is the root.
    ///
    /// # Example
    /// ```rust
    /// # use birch::BinaryTree;
    /// let mut tree = BinaryTree::<_>::new();
    /// tree.add_root('m')
    ///     .add_left(&'m', 'f')?
    ///     .add_left(&'f', 'd')?
    ///     .add_right(&'f', 'b')?
    ///     .add_right(&'m', 'j')?;
    ///
    /// let mut visited = String::new();
    /// let mut it = tree.begin_preorder();
    /// while it != tree.end_preorder() {
    ///     visited.push(*it.value()?);
    ///     it.advance();
    /// }
    /// assert_eq!(visited, "mfdbj");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline(always)]
    pub fn begin_preorder(&self) -> Iter<'_, Self> {
        Cursor::new(self, Order::PreOrder)
    }
    /// Returns an exhausted read-only pre-order cursor.
    #[inline(always)]
    pub fn end_preorder(&self) -> Iter<'_, Self> {
        Cursor::end(self, Order::PreOrder)
    }
    /// Returns a read-only cursor at the first node in-order, which is the end of the root's left spine.
    #[inline(always)]
    pub fn begin_inorder(&self) -> Iter<'_, Self> {
        Cursor::new(self, Order::InOrder)
    }
    /// Returns an exhausted read-only in-order cursor.
    #[inline(always)]
    pub fn end_inorder(&self) -> Iter<'_, Self> {
        Cursor::end(self, Order::InOrder)
    }
    /// Returns a read-only cursor at the first node in post-order.
    #[inline(always)]
    pub fn begin_postorder(&self) -> Iter<'_, Self> {
        Cursor::new(self, Order::PostOrder)
    }
    /// Returns an exhausted read-only post-order cursor.
    #[inline(always)]
    pub fn end_postorder(&self) -> Iter<'_, Self> {
        Cursor::end(self, Order::PostOrder)
    }

    /// Returns a mutable cursor at the first node in-order.
    #[inline(always)]
    pub fn begin_mut(&mut self) -> CursorMut<'_, Self> {
        Cursor::new(self, Order::default())
    }
    /// Returns a mutable cursor at the first node in pre-order.
    #[inline(always)]
    pub fn begin_preorder_mut(&mut self) -> CursorMut<'_, Self> {
        Cursor::new(self, Order::PreOrder)
    }
    /// Returns a mutable cursor at the first node in-order.
    #[inline(always)]
    pub fn begin_inorder_mut(&mut self) -> CursorMut<'_, Self> {
        Cursor::new(self, Order::InOrder)
    }
    /// Returns a mutable cursor at the first node in post-order.
    ///
    /// # Example
    /// ```rust
    /// # use birch::BinaryTree;
    /// let mut tree = BinaryTree::<_>::new();
    /// tree.add_root(1).add_left(&1, 2)?.add_right(&1, 3)?;
    ///
    /// // Number the nodes in the order they are visited
    /// let mut cursor = tree.begin_postorder_mut();
    /// let mut counter = 0;
    /// while !cursor.is_end() {
    ///     counter += 1;
    ///     *cursor.value_mut()? = counter;
    ///     cursor.advance();
    /// }
    /// assert_eq!(tree.begin_preorder().copied().collect::<Vec<_>>(), [3, 1, 2]);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline(always)]
    pub fn begin_postorder_mut(&mut self) -> CursorMut<'_, Self> {
        Cursor::new(self, Order::PostOrder)
    }
}
impl<'a, T, K, S> IntoIterator for &'a BinaryTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, BinaryTree<T, K, S>>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.begin()
    }
}
