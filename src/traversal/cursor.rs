use core::{
    borrow::{Borrow, BorrowMut},
    fmt::{self, Formatter, Debug},
    iter::FusedIterator,
    marker::PhantomData,
    ptr,
};
use super::{
    algorithms::Walk,
    ExhaustedCursorError,
    Order,
    Traversable,
    TraversableMut,
};

/// A position inside one of the traversal orders of a binary tree.
///
/// The cursor borrows the tree through `R`, which is either `&T` for read-only access or `&mut T` for mutable access to the values; the traversal itself is the same in both cases and never touches the structure of the tree. Since the borrow lasts as long as the cursor, the tree cannot be restructured while a cursor over it is alive.
///
/// A freshly created cursor is positioned at the first node of its order. Advancing it past the last node leaves it *exhausted*, which is also the state of the cursors returned by the `end` family of methods. Advancing an exhausted cursor does nothing.
///
/// Two cursors are equal if they point at the same node of the same tree or if both are exhausted, regardless of their order.
///
/// Read-only cursors are iterators over `&T::Value` (see [`Iter`]); mutable ones offer [`next_mut`] instead.
///
/// [`Iter`]: type.Iter.html " "
/// [`next_mut`]: #method.next_mut " "
pub struct Cursor<T, R>
where
    T: Traversable,
    R: Borrow<T>,
{
    tree: R,
    walk: Walk<T::Key>,
    _traversable: PhantomData<fn() -> T>,
}
/// A read-only cursor, which also serves as an iterator over the values of the tree.
pub type Iter<'a, T> = Cursor<T, &'a T>;
/// A cursor with mutable access to the values of the tree.
pub type CursorMut<'a, T> = Cursor<T, &'a mut T>;

impl<T, R> Cursor<T, R>
where
    T: Traversable,
    R: Borrow<T>,
{
    /// Creates a cursor positioned at the first node of the specified order, or an exhausted one if the tree is empty.
    #[inline]
    pub fn new(tree: R, order: Order) -> Self {
        let walk = Walk::new(Borrow::<T>::borrow(&tree), order);
        Self {
            tree,
            walk,
            _traversable: PhantomData,
        }
    }
    /// Creates an exhausted cursor over the specified tree.
    #[inline]
    pub fn end(tree: R, order: Order) -> Self {
        Self {
            tree,
            walk: Walk::exhausted(order),
            _traversable: PhantomData,
        }
    }
    /// Returns the traversal order of the cursor.
    #[inline(always)]
    pub fn order(&self) -> Order {
        self.walk.order()
    }
    /// Returns the key of the node the cursor points at, or `None` if it is exhausted.
    #[inline(always)]
    pub fn key(&self) -> Option<&T::Key> {
        self.walk.current()
    }
    /// Returns `true` if the cursor has moved past the last node, `false` otherwise.
    #[inline(always)]
    pub fn is_end(&self) -> bool {
        self.walk.current().is_none()
    }
    /// Returns a reference to the value of the node the cursor points at.
    ///
    /// # Errors
    /// Will fail if the cursor is exhausted.
    #[inline]
    pub fn value(&self) -> Result<&T::Value, ExhaustedCursorError> {
        let key = self.walk.current().ok_or(ExhaustedCursorError)?;
        Ok(Borrow::<T>::borrow(&self.tree).value_of(key))
    }
    /// Moves the cursor to the next node of its order and returns it for chaining. An exhausted cursor stays exhausted.
    #[inline]
    pub fn advance(&mut self) -> &mut Self {
        self.walk.advance(Borrow::<T>::borrow(&self.tree));
        self
    }
    /// Moves the cursor to the next node of its order, returning a copy of the cursor from *before* the move.
    ///
    /// Only available for cursors which can be duplicated, i.e. read-only ones.
    #[inline]
    pub fn advance_post(&mut self) -> Self
    where R: Clone,
    {
        let previous = self.clone();
        self.advance();
        previous
    }
}
impl<T, R> Cursor<T, R>
where
    T: TraversableMut,
    R: BorrowMut<T>,
{
    /// Returns a *mutable* reference to the value of the node the cursor points at.
    ///
    /// # Errors
    /// Will fail if the cursor is exhausted.
    #[inline]
    pub fn value_mut(&mut self) -> Result<&mut T::Value, ExhaustedCursorError> {
        let key = self.walk.current().ok_or(ExhaustedCursorError)?;
        Ok(BorrowMut::<T>::borrow_mut(&mut self.tree).value_mut_of(key))
    }
    /// Returns a *mutable* reference to the value of the node the cursor points at and moves on to the next node, or returns `None` if the cursor is exhausted.
    ///
    /// This is the mutable counterpart of `Iterator::next`; the returned reference borrows the cursor, so only one value can be held at a time.
    ///
    /// # Example
    /// ```rust
    /// use birch::BinaryTree;
    ///
    /// let mut tree = BinaryTree::<_>::new();
    /// tree.add_root(2);
    /// tree.add_left(&2, 1).unwrap();
    /// tree.add_right(&2, 3).unwrap();
    ///
    /// let mut cursor = tree.begin_mut();
    /// while let Some(value) = cursor.next_mut() {
    ///     *value *= 10;
    /// }
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [10, 20, 30]);
    /// ```
    pub fn next_mut(&mut self) -> Option<&mut T::Value> {
        let key = self.walk.current()?.clone();
        self.walk.advance(Borrow::<T>::borrow(&self.tree));
        Some(BorrowMut::<T>::borrow_mut(&mut self.tree).value_mut_of(&key))
    }
}
impl<'a, T> Iterator for Cursor<T, &'a T>
where T: Traversable,
{
    type Item = &'a T::Value;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        let key = self.walk.current()?.clone();
        self.walk.advance(tree);
        Some(tree.value_of(&key))
    }
}
impl<'a, T> FusedIterator for Cursor<T, &'a T>
where T: Traversable,
{}
impl<T, R> Clone for Cursor<T, R>
where
    T: Traversable,
    R: Borrow<T> + Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            tree: self.tree.clone(),
            walk: self.walk.clone(),
            _traversable: PhantomData,
        }
    }
}
impl<T, R, Rhs> PartialEq<Cursor<T, Rhs>> for Cursor<T, R>
where
    T: Traversable,
    R: Borrow<T>,
    Rhs: Borrow<T>,
{
    #[inline]
    fn eq(&self, other: &Cursor<T, Rhs>) -> bool {
        match (self.walk.current(), other.walk.current()) {
            (None, None) => true,
            (Some(key), Some(other_key)) => {
                ptr::eq(Borrow::<T>::borrow(&self.tree), Borrow::<T>::borrow(&other.tree))
                    && key == other_key
            }
            _ => false,
        }
    }
}
impl<T, R> Eq for Cursor<T, R>
where
    T: Traversable,
    R: Borrow<T>,
{}
impl<T, R> Debug for Cursor<T, R>
where
    T: Traversable,
    R: Borrow<T>,
{
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("order", &self.walk.order())
            .field("current", &self.walk.current())
            .finish()
    }
}
