//! Everything related to traversing binary trees.
//!
//! The module is home to the following items:
//! - [`Traversable`] and its optional extension, [`TraversableMut`], *traits for types which describe binary tree structures* which can be walked by the traversal algorithms
//! - The traversal algorithms themselves (see the [`algorithms`] module), which walk a tree iteratively using an explicit stack instead of recursion
//! - [`Cursor`], a position inside one of the traversal orders, generic over read-only and mutable access to the tree
//! - Helper types: [`Order`] and [`ExhaustedCursorError`]
//!
//! [`algorithms`]: algorithms/index.html " "
//! [`Traversable`]: trait.Traversable.html " "
//! [`TraversableMut`]: trait.TraversableMut.html " "
//! [`Cursor`]: struct.Cursor.html " "
//! [`Order`]: enum.Order.html " "
//! [`ExhaustedCursorError`]: struct.ExhaustedCursorError.html " "

pub mod algorithms;
mod cursor;
pub use cursor::{Cursor, Iter, CursorMut};

use core::fmt::{self, Formatter, Debug, Display};

/// Binary tree structures which can be walked by the traversal algorithms.
///
/// Nodes are identified by keys. A key handed out by one of these methods must stay valid for as long as the traversable is borrowed immutably, which is what allows cursors to hold on to keys between steps.
pub trait Traversable: Sized {
    /// The payload stored in every node.
    type Value;
    /// The type used to identify nodes. Two keys compare equal if and only if they identify the same node.
    ///
    /// Must be very cheaply clonable, but not required to be `Copy`.
    type Key: Clone + Debug + Eq;

    /// Returns the key of the root node, or `None` if the structure is empty.
    fn root_key(&self) -> Option<Self::Key>;
    /// Returns the key of the left child of the node at the specified key, or `None` if it has no left child.
    fn left_child_of(&self, key: &Self::Key) -> Option<Self::Key>;
    /// Returns the key of the right child of the node at the specified key, or `None` if it has no right child.
    fn right_child_of(&self, key: &Self::Key) -> Option<Self::Key>;
    /// Returns a reference to the payload of the node at the specified key.
    fn value_of(&self, key: &Self::Key) -> &Self::Value;

    /// Returns a read-only cursor positioned at the first node of the specified traversal order.
    #[inline]
    fn cursor(&self, order: Order) -> Iter<'_, Self> {
        Cursor::new(self, order)
    }
}

/// Binary tree structures whose payloads can be modified during traversal.
///
/// Mutable access never extends to the structure: a cursor holding a mutable borrow still only reads child links.
pub trait TraversableMut: Traversable {
    /// Returns a *mutable* reference to the payload of the node at the specified key.
    fn value_mut_of(&mut self, key: &Self::Key) -> &mut Self::Value;

    /// Returns a mutable cursor positioned at the first node of the specified traversal order.
    #[inline]
    fn cursor_mut(&mut self, order: Order) -> CursorMut<'_, Self> {
        Cursor::new(self, order)
    }
}

/// The order in which a cursor visits the nodes of a binary tree.
///
/// The default order is [`InOrder`], which yields the contents of a binary search tree in ascending order.
///
/// [`InOrder`]: #variant.InOrder " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// The node itself, then its left subtree, then its right subtree.
    PreOrder,
    /// The left subtree, then the node itself, then the right subtree.
    InOrder,
    /// The left subtree, then the right subtree, then the node itself.
    PostOrder,
}
impl Default for Order {
    #[inline(always)]
    fn default() -> Self {
        Self::InOrder
    }
}
impl Display for Order {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::PreOrder => "pre-order",
            Self::InOrder => "in-order",
            Self::PostOrder => "post-order",
        })
    }
}

/// The error returned when the value of a cursor which has moved past the last node is requested.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ExhaustedCursorError;
impl Display for ExhaustedCursorError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad("the cursor has moved past the last node of its traversal")
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for ExhaustedCursorError {}
