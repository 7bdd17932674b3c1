//! Trees which allow at most two children for their nodes.
//!
//! The [Wikipedia article] on binary trees covers their use cases and specifics in more detail.
//!
//! Each child slot is filled independently of the other one, so a node may have only a left child, only a right child, both or none. Nodes are never removed; the tree only grows, through [`add_root`], [`add_left`] and [`add_right`], which locate the parent node by its value.
//!
//! Walking the tree is done with cursors (see the [`traversal`] module), which visit the nodes in pre-order, in-order or post-order without recursion.
//!
//! # Example
//! ```rust
//! use birch::binary_tree::{BinaryTree, NodeRef};
//!
//! // The turbofish there is needed to state that we are using the default storage method
//! // instead of asking the compiler to infer it, which would be impossible.
//! let mut tree = BinaryTree::<_>::new();
//! tree.add_root("Hello")
//!     .add_left(&"Hello", "World")?
//!     .add_right(&"Hello", "Rust")?;
//!
//! // Let's look at the structure of the tree.
//! let root = tree.root().unwrap();
//! assert!(!root.is_leaf());
//! assert_eq!(*root.left_child().unwrap().value(), "World");
//! assert_eq!(*root.right_child().unwrap().value(), "Rust");
//!
//! // Let's change the right child through a mutable reference.
//! let mut root = tree.root_mut().unwrap();
//! *root.right_child_mut().unwrap().value_mut() = "Birch";
//!
//! // Conversion from a mutable to an immutable reference
//! let root = NodeRef::from(root);
//! assert_eq!(root.children().len(), 2);
//!
//! // And now walk it in every order.
//! let preorder = tree.begin_preorder().copied().collect::<Vec<_>>();
//! assert_eq!(preorder, ["Hello", "World", "Birch"]);
//! let inorder = tree.iter().copied().collect::<Vec<_>>();
//! assert_eq!(inorder, ["World", "Hello", "Birch"]);
//! let postorder = tree.begin_postorder().copied().collect::<Vec<_>>();
//! assert_eq!(postorder, ["World", "Birch", "Hello"]);
//! # Ok::<(), birch::binary_tree::AddNodeError>(())
//! ```
//!
//! [Wikipedia article]: https://en.wikipedia.org/wiki/Binary_tree " "
//! [`add_root`]: struct.BinaryTree.html#method.add_root " "
//! [`add_left`]: struct.BinaryTree.html#method.add_left " "
//! [`add_right`]: struct.BinaryTree.html#method.add_right " "
//! [`traversal`]: ../traversal/index.html " "

use core::fmt::{self, Formatter, Display};

mod base;
mod cursors;
mod display;
mod impl_traversable;
mod node;
mod node_ref;
mod node_ref_mut;

pub use node::Node;
pub use node_ref::NodeRef;
pub use node_ref_mut::NodeRefMut;
pub use base::BinaryTree;

/// A binary tree which uses a *`Vec`* as backing storage.
///
/// The default `BinaryTree` type already uses this, so this is only provided for explicitness and consistency.
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub type VecBinaryTree<T> = BinaryTree<T, usize, Vec<Node<T, usize>>>;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// The error type returned by [`BinaryTree::add_left`] and [`BinaryTree::add_right`].
///
/// [`BinaryTree::add_left`]: struct.BinaryTree.html#method.add_left " "
/// [`BinaryTree::add_right`]: struct.BinaryTree.html#method.add_right " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AddNodeError {
    /// The tree was empty, so there was no node to attach the child to. Use [`add_root`] first.
    ///
    /// [`add_root`]: struct.BinaryTree.html#method.add_root " "
    NoRoot,
    /// No node in the tree held the value which was supposed to identify the parent.
    NodeNotFound,
}
impl Display for AddNodeError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::NoRoot => "cannot add a child to an empty tree",
            Self::NodeNotFound => "no node holds the specified parent value",
        })
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for AddNodeError {}

#[cfg(test)]
mod tests;
