//! Arena-allocated binary trees with iterative pre-order, in-order and post-order cursors.
//!
//! # Overview
//! Birch stores the nodes of a binary tree using a technique called ["arena-allocated trees"][arena tree blog post], described by Ben Lovy. The nodes live in some sort of backing storage, typically a [`Vec`] (or an [`ArrayVec`] when there is no allocator), and instead of using pointers to link to children, indices into the storage are used instead. Copying a tree is a copy of its storage, and dropping one never recurses.
//!
//! The main attraction is traversal: a [`Cursor`] walks the tree in [pre-order, in-order or post-order][`Order`] one node at a time, keeping an explicit stack instead of recursing, so arbitrarily deep trees can be walked without blowing the call stack and the walk can be suspended between any two nodes. Read-only cursors are plain iterators; mutable ones give out mutable references to the values one at a time.
//!
//! # Example
//! ```rust
//! use birch::BinaryTree;
//!
//! let mut tree = BinaryTree::<_>::new();
//! tree.add_root(10)
//!     .add_left(&10, 6)?
//!     .add_left(&6, 3)?
//!     .add_right(&6, 8)?
//!     .add_right(&10, 15)?
//!     .add_left(&15, 12)?;
//!
//! // In-order traversal yields the contents of a binary search tree in ascending order
//! let sorted = tree.iter().copied().collect::<Vec<_>>();
//! assert_eq!(sorted, [3, 6, 8, 10, 12, 15]);
//!
//! // Cursors can also be stepped manually and compared against the end
//! let mut postorder = Vec::new();
//! let mut it = tree.begin_postorder();
//! while it != tree.end_postorder() {
//!     postorder.push(*it.value()?);
//!     it.advance();
//! }
//! assert_eq!(postorder, [3, 8, 6, 12, 15, 10]);
//!
//! // Mutable cursors edit values in place, but can never change the structure of the tree
//! let mut cursor = tree.begin_preorder_mut();
//! while let Some(value) = cursor.next_mut() {
//!     *value *= 10;
//! }
//! assert_eq!(tree.root().map(|root| *root.value()), Some(100));
//!
//! // And there's a pretty-printer too
//! println!("{}", tree);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Storage
//! The arena a tree keeps its nodes in is described by the `Storage` trait. Trees never remove nodes, so an arena only has to append elements and look them up by the key it handed out, which means that keys never go stale.
//!
//! [`Vec`] and [`ArrayVec`] implement `Storage` out of the box.
//!
//! # Feature flags
//! - `std` (**enabled by default**) - enables the full standard library, disabling `no_std` for the crate. Currently, this only adds [`Error`] trait implementations for the error types.
//! - `alloc` (**enabled by default**) - implements `Storage` for `Vec` and makes it the default arena and cursor stack. *This does not require standard library support and will only panic at runtime in `no_std` environments without an allocator.* Without it, trees and cursor stacks hold up to [`FIXED_CAPACITY`] elements.
//! - `log` - emits `trace`-level records through the [`log`] crate whenever a tree is built up.
//! - `doc_cfg` - marks feature-gated items in the documentation. **Requires a nightly compiler.**
//!
//! # Public dependencies
//! - `arrayvec` (**required**) - `^0.5`
//!
//! [`Error`]: https://doc.rust-lang.org/std/error/trait.Error.html " "
//! [`Vec`]: https://doc.rust-lang.org/std/vec/struct.Vec.html " "
//! [`ArrayVec`]: https://docs.rs/arrayvec/*/arrayvec/struct.ArrayVec.html " "
//! [`log`]: https://docs.rs/log/*/log/ " "
//! [`Cursor`]: traversal/struct.Cursor.html " "
//! [`Order`]: traversal/enum.Order.html " "
//! [`FIXED_CAPACITY`]: storage/constant.FIXED_CAPACITY.html " "
//! [arena tree blog post]: https://dev.to/deciduously/no-more-tears-no-more-knots-arena-allocated-trees-in-rust-44k6 " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::expl_impl_clone_on_copy,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::map_flatten,
    clippy::map_unwrap_or,
    clippy::implicit_saturating_sub,
    clippy::items_after_statements,
    clippy::large_stack_arrays,
    clippy::let_unit_value,
    clippy::macro_use_imports,
    clippy::match_same_arms,
    clippy::match_wildcard_for_single_variants,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_option,
    clippy::redundant_closure_for_method_calls,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::too_many_lines,
    clippy::type_repetition_in_bounds,
    clippy::trivially_copy_pass_by_ref,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::dbg_macro,
    clippy::get_unwrap,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::use_debug,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::exit,
)]
#![allow(clippy::use_self)] // FIXME reenable when it gets fixed
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod storage;
#[doc(no_inline)]
pub use storage::{Storage, DefaultStorage};

pub mod binary_tree;
pub use binary_tree::BinaryTree;

pub mod traversal;
pub use traversal::{Traversable, TraversableMut, Order, Cursor};

/// A prelude for using Birch, containing the most used types in a renamed form for safe glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::storage::{
        Storage as TreeStorage,
        DefaultStorage as DefaultTreeStorage,
    };
    #[doc(no_inline)]
    pub use crate::binary_tree::{
        BinaryTree,
        NodeRef as BinaryTreeNodeRef,
        NodeRefMut as BinaryTreeNodeRefMut,
        AddNodeError,
    };
    #[doc(no_inline)]
    pub use crate::traversal::{
        Traversable,
        TraversableMut,
        Order as TraversalOrder,
        Cursor as TreeCursor,
        ExhaustedCursorError,
    };
}

pub(crate) mod util;
