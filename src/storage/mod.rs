//! The arenas which binary trees keep their nodes in.
//!
//! A tree never removes nodes, so its arena only ever grows: [`Storage::add`] hands out a key for every element and that key keeps naming the same element until the arena is dropped. This is what allows cursors and node references to hold on to bare keys instead of pointers.
//!
//! [`Vec`] (with the `alloc` feature) and [`ArrayVec`] are arenas out of the box, keyed by the position of the element. [`DefaultStorage`] picks one of them depending on the feature flags.
//!
//! [`Storage::add`]: trait.Storage.html#tymethod.add " "
//! [`DefaultStorage`]: type.DefaultStorage.html " "
//! [`Vec`]: https://doc.rust-lang.org/std/vec/struct.Vec.html " "
//! [`ArrayVec`]: https://docs.rs/arrayvec/*/arrayvec/struct.ArrayVec.html " "

#[cfg(feature = "alloc")]
mod vec;
mod array;

use core::fmt::Debug;

/// An append-only arena of tree nodes.
///
/// # Safety
/// Trees and their node references rely on the following for memory safety:
/// - `new` and `with_capacity` return arenas with `len() == 0`;
/// - the key returned by `add` satisfies `contains_key` from then on, for as long as the arena lives, and always names the element which was added with it;
/// - `get_unchecked` and `get_unchecked_mut` are sound for every key which satisfies `contains_key`;
/// - a clone of the arena accepts the same keys, naming the clones of the same elements.
pub unsafe trait Storage: Sized {
    /// The key naming an element of the arena.
    type Key: Clone + Debug + Eq;
    /// The type of the elements stored.
    type Element;

    /// Creates an empty arena. Arenas which allocate do not do so until the first element is added.
    fn new() -> Self;
    /// Creates an empty arena with room for at least `capacity` elements.
    ///
    /// # Panics
    /// Fixed-capacity arenas panic if `capacity` is larger than what they can hold.
    fn with_capacity(capacity: usize) -> Self;
    /// Appends an element and returns the key naming it.
    ///
    /// # Panics
    /// Fixed-capacity arenas panic when they are full.
    fn add(&mut self, element: Self::Element) -> Self::Key;
    /// Returns the number of elements in the arena.
    fn len(&self) -> usize;
    /// Returns the number of elements the arena can hold without reallocating.
    fn capacity(&self) -> usize;
    /// Makes room for at least `additional` more elements.
    ///
    /// # Panics
    /// Fixed-capacity arenas panic if the elements would not fit.
    fn reserve(&mut self, additional: usize);
    /// Returns `true` if `key` was handed out by this arena, `false` otherwise.
    fn contains_key(&self, key: &Self::Key) -> bool;
    /// Returns a reference to the element named by `key` without checking the key.
    ///
    /// # Safety
    /// `key` must satisfy `contains_key`.
    unsafe fn get_unchecked(&self, key: &Self::Key) -> &Self::Element;
    /// Returns a *mutable* reference to the element named by `key` without checking the key.
    ///
    /// # Safety
    /// `key` must satisfy `contains_key`.
    unsafe fn get_unchecked_mut(&mut self, key: &Self::Key) -> &mut Self::Element;

    /// Returns a reference to the element named by `key`, or `None` if the arena never handed it out.
    #[inline]
    fn get(&self, key: &Self::Key) -> Option<&Self::Element> {
        if self.contains_key(key) {
            Some(unsafe {
                // SAFETY: just checked
                self.get_unchecked(key)
            })
        } else {
            None
        }
    }
    /// Returns a *mutable* reference to the element named by `key`, or `None` if the arena never handed it out.
    #[inline]
    fn get_mut(&mut self, key: &Self::Key) -> Option<&mut Self::Element> {
        if self.contains_key(key) {
            Some(unsafe {
                // SAFETY: as above
                self.get_unchecked_mut(key)
            })
        } else {
            None
        }
    }
    /// Returns `true` if the arena holds no elements.
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The arena used by trees unless another one is specified: `Vec` with the `alloc` feature, otherwise an `ArrayVec` with room for [`FIXED_CAPACITY`] elements.
///
/// [`FIXED_CAPACITY`]: constant.FIXED_CAPACITY.html " "
pub type DefaultStorage<T> = _DefaultStorage<T>;

/// The number of elements which fixed-capacity arenas and traversal stacks can hold when the `alloc` feature is disabled.
pub const FIXED_CAPACITY: usize = 128;

#[cfg(feature = "alloc")]
type _DefaultStorage<T> = Vec<T>;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

#[cfg(not(feature = "alloc"))]
type _DefaultStorage<T> = arrayvec::ArrayVec<[T; FIXED_CAPACITY]>;
