use arrayvec::{Array, ArrayVec};
use super::Storage;

/// A fixed-capacity arena, for use without an allocator. Keys are positions, like with `Vec`.
unsafe impl<A> Storage for ArrayVec<A>
where A: Array,
{
    type Key = usize;
    type Element = A::Item;

    #[inline(always)]
    fn new() -> Self {
        ArrayVec::new()
    }
    #[inline]
    fn with_capacity(capacity: usize) -> Self {
        assert!(
            capacity <= A::CAPACITY,
            "requested room for {} elements, the array only has {}",
            capacity,
            A::CAPACITY,
        );
        ArrayVec::new()
    }
    #[inline]
    fn add(&mut self, element: A::Item) -> usize {
        let key = self.as_slice().len();
        if self.try_push(element).is_err() {
            panic!("fixed-capacity arena is full ({} elements)", A::CAPACITY)
        }
        key
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.as_slice().len()
    }
    #[inline(always)]
    fn capacity(&self) -> usize {
        A::CAPACITY
    }
    #[inline]
    fn reserve(&mut self, additional: usize) {
        assert!(
            additional <= A::CAPACITY - self.as_slice().len(),
            "fixed-capacity arena cannot make room for {} more elements",
            additional,
        );
    }
    #[inline(always)]
    fn contains_key(&self, key: &usize) -> bool {
        *key < self.as_slice().len()
    }
    #[inline(always)]
    unsafe fn get_unchecked(&self, key: &usize) -> &A::Item {
        self.as_slice().get_unchecked(*key)
    }
    #[inline(always)]
    unsafe fn get_unchecked_mut(&mut self, key: &usize) -> &mut A::Item {
        self.as_mut_slice().get_unchecked_mut(*key)
    }
    #[inline(always)]
    fn get(&self, key: &usize) -> Option<&A::Item> {
        self.as_slice().get(*key)
    }
    #[inline(always)]
    fn get_mut(&mut self, key: &usize) -> Option<&mut A::Item> {
        self.as_mut_slice().get_mut(*key)
    }
}
