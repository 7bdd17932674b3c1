use alloc::vec::Vec;
use super::Storage;

/// Keys are positions: the key of an element is the length of the vector right before it was pushed.
unsafe impl<T> Storage for Vec<T> {
    type Key = usize;
    type Element = T;

    #[inline(always)]
    fn new() -> Self {
        Vec::new()
    }
    #[inline(always)]
    fn with_capacity(capacity: usize) -> Self {
        Vec::with_capacity(capacity)
    }
    #[inline]
    fn add(&mut self, element: T) -> usize {
        let key = self.len();
        self.push(element);
        key
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.as_slice().len()
    }
    #[inline(always)]
    fn capacity(&self) -> usize {
        Vec::capacity(self)
    }
    #[inline(always)]
    fn reserve(&mut self, additional: usize) {
        Vec::reserve(self, additional)
    }
    #[inline(always)]
    fn contains_key(&self, key: &usize) -> bool {
        *key < self.as_slice().len()
    }
    #[inline(always)]
    unsafe fn get_unchecked(&self, key: &usize) -> &T {
        self.as_slice().get_unchecked(*key)
    }
    #[inline(always)]
    unsafe fn get_unchecked_mut(&mut self, key: &usize) -> &mut T {
        self.as_mut_slice().get_unchecked_mut(*key)
    }
    #[inline(always)]
    fn get(&self, key: &usize) -> Option<&T> {
        self.as_slice().get(*key)
    }
    #[inline(always)]
    fn get_mut(&mut self, key: &usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(*key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_positions() {
        let mut arena = <Vec<&str> as Storage>::new();
        let first = Storage::add(&mut arena, "first");
        let second = Storage::add(&mut arena, "second");
        assert_eq!((first, second), (0, 1));
        assert!(Storage::contains_key(&arena, &1));
        assert!(!Storage::contains_key(&arena, &2));
        assert_eq!(Storage::get(&arena, &1), Some(&"second"));
        assert_eq!(Storage::get(&arena, &2), None);
    }

    #[test]
    fn reserve_grows_capacity() {
        let mut arena = <Vec<u8> as Storage>::with_capacity(2);
        assert!(Storage::capacity(&arena) >= 2);
        Storage::reserve(&mut arena, 10);
        assert!(Storage::capacity(&arena) >= 10);
        assert!(Storage::is_empty(&arena));
    }
}
