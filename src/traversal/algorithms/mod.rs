//! The iterative traversal algorithms for binary trees.
//!
//! This includes:
//! - [`PreOrder`] traversal
//! - [`InOrder`] traversal
//! - [`PostOrder`] traversal
//! - [`Walk`], which picks one of the above at runtime
//!
//! None of the algorithms use recursion or modify the tree: each keeps an explicit stack of keys, which makes every step O(1) amortized and a whole traversal O(n) in time and O(depth) in memory.
//!
//! [`PreOrder`]: struct.PreOrder.html " "
//! [`InOrder`]: struct.InOrder.html " "
//! [`PostOrder`]: struct.PostOrder.html " "
//! [`Walk`]: enum.Walk.html " "

mod inorder;
mod postorder;
mod preorder;
pub use inorder::InOrder;
pub use postorder::{PostOrder, Phase};
pub use preorder::PreOrder;

use super::{Order, Traversable};

/// A traversal in one of the three orders, chosen at runtime.
#[derive(Clone, Debug)]
pub enum Walk<K> {
    /// A pre-order traversal.
    PreOrder(PreOrder<K>),
    /// An in-order traversal.
    InOrder(InOrder<K>),
    /// A post-order traversal.
    PostOrder(PostOrder<K>),
}
impl<K> Walk<K>
where K: Eq,
{
    /// Starts a traversal of the specified tree in the specified order, positioned at the first node of that order.
    pub fn new<T>(tree: &T, order: Order) -> Self
    where T: Traversable<Key = K>,
    {
        match order {
            Order::PreOrder => Self::PreOrder(PreOrder::new(tree)),
            Order::InOrder => Self::InOrder(InOrder::new(tree)),
            Order::PostOrder => Self::PostOrder(PostOrder::new(tree)),
        }
    }
    /// Creates a traversal in the specified order which has already visited every node.
    pub fn exhausted(order: Order) -> Self {
        match order {
            Order::PreOrder => Self::PreOrder(PreOrder::exhausted()),
            Order::InOrder => Self::InOrder(InOrder::exhausted()),
            Order::PostOrder => Self::PostOrder(PostOrder::exhausted()),
        }
    }
    /// Returns the order of the traversal.
    #[inline]
    pub fn order(&self) -> Order {
        match self {
            Self::PreOrder(..) => Order::PreOrder,
            Self::InOrder(..) => Order::InOrder,
            Self::PostOrder(..) => Order::PostOrder,
        }
    }
    /// Returns the key of the node the traversal is currently at, or `None` if it is exhausted.
    #[inline]
    pub fn current(&self) -> Option<&K> {
        match self {
            Self::PreOrder(walk) => walk.current(),
            Self::InOrder(walk) => walk.current(),
            Self::PostOrder(walk) => walk.current(),
        }
    }
    /// Moves on to the next node. Does nothing if the traversal is exhausted.
    #[inline]
    pub fn advance<T>(&mut self, tree: &T)
    where T: Traversable<Key = K>,
    {
        match self {
            Self::PreOrder(walk) => walk.advance(tree),
            Self::InOrder(walk) => walk.advance(tree),
            Self::PostOrder(walk) => walk.advance(tree),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A complete binary tree laid out like a binary heap: the children of `i` are `2i + 1` and `2i + 2`.
    pub(crate) struct Heap<'a>(pub(crate) &'a [u32]);
    impl Traversable for Heap<'_> {
        type Value = u32;
        type Key = usize;

        fn root_key(&self) -> Option<usize> {
            if self.0.is_empty() {
                None
            } else {
                Some(0)
            }
        }
        fn left_child_of(&self, key: &usize) -> Option<usize> {
            Some(2 * key + 1).filter(|&child| child < self.0.len())
        }
        fn right_child_of(&self, key: &usize) -> Option<usize> {
            Some(2 * key + 2).filter(|&child| child < self.0.len())
        }
        fn value_of(&self, key: &usize) -> &u32 {
            &self.0[*key]
        }
    }

    fn collect(heap: &Heap<'_>, order: Order) -> Vec<u32> {
        let mut walk = Walk::new(heap, order);
        assert_eq!(walk.order(), order);
        let mut visited = Vec::new();
        while let Some(key) = walk.current() {
            visited.push(*heap.value_of(key));
            walk.advance(heap);
        }
        visited
    }

    #[test]
    fn every_order_visits_every_node_once() {
        let values: Vec<u32> = (0..31).collect();
        let heap = Heap(&values);
        for &order in &[Order::PreOrder, Order::InOrder, Order::PostOrder] {
            let mut visited = collect(&heap, order);
            visited.sort_unstable();
            assert_eq!(visited, values, "{} traversal", order);
        }
    }

    #[test]
    fn exhausted_walks_keep_their_order() {
        for &order in &[Order::PreOrder, Order::InOrder, Order::PostOrder] {
            let mut walk = Walk::<usize>::exhausted(order);
            assert_eq!(walk.order(), order);
            walk.advance(&Heap(&[1, 2, 3]));
            assert!(walk.current().is_none());
        }
    }
}
