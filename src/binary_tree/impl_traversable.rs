use core::fmt::Debug;
use crate::{
    storage::Storage,
    traversal::{Traversable, TraversableMut},
};
use super::{BinaryTree, Node};

impl<T, K, S> Traversable for BinaryTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    type Value = T;
    type Key = K;

    #[inline(always)]
    fn root_key(&self) -> Option<K> {
        self.root.clone()
    }
    #[track_caller]
    fn left_child_of(&self, key: &K) -> Option<K> {
        self.node(key).left_child.clone()
    }
    #[track_caller]
    fn right_child_of(&self, key: &K) -> Option<K> {
        self.node(key).right_child.clone()
    }
    #[track_caller]
    fn value_of(&self, key: &K) -> &T {
        &self.node(key).value
    }
}
impl<T, K, S> TraversableMut for BinaryTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[track_caller]
    fn value_mut_of(&mut self, key: &K) -> &mut T {
        &mut self.node_mut(key).value
    }
}
