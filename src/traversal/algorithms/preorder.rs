use crate::{traversal::Traversable, util::Stack};

/// Iterative pre-order traversal: the node itself, then its left subtree, then its right subtree.
///
/// Every node is pushed onto the stack and popped off it exactly once. Popping a node pushes its right child and then its left child, so that the whole left subtree is walked before the right child resurfaces.
#[derive(Clone, Debug)]
pub struct PreOrder<K> {
    stack: Stack<K>,
    current: Option<K>,
}
impl<K> PreOrder<K> {
    /// Starts a pre-order traversal of the specified tree, positioned at its root.
    pub fn new<T>(tree: &T) -> Self
    where T: Traversable<Key = K>,
    {
        let mut stack = Stack::new();
        if let Some(root) = tree.root_key() {
            stack.push(root);
        }
        let mut walk = Self {
            stack,
            current: None,
        };
        walk.advance(tree);
        walk
    }
    /// Creates a traversal which has already visited every node.
    #[inline]
    pub fn exhausted() -> Self {
        Self {
            stack: Stack::new(),
            current: None,
        }
    }
    /// Returns the key of the node the traversal is currently at, or `None` if it is exhausted.
    #[inline(always)]
    pub fn current(&self) -> Option<&K> {
        self.current.as_ref()
    }
    /// Moves on to the next node. Does nothing if the traversal is exhausted.
    pub fn advance<T>(&mut self, tree: &T)
    where T: Traversable<Key = K>,
    {
        self.current = self.stack.pop();
        if let Some(current) = &self.current {
            if let Some(right) = tree.right_child_of(current) {
                self.stack.push(right);
            }
            if let Some(left) = tree.left_child_of(current) {
                self.stack.push(left);
            }
        }
    }
}
