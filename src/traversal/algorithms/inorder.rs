use crate::{traversal::Traversable, util::Stack};

/// Iterative in-order traversal: the left subtree, then the node itself, then the right subtree.
///
/// The stack holds exactly the ancestors whose right subtree has not been visited yet, deepest on top. The candidate is the root of the next subtree whose left spine still has to be pushed.
#[derive(Clone, Debug)]
pub struct InOrder<K> {
    stack: Stack<K>,
    candidate: Option<K>,
    current: Option<K>,
}
impl<K> InOrder<K> {
    /// Starts an in-order traversal of the specified tree, positioned at the end of the root's left spine.
    pub fn new<T>(tree: &T) -> Self
    where T: Traversable<Key = K>,
    {
        let mut walk = Self {
            stack: Stack::new(),
            candidate: tree.root_key(),
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
            candidate: None,
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
        while let Some(candidate) = self.candidate.take() {
            self.candidate = tree.left_child_of(&candidate);
            self.stack.push(candidate);
        }
        self.current = self.stack.pop();
        if let Some(current) = &self.current {
            self.candidate = tree.right_child_of(current);
        }
    }
}
