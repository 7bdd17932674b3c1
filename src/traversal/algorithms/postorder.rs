use core::mem;
use crate::{
    traversal::Traversable,
    util::{Stack, unreachable_debugchecked},
};

/// Iterative post-order traversal: the left subtree, then the right subtree, then the node itself.
///
/// A node may only be visited after both of its children, which takes more than a stack of pending nodes: when the walk climbs back up to a parent, it has to know whether it came from the left child (the right subtree is still due) or from the right one (the parent is due). Instead of marking visited nodes, the walk compares the key it climbed up from with the parent's left child key. Keys identify nodes, so two children holding equal values never confuse it.
#[derive(Clone, Debug)]
pub struct PostOrder<K> {
    stack: Stack<K>,
    current: Option<K>,
    phase: Phase,
}

/// The sub-state of a [`PostOrder`] traversal.
///
/// Between steps, the phase is always `Curr`; the other phases only exist while the walk is looking for the next node to visit.
///
/// [`PostOrder`]: struct.PostOrder.html " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Descending into the left child of the current node, if there is one.
    Left,
    /// Descending into the right child of the current node, if there is one.
    Right,
    /// The current node is ready to be visited.
    Curr,
    /// Climbing back up to the parent of the node which has just been visited.
    Up,
}

impl<K> PostOrder<K>
where K: Eq,
{
    /// Starts a post-order traversal of the specified tree, positioned at the first leaf reached by preferring left children over right ones.
    pub fn new<T>(tree: &T) -> Self
    where T: Traversable<Key = K>,
    {
        let mut walk = Self {
            stack: Stack::new(),
            current: tree.root_key(),
            phase: Phase::Left,
        };
        walk.settle(tree);
        walk
    }
    /// Creates a traversal which has already visited every node.
    #[inline]
    pub fn exhausted() -> Self {
        Self {
            stack: Stack::new(),
            current: None,
            phase: Phase::Curr,
        }
    }
    /// Returns the key of the node the traversal is currently at, or `None` if it is exhausted.
    #[inline(always)]
    pub fn current(&self) -> Option<&K> {
        self.current.as_ref()
    }
    /// Returns the phase the traversal is in.
    #[inline(always)]
    pub fn phase(&self) -> Phase {
        self.phase
    }
    /// Moves on to the next node. Does nothing if the traversal is exhausted.
    pub fn advance<T>(&mut self, tree: &T)
    where T: Traversable<Key = K>,
    {
        if self.current.is_none() {
            return;
        }
        if self.stack.is_empty() {
            // The root is always visited last
            self.current = None;
            return;
        }
        self.phase = Phase::Up;
        self.settle(tree);
    }

    /// Runs the phase loop until the current node is ready to be visited.
    fn settle<T>(&mut self, tree: &T)
    where T: Traversable<Key = K>,
    {
        let mut current = match self.current.take() {
            Some(key) => key,
            None => {
                self.phase = Phase::Curr;
                return;
            }
        };
        loop {
            match self.phase {
                Phase::Left => match tree.left_child_of(&current) {
                    Some(left) => self.stack.push(mem::replace(&mut current, left)),
                    None => self.phase = Phase::Right,
                },
                Phase::Right => match tree.right_child_of(&current) {
                    Some(right) => {
                        self.stack.push(mem::replace(&mut current, right));
                        self.phase = Phase::Left;
                    }
                    None => self.phase = Phase::Curr,
                },
                Phase::Up => {
                    let parent = self.stack.pop().unwrap_or_else(|| unsafe {
                        // SAFETY: Up is only entered from advance(), which has already checked
                        // that the stack is not empty, and it's never entered twice per step
                        unreachable_debugchecked("post-order walk climbed above the root")
                    });
                    let came_from_left = tree
                        .left_child_of(&parent)
                        .map_or(false, |left| left == current);
                    current = parent;
                    self.phase = if came_from_left {
                        Phase::Right
                    } else {
                        Phase::Curr
                    };
                }
                Phase::Curr => break,
            }
        }
        self.current = Some(current);
    }
}
