use core::fmt::Debug;

/// A node of a binary tree.
///
/// Created by the binary tree internally and only publicly exposed so that binary tree storages' generic arguments could be specified.
#[derive(Copy, Clone, Debug, Hash)]
pub struct Node<T, K>
where K: Clone + Debug + Eq,
{
    pub(super) value: T,
    pub(super) left_child: Option<K>,
    pub(super) right_child: Option<K>,
}
impl<T, K> Node<T, K>
where K: Clone + Debug + Eq,
{
    /// Creates a node without children.
    #[inline(always)]
    pub(super) fn leaf(value: T) -> Self {
        Self {
            value,
            left_child: None,
            right_child: None,
        }
    }
    #[inline(always)]
    pub(super) fn child(&self, side: Side) -> Option<&K> {
        match side {
            Side::Left => self.left_child.as_ref(),
            Side::Right => self.right_child.as_ref(),
        }
    }
    #[inline(always)]
    pub(super) fn child_slot_mut(&mut self, side: Side) -> &mut Option<K> {
        match side {
            Side::Left => &mut self.left_child,
            Side::Right => &mut self.right_child,
        }
    }
}

/// Which of a node's two child slots an operation refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(super) enum Side {
    Left,
    Right,
}
