use core::fmt::{self, Formatter, Debug, Display};
use crate::{storage::Storage, util::Stack};
use super::{BinaryTree, Node};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const STRAND: &str = "│   ";
const GAP: &str = "    ";

/// A node waiting to be printed.
struct Line<K> {
    key: K,
    depth: usize,
    /// Whether the node is followed by a sibling, i.e. is a right child with a left sibling.
    has_sibling_below: bool,
}

/// Draws the tree sideways, one node per line, with the root at the top.
///
/// Each node is followed by its right subtree and then by its left subtree, so reading the output from bottom to top and turning it by a quarter yields the usual picture of the tree. Empty trees are printed as `empty tree`.
///
/// # Example
/// ```rust
/// # use birch::BinaryTree;
/// let mut tree = BinaryTree::<_>::new();
/// tree.add_root(2)
///     .add_left(&2, 1)?
///     .add_right(&2, 4)?
///     .add_left(&4, 3)?;
///
/// let expected = "\
/// 2
/// ├── 4
/// │   └── 3
/// └── 1
/// ";
/// assert_eq!(tree.to_string(), expected);
/// # Ok::<(), birch::binary_tree::AddNodeError>(())
/// ```
impl<T, K, S> Display for BinaryTree<T, K, S>
where
    T: Display,
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let root = match &self.root {
            Some(root) => root.clone(),
            None => return writeln!(f, "empty tree"),
        };
        // One entry per ancestor below the root: `true` if a vertical strand passes through its column.
        let mut strands = Stack::<bool>::new();
        let mut pending = Stack::new();
        pending.push(Line {
            key: root,
            depth: 0,
            has_sibling_below: false,
        });
        while let Some(line) = pending.pop() {
            let node = self.node(&line.key);
            if line.depth > 0 {
                strands.truncate(line.depth - 1);
                for &strand in &strands {
                    f.write_str(if strand { STRAND } else { GAP })?;
                }
                f.write_str(if line.has_sibling_below { BRANCH } else { LAST_BRANCH })?;
                strands.push(line.has_sibling_below);
            }
            writeln!(f, "{}", node.value)?;
            // The left child goes on the stack first so that the right one is printed first.
            if let Some(left) = &node.left_child {
                pending.push(Line {
                    key: left.clone(),
                    depth: line.depth + 1,
                    has_sibling_below: false,
                });
            }
            if let Some(right) = &node.right_child {
                pending.push(Line {
                    key: right.clone(),
                    depth: line.depth + 1,
                    has_sibling_below: node.left_child.is_some(),
                });
            }
        }
        Ok(())
    }
}
