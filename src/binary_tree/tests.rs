use super::*;
use crate::traversal::{Order, Traversable, TraversableMut, ExhaustedCursorError};
use alloc::{string::{String, ToString}, vec::Vec};

const ORDERS: [Order; 3] = [Order::PreOrder, Order::InOrder, Order::PostOrder];

/// The binary search tree from the crate-level example.
fn search_tree() -> BinaryTree<u32> {
    let mut tree = BinaryTree::<u32>::new();
    tree.add_root(10);
    let edges: [(u32, u32, bool); 14] = [
        (10, 6, true),
        (6, 3, true),
        (6, 8, false),
        (8, 7, true),
        (8, 9, false),
        (3, 5, false),
        (10, 15, false),
        (15, 12, true),
        (12, 11, true),
        (12, 14, false),
        (15, 20, false),
        (20, 17, true),
        (17, 19, false),
        (19, 18, true),
    ];
    for &(parent, child, left) in &edges {
        if left {
            tree.add_left(&parent, child).unwrap();
        } else {
            tree.add_right(&parent, child).unwrap();
        }
    }
    tree
}
/// `m` with `f(d, b)` on the left and `j(h, i)` on the right.
fn char_tree() -> BinaryTree<char> {
    let mut tree = BinaryTree::<char>::new();
    tree.add_root('m')
        .add_left(&'m', 'f')
        .and_then(|tree| tree.add_left(&'f', 'd'))
        .and_then(|tree| tree.add_right(&'f', 'b'))
        .and_then(|tree| tree.add_right(&'m', 'j'))
        .and_then(|tree| tree.add_left(&'j', 'h'))
        .and_then(|tree| tree.add_right(&'j', 'i'))
        .unwrap();
    tree
}
fn walk<T: Copy>(tree: &BinaryTree<T>, order: Order) -> Vec<T> {
    tree.cursor(order).copied().collect()
}

#[test]
fn search_tree_inorder_is_sorted() {
    let tree = search_tree();
    assert_eq!(tree.len(), 15);
    assert_eq!(
        tree.iter().copied().collect::<Vec<_>>(),
        [3, 5, 6, 7, 8, 9, 10, 11, 12, 14, 15, 17, 18, 19, 20],
    );
    assert_eq!(walk(&tree, Order::InOrder), tree.begin_inorder().copied().collect::<Vec<_>>());
    assert_eq!(walk(&tree, Order::InOrder), (&tree).into_iter().copied().collect::<Vec<_>>());
}
#[test]
fn search_tree_preorder() {
    assert_eq!(
        walk(&search_tree(), Order::PreOrder),
        [10, 6, 3, 5, 8, 7, 9, 15, 12, 11, 14, 20, 17, 19, 18],
    );
}
#[test]
fn search_tree_postorder() {
    assert_eq!(
        walk(&search_tree(), Order::PostOrder),
        [5, 3, 7, 9, 8, 6, 11, 14, 12, 18, 19, 17, 20, 15, 10],
    );
}
#[test]
fn char_tree_orders() {
    let tree = char_tree();
    let as_string = |order| walk(&tree, order).into_iter().collect::<String>();
    assert_eq!(as_string(Order::PreOrder), "mfdbjhi");
    assert_eq!(as_string(Order::InOrder), "dfbmhji");
    assert_eq!(as_string(Order::PostOrder), "dbfhijm");
}
#[test]
fn empty_tree_begins_at_the_end() {
    let tree = BinaryTree::<u32>::new();
    assert!(tree.is_empty());
    assert!(tree.begin() == tree.end());
    assert!(tree.begin_preorder() == tree.end_preorder());
    assert!(tree.begin_inorder() == tree.end_inorder());
    assert!(tree.begin_postorder() == tree.end_postorder());
    assert_eq!(tree.begin().value(), Err(ExhaustedCursorError));
    assert_eq!(tree.iter().count(), 0);

    let mut tree = tree;
    assert!(tree.begin_mut().is_end());
    assert!(tree.begin_postorder_mut().next_mut().is_none());
}
#[test]
fn single_node_in_every_order() {
    let mut tree = BinaryTree::<_>::new();
    tree.add_root(42);
    for &order in &ORDERS {
        assert_eq!(walk(&tree, order), [42], "{} traversal", order);
    }
    let mut cursor = tree.begin();
    assert_eq!(cursor.value(), Ok(&42));
    cursor.advance();
    assert!(cursor == tree.end());
}
#[test]
fn exhausted_cursor_stays_exhausted() {
    let tree = char_tree();
    for &order in &ORDERS {
        let mut cursor = tree.cursor(order);
        for _ in 0..tree.len() {
            assert!(!cursor.is_end());
            cursor.advance();
        }
        for _ in 0..3 {
            assert!(cursor.is_end());
            assert_eq!(cursor.value(), Err(ExhaustedCursorError));
            assert_eq!(cursor.next(), None);
            cursor.advance();
        }
        assert!(cursor == tree.end());
    }
}
#[test]
fn cursor_equality() {
    let tree = char_tree();
    let other = char_tree();
    // Same first node of the same tree
    assert!(tree.begin() == tree.begin_inorder());
    // Pre-order starts at the root, in-order at the leftmost leaf
    assert!(tree.begin_preorder() != tree.begin_inorder());
    // Same position, different trees
    assert!(tree.begin() != other.begin());
    // Every exhausted cursor is equal to every other one
    assert!(tree.end_preorder() == other.end_postorder());

    let mut preorder = tree.begin_preorder();
    let mut postorder = tree.begin_postorder();
    // 'm' is the first node in pre-order and the last one in post-order
    for _ in 0..tree.len() - 1 {
        postorder.advance();
    }
    assert!(preorder == postorder);
    preorder.advance();
    assert!(preorder != postorder);
}
#[test]
fn advance_post_returns_previous_position() {
    let tree = char_tree();
    let mut cursor = tree.begin_preorder();
    let before = cursor.advance_post();
    assert_eq!(before.value(), Ok(&'m'));
    assert_eq!(cursor.value(), Ok(&'f'));
    assert_eq!(cursor.advance().value(), Ok(&'d'));
    assert_eq!(before.order(), Order::PreOrder);
}
#[test]
fn independent_cursors() {
    let tree = char_tree();
    let mut first = tree.begin_postorder();
    let second = tree.begin_postorder();
    first.advance();
    first.advance();
    assert_eq!(first.value(), Ok(&'f'));
    assert_eq!(second.value(), Ok(&'d'));
}
#[test]
fn mutable_cursors_edit_values() {
    let mut tree = search_tree();
    let mut cursor = tree.begin_mut();
    while let Some(value) = cursor.next_mut() {
        *value *= 2;
    }
    assert_eq!(
        tree.iter().copied().collect::<Vec<_>>(),
        [6, 10, 12, 14, 16, 18, 20, 22, 24, 28, 30, 34, 36, 38, 40],
    );

    let mut cursor = tree.begin_preorder_mut();
    *cursor.value_mut().unwrap() = 0;
    cursor.advance();
    *cursor.value_mut().unwrap() += 1;
    assert_eq!(walk(&tree, Order::PreOrder)[..2], [0, 13]);

    let mut cursor = tree.begin_inorder_mut();
    assert_eq!(cursor.value(), Ok(&6));
    assert_eq!(cursor.order(), Order::InOrder);
    let mut count = 0;
    while !cursor.is_end() {
        count += 1;
        cursor.advance();
    }
    assert_eq!(count, 15);
    assert_eq!(cursor.value_mut(), Err(ExhaustedCursorError));
}
#[test]
fn traversable_mut_cursor() {
    let mut tree = char_tree();
    let mut cursor = tree.cursor_mut(Order::PostOrder);
    while let Some(value) = cursor.next_mut() {
        *value = value.to_ascii_uppercase();
    }
    let key = tree.root_key().unwrap();
    *tree.value_mut_of(&key) = 'r';
    assert_eq!(walk(&tree, Order::PreOrder), ['r', 'F', 'D', 'B', 'J', 'H', 'I']);
}
#[test]
fn deep_copy_is_independent() {
    let mut original = search_tree();
    let copy = original.clone();
    original.add_root(99);
    original.add_left(&6, 60).unwrap();
    assert_eq!(original.root().map(|root| *root.value()), Some(99));
    assert_eq!(copy.root().map(|root| *root.value()), Some(10));
    assert_eq!(
        walk(&copy, Order::PostOrder),
        [5, 3, 7, 9, 8, 6, 11, 14, 12, 18, 19, 17, 20, 15, 10],
    );
    assert_eq!(copy.len(), original.len());
}
#[test]
fn adding_to_an_empty_tree_fails() {
    let mut tree = BinaryTree::<u32>::new();
    assert_eq!(tree.add_left(&1, 2).err(), Some(AddNodeError::NoRoot));
    assert_eq!(tree.add_right(&1, 2).err(), Some(AddNodeError::NoRoot));
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
}
#[test]
fn adding_under_a_missing_parent_fails() {
    let mut tree = char_tree();
    assert_eq!(tree.add_left(&'z', 'y').err(), Some(AddNodeError::NodeNotFound));
    assert_eq!(tree.add_right(&'z', 'y').err(), Some(AddNodeError::NodeNotFound));
    assert_eq!(tree.len(), 7);
    assert_eq!(AddNodeError::NoRoot.to_string(), "cannot add a child to an empty tree");
}
#[test]
fn adding_to_an_occupied_slot_replaces_the_value() {
    let mut tree = char_tree();
    tree.add_left(&'m', 'g').unwrap().add_right(&'j', 'k').unwrap();
    tree.add_root('n');
    assert_eq!(tree.len(), 7);
    assert_eq!(walk(&tree, Order::PreOrder), ['n', 'g', 'd', 'b', 'j', 'h', 'k']);
}
#[test]
fn parent_lookup_uses_the_first_match_in_preorder() {
    let mut tree = BinaryTree::<_>::new();
    tree.add_root(1).add_left(&1, 2).unwrap().add_right(&1, 2).unwrap();
    // Both children hold 2; the left one comes first in pre-order
    tree.add_left(&2, 3).unwrap();
    let root = tree.root().unwrap();
    assert!(root.left_child().unwrap().has_left_child());
    assert!(root.right_child().unwrap().is_leaf());
    assert_eq!(tree.find(&3).map(|node| *node.value()), Some(3));
    assert!(tree.find(&4).is_none());
}
#[test]
fn equal_siblings_in_postorder() {
    let mut tree = BinaryTree::<_>::new();
    tree.add_root(1).add_left(&1, 2).unwrap().add_right(&1, 2).unwrap();
    assert_eq!(walk(&tree, Order::PostOrder), [2, 2, 1]);
}
#[test]
fn find_borrows_the_value() {
    let mut tree = BinaryTree::<String>::new();
    tree.add_root("root".to_string())
        .add_right("root", "right".to_string())
        .unwrap();
    let node = tree.find("right").unwrap();
    assert!(node.is_leaf());
    assert!(!node.is_root());
    assert!(tree.find("root").unwrap().is_root());
}
#[test]
fn node_refs() {
    let mut tree = char_tree();
    {
        // The children keep the tree borrowed until the end of this block
        let root = tree.root().unwrap();
        let children = root.children();
        assert_eq!(children.len(), 2);
        assert_eq!(*children[0].value(), 'f');
        assert_eq!(*children[1].value(), 'j');
        assert_eq!(NodeRef::new_raw(&tree, *root.raw_key()).map(|node| *node.value()), Some('m'));
        assert!(NodeRef::new_raw(&tree, 100).is_none());
    }

    let mut root = tree.root_mut().unwrap();
    assert!(root.has_left_child() && root.has_right_child());
    {
        let mut left = root.left_child_mut().unwrap();
        *left.left_child_mut().unwrap().value_mut() = 'e';
    }
    *root.value_mut() = 'n';
    let root = NodeRef::from(root);
    assert_eq!(*root.value(), 'n');
    assert_eq!(walk(&tree, Order::InOrder), ['e', 'f', 'b', 'n', 'h', 'j', 'i']);
}
#[test]
fn pretty_print() {
    let expected = "\
10
├── 15
│   ├── 20
│   │   └── 17
│   │       └── 19
│   │           └── 18
│   └── 12
│       ├── 14
│       └── 11
└── 6
    ├── 8
    │   ├── 9
    │   └── 7
    └── 3
        └── 5
";
    assert_eq!(search_tree().to_string(), expected);
    assert_eq!(BinaryTree::<u32>::new().to_string(), "empty tree\n");
}
#[test]
fn pretty_print_left_only() {
    let mut tree = BinaryTree::<_>::new();
    tree.add_root(1).add_left(&1, 2).unwrap().add_left(&2, 3).unwrap();
    assert_eq!(tree.to_string(), "1\n└── 2\n    └── 3\n");
}
#[test]
fn other_storages() {
    use arrayvec::ArrayVec;

    let mut array_tree = BinaryTree::<char, usize, ArrayVec<[Node<char, usize>; 4]>>::with_capacity(3);
    assert_eq!(array_tree.capacity(), 4);
    array_tree.add_root('b').add_left(&'b', 'a').unwrap().add_right(&'b', 'c').unwrap();
    assert_eq!(array_tree.iter().copied().collect::<Vec<_>>(), ['a', 'b', 'c']);
    assert_eq!(array_tree.begin_postorder().copied().collect::<Vec<_>>(), ['a', 'c', 'b']);
    assert_eq!(array_tree.len(), 3);
    array_tree.reserve(1);

    let mut vec_tree = VecBinaryTree::<char>::with_capacity(2);
    assert!(vec_tree.capacity() >= 2);
    vec_tree.add_root('x');
    vec_tree.reserve(100);
    assert!(vec_tree.capacity() >= 101);
    assert_eq!(vec_tree.to_string(), "x\n");
}
#[test]
#[should_panic(expected = "is full")]
fn fixed_capacity_tree_overflows_loudly() {
    use arrayvec::ArrayVec;

    let mut tree = BinaryTree::<u8, usize, ArrayVec<[Node<u8, usize>; 2]>>::new();
    tree.add_root(1).add_left(&1, 2).unwrap();
    let _ = tree.add_right(&1, 3);
}
#[test]
fn deep_chain_is_walked_without_recursion() {
    // Even nodes get a left child, odd nodes a right child
    const DEPTH: u32 = 3000;
    let mut tree = BinaryTree::<u32>::with_capacity(DEPTH as usize);
    tree.add_root(0);
    for value in 1..DEPTH {
        if value % 2 == 1 {
            tree.add_left(&(value - 1), value).unwrap();
        } else {
            tree.add_right(&(value - 1), value).unwrap();
        }
    }
    assert_eq!(tree.len(), DEPTH as usize);

    let preorder = (0..DEPTH).collect::<Vec<_>>();
    let postorder = (0..DEPTH).rev().collect::<Vec<_>>();
    let inorder = (1..DEPTH)
        .step_by(2)
        .chain((0..DEPTH).step_by(2).rev())
        .collect::<Vec<_>>();
    assert_eq!(walk(&tree, Order::PreOrder), preorder);
    assert_eq!(walk(&tree, Order::InOrder), inorder);
    assert_eq!(walk(&tree, Order::PostOrder), postorder);

    let printed = tree.to_string();
    assert_eq!(printed.lines().count(), DEPTH as usize);
    assert!(printed.lines().last().unwrap().ends_with("└── 2999"));

    let copy = tree.clone();
    drop(tree);
    assert_eq!(walk(&copy, Order::PostOrder), postorder);
}
