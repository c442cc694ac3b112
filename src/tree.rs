//! A persistent ordered tree. This is modeled after a BST one would see in
//! a functional language like Haskell. Any operation that one would
//! expect to modify the tree (i.e. `insert`) instead returns a new tree
//! that references many of the nodes of the original tree.
//!
//! # Examples
//!
//! ```
//! use ordtree::tree::Tree;
//!
//! let tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! // This `insert` returns a new tree!
//! let new_tree = tree.insert(1);
//!
//! // The new tree has this value but the old one doesn't.
//! assert!(new_tree.contains(&1));
//! assert!(!tree.contains(&1));
//!
//! // Inserting a value that is already present hands back
//! // the same tree - there are never duplicates.
//! let newer_tree = new_tree.insert(1);
//!
//! assert_eq!(newer_tree.size(), 1);
//! assert_eq!(new_tree.size(), 1);
//! ```

use std::cmp;
use std::fmt;
use std::iter::FromIterator;
use std::rc::Rc;

/// A persistent Binary Search Tree holding each value at most once.
/// Operations that would modify the tree instead return a new tree
/// sharing unmodified subtrees with the original.
pub enum Tree<T> {
    /// A marker for the empty pointer at the bottom of a subtree. Also
    /// the starting value for every tree.
    Empty,
    /// A `Node` that has a value and two children (which are both
    /// `Tree`s). This enum trivially wraps the [`Node`] struct.
    Node(Node<T>),
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Manual implementation of `Clone` so we don't require the generic
/// parameter to be `Clone` itself. Cloning a tree clones reference-counted
/// pointers only; the two handles share every node.
///
/// Note the comment on generic structs in
/// [the docs][<https://doc.rust-lang.org/std/clone/trait.Clone.html#derivable>].
impl<T> Clone for Tree<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Node(n) => Self::Node(n.clone()),
        }
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::Empty
    }

    /// Returns a new tree that contains every value of this tree plus the
    /// given value. If the value is already present, the returned tree is
    /// the *same* tree - no node is rebuilt and nothing is allocated.
    ///
    /// This runs in `O(height)` and allocates one new node per level on the
    /// path from the root to the insertion point; every subtree off that
    /// path is shared with the original tree, not copied.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::tree::Tree;
    ///
    /// let tree = Tree::new();
    /// let new_tree = tree.insert(1);
    /// let newer_tree = new_tree.insert(2);
    ///
    /// // All history is preserved.
    /// assert!(newer_tree.contains(&2));
    /// assert!(!new_tree.contains(&2));
    /// assert!(!tree.contains(&1));
    /// ```
    pub fn insert(&self, value: T) -> Self
    where
        T: cmp::Ord,
    {
        match self {
            Self::Empty => Self::Node(Node::leaf(value)),
            Self::Node(n) => match n.insert(value) {
                Some(new_root) => Self::Node(new_root),
                None => self.clone(),
            },
        }
    }

    /// Reports whether the given value is in this tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::tree::Tree;
    ///
    /// let tree = Tree::new();
    /// let tree = tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: cmp::Ord,
    {
        match self {
            Self::Empty => false,
            Self::Node(n) => n.contains(value),
        }
    }

    /// Counts the values stored in this tree. The count is recomputed by
    /// walking the whole tree, so this is `O(n)` per call.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::tree::Tree;
    ///
    /// let tree = Tree::new();
    /// assert_eq!(tree.size(), 0);
    ///
    /// let tree = tree.insert(2).insert(1).insert(2);
    /// assert_eq!(tree.size(), 2);
    /// ```
    pub fn size(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Node(n) => n.size(),
        }
    }

    /// Reports whether this tree holds no values.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns an iterator over the values of this tree in ascending
    /// order.
    ///
    /// The iterator is lazy - it visits nodes as it is advanced, not up
    /// front - and each call to `iter` starts a fresh traversal. Since
    /// trees never change after construction, repeated traversals of the
    /// same tree always yield the same values.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::tree::Tree;
    ///
    /// let tree: Tree<_> = [3, 1, 2].iter().copied().collect();
    ///
    /// let values: Vec<i32> = tree.iter().copied().collect();
    /// assert_eq!(values, [1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: cmp::Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        for value in iter {
            tree = tree.insert(value);
        }
        tree
    }
}

/// Renders the tree as nested parentheses: a node is `(` + left + value +
/// right + `)`, where an absent child contributes nothing. A completely
/// empty tree renders as `()`.
///
/// # Examples
///
/// ```
/// use ordtree::tree::Tree;
///
/// let tree: Tree<&str> = ["m", "f", "s", "b"].iter().copied().collect();
/// assert_eq!(tree.to_string(), "(((b)f)m(s))");
///
/// assert_eq!(Tree::<&str>::new().to_string(), "()");
/// ```
impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("()"),
            Self::Node(n) => n.fmt_parenthesized(f),
        }
    }
}

struct Child<T>(Rc<Tree<T>>);
impl<T> Clone for Child<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}
impl<T> Child<T> {
    fn empty() -> Self {
        Self(Rc::new(Tree::new()))
    }

    fn insert(&self, value: T) -> Option<Self>
    where
        T: cmp::Ord,
    {
        let subtree = match self.0.as_ref() {
            Tree::Empty => Tree::Node(Node::leaf(value)),
            Tree::Node(n) => Tree::Node(n.insert(value)?),
        };
        Some(Self(Rc::new(subtree)))
    }

    fn contains(&self, value: &T) -> bool
    where
        T: cmp::Ord,
    {
        self.0.contains(value)
    }

    fn size(&self) -> usize {
        self.0.size()
    }
}

/// A `Node` has a value that is used for searching/sorting and two
/// children, both of which may be [`Empty`][Tree::Empty]. Its fields are
/// never written after construction, so any number of trees may share it.
pub struct Node<T> {
    value: Rc<T>,
    left: Child<T>,
    right: Child<T>,
}

/// Manual implementation of `Clone` so we don't clone the value when the
/// generic parameter isn't `Clone` itself.
impl<T> Clone for Node<T> {
    fn clone(&self) -> Self {
        Self {
            value: Rc::clone(&self.value),
            left: self.left.clone(),
            right: self.right.clone(),
        }
    }
}

impl<T> Node<T> {
    /// Construct a `Node` with the given `value` and no children.
    fn leaf(value: T) -> Self {
        let empty = Child::empty();
        Self {
            value: Rc::new(value),
            left: empty.clone(),
            right: empty,
        }
    }

    /// Create a new `Node` with the same value as this node but with the
    /// given children.
    fn with_children(&self, left: Child<T>, right: Child<T>) -> Self {
        Self {
            value: Rc::clone(&self.value),
            left,
            right,
        }
    }

    /// Returns the rebuilt node, or `None` if `value` is already present
    /// somewhere in this subtree. `None` propagates to the root so that a
    /// no-op insert allocates nothing at all.
    fn insert(&self, value: T) -> Option<Self>
    where
        T: cmp::Ord,
    {
        match value.cmp(&self.value) {
            cmp::Ordering::Less => {
                let new_left = self.left.insert(value)?;
                Some(self.with_children(new_left, self.right.clone()))
            }
            cmp::Ordering::Equal => None,
            cmp::Ordering::Greater => {
                let new_right = self.right.insert(value)?;
                Some(self.with_children(self.left.clone(), new_right))
            }
        }
    }

    fn contains(&self, value: &T) -> bool
    where
        T: cmp::Ord,
    {
        match value.cmp(&self.value) {
            cmp::Ordering::Less => self.left.contains(value),
            cmp::Ordering::Equal => true,
            cmp::Ordering::Greater => self.right.contains(value),
        }
    }

    fn size(&self) -> usize {
        1 + self.left.size() + self.right.size()
    }
}

impl<T> Node<T>
where
    T: fmt::Display,
{
    /// Writes `(left value right)` without the spaces, skipping empty
    /// children entirely so that a leaf renders as `(value)`.
    fn fmt_parenthesized(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        if let Tree::Node(left) = self.left.0.as_ref() {
            left.fmt_parenthesized(f)?;
        }
        write!(f, "{}", self.value)?;
        if let Tree::Node(right) = self.right.0.as_ref() {
            right.fmt_parenthesized(f)?;
        }
        f.write_str(")")
    }
}

/// A lazy inorder iterator over a [`Tree`], yielding references to its
/// values in ascending order. Obtained from [`Tree::iter`].
pub struct Iter<'a, T> {
    /// Nodes whose value (and right subtree) are still pending, deepest
    /// unvisited left-spine node on top.
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn new(tree: &'a Tree<T>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(tree);
        iter
    }

    fn push_left_spine(&mut self, mut tree: &'a Tree<T>) {
        while let Tree::Node(n) = tree {
            self.stack.push(n);
            tree = n.left.0.as_ref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.0.as_ref());
        Some(node.value.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_of<T: cmp::Ord>(values: impl IntoIterator<Item = T>) -> Tree<T> {
        values.into_iter().collect()
    }

    #[test]
    fn test_insert_and_contains() {
        let tree = tree_of(["m", "f", "s", "b"]);

        assert_eq!(tree.size(), 4);
        assert!(tree.contains(&"f"));
        assert!(!tree.contains(&"x"));
        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), ["b", "f", "m", "s"]);
        assert_eq!(tree.to_string(), "(((b)f)m(s))");
    }

    #[test]
    fn test_display_empty() {
        let tree: Tree<&str> = Tree::new();
        assert_eq!(tree.to_string(), "()");
    }

    #[test]
    fn test_display_leaf() {
        let tree = Tree::new().insert("x");
        assert_eq!(tree.to_string(), "(x)");
    }

    #[test]
    fn test_display_right_only_child() {
        let tree = tree_of(["a", "b"]);
        assert_eq!(tree.to_string(), "(a(b))");
    }

    #[test]
    fn test_display_left_only_chain() {
        // A degenerate descending chain nests entirely on the left.
        let tree = tree_of([3, 2, 1]);
        assert_eq!(tree.to_string(), "(((1)2)3)");
    }

    #[test]
    fn test_persistence() {
        let old_tree = tree_of([2, 1]);
        let new_tree = old_tree.insert(3);

        assert!(new_tree.contains(&3));

        // The pre-insert handle answers all queries as before.
        assert!(!old_tree.contains(&3));
        assert_eq!(old_tree.size(), 2);
        assert_eq!(old_tree.iter().copied().collect::<Vec<_>>(), [1, 2]);
    }

    #[test]
    fn test_insert_existing_is_noop() {
        let tree = tree_of([2, 1, 3]);
        let same = tree.insert(2);

        assert_eq!(same.size(), 3);
        assert_eq!(same.to_string(), tree.to_string());
    }

    /// An insert that descends one side must share the untouched side with
    /// the original tree rather than copy it.
    #[test]
    fn test_insert_shares_untouched_subtree() {
        let old_tree = tree_of([2, 1, 3]);
        let new_tree = old_tree.insert(4);

        match (&old_tree, &new_tree) {
            (Tree::Node(old_root), Tree::Node(new_root)) => {
                assert!(Rc::ptr_eq(&old_root.left.0, &new_root.left.0));
                assert!(!Rc::ptr_eq(&old_root.right.0, &new_root.right.0));
            }
            _ => panic!("both trees should have a root node"),
        }
    }

    /// Inserting a present value allocates nothing: the result shares both
    /// children with the original root.
    #[test]
    fn test_noop_insert_shares_everything() {
        let tree = tree_of([2, 1, 3]);
        let same = tree.insert(2);

        match (&tree, &same) {
            (Tree::Node(root), Tree::Node(same_root)) => {
                assert!(Rc::ptr_eq(&root.left.0, &same_root.left.0));
                assert!(Rc::ptr_eq(&root.right.0, &same_root.right.0));
            }
            _ => panic!("both trees should have a root node"),
        }
    }

    #[test]
    fn test_iter_restarts() {
        let tree = tree_of([2, 1, 3]);

        let first: Vec<i32> = tree.iter().copied().collect();
        let second: Vec<i32> = tree.iter().copied().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_iter_empty() {
        let tree: Tree<i32> = Tree::new();
        assert_eq!(tree.iter().next(), None);
    }

    #[test]
    fn test_iter_is_lazy() {
        // Taking a prefix must not require visiting the whole tree.
        let tree = tree_of(0..100);
        let prefix: Vec<i32> = tree.iter().take(3).copied().collect();
        assert_eq!(prefix, [0, 1, 2]);
    }

    #[test]
    fn test_into_iterator_for_ref() {
        let tree = tree_of([2, 1, 3]);

        let mut values = Vec::new();
        for value in &tree {
            values.push(*value);
        }
        assert_eq!(values, [1, 2, 3]);
    }

    #[test]
    fn test_size_is_empty() {
        let tree: Tree<i32> = Tree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.size(), 0);

        let tree = tree.insert(1);
        assert!(!tree.is_empty());
        assert_eq!(tree.size(), 1);
    }

    #[test]
    fn test_clone_shares_structure() {
        let tree = tree_of([2, 1, 3]);
        let other = tree.clone();

        match (&tree, &other) {
            (Tree::Node(a), Tree::Node(b)) => {
                assert!(Rc::ptr_eq(&a.value, &b.value));
                assert!(Rc::ptr_eq(&a.left.0, &b.left.0));
                assert!(Rc::ptr_eq(&a.right.0, &b.right.0));
            }
            _ => panic!("both trees should have a root node"),
        }
    }
}
