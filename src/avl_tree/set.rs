use crate::avl_tree::node::Node;
use crate::avl_tree::tree;
use std::borrow::Borrow;

/// An ordered set implemented using an AVL tree.
///
/// An AVL tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Balancing is optional and
/// fixed at construction; with balancing disabled the tree behaves as a plain binary search tree
/// and degenerates into a chain when values are added in sorted order.
///
/// # Examples
///
/// ```
/// use wordset::avl_tree::AvlSet;
///
/// let mut set = AvlSet::new();
/// set.add(0);
/// set.add(3);
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.height(), 1);
///
/// assert_eq!(set.min(), Some(&0));
/// assert_eq!(set.ceil(&2), Some(&3));
///
/// assert!(set.contains(&3));
/// assert!(!set.contains(&1));
/// ```
#[derive(Clone)]
pub struct AvlSet<T> {
    tree: tree::Tree<T>,
    len: usize,
    balancing: bool,
}

impl<T> AvlSet<T> {
    /// Constructs a new, empty `AvlSet<T>` with balancing enabled.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordset::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// ```
    pub fn new() -> Self {
        Self::with_balancing(true)
    }

    /// Constructs a new, empty `AvlSet<T>`, selecting whether the tree rebalances itself after
    /// insertions. A set constructed with balancing disabled keeps the plain binary search tree
    /// shape determined by insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordset::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::with_balancing(false);
    /// for value in 0..4 {
    ///     set.add(value);
    /// }
    ///
    /// assert_eq!(set.height(), 3);
    /// ```
    pub fn with_balancing(balancing: bool) -> Self {
        AvlSet {
            tree: None,
            len: 0,
            balancing,
        }
    }

    /// Adds a value to the set. If the value already exists in the set, this function has no
    /// effect.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordset::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.add(1);
    /// set.add(1);
    ///
    /// assert_eq!(set.len(), 1);
    /// assert!(set.contains(&1));
    /// ```
    pub fn add(&mut self, value: T)
    where
        T: Ord,
    {
        if self.contains(&value) {
            return;
        }
        if tree::insert(&mut self.tree, value, self.balancing) {
            self.len += 1;
        }
    }

    /// Checks if a value exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordset::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.add(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains<V>(&self, value: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::get(&self.tree, value).is_some()
    }

    /// Returns the number of values in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordset::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.add(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordset::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the height of the tree. The height of an empty set is -1, and the height of a set
    /// with one value is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordset::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert_eq!(set.height(), -1);
    ///
    /// set.add(1);
    /// assert_eq!(set.height(), 0);
    ///
    /// set.add(2);
    /// set.add(3);
    /// assert_eq!(set.height(), 1);
    /// ```
    pub fn height(&self) -> isize {
        tree::height(&self.tree) as isize - 1
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordset::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.add(1);
    /// set.add(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Returns a value in the set that is less than or equal to a particular value. Returns
    /// `None` if such a value does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordset::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.add(1);
    /// assert_eq!(set.floor(&0), None);
    /// assert_eq!(set.floor(&2), Some(&1));
    /// ```
    pub fn floor<V>(&self, value: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::floor(&self.tree, value)
    }

    /// Returns a value in the set that is greater than or equal to a particular value. Returns
    /// `None` if such a value does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordset::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.add(1);
    /// assert_eq!(set.ceil(&0), Some(&1));
    /// assert_eq!(set.ceil(&2), None);
    /// ```
    pub fn ceil<V>(&self, value: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::ceil(&self.tree, value)
    }

    /// Returns the minimum value of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordset::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.add(1);
    /// set.add(3);
    /// assert_eq!(set.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T>
    where
        T: Ord,
    {
        tree::min(&self.tree)
    }

    /// Returns the maximum value of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordset::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.add(1);
    /// set.add(3);
    /// assert_eq!(set.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T>
    where
        T: Ord,
    {
        tree::max(&self.tree)
    }

    /// Calls `visit` for each value in the set, in the order determined by a preorder traversal
    /// of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordset::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.add(2);
    /// set.add(1);
    /// set.add(3);
    ///
    /// let mut values = Vec::new();
    /// set.preorder(|value| values.push(*value));
    /// assert_eq!(values, vec![2, 1, 3]);
    /// ```
    pub fn preorder<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        tree::preorder(&self.tree, &mut visit);
    }

    /// Calls `visit` for each value in the set, in the order determined by an inorder traversal
    /// of the tree. The values are visited in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordset::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.add(2);
    /// set.add(1);
    /// set.add(3);
    ///
    /// let mut values = Vec::new();
    /// set.inorder(|value| values.push(*value));
    /// assert_eq!(values, vec![1, 2, 3]);
    /// ```
    pub fn inorder<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        tree::inorder(&self.tree, &mut visit);
    }

    /// Calls `visit` for each value in the set, in the order determined by a postorder traversal
    /// of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordset::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.add(2);
    /// set.add(1);
    /// set.add(3);
    ///
    /// let mut values = Vec::new();
    /// set.postorder(|value| values.push(*value));
    /// assert_eq!(values, vec![1, 3, 2]);
    /// ```
    pub fn postorder<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        tree::postorder(&self.tree, &mut visit);
    }

    /// Returns an iterator over the set. The iterator will yield values using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordset::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.add(1);
    /// set.add(3);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AvlSetIter<'_, T> {
        AvlSetIter {
            current: &self.tree,
            stack: Vec::new(),
        }
    }
}

impl<T> IntoIterator for AvlSet<T> {
    type IntoIter = AvlSetIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, T> IntoIterator for &'a AvlSet<T>
where
    T: 'a,
{
    type IntoIter = AvlSetIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `AvlSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields owned values.
pub struct AvlSetIntoIter<T> {
    current: tree::Tree<T>,
    stack: Vec<Node<T>>,
}

impl<T> Iterator for AvlSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { value, right, .. } = node;
            self.current = right;
            value
        })
    }
}

/// An iterator for `AvlSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct AvlSetIter<'a, T> {
    current: &'a tree::Tree<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for AvlSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            let Node {
                ref value,
                ref right,
                ..
            } = node;
            self.current = right;
            value
        })
    }
}

impl<T> Default for AvlSet<T> {
    fn default() -> Self {
        Self::new()
    }
}
