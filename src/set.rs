//! Contract shared by the set structures in this crate and the standard library sets.

use crate::avl_tree::AvlSet;
use crate::chained_hash::ChainedHashSet;
use std::collections::{BTreeSet, HashSet};
use std::hash::Hash;

/// Interface for a collection of unique elements supporting insertion and membership queries.
///
/// Code that only needs to fill a collection and probe it for membership can be written against
/// this trait and backed by any of the set structures in this crate or by the standard library
/// sets.
///
/// # Examples
///
/// ```
/// use wordset::avl_tree::AvlSet;
/// use wordset::set::Set;
///
/// fn fill<S: Set<u32>>(set: &mut S) {
///     set.add(1);
///     set.add(2);
/// }
///
/// let mut set = AvlSet::new();
/// fill(&mut set);
/// assert!(set.contains(&2));
/// assert_eq!(Set::size(&set), 2);
/// ```
pub trait Set<T> {
    /// Adds an element to the set. If the element already exists in the set, this function has
    /// no effect.
    fn add(&mut self, element: T);

    /// Checks if an element exists in the set.
    fn contains(&self, element: &T) -> bool;

    /// Returns the number of elements in the set.
    fn size(&self) -> usize;
}

impl<T> Set<T> for AvlSet<T>
where
    T: Ord,
{
    fn add(&mut self, element: T) {
        AvlSet::add(self, element);
    }

    fn contains(&self, element: &T) -> bool {
        AvlSet::contains(self, element)
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> Set<T> for ChainedHashSet<T>
where
    T: Hash + Eq,
{
    fn add(&mut self, element: T) {
        ChainedHashSet::add(self, element);
    }

    fn contains(&self, element: &T) -> bool {
        ChainedHashSet::contains(self, element)
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> Set<T> for BTreeSet<T>
where
    T: Ord,
{
    fn add(&mut self, element: T) {
        self.insert(element);
    }

    fn contains(&self, element: &T) -> bool {
        BTreeSet::contains(self, element)
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> Set<T> for HashSet<T>
where
    T: Hash + Eq,
{
    fn add(&mut self, element: T) {
        self.insert(element);
    }

    fn contains(&self, element: &T) -> bool {
        HashSet::contains(self, element)
    }

    fn size(&self) -> usize {
        self.len()
    }
}
