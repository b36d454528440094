use rand::{Rng, XorShiftRng};
use siphasher::sip::SipHasher;
use std::borrow::Borrow;
use std::hash::{Hash, Hasher};
use std::mem;
use std::slice;
use std::vec;

const DEFAULT_BUCKET_COUNT: usize = 10;
const MAX_LOAD_FACTOR: f64 = 0.8;

#[derive(Clone)]
struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/// An unordered set implemented using a separately-chained hash table.
///
/// The set is an array of buckets where each bucket holds a singly-linked chain of values that
/// hashed to it. When the ratio of values to buckets exceeds 0.8 after an insertion, the bucket
/// array is doubled in size and every value is relinked into its new chain. Values are hashed
/// with SipHash using keys fixed at construction.
///
/// # Examples
///
/// ```
/// use wordset::chained_hash::ChainedHashSet;
///
/// let mut set = ChainedHashSet::new();
/// set.add(0);
/// set.add(3);
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.bucket_count(), 10);
///
/// assert!(set.contains(&3));
/// assert!(!set.contains(&1));
/// ```
#[derive(Clone)]
pub struct ChainedHashSet<T> {
    buckets: Vec<Option<Box<Node<T>>>>,
    len: usize,
    hasher: SipHasher,
}

impl<T> ChainedHashSet<T> {
    fn get_hasher() -> SipHasher {
        let mut rng = XorShiftRng::new_unseeded();
        SipHasher::new_with_keys(rng.next_u64(), rng.next_u64())
    }

    /// Constructs a new, empty `ChainedHashSet<T>` with the default number of buckets.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordset::chained_hash::ChainedHashSet;
    ///
    /// let set: ChainedHashSet<u32> = ChainedHashSet::new();
    /// ```
    pub fn new() -> Self {
        Self::with_hasher(Self::get_hasher())
    }

    /// Constructs a new, empty `ChainedHashSet<T>` that uses the given hasher to hash values.
    ///
    /// # Examples
    ///
    /// ```
    /// use siphasher::sip::SipHasher;
    /// use wordset::chained_hash::ChainedHashSet;
    ///
    /// let mut set = ChainedHashSet::with_hasher(SipHasher::new_with_keys(0, 0));
    /// set.add(1);
    /// assert!(set.contains(&1));
    /// ```
    pub fn with_hasher(hasher: SipHasher) -> Self {
        ChainedHashSet {
            buckets: (0..DEFAULT_BUCKET_COUNT).map(|_| None).collect(),
            len: 0,
            hasher,
        }
    }

    fn get_bucket_index<V>(&self, value: &V) -> usize
    where
        V: Hash + ?Sized,
    {
        let sip = &mut self.hasher.clone();
        value.hash(sip);
        sip.finish() as usize % self.buckets.len()
    }

    fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    fn resize(&mut self)
    where
        T: Hash,
    {
        let new_bucket_count = self.buckets.len() * 2;
        let old_buckets = mem::replace(
            &mut self.buckets,
            (0..new_bucket_count).map(|_| None).collect(),
        );
        for mut chain in old_buckets {
            while let Some(mut node) = chain {
                chain = node.next.take();
                let index = self.get_bucket_index(&node.value);
                node.next = self.buckets[index].take();
                self.buckets[index] = Some(node);
            }
        }
    }

    /// Adds a value to the set. If the value already exists in the set, this function has no
    /// effect. When the ratio of values to buckets exceeds 0.8 after an insertion, the bucket
    /// array is doubled in size and every value is relinked into its new chain.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordset::chained_hash::ChainedHashSet;
    ///
    /// let mut set = ChainedHashSet::new();
    /// for value in 0..9 {
    ///     set.add(value);
    /// }
    ///
    /// assert_eq!(set.len(), 9);
    /// assert_eq!(set.bucket_count(), 20);
    /// ```
    pub fn add(&mut self, value: T)
    where
        T: Hash + Eq,
    {
        if self.contains(&value) {
            return;
        }

        let index = self.get_bucket_index(&value);
        let next = self.buckets[index].take();
        self.buckets[index] = Some(Box::new(Node { value, next }));
        self.len += 1;

        if self.load_factor() > MAX_LOAD_FACTOR {
            self.resize();
        }
    }

    /// Checks if a value exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordset::chained_hash::ChainedHashSet;
    ///
    /// let mut set = ChainedHashSet::new();
    /// set.add(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains<V>(&self, value: &V) -> bool
    where
        T: Borrow<V>,
        V: Hash + Eq + ?Sized,
    {
        let mut curr = &self.buckets[self.get_bucket_index(value)];
        while let Some(ref node) = curr {
            if node.value.borrow() == value {
                return true;
            }
            curr = &node.next;
        }
        false
    }

    /// Returns the number of values in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordset::chained_hash::ChainedHashSet;
    ///
    /// let mut set = ChainedHashSet::new();
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
    /// use wordset::chained_hash::ChainedHashSet;
    ///
    /// let set: ChainedHashSet<u32> = ChainedHashSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the set, removing all values. The number of buckets is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordset::chained_hash::ChainedHashSet;
    ///
    /// let mut set = ChainedHashSet::new();
    /// set.add(1);
    /// set.add(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        let bucket_count = self.buckets.len();
        self.buckets = (0..bucket_count).map(|_| None).collect();
        self.len = 0;
    }

    /// Returns the number of buckets in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordset::chained_hash::ChainedHashSet;
    ///
    /// let set: ChainedHashSet<u32> = ChainedHashSet::new();
    /// assert_eq!(set.bucket_count(), 10);
    /// ```
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the number of values that hashed to a particular bucket. Returns 0 if the index
    /// is out of the boundaries of the bucket array.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordset::chained_hash::ChainedHashSet;
    ///
    /// let mut set = ChainedHashSet::new();
    /// set.add(1);
    ///
    /// let len_sum = (0..set.bucket_count())
    ///     .map(|index| set.bucket_len(index))
    ///     .sum::<usize>();
    /// assert_eq!(len_sum, 1);
    /// assert_eq!(set.bucket_len(10), 0);
    /// ```
    pub fn bucket_len(&self, index: usize) -> usize {
        let mut curr = match self.buckets.get(index) {
            Some(chain) => chain,
            None => return 0,
        };
        let mut count = 0;
        while let Some(ref node) = curr {
            count += 1;
            curr = &node.next;
        }
        count
    }

    /// Checks if a value is stored in a particular bucket. Returns `false` if the index is out
    /// of the boundaries of the bucket array.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordset::chained_hash::ChainedHashSet;
    ///
    /// let mut set = ChainedHashSet::new();
    /// set.add(1);
    ///
    /// let index = (0..set.bucket_count()).find(|&index| set.bucket_contains(index, &1));
    /// assert!(index.is_some());
    /// assert!(!set.bucket_contains(set.bucket_count(), &1));
    /// ```
    pub fn bucket_contains<V>(&self, index: usize, value: &V) -> bool
    where
        T: Borrow<V>,
        V: Eq + ?Sized,
    {
        let mut curr = match self.buckets.get(index) {
            Some(chain) => chain,
            None => return false,
        };
        while let Some(ref node) = curr {
            if node.value.borrow() == value {
                return true;
            }
            curr = &node.next;
        }
        false
    }

    /// Returns an iterator over the set. The iterator will yield values in no particular order.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordset::chained_hash::ChainedHashSet;
    ///
    /// let mut set = ChainedHashSet::new();
    /// set.add(1);
    /// set.add(3);
    ///
    /// let mut values = set.iter().collect::<Vec<&u32>>();
    /// values.sort();
    /// assert_eq!(values, vec![&1, &3]);
    /// ```
    pub fn iter(&self) -> ChainedHashSetIter<'_, T> {
        ChainedHashSetIter {
            buckets: self.buckets.iter(),
            current: None,
        }
    }
}

impl<T> IntoIterator for ChainedHashSet<T> {
    type IntoIter = ChainedHashSetIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            buckets: self.buckets.into_iter(),
            current: None,
        }
    }
}

impl<'a, T> IntoIterator for &'a ChainedHashSet<T>
where
    T: 'a,
{
    type IntoIter = ChainedHashSetIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `ChainedHashSet<T>`.
///
/// This iterator traverses the buckets of the set and yields owned values in no particular
/// order.
pub struct ChainedHashSetIntoIter<T> {
    buckets: vec::IntoIter<Option<Box<Node<T>>>>,
    current: Option<Box<Node<T>>>,
}

impl<T> Iterator for ChainedHashSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(mut node) = self.current.take() {
                self.current = node.next.take();
                return Some(node.value);
            }
            match self.buckets.next() {
                Some(chain) => self.current = chain,
                None => return None,
            }
        }
    }
}

/// An iterator for `ChainedHashSet<T>`.
///
/// This iterator traverses the buckets of the set and yields immutable references in no
/// particular order.
pub struct ChainedHashSetIter<'a, T> {
    buckets: slice::Iter<'a, Option<Box<Node<T>>>>,
    current: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for ChainedHashSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.current {
                self.current = node.next.as_ref().map(|next| &**next);
                return Some(&node.value);
            }
            match self.buckets.next() {
                Some(chain) => self.current = chain.as_ref().map(|node| &**node),
                None => return None,
            }
        }
    }
}

impl<T> Default for ChainedHashSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::ChainedHashSet;
    use rand::Rng;
    use siphasher::sip::SipHasher;

    fn assert_invariants<T>(set: &ChainedHashSet<T>)
    where
        T: std::hash::Hash + Eq,
    {
        let len_sum = (0..set.bucket_count())
            .map(|index| set.bucket_len(index))
            .sum::<usize>();
        assert_eq!(len_sum, set.len());
        for value in set.iter() {
            assert!(set.bucket_contains(set.get_bucket_index(value), value));
        }
    }

    #[test]
    fn test_len_empty() {
        let set: ChainedHashSet<u32> = ChainedHashSet::new();
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_is_empty() {
        let set: ChainedHashSet<u32> = ChainedHashSet::new();
        assert!(set.is_empty());
    }

    #[test]
    fn test_add() {
        let mut set = ChainedHashSet::new();
        set.add(1);
        assert!(set.contains(&1));
        assert!(!set.contains(&0));
        assert_eq!(set.len(), 1);
        assert_invariants(&set);
    }

    #[test]
    fn test_add_duplicate() {
        let mut set = ChainedHashSet::new();
        set.add(1);
        set.add(1);
        assert!(set.contains(&1));
        assert_eq!(set.len(), 1);
        assert_invariants(&set);
    }

    #[test]
    fn test_contains_borrowed() {
        let mut set = ChainedHashSet::new();
        set.add(String::from("foo"));
        assert!(set.contains("foo"));
        assert!(!set.contains("bar"));
    }

    #[test]
    fn test_with_hasher() {
        let mut set = ChainedHashSet::with_hasher(SipHasher::new_with_keys(1, 2));
        set.add(1);
        assert!(set.contains(&1));
        assert_invariants(&set);
    }

    #[test]
    fn test_resize() {
        let mut set = ChainedHashSet::new();
        for value in 0..8 {
            set.add(value);
        }
        assert_eq!(set.bucket_count(), 10);

        set.add(8);
        assert_eq!(set.bucket_count(), 20);

        for value in 9..16 {
            set.add(value);
        }
        assert_eq!(set.bucket_count(), 20);

        set.add(16);
        assert_eq!(set.bucket_count(), 40);

        assert_eq!(set.len(), 17);
        for value in 0..17 {
            assert!(set.contains(&value));
        }
        assert_invariants(&set);
    }

    #[test]
    fn test_each_value_in_one_bucket() {
        let mut set = ChainedHashSet::new();
        for value in 0..50 {
            set.add(value);
        }

        for value in 0..50 {
            let buckets = (0..set.bucket_count())
                .filter(|&index| set.bucket_contains(index, &value))
                .count();
            assert_eq!(buckets, 1);
        }
        assert_invariants(&set);
    }

    #[test]
    fn test_out_of_range_bucket() {
        let mut set = ChainedHashSet::new();
        set.add(1);

        assert_eq!(set.bucket_len(set.bucket_count()), 0);
        assert!(!set.bucket_contains(set.bucket_count(), &1));
    }

    #[test]
    fn test_clear() {
        let mut set = ChainedHashSet::new();
        set.add(1);
        set.add(2);
        let bucket_count = set.bucket_count();
        set.clear();

        assert!(set.is_empty());
        assert!(!set.contains(&1));
        assert_eq!(set.bucket_count(), bucket_count);

        set.add(1);
        assert_eq!(set.len(), 1);
        assert_invariants(&set);
    }

    #[test]
    fn test_clone_independent() {
        let mut set = ChainedHashSet::new();
        set.add(1);
        set.add(2);

        let mut cloned = set.clone();
        cloned.add(3);

        assert_eq!(set.len(), 2);
        assert!(!set.contains(&3));
        assert_eq!(cloned.len(), 3);
        assert!(cloned.contains(&3));
        assert_invariants(&set);
        assert_invariants(&cloned);
    }

    #[test]
    fn test_iter() {
        let mut set = ChainedHashSet::new();
        set.add(1);
        set.add(5);
        set.add(3);

        let mut values = set.iter().collect::<Vec<&u32>>();
        values.sort();
        assert_eq!(values, vec![&1, &3, &5]);
    }

    #[test]
    fn test_into_iter() {
        let mut set = ChainedHashSet::new();
        set.add(1);
        set.add(5);
        set.add(3);

        let mut values = set.into_iter().collect::<Vec<u32>>();
        values.sort();
        assert_eq!(values, vec![1, 3, 5]);
    }

    #[test]
    fn test_random_against_std() {
        let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
        let mut set = ChainedHashSet::new();
        let mut expected = std::collections::HashSet::new();

        for _ in 0..1_000 {
            let value = rng.gen_range(0, 500);
            set.add(value);
            expected.insert(value);
        }

        assert_eq!(set.len(), expected.len());
        for value in &expected {
            assert!(set.contains(value));
        }

        let mut values = set.iter().cloned().collect::<Vec<u32>>();
        let mut expected_values = expected.into_iter().collect::<Vec<u32>>();
        values.sort();
        expected_values.sort();
        assert_eq!(values, expected_values);
        assert_invariants(&set);
    }
}
