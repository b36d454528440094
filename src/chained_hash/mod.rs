//! Separately-chained hash table where each bucket holds a singly-linked chain of values.

mod set;

pub use self::set::ChainedHashSet;
