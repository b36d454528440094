//! Set data structures for word lexicons with a spelling-suggestion generator built on them.

pub mod avl_tree;
pub mod chained_hash;
pub mod set;
pub mod spell;
