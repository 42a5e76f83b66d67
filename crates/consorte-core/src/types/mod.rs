//! Data structures for Consorte.
//! FxHashMap, SmallVec, and the decimal money scalar.

pub mod collections;
pub mod money;

pub use collections::{FxHashMap, FxHashSet};
pub use money::Money;
