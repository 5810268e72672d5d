use std::hash::BuildHasherDefault;
use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHasher;


/// Use indexmap for deterministic iteration order and rustc_hash for fast hashing
pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// Set counterpart of [`FxIndexMap`], used for plain visited sets
pub type FxIndexSet<T> = IndexSet<T, BuildHasherDefault<FxHasher>>;
