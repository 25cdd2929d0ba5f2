use rustc_hash::{FxHashMap, FxHashSet};

#[cfg(not(feature = "single-precision"))]
pub type Real = f64;

#[cfg(feature = "single-precision")]
pub type Real = f32;

pub type HashMap<K, V> = FxHashMap<K, V>;

pub type HashSet<K> = FxHashSet<K>;
