//! Hash collection aliases — FxHash everywhere, std hasher nowhere.

pub use rustc_hash::{FxHashMap, FxHashSet};
