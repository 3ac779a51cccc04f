//! # Common Types

/// Id of a distinct token string; `0` is the reserved placeholder.
pub type TokenId = u32;

/// Id of a distinct unigram/bigram key; `0` is the reserved placeholder.
pub type FeatureId = u32;

/// Id of a distinct class label; zero-based, no placeholder.
pub type LabelId = u32;

/// The count type of sparse features.
pub type FeatureCount = u32;

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type GrocerHashMap<K, V> = ahash::AHashMap<K, V>;
    } else if #[cfg(feature = "foldhash")] {
        /// Type Alias for hash maps in this crate.
        pub type GrocerHashMap<K, V> = foldhash::HashMap<K, V>;
    } else {
        /// Type Alias for hash maps in this crate.
        pub type GrocerHashMap<K, V> = std::collections::HashMap<K, V>;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_map_alias() {
        let mut map: GrocerHashMap<&str, TokenId> = Default::default();
        map.insert("good", 1);
        *map.entry("good").or_default() += 1;

        assert_eq!(map.get("good"), Some(&2));
        assert_eq!(map.len(), 1);
    }
}
