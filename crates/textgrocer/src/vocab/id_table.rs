//! # Growing ``{ K -> id }`` Table

use core::{borrow::Borrow, hash::Hash};

use crate::types::GrocerHashMap;

/// A monotonically growing ``{ K -> u32 }`` table, with its reverse array.
///
/// Ids are dense: the first `reserved` ids are placeholders which never
/// hold a key, and every newly observed key takes the next id, which is the
/// current table size.
///
/// The reverse array is maintained on every insertion, so reverse lookups
/// can never observe a stale mapping.
///
/// ## Style Hints
/// Instance names should prefer `table`, or `<domain>_table`.
#[derive(Debug, Clone)]
pub struct IdTable<K> {
    /// Map of ``{ K -> id }``.
    ids: GrocerHashMap<K, u32>,

    /// Array of ``[ id -> K ]``; `None` for the reserved slots.
    keys: Vec<Option<K>>,

    /// Number of leading placeholder ids.
    reserved: usize,
}

impl<K> IdTable<K>
where
    K: Clone + Eq + Hash,
{
    /// Build an empty table with `reserved` leading placeholder ids.
    pub fn new(reserved: usize) -> Self {
        Self {
            ids: Default::default(),
            keys: (0..reserved).map(|_| None).collect(),
            reserved,
        }
    }

    /// Rebuild a table from its reverse array.
    ///
    /// The first `reserved` slots must be `None`, all others must be
    /// `Some` and distinct.
    ///
    /// ## Returns
    /// The table, or a description of the first violated constraint.
    pub fn from_reverse(
        reserved: usize,
        keys: Vec<Option<K>>,
    ) -> Result<Self, String> {
        if keys.len() < reserved {
            return Err(format!(
                "expected {reserved} reserved slot(s), found an array of length {}",
                keys.len()
            ));
        }

        let mut ids: GrocerHashMap<K, u32> = Default::default();
        ids.reserve(keys.len() - reserved);

        for (idx, slot) in keys.iter().enumerate() {
            match (idx < reserved, slot) {
                (true, None) => {}
                (true, Some(_)) => {
                    return Err(format!("reserved slot {idx} holds a key"));
                }
                (false, None) => {
                    return Err(format!("slot {idx} is empty"));
                }
                (false, Some(key)) => {
                    if ids.insert(key.clone(), idx as u32).is_some() {
                        return Err(format!("slot {idx} duplicates an earlier key"));
                    }
                }
            }
        }

        Ok(Self {
            ids,
            keys,
            reserved,
        })
    }

    /// The number of ids, including the reserved placeholders.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// The number of observed keys.
    pub fn num_keys(&self) -> usize {
        self.ids.len()
    }

    /// The number of leading placeholder ids.
    pub fn reserved(&self) -> usize {
        self.reserved
    }

    /// Return the id of `key`, allocating the next id on first sight.
    pub fn assign_or_get<Q>(
        &mut self,
        key: &Q,
    ) -> u32
    where
        K: Borrow<Q>,
        Q: ToOwned<Owned = K> + Eq + Hash + ?Sized,
    {
        if let Some(&id) = self.ids.get(key) {
            return id;
        }

        let id = self.keys.len() as u32;
        let key = key.to_owned();
        self.keys.push(Some(key.clone()));
        self.ids.insert(key, id);
        id
    }

    /// Return the id of `key`, if it has been observed.
    pub fn get<Q>(
        &self,
        key: &Q,
    ) -> Option<u32>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.ids.get(key).copied()
    }

    /// Return the key for `id`; `None` for placeholders and unassigned ids.
    pub fn key(
        &self,
        id: u32,
    ) -> Option<&K> {
        self.keys.get(id as usize).and_then(Option::as_ref)
    }

    /// The reverse ``[ id -> K ]`` array.
    pub fn reverse(&self) -> &[Option<K>] {
        &self.keys
    }

    /// Iterate over ``(key, id)`` pairs, in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, u32)> + '_ {
        self.keys
            .iter()
            .enumerate()
            .filter_map(|(id, key)| key.as_ref().map(|k| (k, id as u32)))
    }
}

impl<K> Default for IdTable<K>
where
    K: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new(0)
    }
}

impl<K> PartialEq for IdTable<K>
where
    K: Eq + Hash,
{
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        // The forward map is derived from the reverse array.
        self.reserved == other.reserved && self.keys == other.keys
    }
}

impl<K> IdTable<K>
where
    K: Clone + Eq + Hash + Ord,
{
    /// Renumber all keys so that ids follow key order.
    ///
    /// Placeholders keep their ids; the smallest key takes the first
    /// non-reserved id.
    ///
    /// ## Returns
    /// The ``[ old id -> new id ]`` permutation.
    pub fn sort_ids(&mut self) -> Vec<usize> {
        let mut order: Vec<(K, u32)> = self.iter().map(|(k, id)| (k.clone(), id)).collect();
        order.sort_unstable();

        let mut old_to_new: Vec<usize> = (0..self.keys.len()).collect();
        for (offset, (key, old_id)) in order.into_iter().enumerate() {
            let new_id = self.reserved + offset;
            old_to_new[old_id as usize] = new_id;
            self.keys[new_id] = Some(key.clone());
            self.ids.insert(key, new_id as u32);
        }

        old_to_new
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_occurrence_ids() {
        let mut table: IdTable<String> = IdTable::new(1);
        assert_eq!(table.len(), 1);
        assert_eq!(table.num_keys(), 0);

        assert_eq!(table.assign_or_get("b"), 1);
        assert_eq!(table.assign_or_get("a"), 2);
        assert_eq!(table.assign_or_get("b"), 1);
        assert_eq!(table.len(), 3);

        assert_eq!(table.get("a"), Some(2));
        assert_eq!(table.get("c"), None);
        assert_eq!(table.key(0), None);
        assert_eq!(table.key(2).map(String::as_str), Some("a"));
        assert_eq!(table.key(3), None);
    }

    #[test]
    fn test_reverse_roundtrip() {
        let mut table: IdTable<String> = IdTable::new(1);
        table.assign_or_get("x");
        table.assign_or_get("y");

        let reverse = table.reverse().to_vec();
        assert_eq!(reverse, vec![None, Some("x".to_string()), Some("y".to_string())]);

        let rebuilt = IdTable::from_reverse(1, reverse).unwrap();
        assert_eq!(rebuilt, table);
    }

    #[test]
    fn test_from_reverse_rejects_bad_arrays() {
        let dup = vec![None, Some("x".to_string()), Some("x".to_string())];
        assert!(IdTable::from_reverse(1, dup).is_err());

        let hole = vec![None, None, Some("x".to_string())];
        assert!(IdTable::from_reverse(1, hole).is_err());

        let filled_placeholder = vec![Some("x".to_string())];
        assert!(IdTable::from_reverse(1, filled_placeholder).is_err());

        assert!(IdTable::<String>::from_reverse(1, vec![]).is_err());
        assert!(IdTable::<String>::from_reverse(0, vec![]).is_ok());
    }

    #[test]
    fn test_sort_ids() {
        let mut table: IdTable<u32> = IdTable::new(1);
        table.assign_or_get(&30u32);
        table.assign_or_get(&10u32);
        table.assign_or_get(&20u32);

        let old_to_new = table.sort_ids();
        assert_eq!(old_to_new, vec![0, 3, 1, 2]);

        assert_eq!(table.get(&10u32), Some(1));
        assert_eq!(table.get(&20u32), Some(2));
        assert_eq!(table.get(&30u32), Some(3));
        assert_eq!(
            table.reverse().to_vec(),
            vec![None, Some(10u32), Some(20), Some(30)]
        );

        // Sorting is idempotent.
        assert_eq!(table.sort_ids(), vec![0, 1, 2, 3]);
    }
}
