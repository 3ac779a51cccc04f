//! # Class Label ``{ String -> LabelId }`` Index

use std::path::Path;

use crate::{
    errors::{GrocerError, GrocerResult},
    io::snapshot::{load_reverse_array_path, save_reverse_array_path},
    types::LabelId,
    vocab::IdTable,
};

/// The name returned for [`NOT_IN_TRAINING_ID`].
pub const NOT_IN_TRAINING: &str = "**not in training**";

/// Class id sentinel for "not observed during training".
pub const NOT_IN_TRAINING_ID: i64 = -1;

/// Class label index; zero-based, grows on first sight of each label.
///
/// ## Style Hints
/// Instance names should prefer `labels`, or `class_map`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelIndex {
    table: IdTable<String>,
}

impl LabelIndex {
    /// Rebuild an index from its reverse ``[ id -> label ]`` array.
    ///
    /// ## Returns
    /// The index, or a description of the violated table constraint.
    pub fn from_reverse(labels: Vec<Option<String>>) -> Result<Self, String> {
        Ok(Self {
            table: IdTable::from_reverse(0, labels)?,
        })
    }

    /// The number of distinct labels.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if no label has been observed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the id of `label`, allocating the next id on first sight.
    pub fn to_id(
        &mut self,
        label: &str,
    ) -> LabelId {
        self.table.assign_or_get(label)
    }

    /// Return the id of `label`, if it has been observed.
    pub fn get_id(
        &self,
        label: &str,
    ) -> Option<LabelId> {
        self.table.get(label)
    }

    /// Return the label for `id`.
    ///
    /// [`NOT_IN_TRAINING_ID`] maps to [`NOT_IN_TRAINING`], regardless of contents.
    ///
    /// ## Returns
    /// The label, or [`GrocerError::UnknownClassId`] for any other id outside the index.
    pub fn to_name(
        &self,
        id: i64,
    ) -> GrocerResult<&str> {
        if id == NOT_IN_TRAINING_ID {
            return Ok(NOT_IN_TRAINING);
        }

        u32::try_from(id)
            .ok()
            .and_then(|id| self.table.key(id))
            .map(String::as_str)
            .ok_or(GrocerError::UnknownClassId {
                id,
                num_classes: self.len(),
            })
    }

    /// The reverse ``[ id -> label ]`` array.
    pub fn reverse(&self) -> &[Option<String>] {
        self.table.reverse()
    }

    /// Save the reverse array to `path`.
    pub fn save_path<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> GrocerResult<()> {
        save_reverse_array_path(self.reverse(), path)
    }

    /// Replace this index with the one saved at `path`.
    pub fn load_path<P: AsRef<Path>>(
        &mut self,
        path: P,
    ) -> GrocerResult<()> {
        *self = load_reverse_array_path(path, Self::from_reverse)?;
        log::debug!("loaded label index: {} classes", self.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_id() {
        let mut labels = LabelIndex::default();
        assert!(labels.is_empty());

        assert_eq!(labels.to_id("pos"), 0);
        assert_eq!(labels.to_id("neg"), 1);
        assert_eq!(labels.to_id("pos"), 0);
        assert_eq!(labels.len(), 2);
        assert_eq!(labels.get_id("neg"), Some(1));
        assert_eq!(labels.get_id("meh"), None);
    }

    #[test]
    fn test_to_name() {
        let mut labels = LabelIndex::default();
        assert_eq!(labels.to_name(-1).unwrap(), NOT_IN_TRAINING);

        labels.to_id("pos");
        assert_eq!(labels.to_name(0).unwrap(), "pos");

        // Lookups after growth see the new label.
        labels.to_id("neg");
        assert_eq!(labels.to_name(1).unwrap(), "neg");
        assert_eq!(labels.to_name(-1).unwrap(), NOT_IN_TRAINING);

        match labels.to_name(2) {
            Err(GrocerError::UnknownClassId { id, num_classes }) => {
                assert_eq!(id, 2);
                assert_eq!(num_classes, 2);
            }
            other => panic!("unexpected: {other:?}"),
        }
        assert!(labels.to_name(-2).is_err());
    }

    #[test]
    fn test_save_load_empty() {
        let dir = tempdir::TempDir::new("labels_test").unwrap();
        let path = dir.path().join("class_map.json");

        LabelIndex::default().save_path(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap().trim(), "[]");

        let mut loaded = LabelIndex::default();
        loaded.to_id("stale");
        loaded.load_path(&path).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_save_load() {
        let dir = tempdir::TempDir::new("labels_test").unwrap();
        let path = dir.path().join("class_map.json");

        let mut labels = LabelIndex::default();
        labels.to_id("sports");
        labels.to_id("finance");
        labels.save_path(&path).unwrap();

        let mut loaded = LabelIndex::default();
        loaded.load_path(&path).unwrap();
        assert_eq!(loaded, labels);
        assert_eq!(loaded.to_name(1).unwrap(), "finance");
    }
}
