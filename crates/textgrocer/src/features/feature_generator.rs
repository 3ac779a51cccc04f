//! # Unigram + Bigram Feature Generator

use std::path::Path;

use crate::{
    errors::GrocerResult,
    features::NGram,
    io::snapshot::{load_reverse_array_path, save_reverse_array_path},
    types::{FeatureCount, FeatureId, GrocerHashMap, TokenId},
    vocab::IdTable,
};

/// One document's ``{ FeatureId -> count }`` vector; absent ids count 0.
pub type SparseFeatureMap = GrocerHashMap<FeatureId, FeatureCount>;

/// Generates sparse n-gram count features over token id sequences.
///
/// Owns the n-gram table: a single ``{ NGram -> FeatureId }`` id space shared
/// by unigram and bigram keys, with a reserved placeholder id `0`.
///
/// ## Style Hints
/// Instance names should prefer `feat_gen`.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureGenerator {
    table: IdTable<NGram>,
}

impl Default for FeatureGenerator {
    fn default() -> Self {
        Self {
            table: IdTable::new(Self::RESERVED),
        }
    }
}

impl FeatureGenerator {
    /// The number of leading placeholder ids.
    pub const RESERVED: usize = 1;

    /// Rebuild a generator from its reverse ``[ id -> NGram ]`` array.
    ///
    /// ## Returns
    /// The generator, or a description of the violated table constraint.
    pub fn from_reverse(ngrams: Vec<Option<NGram>>) -> Result<Self, String> {
        Ok(Self {
            table: IdTable::from_reverse(Self::RESERVED, ngrams)?,
        })
    }

    /// The number of feature ids, including the placeholder.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// The number of distinct observed n-grams.
    pub fn num_ngrams(&self) -> usize {
        self.table.num_keys()
    }

    /// Return the feature id of `ngram`, if it has been observed.
    pub fn get(
        &self,
        ngram: &NGram,
    ) -> Option<FeatureId> {
        self.table.get(ngram)
    }

    /// Return the n-gram key of feature `id`.
    pub fn ngram(
        &self,
        id: FeatureId,
    ) -> Option<NGram> {
        self.table.key(id).copied()
    }

    /// Count unigram features of `tokens`, growing the table as needed.
    pub fn unigram(
        &mut self,
        tokens: &[TokenId],
    ) -> SparseFeatureMap {
        let mut feat = SparseFeatureMap::default();
        for &x in tokens {
            self.count(&mut feat, NGram::unigram(x));
        }
        feat
    }

    /// Count unigram and adjacent-pair bigram features of `tokens`,
    /// growing the table as needed.
    pub fn bigram(
        &mut self,
        tokens: &[TokenId],
    ) -> SparseFeatureMap {
        let mut feat = self.unigram(tokens);
        for pair in tokens.windows(2) {
            self.count(&mut feat, NGram::bigram(pair[0], pair[1]));
        }
        feat
    }

    fn count(
        &mut self,
        feat: &mut SparseFeatureMap,
        ngram: NGram,
    ) {
        let id = self.table.assign_or_get(&ngram);
        *feat.entry(id).or_default() += 1;
    }

    /// Renumber the table so that feature ids follow [`NGram`] order.
    ///
    /// ## Returns
    /// The ``[ old id -> new id ]`` permutation.
    pub fn sort_features(&mut self) -> Vec<usize> {
        self.table.sort_ids()
    }

    /// The reverse ``[ id -> NGram ]`` array.
    pub fn reverse(&self) -> &[Option<NGram>] {
        self.table.reverse()
    }

    /// Save the reverse array to `path`.
    pub fn save_path<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> GrocerResult<()> {
        save_reverse_array_path(self.reverse(), path)
    }

    /// Replace this generator's table with the one saved at `path`.
    pub fn load_path<P: AsRef<Path>>(
        &mut self,
        path: P,
    ) -> GrocerResult<()> {
        *self = load_reverse_array_path(path, Self::from_reverse)?;
        log::debug!("loaded feature table: {} n-grams", self.num_ngrams());
        Ok(())
    }
}
