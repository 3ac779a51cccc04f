//! # Token ``{ String -> TokenId }`` Vocabulary

use std::path::Path;

use crate::{
    errors::GrocerResult,
    io::snapshot::{load_reverse_array_path, save_reverse_array_path},
    types::TokenId,
    vocab::IdTable,
};

/// Token vocabulary; grows on first sight of each token.
///
/// Id `0` is a reserved placeholder which never names a token;
/// this keeps the derived feature space compatible with 1-based consumers.
///
/// ## Style Hints
/// Instance names should prefer `vocab`, or `text_prep`.
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary {
    table: IdTable<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            table: IdTable::new(Self::RESERVED),
        }
    }
}

impl Vocabulary {
    /// The number of leading placeholder ids.
    pub const RESERVED: usize = 1;

    /// Rebuild a vocabulary from its reverse ``[ id -> token ]`` array.
    ///
    /// ## Returns
    /// The vocabulary, or a description of the violated table constraint.
    pub fn from_reverse(tokens: Vec<Option<String>>) -> Result<Self, String> {
        Ok(Self {
            table: IdTable::from_reverse(Self::RESERVED, tokens)?,
        })
    }

    /// The number of ids, including the placeholder.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// The number of distinct observed tokens.
    pub fn num_tokens(&self) -> usize {
        self.table.num_keys()
    }

    /// Return the id of `token`, allocating the next id on first sight.
    pub fn assign_or_get(
        &mut self,
        token: &str,
    ) -> TokenId {
        self.table.assign_or_get(token)
    }

    /// Map a token sequence to ids, growing the vocabulary as needed.
    pub fn encode<I, S>(
        &mut self,
        tokens: I,
    ) -> Vec<TokenId>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tokens
            .into_iter()
            .map(|tok| self.assign_or_get(tok.as_ref()))
            .collect()
    }

    /// Return the id of `token`, if it has been observed.
    pub fn get(
        &self,
        token: &str,
    ) -> Option<TokenId> {
        self.table.get(token)
    }

    /// Return the token for `id`.
    pub fn token(
        &self,
        id: TokenId,
    ) -> Option<&str> {
        self.table.key(id).map(String::as_str)
    }

    /// The reverse ``[ id -> token ]`` array.
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

    /// Replace this vocabulary with the one saved at `path`.
    pub fn load_path<P: AsRef<Path>>(
        &mut self,
        path: P,
    ) -> GrocerResult<()> {
        *self = load_reverse_array_path(path, Self::from_reverse)?;
        log::debug!("loaded vocabulary: {} tokens", self.num_tokens());
        Ok(())
    }
}
