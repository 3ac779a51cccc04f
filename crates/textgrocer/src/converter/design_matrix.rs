//! # Sparse Design Matrix

use sprs::CsMat;

use crate::{features::SparseFeatureMap, types::FeatureCount};

/// Row-major (CSR) sparse count matrix.
///
/// Rows are documents in corpus order; columns are feature ids; entries
/// are counts. Column indices within each row are strictly increasing.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignMatrix {
    inner: CsMat<FeatureCount>,
}

impl DesignMatrix {
    /// The ``(rows, cols)`` shape.
    pub fn shape(&self) -> (usize, usize) {
        self.inner.shape()
    }

    /// The number of rows (documents).
    pub fn rows(&self) -> usize {
        self.inner.rows()
    }

    /// The number of columns (feature ids, including the placeholder).
    pub fn cols(&self) -> usize {
        self.inner.cols()
    }

    /// The number of stored entries.
    pub fn nnz(&self) -> usize {
        self.inner.nnz()
    }

    /// The count at ``(row, col)``; `0` for absent entries.
    pub fn get(
        &self,
        row: usize,
        col: usize,
    ) -> FeatureCount {
        self.inner.get(row, col).copied().unwrap_or(0)
    }

    /// The ``(col, count)`` entries of `row`, in column order.
    ///
    /// ## Panics
    /// If `row` is out of bounds.
    pub fn row(
        &self,
        row: usize,
    ) -> Vec<(usize, FeatureCount)> {
        self.inner
            .outer_view(row)
            .map(|v| v.iter().map(|(col, &count)| (col, count)).collect())
            .unwrap_or_else(|| panic!("row {row} out of bounds for {} rows", self.rows()))
    }

    /// Iterate over rows as ``(col, count)`` entry lists.
    pub fn iter_rows(&self) -> impl Iterator<Item = Vec<(usize, FeatureCount)>> + '_ {
        self.inner
            .outer_iterator()
            .map(|v| v.iter().map(|(col, &count)| (col, count)).collect())
    }

    /// Borrow the underlying CSR matrix.
    pub fn as_csr(&self) -> &CsMat<FeatureCount> {
        &self.inner
    }

    /// Release the underlying CSR matrix.
    pub fn into_csr(self) -> CsMat<FeatureCount> {
        self.inner
    }

    /// Move every column `c` to `old_to_new[c]`.
    ///
    /// ## Panics
    /// If `old_to_new` is not a permutation of `0..cols`.
    pub fn permute_columns(
        &self,
        old_to_new: &[usize],
    ) -> Self {
        assert_eq!(
            old_to_new.len(),
            self.cols(),
            "column permutation length does not match column count"
        );

        let mut builder = MatrixBuilder::with_capacity(self.rows(), self.nnz());
        for row in self.inner.outer_iterator() {
            builder.push_entries(row.iter().map(|(col, &count)| (old_to_new[col], count)));
        }
        builder.finish(self.cols())
    }
}

/// Row-by-row [`DesignMatrix`] assembly.
///
/// Each pushed row is one document; entries are grouped by row, and column
/// indices are sorted within each row, so rows may be pushed with entries in
/// any order.
#[derive(Debug, Clone)]
pub struct MatrixBuilder {
    indptr: Vec<usize>,
    indices: Vec<usize>,
    data: Vec<FeatureCount>,
    max_col: Option<usize>,
}

impl Default for MatrixBuilder {
    fn default() -> Self {
        Self::with_capacity(0, 0)
    }
}

impl MatrixBuilder {
    /// Build an empty builder, pre-allocating for `rows` and `nnz` entries.
    pub fn with_capacity(
        rows: usize,
        nnz: usize,
    ) -> Self {
        let mut indptr = Vec::with_capacity(rows + 1);
        indptr.push(0);
        Self {
            indptr,
            indices: Vec::with_capacity(nnz),
            data: Vec::with_capacity(nnz),
            max_col: None,
        }
    }

    /// The number of pushed rows.
    pub fn rows(&self) -> usize {
        self.indptr.len() - 1
    }

    /// Push one document's feature map as the next row.
    pub fn push_row(
        &mut self,
        feat: &SparseFeatureMap,
    ) {
        self.push_entries(feat.iter().map(|(&id, &count)| (id as usize, count)));
    }

    /// Push ``(col, count)`` entries as the next row.
    ///
    /// Zero counts are dropped. Columns must be distinct.
    pub fn push_entries<I>(
        &mut self,
        entries: I,
    ) where
        I: IntoIterator<Item = (usize, FeatureCount)>,
    {
        let mut row: Vec<(usize, FeatureCount)> =
            entries.into_iter().filter(|&(_, count)| count > 0).collect();
        row.sort_unstable_by_key(|&(col, _)| col);

        if let Some(&(col, _)) = row.last() {
            self.max_col = self.max_col.max(Some(col));
        }
        for (col, count) in row {
            self.indices.push(col);
            self.data.push(count);
        }
        self.indptr.push(self.indices.len());
    }

    /// Finish the matrix with `cols` columns.
    ///
    /// ## Panics
    /// If a pushed column is `>= cols`.
    pub fn finish(
        self,
        cols: usize,
    ) -> DesignMatrix {
        if let Some(max_col) = self.max_col {
            assert!(max_col < cols, "column {max_col} out of bounds for {cols} columns");
        }
        let shape = (self.rows(), cols);
        DesignMatrix {
            inner: CsMat::new(shape, self.indptr, self.indices, self.data),
        }
    }
}
