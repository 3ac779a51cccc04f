//! # LIBSVM / svmlight Export
//!
//! One line per matrix row:
//! ```terminaloutput
//! <label> <col>:<count> <col>:<count> ...
//! ```
//! Columns are ascending; absent (zero) entries are omitted. Column `0` is
//! the placeholder and is always empty, so written columns are 1-based.

use std::io::Write;

use crate::{
    converter::DesignMatrix,
    errors::GrocerResult,
    types::{FeatureCount, LabelId},
};

/// Write one svmlight line.
pub fn write_svmlight_row<W, I>(
    writer: &mut W,
    label: LabelId,
    entries: I,
) -> GrocerResult<()>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = (usize, FeatureCount)>,
{
    write!(writer, "{label}")?;
    for (col, count) in entries {
        write!(writer, " {col}:{count}")?;
    }
    writeln!(writer)?;
    Ok(())
}

/// Write every row of `matrix`, labeled by `labels`, as svmlight lines.
///
/// ## Panics
/// If `labels` and `matrix` differ in row count.
pub fn write_svmlight<W: Write + ?Sized>(
    matrix: &DesignMatrix,
    labels: &[LabelId],
    writer: &mut W,
) -> GrocerResult<()> {
    assert_eq!(
        labels.len(),
        matrix.rows(),
        "label count does not match matrix row count"
    );

    for (row, &label) in matrix.iter_rows().zip(labels) {
        write_svmlight_row(writer, label, row)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::MatrixBuilder;

    #[test]
    fn test_write_svmlight() {
        let mut builder = MatrixBuilder::default();
        builder.push_entries([(2, 1), (1, 2)]);
        builder.push_entries(std::iter::empty());
        builder.push_entries([(3, 1)]);
        let matrix = builder.finish(4);

        let mut buf: Vec<u8> = Vec::new();
        write_svmlight(&matrix, &[0, 0, 1], &mut buf).unwrap();

        assert_eq!(String::from_utf8(buf).unwrap(), "0 1:2 2:1\n0\n1 3:1\n");
    }

    #[test]
    #[should_panic]
    fn test_label_mismatch() {
        let matrix = MatrixBuilder::default().finish(1);
        let mut buf: Vec<u8> = Vec::new();
        let _ = write_svmlight(&matrix, &[0], &mut buf);
    }
}
