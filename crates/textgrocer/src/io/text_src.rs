//! # Delimited Text Corpus Reading
//!
//! One record per line: ``label<delimiter>text``.
//!
//! Lines are split on every occurrence of the delimiter; so a line with no
//! delimiter, or with the delimiter inside its text, yields a record which
//! is not exactly 2 fields, and which conversion skips as malformed.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::errors::{GrocerError, GrocerResult};

/// The default field delimiter.
pub const DEFAULT_DELIMITER: &str = "\t";

/// Split one line into fields on every occurrence of `delimiter`.
///
/// A trailing ``\r`` is dropped. An empty `delimiter` yields the whole line
/// as a single field.
pub fn split_record(
    line: &str,
    delimiter: &str,
) -> Vec<String> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if delimiter.is_empty() {
        return vec![line.to_string()];
    }
    line.split(delimiter).map(str::to_string).collect()
}

/// Read every line of `reader` as a delimited record.
pub fn read_text_src<R: BufRead>(
    reader: R,
    delimiter: &str,
) -> GrocerResult<Vec<Vec<String>>> {
    let mut records = Vec::new();
    for line in reader.lines() {
        records.push(split_record(&line?, delimiter));
    }
    log::debug!("read {} text record(s)", records.len());
    Ok(records)
}

/// Read every line of the file at `path` as a delimited record.
pub fn read_text_src_path<P: AsRef<Path>>(
    path: P,
    delimiter: &str,
) -> GrocerResult<Vec<Vec<String>>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => GrocerError::MissingResource {
            path: path.to_path_buf(),
        },
        _ => err.into(),
    })?;
    read_text_src(BufReader::new(file), delimiter)
}
