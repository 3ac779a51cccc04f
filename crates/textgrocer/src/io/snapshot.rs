//! # Snapshot Table IO
//!
//! Each growing table is persisted as its reverse array, as a JSON list:
//! ```terminaloutput
//! [null, "good", "bad"]
//! ```
//! Placeholder slots are `null`; slot `i` holds the key with id `i`.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use serde::{Serialize, de::DeserializeOwned};

use crate::errors::{GrocerError, GrocerResult};

/// Resource name of the token vocabulary.
pub const TEXT_PREP_RESOURCE: &str = "text_prep.json";

/// Resource name of the n-gram feature table.
pub const FEAT_GEN_RESOURCE: &str = "feat_gen.json";

/// Resource name of the class label index.
pub const CLASS_MAP_RESOURCE: &str = "class_map.json";

/// Write a reverse array to a [`Write`] writer.
pub fn write_reverse_array<K, W>(
    keys: &[Option<K>],
    writer: &mut W,
) -> GrocerResult<()>
where
    K: Serialize,
    W: Write,
{
    serde_json::to_writer(&mut *writer, keys)?;
    writeln!(writer)?;
    Ok(())
}

/// Read a reverse array from a [`Read`] reader.
pub fn read_reverse_array<K, R>(reader: R) -> GrocerResult<Vec<Option<K>>>
where
    K: DeserializeOwned,
    R: Read,
{
    Ok(serde_json::from_reader(reader)?)
}

/// Save a reverse array to `path`.
pub fn save_reverse_array_path<K, P>(
    keys: &[Option<K>],
    path: P,
) -> GrocerResult<()>
where
    K: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_reverse_array(keys, &mut writer)?;
    writer.flush()?;

    log::debug!("saved {} slots to {}", keys.len(), path.display());
    Ok(())
}

/// Load a reverse array from `path`, and rebuild a table from it.
///
/// ## Arguments
/// * `path` - the resource path.
/// * `build` - rebuilds the table; reports a violated table constraint as `Err`.
///
/// ## Returns
/// The table; [`GrocerError::MissingResource`] if `path` does not exist;
/// [`GrocerError::CorruptResource`] if the content is not a valid table.
pub fn load_reverse_array_path<K, T, P, F>(
    path: P,
    build: F,
) -> GrocerResult<T>
where
    K: DeserializeOwned,
    P: AsRef<Path>,
    F: FnOnce(Vec<Option<K>>) -> Result<T, String>,
{
    let path = path.as_ref();
    let corrupt = |reason: String| GrocerError::CorruptResource {
        resource: path.display().to_string(),
        reason,
    };

    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(GrocerError::MissingResource {
                path: path.to_path_buf(),
            });
        }
        Err(err) => return Err(err.into()),
    };

    let keys = read_reverse_array(BufReader::new(file)).map_err(|err| match err {
        GrocerError::Json(err) if !err.is_io() => corrupt(err.to_string()),
        err => err,
    })?;

    log::debug!("read {} slots from {}", keys.len(), path.display());
    build(keys).map_err(corrupt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_read() {
        let keys = vec![None, Some("good".to_string()), Some("bad".to_string())];

        let mut buf: Vec<u8> = Vec::new();
        write_reverse_array(&keys, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf.clone()).unwrap(), "[null,\"good\",\"bad\"]\n");

        let loaded: Vec<Option<String>> = read_reverse_array(buf.as_slice()).unwrap();
        assert_eq!(loaded, keys);
    }

    #[test]
    fn test_load_missing() {
        let dir = tempdir::TempDir::new("snapshot_test").unwrap();
        let path = dir.path().join("nope.json");

        let res = load_reverse_array_path(&path, |keys: Vec<Option<String>>| Ok(keys));
        assert!(matches!(res, Err(GrocerError::MissingResource { .. })));
    }

    #[test]
    fn test_load_corrupt() {
        let dir = tempdir::TempDir::new("snapshot_test").unwrap();

        let path = dir.path().join("garbage.json");
        std::fs::write(&path, "not json").unwrap();
        let res = load_reverse_array_path(&path, |keys: Vec<Option<String>>| Ok(keys));
        assert!(matches!(res, Err(GrocerError::CorruptResource { .. })));

        let path = dir.path().join("invalid.json");
        std::fs::write(&path, "[null, \"a\", \"a\"]").unwrap();
        let res = load_reverse_array_path(&path, |keys: Vec<Option<String>>| {
            crate::vocab::IdTable::from_reverse(1, keys)
        });
        assert!(matches!(res, Err(GrocerError::CorruptResource { .. })));
    }
}
