//! Reading and writing sprite collections on disk.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::SortError;
use crate::record::SpriteCollection;

/// Reads a whole JSON file and parses it as a sprite collection.
///
/// The file is read completely and closed before parsing starts.
pub fn read_collection(path: &Path) -> Result<SpriteCollection, SortError> {
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => SortError::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => SortError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;
    SpriteCollection::from_json(&content)
}

/// Writes a collection as JSON in a single call, creating parent directories.
pub fn write_collection(
    path: &Path,
    collection: &SpriteCollection,
    pretty: bool,
) -> Result<(), SortError> {
    let json = if pretty {
        collection.to_json_pretty()?
    } else {
        collection.to_json()?
    };

    let write_err = |source: std::io::Error| SortError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, json).map_err(write_err)
}
