//! Save-game serialization using `MessagePack`.
//!
//! Progress is encoded with named fields, so a save written by one build
//! still loads after fields are added with defaults.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use commandbox_foundation::{Error, ErrorKind, Result};

use crate::session::SaveState;

/// Serializes progress to bytes.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(state: &SaveState) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(state)
        .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
}

/// Deserializes progress from bytes.
///
/// # Errors
///
/// Returns an error if deserialization fails.
pub fn from_bytes(bytes: &[u8]) -> Result<SaveState> {
    rmp_serde::from_slice(bytes)
        .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
}

/// Saves progress to a file, overwriting it if it exists.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to,
/// or if serialization fails.
pub fn save_to_file<P: AsRef<Path>>(state: &SaveState, path: P) -> Result<()> {
    let path = path.as_ref();
    let bytes = to_bytes(state)?;

    let file = File::create(path).map_err(|e| io_error("create", path, &e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(&bytes)
        .map_err(|e| io_error("write to", path, &e))?;
    writer.flush().map_err(|e| io_error("flush", path, &e))?;

    Ok(())
}

/// Loads progress from a file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or if deserialization fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<SaveState> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| io_error("open", path, &e))?;

    let mut bytes = Vec::new();
    BufReader::new(file)
        .read_to_end(&mut bytes)
        .map_err(|e| io_error("read", path, &e))?;

    from_bytes(&bytes)
}

fn io_error(verb: &str, path: &Path, error: &std::io::Error) -> Error {
    Error::new(ErrorKind::IoError(format!(
        "failed to {verb} file '{}': {error}",
        path.display()
    )))
}
