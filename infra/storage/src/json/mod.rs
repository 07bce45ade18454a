//! Whole-document JSON object persistence.

mod format;
mod options;

pub use options::JsonWriteOptions;

use crate::atomic::write_atomic;
use crate::error::StorageError;
use format::AsciiEscaped;
use roster_domain::record::type_name;
use roster_domain::{Record, Value};
use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;
use tracing::debug;

/// Loads a JSON document whose root must be an object.
///
/// # Errors
///
/// Returns [`StorageError::NotFound`] if the path does not exist.
/// Returns [`StorageError::Parse`] if the content is not valid JSON.
/// Returns [`StorageError::Type`] if the root value is not an object.
/// Returns [`StorageError::Io`] on any other read failure.
pub fn load_json_object(path: impl AsRef<Path>) -> Result<Record, StorageError> {
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(StorageError::NotFound {
                message: path.display().to_string().into(),
                context: None,
            });
        },
        Err(err) => {
            return Err(StorageError::Io {
                source: err,
                context: Some(format!("Open failed: {}", path.display()).into()),
            });
        },
    };

    let value: Value = serde_json::from_reader(BufReader::new(file)).map_err(|err| {
        if err.is_io() {
            StorageError::Io {
                source: err.into(),
                context: Some(format!("Read failed: {}", path.display()).into()),
            }
        } else {
            StorageError::Parse {
                source: err,
                context: Some(format!("Invalid JSON in {}", path.display()).into()),
            }
        }
    })?;

    match value {
        Value::Object(object) => {
            debug!(path = %path.display(), keys = object.len(), "JSON object loaded");
            Ok(object)
        },
        other => Err(StorageError::Type {
            message: format!("expected JSON object in {}, got {}", path.display(), type_name(&other))
                .into(),
            context: None,
        }),
    }
}

/// Saves `data` with two-space indentation and literal non-ASCII characters.
///
/// # Errors
///
/// See [`save_json_object_with`].
pub fn save_json_object(data: &Record, path: impl AsRef<Path>) -> Result<(), StorageError> {
    save_json_object_with(data, path, &JsonWriteOptions::default())
}

/// Saves `data` as a JSON document, overwriting any existing file.
///
/// Missing parent directories are created. The document is written to a temporary
/// sibling file, synced, and renamed over `path`, so readers never observe a
/// partially written file and a failed save leaves the previous content intact.
///
/// # Errors
///
/// Returns [`StorageError::Io`] if directories or files cannot be created, written,
/// synced, or renamed.
/// Returns [`StorageError::Serialize`] if the data cannot be encoded.
pub fn save_json_object_with(
    data: &Record,
    path: impl AsRef<Path>,
    options: &JsonWriteOptions,
) -> Result<(), StorageError> {
    let path = path.as_ref();
    write_atomic(path, |writer| encode(writer, data, options))?;
    debug!(
        path = %path.display(),
        keys = data.len(),
        indent = ?options.indent,
        escape_non_ascii = options.escape_non_ascii,
        "JSON object saved"
    );
    Ok(())
}

fn encode<W: Write>(writer: W, data: &Record, options: &JsonWriteOptions) -> Result<(), StorageError> {
    let indent = options.indent.map(|width| vec![b' '; width]);

    match (indent.as_deref(), options.escape_non_ascii) {
        (Some(indent), false) => encode_with(writer, data, PrettyFormatter::with_indent(indent)),
        (Some(indent), true) => {
            encode_with(writer, data, AsciiEscaped::new(PrettyFormatter::with_indent(indent)))
        },
        (None, false) => encode_with(writer, data, CompactFormatter),
        (None, true) => encode_with(writer, data, AsciiEscaped::new(CompactFormatter)),
    }
}

fn encode_with<W, F>(writer: W, data: &Record, formatter: F) -> Result<(), StorageError>
where
    W: Write,
    F: Formatter,
{
    let mut serializer = Serializer::with_formatter(writer, formatter);
    data.serialize(&mut serializer).map_err(|err| {
        if err.is_io() {
            StorageError::Io { source: err.into(), context: Some("Write failed".into()) }
        } else {
            StorageError::Serialize { message: err.to_string().into(), context: None }
        }
    })
}
