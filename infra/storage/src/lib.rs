//! JSON object persistence for Roster.
//!
//! Documents are whole-file JSON objects: they are loaded in one pass and saved in one
//! pass. All I/O is synchronous and every file handle is released before a call returns.
//!
//! # Core Features
//!
//! - **Typed Failures**: missing files, malformed JSON, and non-object roots are distinct errors.
//! - **Atomic Writes**: unique temp write + `fsync` + `rename`, so a crash or a failed save never
//!   leaves a truncated document behind.
//! - **Formatting Policy**: configurable indentation and optional ASCII escaping via
//!   [`JsonWriteOptions`].
//!
//! # Examples
//!
//! ```rust
//! use roster_storage::{JsonWriteOptions, StorageError, load_json_object, save_json_object_with};
//! use serde_json::json;
//!
//! fn main() -> Result<(), StorageError> {
//!     # let tmp = tempfile::tempdir().unwrap();
//!     let path = tmp.path().join("nested/dir/settings.json");
//!     let data = json!({ "name": "Zoë", "limits": { "max_items": 10 } });
//!     let data = data.as_object().unwrap();
//!
//!     save_json_object_with(data, &path, &JsonWriteOptions::new().indent(Some(4)))?;
//!     assert_eq!(&load_json_object(&path)?, data);
//!     Ok(())
//! }
//! ```

mod atomic;
mod error;
mod json;

pub use error::{StorageError, StorageErrorExt};
pub use json::{JsonWriteOptions, load_json_object, save_json_object, save_json_object_with};
