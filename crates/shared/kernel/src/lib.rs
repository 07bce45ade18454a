//! Kernel utilities shared across slices.
//! Keep this crate lightweight: layered config loading and stateless helpers over
//! sequences and JSON mappings.
//!
//! ## Chunking and flattening
//! ```rust
//! use roster_kernel::utils::{chunk, flatten};
//! use serde_json::json;
//!
//! let chunks = chunk(&[1, 2, 3, 4, 5], 2).unwrap();
//! assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
//!
//! let nested = json!({ "a": { "b": 1, "c": 2 } });
//! let flat = flatten(nested.as_object().unwrap());
//! assert_eq!(serde_json::Value::Object(flat), json!({ "a.b": 1, "a.c": 2 }));
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use roster_kernel::config::load_config;
//! let cfg: roster_domain::config::RosterConfig = load_config(Some("roster.toml"))?;
//! ```
pub mod config;
mod error;
pub mod utils;

pub use error::{KernelError, KernelErrorExt};
pub use roster_domain as domain;
