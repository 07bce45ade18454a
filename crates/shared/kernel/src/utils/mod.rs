//! Stateless transformations over sequences and JSON mappings.

mod chunk;
mod flatten;

pub use chunk::chunk;
pub use flatten::{flatten, flatten_with};
