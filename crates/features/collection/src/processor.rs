//! Pluggable batch transformations over records.

use crate::error::CollectionError;
use roster_domain::Record;

/// A single-method transformation over a batch of records.
///
/// Implemented for any `Fn(Vec<Record>) -> Vec<Record>`, so closures can be passed directly.
pub trait DataProcessor {
    fn process(&self, data: Vec<Record>) -> Vec<Record>;
}

impl<F> DataProcessor for F
where
    F: Fn(Vec<Record>) -> Vec<Record>,
{
    fn process(&self, data: Vec<Record>) -> Vec<Record> {
        self(data)
    }
}

/// Runs `processor` over `data`.
///
/// # Errors
/// Returns [`CollectionError::Validation`] if `validate` is set and `data` is empty.
///
/// # Example
/// ```rust
/// use roster_collection::{Record, process_data};
///
/// let mut record = Record::new();
/// record.insert("id".to_owned(), 1.into());
///
/// let keep_first = |mut data: Vec<Record>| {
///     data.truncate(1);
///     data
/// };
/// let kept = process_data(vec![record.clone(), record], &keep_first, true).unwrap();
/// assert_eq!(kept.len(), 1);
/// ```
pub fn process_data<P>(
    data: Vec<Record>,
    processor: &P,
    validate: bool,
) -> Result<Vec<Record>, CollectionError>
where
    P: DataProcessor + ?Sized,
{
    if validate && data.is_empty() {
        return Err(CollectionError::Validation {
            message: "data cannot be empty".into(),
            missing: Vec::new(),
            context: None,
        });
    }

    Ok(processor.process(data))
}
