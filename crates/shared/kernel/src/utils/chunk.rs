use crate::error::KernelError;

/// Splits `items` into consecutive chunks of at most `chunk_size` elements.
///
/// Order is preserved and every element lands in exactly one chunk; only the last
/// chunk may be shorter. An empty slice yields no chunks.
///
/// # Errors
/// Returns [`KernelError::InvalidArgument`] if `chunk_size` is zero.
///
/// # Example
/// ```rust
/// # use roster_kernel::utils::chunk;
/// assert_eq!(chunk(&[1, 2, 3, 4, 5], 2).unwrap(), vec![vec![1, 2], vec![3, 4], vec![5]]);
/// assert!(chunk::<u8>(&[], 3).unwrap().is_empty());
/// assert!(chunk(&[1], 0).is_err());
/// ```
pub fn chunk<T: Clone>(items: &[T], chunk_size: usize) -> Result<Vec<Vec<T>>, KernelError> {
    if chunk_size == 0 {
        return Err(KernelError::InvalidArgument {
            message: "chunk_size must be positive, got 0".into(),
            context: None,
        });
    }

    Ok(items.chunks(chunk_size).map(<[T]>::to_vec).collect())
}
