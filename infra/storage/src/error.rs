use std::borrow::Cow;

/// A specialized [`StorageError`] enum of this crate.
#[roster_derive::roster_error]
pub enum StorageError {
    #[error("File not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Malformed JSON{}: {source}", format_context(.context))]
    Parse { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// The document parsed, but its root is not a JSON object.
    #[error("Unexpected JSON type{}: {message}", format_context(.context))]
    Type { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Serialization failure{}: {message}", format_context(.context))]
    Serialize { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Hardware I/O failure{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },
}
