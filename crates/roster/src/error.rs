use roster_collection::CollectionError;
use roster_kernel::KernelError;
use roster_logger::LoggerError;
use roster_storage::StorageError;
use std::borrow::Cow;

/// Any failure surfaced by the facade operations.
#[roster_derive::roster_error]
pub enum RosterError {
    #[error("Collection error{}: {source}", format_context(.context))]
    Collection { source: CollectionError, context: Option<Cow<'static, str>> },

    #[error("Storage error{}: {source}", format_context(.context))]
    Storage { source: StorageError, context: Option<Cow<'static, str>> },

    #[error("Kernel error{}: {source}", format_context(.context))]
    Kernel { source: KernelError, context: Option<Cow<'static, str>> },

    #[error("Logger error{}: {source}", format_context(.context))]
    Logger { source: LoggerError, context: Option<Cow<'static, str>> },

    /// The collection header (name, limits) of a document could not be decoded.
    #[error("Invalid collection header{}: {source}", format_context(.context))]
    Header { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// The document is a JSON object but not shaped like a saved collection.
    #[error("Invalid collection document{}: {message}", format_context(.context))]
    Document { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
