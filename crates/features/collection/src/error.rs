use std::borrow::Cow;

/// Error types specific to the collection feature.
#[roster_derive::roster_error]
pub enum CollectionError {
    /// The collection configuration violates its invariants (e.g. `max_items` is not positive).
    #[error("Invalid collection configuration{}: {message}", format_context(.context))]
    Configuration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Cannot add item{}: max_items limit ({max_items}) reached", format_context(.context))]
    Capacity { max_items: usize, context: Option<Cow<'static, str>> },

    /// A record (or a batch of records) does not satisfy the structural contract.
    /// `missing` lists the absent required keys, when that is the cause.
    #[error("Validation failed{}: {message}", format_context(.context))]
    Validation {
        message: Cow<'static, str>,
        missing: Vec<String>,
        context: Option<Cow<'static, str>>,
    },
}
