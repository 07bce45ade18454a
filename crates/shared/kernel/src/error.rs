use std::borrow::Cow;

/// A specialized [`KernelError`] enum of this crate.
#[roster_derive::roster_error]
pub enum KernelError {
    /// Layered configuration could not be built or deserialized.
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: ::config::ConfigError, context: Option<Cow<'static, str>> },

    /// A caller-supplied argument is outside its accepted range.
    #[error("Invalid argument{}: {message}", format_context(.context))]
    InvalidArgument { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
