use roster_derive::roster_error;
use std::borrow::Cow;

#[roster_error]
#[derive(Debug, thiserror::Error)]
pub enum AlreadyDerivedError {
    #[error("Missing{}: {message}", format_context(.context))]
    Missing { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {}
