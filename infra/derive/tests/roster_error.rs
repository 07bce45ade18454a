use roster_derive::roster_error;
use std::borrow::Cow;

#[roster_error]
pub enum SampleError {
    #[error("I/O failure{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Out of room: {limit}")]
    Full { limit: usize },

    #[error("Internal sample error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn failing_io() -> Result<(), std::io::Error> {
    Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))
}

#[test]
fn roster_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/roster_error_pass.rs");
    t.pass("tests/ui/roster_error_derived.rs");
    t.compile_fail("tests/ui/roster_error_no_context.rs");
    t.compile_fail("tests/ui/roster_error_bad_context_type.rs");
    t.compile_fail("tests/ui/roster_error_tuple_variant.rs");
}

#[test]
fn source_errors_convert_with_question_mark() {
    fn run() -> Result<(), SampleError> {
        failing_io()?;
        Ok(())
    }

    let err = run().expect_err("io error should propagate");
    assert!(matches!(err, SampleError::Io { context: None, .. }));
    assert_eq!(err.to_string(), "I/O failure: gone");
}

#[test]
fn context_is_attached_to_source_results() {
    let err = failing_io().context("Reading fixture").expect_err("io error should propagate");

    assert_eq!(err.context_message(), Some("Reading fixture"));
    assert_eq!(err.to_string(), "I/O failure (Reading fixture): gone");
}

#[test]
fn context_is_attached_to_own_results() {
    let result: Result<(), SampleError> = Err("invariant broken".into());
    let err = result.context("Checking invariants").expect_err("error should be kept");

    assert!(matches!(err, SampleError::Internal { .. }));
    assert_eq!(err.to_string(), "Internal sample error (Checking invariants): invariant broken");
}

#[test]
fn variants_without_context_are_left_untouched() {
    let result: Result<(), SampleError> = Err(SampleError::Full { limit: 3 });
    let err = result.context("ignored").expect_err("error should be kept");

    assert!(err.context_message().is_none());
    assert_eq!(err.to_string(), "Out of room: 3");
}

#[test]
fn owned_strings_map_to_internal() {
    let err = SampleError::from(format!("code {}", 7));
    assert_eq!(err.to_string(), "Internal sample error: code 7");
}
