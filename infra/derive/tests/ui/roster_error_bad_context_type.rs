use roster_derive::roster_error;

#[roster_error]
pub enum DemoError {
    #[error("Missing: {message}")]
    Missing { message: String, context: String },
}

fn main() {}
