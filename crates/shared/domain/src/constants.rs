/// Record key holding the identifier.
pub const ID: &str = "id";
/// Record key holding the display name.
pub const NAME: &str = "name";
/// Record key holding the payload.
pub const VALUE: &str = "value";

/// Keys every record must carry when validation is enabled.
pub const REQUIRED_FIELDS: [&str; 3] = [ID, NAME, VALUE];

pub const DEFAULT_MAX_ITEMS: usize = 100;
pub const DEFAULT_JSON_INDENT: usize = 2;
pub const DEFAULT_FLATTEN_SEPARATOR: &str = ".";
