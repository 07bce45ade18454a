use roster_domain::config::JsonSettings;
use roster_domain::constants::DEFAULT_JSON_INDENT;

/// Formatting policy for [`save_json_object_with`](crate::save_json_object_with).
///
/// Defaults to two-space indentation with non-ASCII characters written literally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonWriteOptions {
    pub(crate) indent: Option<usize>,
    pub(crate) escape_non_ascii: bool,
}

impl Default for JsonWriteOptions {
    fn default() -> Self {
        Self { indent: Some(DEFAULT_JSON_INDENT), escape_non_ascii: false }
    }
}

impl JsonWriteOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Spaces per indentation level. `None` writes compact, single-line JSON.
    #[must_use = "Sets the indentation of the written document"]
    pub const fn indent(mut self, indent: Option<usize>) -> Self {
        self.indent = indent;
        self
    }

    /// Escapes every non-ASCII character as `\uXXXX` when enabled.
    #[must_use = "Sets the ASCII escaping policy of the written document"]
    pub const fn escape_non_ascii(mut self, enable: bool) -> Self {
        self.escape_non_ascii = enable;
        self
    }
}

impl From<&JsonSettings> for JsonWriteOptions {
    fn from(settings: &JsonSettings) -> Self {
        Self { indent: settings.indent, escape_non_ascii: settings.escape_non_ascii }
    }
}
