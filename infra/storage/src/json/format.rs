use serde_json::ser::Formatter;
use std::io::{self, Write};

/// Wraps another formatter and escapes every non-ASCII character as `\uXXXX`.
///
/// Characters outside the Basic Multilingual Plane are written as UTF-16 surrogate
/// pairs, so the output is plain ASCII. Object keys are escaped too.
#[derive(Debug, Clone, Default)]
pub(crate) struct AsciiEscaped<F> {
    inner: F,
}

impl<F> AsciiEscaped<F> {
    pub(crate) const fn new(inner: F) -> Self {
        Self { inner }
    }
}

impl<F: Formatter> Formatter for AsciiEscaped<F> {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let bytes = fragment.as_bytes();
        let mut start = 0;

        for (index, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            if start < index {
                writer.write_all(&bytes[start..index])?;
            }
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = index + ch.len_utf8();
        }

        writer.write_all(&bytes[start..])
    }

    // Structural hooks carry the inner formatter's indentation state.

    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_object_key(writer, first)
    }

    fn end_object_key<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.end_object_key(writer)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.end_object_value(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use serde_json::ser::{CompactFormatter, PrettyFormatter};
    use serde_json::{Serializer, json};

    fn render<F: Formatter>(value: &serde_json::Value, formatter: F) -> String {
        let mut out = Vec::new();
        let mut ser = Serializer::with_formatter(&mut out, formatter);
        value.serialize(&mut ser).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_escapes_bmp_and_astral_characters() {
        let value = json!({ "café": "naïve 😀" });
        let out = render(&value, AsciiEscaped::new(CompactFormatter));

        assert_eq!(out, r#"{"caf\u00e9":"na\u00efve \ud83d\ude00"}"#);
        assert!(out.is_ascii());
    }

    #[test]
    fn test_keeps_builtin_escapes() {
        let value = json!(["line\n\"quoted\"é"]);
        let out = render(&value, AsciiEscaped::new(CompactFormatter));

        assert_eq!(out, r#"["line\n\"quoted\"\u00e9"]"#);
    }

    #[test]
    fn test_preserves_pretty_layout() {
        let value = json!({ "a": [1, "ü"] });
        let plain = render(&value, PrettyFormatter::with_indent(b"  "));
        let escaped = render(&value, AsciiEscaped::new(PrettyFormatter::with_indent(b"  ")));

        assert_eq!(escaped, plain.replace('ü', "\\u00fc"));
    }
}
