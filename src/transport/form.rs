use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Escape set for free-text message content.
///
/// Matches the set left unescaped by `form_urlencoded::byte_serialize`
/// (alphanumerics plus `*-._`), except that a space renders as `%20` instead
/// of `+`. The upstream API decodes message text with percent semantics, so
/// `+` would arrive as a literal plus sign.
const MESSAGE_TEXT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

#[derive(Debug, Default)]
/// Incremental `key=value&key=value` form body builder.
///
/// Fields appear in the order they are appended, using each field's declared
/// wire name.
pub struct FormBody {
    out: String,
}

impl FormBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a standard form-encoded field (space renders as `+`).
    pub fn field(&mut self, name: &'static str, value: &str) -> &mut Self {
        self.begin_pair(name);
        self.out
            .extend(form_urlencoded::byte_serialize(value.as_bytes()));
        self
    }

    /// Append a free-text message field, where a literal space must reach the
    /// wire as `%20` — never `+` and never the double-encoded `%2520`.
    ///
    /// Every other byte escapes exactly as in [`FormBody::field`], so message
    /// text that legitimately contains the literal characters `%20` still
    /// encodes to `%2520` and is left that way.
    pub fn message_field(&mut self, name: &'static str, value: &str) -> &mut Self {
        self.begin_pair(name);
        self.out.extend(utf8_percent_encode(value, MESSAGE_TEXT));
        self
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn begin_pair(&mut self, name: &'static str) {
        if !self.out.is_empty() {
            self.out.push('&');
        }
        self.out.push_str(name);
        self.out.push('=');
    }
}
