//! Raw header text handling.
//!
//! Saved requests keep headers as free text, one `Key: Value` pair per
//! line. Parsing happens only when a request is about to be sent.

/// A single HTTP header with name and value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// The header name (e.g., "Content-Type")
    pub name: String,
    /// The header value (e.g., "application/json")
    pub value: String,
}

impl Header {
    /// Creates a new header.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Parses `Key: Value` lines into headers.
///
/// Each line is split at its first `:` and both halves are trimmed. Lines
/// without a colon, or with nothing before it, are skipped.
#[must_use]
pub fn parse_header_lines(text: &str) -> Vec<Header> {
    text.lines()
        .filter_map(|line| line.split_once(':'))
        .map(|(name, value)| (name.trim(), value.trim()))
        .filter(|(name, _)| !name.is_empty())
        .map(|(name, value)| Header::new(name, value))
        .collect()
}

/// Formats headers back into `Key: Value` lines.
#[must_use]
pub fn headers_to_text(headers: &[Header]) -> String {
    headers
        .iter()
        .map(|h| format!("{}: {}", h.name, h.value))
        .collect::<Vec<_>>()
        .join("\n")
}
