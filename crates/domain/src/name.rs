//! File-system safe names for collections and requests.
//!
//! A collection name becomes a directory name and a request name becomes a
//! file name (plus [`REQUEST_EXTENSION`]), so both go through the same
//! character filter. The two differ in how they treat a name that ends up
//! empty: requests fall back to [`DEFAULT_REQUEST_NAME`], collections are
//! rejected.

use crate::error::{DomainError, DomainResult};

/// Extension (without the dot) of a saved request file.
pub const REQUEST_EXTENSION: &str = "json";

/// Name used for a request whose name sanitizes to nothing.
pub const DEFAULT_REQUEST_NAME: &str = "untitled";

/// Keeps letters, digits, spaces, hyphens and underscores, then trims.
///
/// Letters and digits are matched with Unicode semantics, so `"Café 2"`
/// is kept as is. The match uses the `Alphabetic` and `Numeric` properties,
/// which also cover fractions such as `½` and roman numerals such as `Ⅻ`;
/// both are valid in file names. Sanitizing an already sanitized name
/// returns it unchanged.
#[must_use]
pub fn sanitize_name(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Returns the file stem a request named `raw` is saved under.
#[must_use]
pub fn request_file_stem(raw: &str) -> String {
    let name = sanitize_name(raw);
    if name.is_empty() {
        DEFAULT_REQUEST_NAME.to_string()
    } else {
        name
    }
}

/// Returns the directory name for a collection named `raw`.
///
/// # Errors
///
/// Returns [`DomainError::EmptyName`] if nothing is left after sanitization.
pub fn collection_dir_name(raw: &str) -> DomainResult<String> {
    let name = sanitize_name(raw);
    if name.is_empty() {
        return Err(DomainError::EmptyName(raw.to_string()));
    }
    Ok(name)
}
