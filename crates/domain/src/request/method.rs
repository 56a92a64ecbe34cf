//! Request methods offered by the editor.
//!
//! Saved files store the method as free text; [`HttpMethod`] is what a
//! request must resolve to before it can be sent.

use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// A method a saved request can be sent with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    /// `GET`, also used when a saved request has no method.
    #[default]
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
    /// `PATCH`
    Patch,
    /// `HEAD`
    Head,
    /// `OPTIONS`
    Options,
}

/// Methods paired with their wire names, in the order the editor lists them.
const METHODS: [(HttpMethod, &str); 7] = [
    (HttpMethod::Get, "GET"),
    (HttpMethod::Post, "POST"),
    (HttpMethod::Put, "PUT"),
    (HttpMethod::Delete, "DELETE"),
    (HttpMethod::Patch, "PATCH"),
    (HttpMethod::Head, "HEAD"),
    (HttpMethod::Options, "OPTIONS"),
];

impl HttpMethod {
    /// Wire names of every method, in editor order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        METHODS.iter().map(|&(_, name)| name)
    }

    /// The upper-case wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => METHODS[0].1,
            Self::Post => METHODS[1].1,
            Self::Put => METHODS[2].1,
            Self::Delete => METHODS[3].1,
            Self::Patch => METHODS[4].1,
            Self::Head => METHODS[5].1,
            Self::Options => METHODS[6].1,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = DomainError;

    /// Matches a wire name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        METHODS
            .iter()
            .find(|(_, name)| name.eq_ignore_ascii_case(wanted))
            .map(|&(method, _)| method)
            .ok_or_else(|| DomainError::UnsupportedMethod(wanted.to_string()))
    }
}
