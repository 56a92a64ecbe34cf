//! Deterministic JSON serialization for HelloRest files.
//!
//! Keeps saved requests readable and diff-friendly by:
//! - Writing fields in declaration order
//! - Using 2-space indentation
//! - Adding trailing newline
//! - UTF-8 encoding without BOM

mod json;

pub use json::*;
