//! Request types: the persisted record and the executable form.

mod header;
mod http;
mod method;
mod saved;

pub use header::{Header, headers_to_text, parse_header_lines};
pub use http::HttpRequest;
pub use method::HttpMethod;
pub use saved::SavedRequest;
