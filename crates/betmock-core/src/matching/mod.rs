//! Request matching utilities.

mod headers;
mod query;
mod url;

pub use headers::{bearer_token, header, normalize_headers};
pub use query::{form_to_payload, parse_query_string, query_of};
pub use url::{url_matches, UrlMatchResult, UrlPattern};
