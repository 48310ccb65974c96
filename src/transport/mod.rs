//! HTTP transport: the shared request/response routine behind every API call.

mod http;

pub use http::{HttpTransport, DEFAULT_BASE_URL};
