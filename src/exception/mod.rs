//! Rendering of failed requests into HTTP responses.

pub mod http;

pub use http::HttpException;
