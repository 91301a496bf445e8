//! API layer - HTTP routes and transport error mapping.

pub mod http;

pub use http::routes;
