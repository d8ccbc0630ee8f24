//! Transport layer for the tool server.
//!
//! The server speaks plain HTTP: tools are invoked with a JSON object body
//! via `POST /tool/{name}`, resources are read via `GET /resource/{uri}`.
//! The transport owns the mapping from failure kinds to HTTP status codes;
//! no error crosses this boundary unhandled.

mod config;
mod error;
pub mod http;

pub use config::HttpConfig;
pub use error::{TransportError, TransportResult};
pub use http::HttpTransport;
