//! tinyhttpd - a minimal HTTP/1.0 server built on raw TCP streams.
//!
//! Core library for request framing, parsing, routing, and response
//! serialization. No HTTP library underneath; everything works at the
//! byte level on purpose.

pub mod assets;
pub mod config;
pub mod http;
pub mod router;
pub mod server;
