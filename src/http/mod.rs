//! HTTP/1.0 protocol implementation.
//!
//! One request/response exchange per connection, no keep-alive. The
//! pipeline for an accepted connection:
//!
//! ```text
//! TcpStream → framer → parser → router → writer → close
//! ```
//!
//! - **`framer`**: buffers stream bytes until the header terminator arrives
//! - **`parser`**: turns framed bytes into a [`request::Request`] and pulls
//!   any outstanding body bytes from the stream
//! - **`request`** / **`response`**: wire-level data types
//! - **`writer`**: serializes a response and writes it out fully
//! - **`connection`**: drives the pipeline for one accepted connection

pub mod connection;
pub mod framer;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
