use std::collections::HashMap;

/// A single header as it appeared on the wire.
///
/// Order of appearance matters: the echo paths must reproduce headers
/// exactly, duplicates included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub value: String,
}

impl Header {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Case-insensitive header lookup.
///
/// Keys are folded to ASCII lowercase on insert, so `content-length` and
/// `Content-Length` hit the same slot. A repeated name keeps the last
/// value seen.
#[derive(Debug, Clone, Default)]
pub struct HeaderMap {
    entries: HashMap<String, String>,
}

impl HeaderMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, value: &str) {
        self.entries
            .insert(name.to_ascii_lowercase(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

/// A parsed HTTP/1.0 request.
#[derive(Debug, Clone)]
pub struct Request {
    /// Method token exactly as sent; not validated against a known set.
    /// Unknown methods still parse and simply miss in routing.
    pub method: String,
    /// Request target, uninterpreted; may still carry a query and fragment.
    pub target: String,
    /// Protocol version token, e.g. "HTTP/1.0".
    pub version: String,
    /// Headers in order of appearance, duplicates preserved.
    pub headers: Vec<Header>,
    /// Case-insensitive view over the headers.
    pub header_map: HeaderMap,
    /// Request body bytes.
    pub body: Vec<u8>,
}

impl Request {
    /// Header value lookup, case-insensitive. Returns the last value when
    /// a name was repeated.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.header_map.get(name)
    }
}
