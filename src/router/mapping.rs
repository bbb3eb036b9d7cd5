//! Fixed URI and content-type tables plus target normalization.

use std::path::Path;

/// External-to-internal path table. Static by design; the map and
/// full-serving modes only ever resolve these four entries.
const URI_TABLE: [(&str, &str); 4] = [
    ("/index.html", "/html/test.html"),
    ("/index_noimg.html", "/html/noimg.html"),
    ("/info/server", "/txt/test.txt"),
    ("/assets/logo.jpg", "/img/logo.jpg"),
];

/// Looks up a normalized external path. Matching is exact and
/// case-sensitive.
pub fn map_uri(external: &str) -> Option<&'static str> {
    URI_TABLE
        .iter()
        .find(|(ext, _)| *ext == external)
        .map(|(_, internal)| *internal)
}

/// Normalizes a request target for table matching: trim surrounding
/// whitespace, ensure a leading slash, drop the query string and then the
/// fragment. Idempotent on already-normalized paths.
pub fn normalize_target(target: &str) -> String {
    let trimmed = target.trim();
    let mut path = if trimmed.is_empty() {
        "/".to_string()
    } else if !trimmed.starts_with('/') {
        format!("/{}", trimmed)
    } else {
        trimmed.to_string()
    };

    if let Some(idx) = path.find('?') {
        path.truncate(idx);
    }
    if let Some(idx) = path.find('#') {
        path.truncate(idx);
    }
    path
}

/// Content type derived from the path's extension, ASCII case-insensitive.
pub fn content_type_for(path: &str) -> &'static str {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("html") => "text/html",
        Some("txt") => "text/plain",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => "application/octet-stream",
    }
}
