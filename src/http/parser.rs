use std::fmt;
use std::io;

use tokio::io::{AsyncRead, AsyncReadExt};

use crate::http::framer::find_headers_end;
use crate::http::request::{Header, HeaderMap, Request};

/// Failures that make a connection's request unusable. All of them collapse
/// to the same fixed 400 reply at the connection boundary.
#[derive(Debug)]
pub enum ParseError {
    /// Header block never terminated within the buffer bound.
    HeaderTooLarge,
    /// Stream ended before a full header block arrived.
    MissingHeaderTerminator,
    /// Header block is not valid UTF-8.
    InvalidEncoding,
    /// Request line does not split into exactly method, target, version.
    InvalidRequestLine,
    /// The stream failed while framing or completing the body.
    Io(io::Error),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::HeaderTooLarge => write!(f, "header block exceeds buffer limit"),
            ParseError::MissingHeaderTerminator => write!(f, "header block never terminated"),
            ParseError::InvalidEncoding => write!(f, "header block is not valid UTF-8"),
            ParseError::InvalidRequestLine => write!(f, "malformed request line"),
            ParseError::Io(e) => write!(f, "stream error: {}", e),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<io::Error> for ParseError {
    fn from(e: io::Error) -> Self {
        ParseError::Io(e)
    }
}

/// Parses framed bytes into a [`Request`], pulling any missing body bytes
/// from `stream` when a Content-Length declares more than what was
/// already buffered.
pub async fn parse_request<R>(buffered: &[u8], stream: &mut R) -> Result<Request, ParseError>
where
    R: AsyncRead + Unpin,
{
    let headers_end = find_headers_end(buffered).ok_or(ParseError::MissingHeaderTerminator)?;
    let header_bytes = &buffered[..headers_end];
    let remainder = &buffered[headers_end + 4..];

    let header_text =
        std::str::from_utf8(header_bytes).map_err(|_| ParseError::InvalidEncoding)?;
    let mut lines = header_text.split("\r\n");

    let request_line = lines.next().ok_or(ParseError::InvalidRequestLine)?;
    let (method, target, version) = parse_request_line(request_line)?;

    let mut headers = Vec::new();
    let mut header_map = HeaderMap::new();
    for line in lines {
        if line.is_empty() {
            continue;
        }
        // Lines without a colon are skipped, not rejected.
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        let name = name.trim();
        let value = value.trim();
        header_map.insert(name, value);
        headers.push(Header::new(name, value));
    }

    let declared = declared_content_length(&header_map);
    let body = read_body(remainder, declared, stream).await?;

    Ok(Request {
        method,
        target,
        version,
        headers,
        header_map,
        body,
    })
}

/// Splits the request line on single spaces into exactly three tokens.
fn parse_request_line(line: &str) -> Result<(String, String, String), ParseError> {
    let parts: Vec<&str> = line.split(' ').collect();
    if parts.len() != 3 {
        return Err(ParseError::InvalidRequestLine);
    }
    Ok((
        parts[0].to_string(),
        parts[1].to_string(),
        parts[2].to_string(),
    ))
}

/// The body length the client declared, or 0 when the header is absent,
/// unparsable, or non-positive.
fn declared_content_length(headers: &HeaderMap) -> usize {
    headers
        .get("content-length")
        .and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|n| *n > 0)
        .map(|n| n as usize)
        .unwrap_or(0)
}

/// Completes the body: reads the shortfall from the stream when fewer bytes
/// than declared were buffered, truncates when more were. Without a
/// declared length the buffered remainder is taken as-is, no further reads.
async fn read_body<R>(
    remainder: &[u8],
    declared: usize,
    stream: &mut R,
) -> Result<Vec<u8>, ParseError>
where
    R: AsyncRead + Unpin,
{
    let mut body = remainder.to_vec();

    if declared > body.len() {
        let mut shortfall = vec![0u8; declared - body.len()];
        stream.read_exact(&mut shortfall).await?;
        body.extend_from_slice(&shortfall);
    } else if declared > 0 && body.len() > declared {
        // Excess past the declared length is discarded; no pipelining.
        body.truncate(declared);
    }

    Ok(body)
}
