use tokio::io::{AsyncRead, AsyncReadExt};

use crate::http::parser::ParseError;

/// Upper bound on bytes buffered while waiting for the header terminator.
pub const MAX_REQUEST_BUFFER: usize = 1024 * 1024;

const READ_CHUNK: usize = 1024;

/// Reads from `stream` until the accumulated buffer contains the
/// `\r\n\r\n` header terminator, then returns everything read so far —
/// including any body bytes that arrived in the same burst.
///
/// End-of-stream before a terminator is not an error here; the possibly
/// empty buffer goes back to the caller, and the parser decides what a
/// truncated request means. Exceeding [`MAX_REQUEST_BUFFER`] without a
/// terminator is fatal for the connection.
pub async fn read_until_headers<R>(stream: &mut R) -> Result<Vec<u8>, ParseError>
where
    R: AsyncRead + Unpin,
{
    let mut buf = Vec::with_capacity(READ_CHUNK);

    while buf.len() < MAX_REQUEST_BUFFER {
        let mut chunk = [0u8; READ_CHUNK];
        let n = stream.read(&mut chunk).await?;

        if n == 0 {
            // Client closed before completing the header block.
            return Ok(buf);
        }

        buf.extend_from_slice(&chunk[..n]);
        if find_headers_end(&buf).is_some() {
            return Ok(buf);
        }
    }

    Err(ParseError::HeaderTooLarge)
}

/// Position of the first `\r\n\r\n` in `buf`, if any.
pub(crate) fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}
