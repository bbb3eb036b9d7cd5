use bytes::{BufMut, Bytes, BytesMut};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.0";

/// Serializes a response into its wire form: status line, headers in the
/// given order, blank line, then the body verbatim (omitted when empty).
/// The version on the status line is always HTTP/1.0, whatever the client
/// declared.
pub fn serialize_response(resp: &Response) -> Bytes {
    let mut buf = BytesMut::new();

    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.put_slice(status_line.as_bytes());

    for h in &resp.headers {
        buf.put_slice(h.name.as_bytes());
        buf.put_slice(b": ");
        buf.put_slice(h.value.as_bytes());
        buf.put_slice(b"\r\n");
    }

    buf.put_slice(b"\r\n");

    if !resp.body.is_empty() {
        buf.put_slice(&resp.body);
    }

    buf.freeze()
}

/// Writes one serialized response to a stream, fully or not at all from the
/// caller's point of view: a failed or zero-length write is an error and
/// the connection is abandoned afterwards.
pub struct ResponseWriter {
    buffer: Bytes,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response),
            written: 0,
        }
    }

    pub async fn write_to_stream<W>(&mut self, stream: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        Ok(())
    }
}
