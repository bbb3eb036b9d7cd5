use std::sync::Arc;

use tokio::net::TcpStream;
use tracing::debug;

use crate::config::Config;
use crate::http::framer;
use crate::http::parser::{self, ParseError};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::router;

/// Handles one accepted connection for exactly one request/response
/// exchange. The handler owns the stream, so every exit path closes it.
pub struct Connection {
    stream: TcpStream,
    config: Arc<Config>,
}

impl Connection {
    pub fn new(stream: TcpStream, config: Arc<Config>) -> Self {
        Self { stream, config }
    }

    /// Frame → parse → route → write, then close. A framing or parse
    /// failure short-circuits to a fixed 400 with an empty body.
    pub async fn run(mut self) -> anyhow::Result<()> {
        let response = match self.read_request().await {
            Ok(req) => router::route(&req, &self.config).await,
            Err(e) => {
                debug!("malformed request: {}", e);
                Response::bad_request()
            }
        };

        ResponseWriter::new(&response)
            .write_to_stream(&mut self.stream)
            .await
    }

    async fn read_request(&mut self) -> Result<Request, ParseError> {
        let buffered = framer::read_until_headers(&mut self.stream).await?;
        parser::parse_request(&buffered, &mut self.stream).await
    }
}
