use tinyhttpd::http::framer::read_until_headers;
use tinyhttpd::http::parser::{ParseError, parse_request};
use tokio::io::AsyncWriteExt;

#[tokio::test]
async fn test_parse_simple_get_request() {
    let mut stream: &[u8] = b"";
    let buffered = b"GET / HTTP/1.0\r\nHost: example.com\r\n\r\n";

    let req = parse_request(buffered, &mut stream).await.unwrap();

    assert_eq!(req.method, "GET");
    assert_eq!(req.target, "/");
    assert_eq!(req.version, "HTTP/1.0");
    assert_eq!(req.header("Host"), Some("example.com"));
    assert!(req.body.is_empty());
}

#[tokio::test]
async fn test_header_order_and_duplicates_preserved() {
    let mut stream: &[u8] = b"";
    let buffered = b"GET / HTTP/1.0\r\nX-Tag: first\r\nHost: example.com\r\nx-tag: second\r\n\r\n";

    let req = parse_request(buffered, &mut stream).await.unwrap();

    let names: Vec<&str> = req.headers.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["X-Tag", "Host", "x-tag"]);
    // Lookup sees the last value for the repeated name.
    assert_eq!(req.header("X-Tag"), Some("second"));
}

#[tokio::test]
async fn test_header_values_are_trimmed() {
    let mut stream: &[u8] = b"";
    let buffered = b"GET / HTTP/1.0\r\n  Host :   example.com  \r\n\r\n";

    let req = parse_request(buffered, &mut stream).await.unwrap();

    assert_eq!(req.headers[0].name, "Host");
    assert_eq!(req.headers[0].value, "example.com");
}

#[tokio::test]
async fn test_header_line_without_colon_is_skipped() {
    let mut stream: &[u8] = b"";
    let buffered = b"GET / HTTP/1.0\r\nBrokenHeader\r\nHost: example.com\r\n\r\n";

    let req = parse_request(buffered, &mut stream).await.unwrap();

    assert_eq!(req.headers.len(), 1);
    assert_eq!(req.header("Host"), Some("example.com"));
}

#[tokio::test]
async fn test_body_taken_from_buffered_remainder() {
    let mut stream: &[u8] = b"";
    let buffered = b"POST /dopost HTTP/1.0\r\nContent-Length: 5\r\n\r\nhello";

    let req = parse_request(buffered, &mut stream).await.unwrap();

    assert_eq!(req.body, b"hello");
}

#[tokio::test]
async fn test_body_shortfall_read_from_stream() {
    let mut stream: &[u8] = b"world";
    let buffered = b"POST /dopost HTTP/1.0\r\nContent-Length: 10\r\n\r\nhello";

    let req = parse_request(buffered, &mut stream).await.unwrap();

    assert_eq!(req.body, b"helloworld");
}

#[tokio::test]
async fn test_body_completed_across_write_bursts() {
    let (mut client, mut server) = tokio::io::duplex(256);

    let writer = tokio::spawn(async move {
        client
            .write_all(b"POST /dopost HTTP/1.0\r\nContent-Length: 10\r\n\r\n12345")
            .await
            .unwrap();
        tokio::task::yield_now().await;
        client.write_all(b"67890").await.unwrap();
    });

    let buffered = read_until_headers(&mut server).await.unwrap();
    let req = parse_request(&buffered, &mut server).await.unwrap();

    assert_eq!(req.body, b"1234567890");
    writer.await.unwrap();
}

#[tokio::test]
async fn test_excess_body_bytes_are_truncated() {
    let mut stream: &[u8] = b"";
    let buffered = b"POST /dopost HTTP/1.0\r\nContent-Length: 4\r\n\r\nhello!";

    let req = parse_request(buffered, &mut stream).await.unwrap();

    assert_eq!(req.body, b"hell");
}

#[tokio::test]
async fn test_missing_content_length_keeps_burst_bytes_only() {
    // Nothing declared, so the parser must not read from the stream even
    // though more bytes are sitting there.
    let mut stream: &[u8] = b"should never be read";
    let buffered = b"POST /dopost HTTP/1.0\r\nHost: x\r\n\r\nburst";

    let req = parse_request(buffered, &mut stream).await.unwrap();

    assert_eq!(req.body, b"burst");
    assert_eq!(stream, b"should never be read");
}

#[tokio::test]
async fn test_content_length_lookup_is_case_insensitive() {
    let mut stream: &[u8] = b"";
    let buffered = b"POST /dopost HTTP/1.0\r\ncontent-LENGTH: 3\r\n\r\nabcdef";

    let req = parse_request(buffered, &mut stream).await.unwrap();

    assert_eq!(req.body, b"abc");
}

#[tokio::test]
async fn test_unparsable_content_length_treated_as_zero() {
    let mut stream: &[u8] = b"";
    let buffered = b"POST /dopost HTTP/1.0\r\nContent-Length: banana\r\n\r\nhello";

    let req = parse_request(buffered, &mut stream).await.unwrap();

    // Falls back to the buffered remainder, exactly as if undeclared.
    assert_eq!(req.body, b"hello");
}

#[tokio::test]
async fn test_unknown_method_still_parses() {
    let mut stream: &[u8] = b"";
    let buffered = b"BREW /coffee HTTP/1.0\r\n\r\n";

    let req = parse_request(buffered, &mut stream).await.unwrap();

    assert_eq!(req.method, "BREW");
}

#[tokio::test]
async fn test_request_line_with_wrong_token_count_is_fatal() {
    let mut stream: &[u8] = b"";

    let two = parse_request(b"GET /\r\n\r\n", &mut stream).await;
    assert!(matches!(two, Err(ParseError::InvalidRequestLine)));

    let four = parse_request(b"GET / HTTP/1.0 junk\r\n\r\n", &mut stream).await;
    assert!(matches!(four, Err(ParseError::InvalidRequestLine)));
}

#[tokio::test]
async fn test_buffer_without_terminator_is_fatal() {
    let mut stream: &[u8] = b"";

    let truncated = parse_request(b"GET / HTTP/1.0\r\nHost: x\r\n", &mut stream).await;
    assert!(matches!(truncated, Err(ParseError::MissingHeaderTerminator)));

    let empty = parse_request(b"", &mut stream).await;
    assert!(matches!(empty, Err(ParseError::MissingHeaderTerminator)));
}

#[tokio::test]
async fn test_body_shortfall_on_closed_stream_is_fatal() {
    let mut stream: &[u8] = b"wo";
    let buffered = b"POST /dopost HTTP/1.0\r\nContent-Length: 10\r\n\r\nhello";

    let result = parse_request(buffered, &mut stream).await;

    assert!(matches!(result, Err(ParseError::Io(_))));
}
