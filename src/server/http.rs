//! Just enough HTTP/1.1 to serve one JSON request per connection.

use std::io;

use serde::Serialize;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Upper bound on the request line plus headers.
pub const MAX_HEAD_BYTES: usize = 8 * 1024;

/// Upper bound on a request body.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed request: {0}")]
    Malformed(&'static str),

    #[error("request body of {0} bytes exceeds the 64 KiB limit")]
    BodyTooLarge(usize),

    #[error("transfer-encoding is not supported, send a Content-Length body")]
    TransferEncoding,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: String,
    pub path: String,
    pub body: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    /// A JSON response; serialization failures become a 500.
    pub fn json<T: Serialize>(status: u16, value: &T) -> Self {
        match serde_json::to_vec(value) {
            Ok(body) => Self { status, body },
            Err(_) => Self {
                status: 500,
                body: br#"{"error":"serialization failed"}"#.to_vec(),
            },
        }
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        408 => "Request Timeout",
        405 => "Method Not Allowed",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

/// Read one head line, `None` at end of input.
async fn read_head_line<R: AsyncBufRead + Unpin>(
    reader: &mut R,
) -> Result<Option<String>, HttpError> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf).await? == 0 {
        return Ok(None);
    }
    String::from_utf8(buf)
        .map(Some)
        .map_err(|_| HttpError::Malformed("request head is not valid UTF-8"))
}

/// Read one request: request line, headers, then a `Content-Length` body.
///
/// Chunked or otherwise transfer-encoded bodies are refused rather than read
/// as empty.
pub async fn read_request<R: AsyncBufRead + Unpin>(reader: &mut R) -> Result<Request, HttpError> {
    let mut head = (&mut *reader).take(MAX_HEAD_BYTES as u64);

    let Some(line) = read_head_line(&mut head).await? else {
        return Err(HttpError::Malformed("empty request"));
    };
    let mut parts = line.split_whitespace();
    let (Some(method), Some(target), Some(_version)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(HttpError::Malformed("bad request line"));
    };
    let method = method.to_string();
    // Query strings are not used by any route.
    let path = target.split('?').next().unwrap_or(target).to_string();

    let mut content_length = 0usize;
    let mut transfer_encoded = false;
    loop {
        let Some(line) = read_head_line(&mut head).await? else {
            return Err(HttpError::Malformed("headers not terminated"));
        };
        let header = line.trim_end();
        if header.is_empty() {
            break;
        }
        let Some((name, value)) = header.split_once(':') else {
            return Err(HttpError::Malformed("bad header line"));
        };
        let name = name.trim();
        if name.eq_ignore_ascii_case("content-length") {
            content_length = value
                .trim()
                .parse()
                .map_err(|_| HttpError::Malformed("bad content-length"))?;
        } else if name.eq_ignore_ascii_case("transfer-encoding") {
            transfer_encoded = true;
        }
    }

    if transfer_encoded {
        return Err(HttpError::TransferEncoding);
    }
    if content_length > MAX_BODY_BYTES {
        return Err(HttpError::BodyTooLarge(content_length));
    }
    let mut body = vec![0; content_length];
    reader.read_exact(&mut body).await?;

    Ok(Request { method, path, body })
}

/// Write a response and close the exchange.
pub async fn write_response<W: AsyncWrite + Unpin>(
    writer: &mut W,
    response: &Response,
) -> io::Result<()> {
    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        response.status,
        reason(response.status),
        response.body.len()
    );
    writer.write_all(head.as_bytes()).await?;
    writer.write_all(&response.body).await?;
    writer.flush().await
}
