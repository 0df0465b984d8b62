use chrono::{DateTime, Local};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::Response;

/// Value of the Server header.
pub const SERVER_NAME: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Format of the Date header, in server local time.
const DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S";

const CRLF: &str = "\r\n";

/// Renders the status line and header block, including the blank line.
pub fn render_head(resp: &Response, now: DateTime<Local>) -> String {
    let lines = [
        format!(
            "{} {} {}",
            resp.version,
            resp.status.as_u16(),
            resp.status.reason_phrase()
        ),
        format!("Date: {}", now.format(DATE_FORMAT)),
        format!("Server: {}", SERVER_NAME),
        "Connection: close".to_string(),
        format!("Content-Type: {}", resp.content_type.as_deref().unwrap_or_default()),
        format!("Content-Length: {}", resp.content_length),
    ];

    let mut head = lines.join(CRLF);
    // Header/body separator
    head.push_str(CRLF);
    head.push_str(CRLF);
    head
}

fn serialize_response(resp: &Response, now: DateTime<Local>) -> Vec<u8> {
    let head = render_head(resp, now);

    let mut buf = Vec::with_capacity(head.len() + resp.body.len());
    buf.extend_from_slice(head.as_bytes());
    buf.extend_from_slice(&resp.body);
    buf
}

pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self::at(response, Local::now())
    }

    /// Builds a writer with a fixed Date header.
    pub fn at(response: &Response, now: DateTime<Local>) -> Self {
        Self {
            buffer: serialize_response(response, now),
            written: 0,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
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

        stream.flush().await?;
        Ok(())
    }
}
