use percent_encoding::percent_decode_str;

use crate::http::request::{Method, Request};

/// File served when the path names a directory.
pub const INDEX_FILE: &str = "index.html";

/// Returns `true` once `buf` holds a complete request head.
///
/// Both `\r\n\r\n` and bare `\n\n` terminate a request, since simple
/// clients (and humans typing into netcat) send either.
pub fn is_complete(buf: &[u8]) -> bool {
    buf.ends_with(b"\r\n\r\n") || buf.ends_with(b"\n\n")
}

/// Parses the request line out of a buffered request.
///
/// Never fails: missing pieces come back as `None` or an empty path, and the
/// connection's decision table turns those into an error status.
pub fn parse_request(buf: &[u8]) -> Request {
    let text = String::from_utf8_lossy(buf);

    // Request line
    let line = text
        .trim_start()
        .split(['\r', '\n'])
        .next()
        .unwrap_or_default();
    let mut parts = line.split(' ').filter(|p| !p.is_empty());

    let method = parts.next().map(Method::from_str);
    let raw_path = parts.next().unwrap_or_default().to_string();
    let version = parts.next().map(str::to_string);

    let path = if raw_path.is_empty() {
        String::new()
    } else {
        normalize_path(&raw_path)
    };

    Request {
        method,
        raw_path,
        path,
        version,
    }
}

/// Turns a raw request-target into the path looked up under the document root.
///
/// Percent-escapes are decoded, the query string is dropped, every `../` is
/// deleted and a trailing `/` gets [`INDEX_FILE`] appended.
///
/// The `../` filter is plain text removal, not canonicalization: a lone
/// trailing `..` survives and is left to the allow-list and the filesystem.
pub fn normalize_path(raw: &str) -> String {
    let decoded = percent_decode_str(raw).decode_utf8_lossy();

    let mut path = decoded
        .split('?')
        .next()
        .unwrap_or_default()
        .to_string();

    // "....//" collapses to "../" after one pass
    while path.contains("../") {
        path = path.replace("../", "");
    }

    if path.ends_with('/') {
        path.push_str(INDEX_FILE);
    }

    path
}
