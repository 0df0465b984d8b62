//! In-memory file store shared by the connection tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use docroot::http::connection::Connection;
use docroot::static_files::FileStore;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

pub const ROOT: &str = "/srv/www";

#[derive(Default)]
pub struct MemoryStore {
    files: HashMap<PathBuf, Vec<u8>>,
    /// Files that exist but fail to read, like a permission error on disk
    unreadable: Vec<PathBuf>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file at `path`, relative to [`ROOT`].
    pub fn file(mut self, path: &str, contents: &[u8]) -> Self {
        self.files.insert(Path::new(ROOT).join(path), contents.to_vec());
        self
    }

    pub fn unreadable(mut self, path: &str) -> Self {
        self.unreadable.push(Path::new(ROOT).join(path));
        self
    }
}

impl FileStore for MemoryStore {
    fn root(&self) -> &Path {
        Path::new(ROOT)
    }

    async fn exists(&self, path: &Path) -> bool {
        // Directories exist if any file lives under them
        self.unreadable.iter().any(|p| p == path)
            || self.files.keys().any(|p| p.starts_with(path))
    }

    async fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        if self.unreadable.iter().any(|p| p == path) {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied));
        }
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }

    async fn size(&self, path: &Path) -> io::Result<u64> {
        self.files
            .get(path)
            .map(|f| f.len() as u64)
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }
}

/// Status code, headers and body of a raw response.
pub struct Reply {
    pub status_line: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Reply {
    pub fn parse(raw: &[u8]) -> Self {
        let end = raw
            .windows(4)
            .position(|w| w == b"\r\n\r\n")
            .expect("response has no header terminator");
        let head = std::str::from_utf8(&raw[..end]).expect("head is not UTF-8");
        let mut lines = head.split("\r\n");

        let status_line = lines.next().unwrap().to_string();
        let headers = lines
            .map(|l| {
                let (k, v) = l.split_once(": ").unwrap_or((l.trim_end_matches(':'), ""));
                (k.to_string(), v.to_string())
            })
            .collect();

        Self {
            status_line,
            headers,
            body: raw[end + 4..].to_vec(),
        }
    }

    pub fn status(&self) -> u16 {
        self.status_line.split(' ').nth(1).unwrap().parse().unwrap()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Runs one request through a [`Connection`] over an in-memory pipe.
pub async fn exchange(store: MemoryStore, request: &[u8]) -> Reply {
    let (mut client, server) = tokio::io::duplex(64 * 1024);
    let store = Arc::new(store);

    let handle = tokio::spawn(async move {
        let mut conn = Connection::new(server, store);
        conn.run().await
    });

    client.write_all(request).await.unwrap();

    let mut raw = Vec::new();
    client.read_to_end(&mut raw).await.unwrap();
    handle.await.unwrap().unwrap();

    Reply::parse(&raw)
}

/// Like [`exchange`], but the client closes its side instead of sending a
/// blank line.
pub async fn exchange_eof(store: MemoryStore, request: &[u8]) -> Reply {
    let (mut client, server) = tokio::io::duplex(64 * 1024);
    let store = Arc::new(store);

    let handle = tokio::spawn(async move {
        let mut conn = Connection::new(server, store);
        conn.run().await
    });

    client.write_all(request).await.unwrap();
    client.shutdown().await.unwrap();

    let mut raw = Vec::new();
    client.read_to_end(&mut raw).await.unwrap();
    handle.await.unwrap().unwrap();

    Reply::parse(&raw)
}
