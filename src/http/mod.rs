//! HTTP protocol implementation.
//!
//! This module implements the small slice of HTTP/1.x a static file server
//! needs: one request line in, one response out, then the socket is closed.
//!
//! # Architecture
//!
//! - **`connection`**: The per-connection state machine and the status decision table
//! - **`parser`**: Extracts and normalizes the request line from the buffered bytes
//! - **`request`**: Parsed request and the closed `Method` enumeration
//! - **`response`**: Status codes and the response builder
//! - **`writer`**: Serializes the fixed header block and writes it to the client
//! - **`mime`**: Allow-listed MIME types by file extension
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Until a blank line or EOF
//!        └──────┬──────┘
//!               │ Request parsed
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← 404 → 403 → 405 → HEAD / GET
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send headers (+ file bytes for GET)
//!        └──────┬───────────┘
//!               │ Always
//!               ▼
//!        ┌──────────────────┐
//!        │     Closed       │
//!        └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use docroot::http::connection::Connection;
//! use docroot::static_files::DiskStore;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:9898").await?;
//!     let store = Arc::new(DiskStore::new("./public"));
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let store = store.clone();
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, store);
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {:#}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod request;
pub mod response;
pub mod parser;
pub mod connection;
pub mod writer;
pub mod mime;
