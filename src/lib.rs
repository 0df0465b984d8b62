//! docroot - Minimal static file server
//!
//! Serves files from a document root over HTTP, one request per connection.

pub mod config;
pub mod http;
pub mod server;
pub mod static_files;
