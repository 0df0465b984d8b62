//! Static file lookup
//!
//! This module maps normalized request paths onto the document root and
//! provides the filesystem capability the connection handler reads from.

pub mod store;
pub mod target;

pub use store::{DiskStore, FileStore};
pub use target::ResolvedTarget;
