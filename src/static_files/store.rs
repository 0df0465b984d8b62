//! Filesystem access behind a trait, so the connection handler can be
//! exercised without touching disk.

use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};

/// Read-only access to the files under a document root.
///
/// Implementations are shared by every connection and must not hold
/// per-request state.
pub trait FileStore: Send + Sync + 'static {
    /// Directory all request paths are resolved against.
    fn root(&self) -> &Path;

    /// Whether anything (file or directory) exists at `path`.
    fn exists(&self, path: &Path) -> impl Future<Output = bool> + Send;

    /// Full contents of the file at `path`.
    fn read(&self, path: &Path) -> impl Future<Output = io::Result<Vec<u8>>> + Send;

    /// Size in bytes of the file at `path`, from metadata only.
    fn size(&self, path: &Path) -> impl Future<Output = io::Result<u64>> + Send;
}

/// [`FileStore`] backed by the local filesystem.
#[derive(Debug, Clone)]
pub struct DiskStore {
    root: PathBuf,
}

impl DiskStore {
    /// Creates a store rooted at `root`.
    ///
    /// The directory is not checked here; a missing root simply makes every
    /// request a 404.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl FileStore for DiskStore {
    fn root(&self) -> &Path {
        &self.root
    }

    async fn exists(&self, path: &Path) -> bool {
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }

    async fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        tokio::fs::read(path).await
    }

    async fn size(&self, path: &Path) -> io::Result<u64> {
        let meta = tokio::fs::metadata(path).await?;
        Ok(meta.len())
    }
}
