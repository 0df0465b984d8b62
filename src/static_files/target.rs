use std::path::{Path, PathBuf};

use crate::http::mime;
use crate::static_files::store::FileStore;

/// Where a request path lands on disk and whether it may be served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub filesystem_path: PathBuf,
    /// `None` when the extension is not on the allow-list
    pub mime_type: Option<&'static str>,
    pub exists: bool,
}

impl ResolvedTarget {
    /// Resolves a normalized request path against the store's root.
    pub async fn resolve<S: FileStore>(store: &S, path: &str) -> Self {
        let filesystem_path = join_root(store.root(), path);
        let exists = store.exists(&filesystem_path).await;

        Self {
            filesystem_path,
            mime_type: mime::resolve(path),
            exists,
        }
    }
}

/// Joins a request path onto `root`.
///
/// Every leading `/` is stripped first; otherwise `//etc/passwd` would be
/// joined as an absolute path and escape the root.
pub fn join_root(root: &Path, path: &str) -> PathBuf {
    let joined = root.join(path.trim_start_matches('/'));

    if joined.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        joined
    }
}
