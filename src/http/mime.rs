//! Content types for the file extensions the server is willing to serve.

/// Returns the MIME type for `path` based on its trailing extension.
///
/// Only a fixed allow-list is recognised and matching is case-sensitive.
/// `None` means the extension is not allowed (or missing), which is a policy
/// decision rather than a lookup failure: the connection answers 403 even if
/// the file exists.
///
/// ```
/// # use docroot::http::mime;
/// assert_eq!(mime::resolve("/index.html"), Some("text/html"));
/// assert_eq!(mime::resolve("/setup.exe"), None);
/// ```
pub fn resolve(path: &str) -> Option<&'static str> {
    let (_, ext) = path.rsplit_once('.')?;

    match ext {
        "html" => Some("text/html"),
        "css" => Some("text/css"),
        "js" => Some("text/javascript"),
        "jpeg" | "jpg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "swf" => Some("application/x-shockwave-flash"),
        "txt" => Some("text/plain"),
        _ => None,
    }
}
