/// HTTP status codes the server answers with.
///
/// - `Ok` (200): File found and served
/// - `Forbidden` (403): Extension not on the allow-list
/// - `NotFound` (404): No such file under the document root
/// - `MethodNotAllowed` (405): Anything but GET or HEAD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 403 Forbidden
    Forbidden,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
}

/// Protocol version used when the request did not carry one.
pub const DEFAULT_VERSION: &str = "HTTP/1.1";

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use docroot::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Forbidden => 403,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
        }
    }

    /// Returns the reason phrase sent on the status line.
    ///
    /// # Example
    ///
    /// ```
    /// # use docroot::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::Forbidden.reason_phrase(), "Forbidden");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
        }
    }
}

/// A response ready to be serialized by the
/// [`ResponseWriter`](crate::http::writer::ResponseWriter).
///
/// The header set is fixed (Date, Server, Connection, Content-Type,
/// Content-Length), so only the variable parts are stored here.
/// `content_length` is kept separately from `body` because a HEAD response
/// advertises the file size without carrying any bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// Status-line protocol version
    pub version: String,
    /// Value of the Content-Type header, empty when `None`
    pub content_type: Option<String>,
    /// Value of the Content-Length header
    pub content_length: u64,
    /// Bytes sent after the header block
    pub body: Vec<u8>,
}

/// Builder for constructing responses in a fluent style.
///
/// # Example
///
/// ```ignore
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .content_type("text/html")
///     .body(b"<p>hi</p>".to_vec())
///     .build();
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    version: Option<String>,
    content_type: Option<String>,
    content_length: Option<u64>,
    body: Vec<u8>,
}

impl ResponseBuilder {
    /// Creates a new response builder with the specified status code.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            version: None,
            content_type: None,
            content_length: None,
            body: Vec::new(),
        }
    }

    /// Echoes the request's protocol version on the status line.
    pub fn version(mut self, version: Option<&str>) -> Self {
        self.version = version.map(str::to_string);
        self
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Overrides the advertised length (used by HEAD).
    pub fn content_length(mut self, len: u64) -> Self {
        self.content_length = Some(len);
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Builds the final Response.
    ///
    /// Content-Length defaults to the body size unless set explicitly.
    pub fn build(self) -> Response {
        let content_length = self
            .content_length
            .unwrap_or(self.body.len() as u64);

        Response {
            status: self.status,
            version: self.version.unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            content_type: self.content_type,
            content_length,
            body: self.body,
        }
    }
}

impl Response {
    /// Header-only response for an error status.
    pub fn status_only(status: StatusCode, version: Option<&str>) -> Self {
        ResponseBuilder::new(status).version(version).build()
    }

    /// Creates a 404 Not Found response.
    pub fn not_found(version: Option<&str>) -> Self {
        Self::status_only(StatusCode::NotFound, version)
    }

    /// Creates a 403 Forbidden response.
    pub fn forbidden(version: Option<&str>) -> Self {
        Self::status_only(StatusCode::Forbidden, version)
    }

    /// Creates a 405 Method Not Allowed response.
    pub fn method_not_allowed(version: Option<&str>) -> Self {
        Self::status_only(StatusCode::MethodNotAllowed, version)
    }
}
