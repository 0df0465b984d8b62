use std::fmt;

/// HTTP request methods.
///
/// Only GET and HEAD are served; every other token is kept verbatim in
/// `OTHER` so it can be logged before the request is answered with
/// 405 Method Not Allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// Any other verb, as received
    OTHER(String),
}

/// A request line parsed from a client connection.
///
/// Built once per connection by [`parse_request`](crate::http::parser::parse_request)
/// and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method, `None` when the request line was empty
    pub method: Option<Method>,
    /// The request-target exactly as the client sent it (e.g. "/a%20b/?x=1")
    pub raw_path: String,
    /// The decoded, filtered path used to locate a file (e.g. "/a b/index.html")
    pub path: String,
    /// Protocol version token (e.g. "HTTP/1.1"), if one was sent
    pub version: Option<String>,
}

impl Method {
    /// Classifies a method token.
    ///
    /// Matching is case-sensitive, as in HTTP.
    ///
    /// # Example
    ///
    /// ```
    /// # use docroot::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Method::GET);
    /// assert_eq!(Method::from_str("get"), Method::OTHER("get".to_string()));
    /// ```
    pub fn from_str(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            "HEAD" => Method::HEAD,
            other => Method::OTHER(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::HEAD => "HEAD",
            Method::OTHER(s) => s,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Request {
    /// Method name for log lines; `-` when no method was received.
    pub fn method_name(&self) -> &str {
        self.method.as_ref().map(Method::as_str).unwrap_or("-")
    }

    /// The protocol version, if it looks like one (`HTTP/x.y`).
    pub fn http_version(&self) -> Option<&str> {
        self.version
            .as_deref()
            .filter(|v| v.starts_with("HTTP/"))
    }
}
