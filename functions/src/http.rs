//! HTTP trigger and output bindings
//!
//! ```rust
//! use functions::{HttpRequest, HttpResponse, Request, Response};
//!
//! fn greet(req: &dyn HttpRequest) -> functions::Result<Response> {
//!     let body = req.get_json()?;
//!     let name = body["name"].as_str().unwrap_or("world");
//!     Ok(Response::text(format!("Hello, {}", name)))
//! }
//!
//! let req = Request::new("post", "https://example.com/api/greet")
//!     .unwrap()
//!     .with_body(r#"{"name": "Jane"}"#);
//! let resp = greet(&req).unwrap();
//! assert_eq!(resp.get_body(), "Hello, Jane");
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{decode_json, decode_json_as, BindingError, Result};
use crate::types::{Body, Headers, Params};

/// The default mimetype of a response
pub const DEFAULT_MIMETYPE: &str = "text/plain";

/// The default charset of a response
pub const DEFAULT_CHARSET: &str = "utf-8";

/// A read-only view over an inbound HTTP request
pub trait HttpRequest {
    /// Request method, upper case
    fn method(&self) -> &str;

    fn url(&self) -> &str;

    fn headers(&self) -> &Headers;

    /// Query string parameters
    fn params(&self) -> &Params;

    /// The full raw request body; repeated calls return the same bytes
    fn get_body(&self) -> Body;

    /// Decode the request body as JSON
    ///
    /// Fails with [BindingError::MalformedContent] when the body is not valid JSON.
    fn get_json(&self) -> Result<serde_json::Value> {
        decode_json(&self.get_body())
    }

    /// Decode the request body into a typed value
    fn json<T: DeserializeOwned>(&self) -> Result<T>
    where
        Self: Sized,
    {
        decode_json_as(&self.get_body())
    }
}

/// An outbound HTTP result
pub trait HttpResponse {
    fn status_code(&self) -> u16;

    fn mimetype(&self) -> &str;

    fn charset(&self) -> &str;

    fn headers(&self) -> &Headers;

    /// Mutable access to the response headers
    fn headers_mut(&mut self) -> &mut Headers;

    /// The response payload, however it was originally supplied
    fn get_body(&self) -> Body;
}

/// An inbound request as populated by the host
#[derive(Clone, Debug, PartialEq)]
pub struct Request {
    method: String,
    url: String,
    headers: Headers,
    params: Params,
    body: Body,
}

impl Request {
    /// Create a request with an empty body
    ///
    /// Query parameters are parsed from `url`. Fails with [BindingError::InvalidMethod] when
    /// `method` is not an HTTP method token.
    pub fn new<M: AsRef<str>, U: Into<String>>(method: M, url: U) -> Result<Self> {
        let method = method.as_ref().to_ascii_uppercase();
        if method.is_empty() || ::http::Method::from_bytes(method.as_bytes()).is_err() {
            return Err(BindingError::InvalidMethod(method));
        }

        let url = url.into();
        let params = parse_query(&url);

        Ok(Request {
            method,
            url,
            headers: Headers::new(),
            params,
            body: Body::new(),
        })
    }

    /// Fails when `name` or `value` is not valid in an HTTP header
    pub fn with_header<K: AsRef<str>, V: AsRef<str>>(mut self, name: K, value: V) -> Result<Self> {
        self.headers.insert(name, value)?;
        Ok(self)
    }

    /// Add or replace a query parameter
    pub fn with_param<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn with_body<B: Into<Body>>(mut self, body: B) -> Self {
        self.body = body.into();
        self
    }
}

impl HttpRequest for Request {
    fn method(&self) -> &str {
        &self.method
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn headers(&self) -> &Headers {
        &self.headers
    }

    fn params(&self) -> &Params {
        &self.params
    }

    fn get_body(&self) -> Body {
        self.body.clone()
    }
}

/// Parse the query string of `url` into a parameter map
///
/// Later occurrences of a name win. `+` decodes to a space.
fn parse_query(url: &str) -> Params {
    let query = match url.split_once('?') {
        Some((_, rest)) => rest.split('#').next().unwrap_or(""),
        None => return Params::new(),
    };

    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(name), decode_component(value))
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    let raw = raw.replace('+', " ");
    match urlencoding::decode(&raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw,
    }
}

/// An outbound response built by user code
#[derive(Clone, Debug, PartialEq)]
pub struct Response {
    status: ::http::StatusCode,
    mimetype: String,
    charset: String,
    headers: Headers,
    body: Body,
}

impl Response {
    /// A `200 OK` response with the given body
    pub fn new<B: Into<Body>>(body: B) -> Self {
        Response {
            status: ::http::StatusCode::OK,
            mimetype: String::from(DEFAULT_MIMETYPE),
            charset: String::from(DEFAULT_CHARSET),
            headers: Headers::new(),
            body: body.into(),
        }
    }

    pub fn text<S: Into<String>>(text: S) -> Self {
        Response::new(text.into())
    }

    /// A `200 OK` response carrying `value` serialized as JSON
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        let body = serde_json::to_vec(value).map_err(BindingError::Serialize)?;
        Ok(Response::new(body).with_mimetype("application/json"))
    }

    /// A response without a body
    pub fn empty(status: u16) -> Result<Self> {
        Response::new(Body::new()).with_status(status)
    }

    /// Fails with [BindingError::InvalidStatus] when `status` is not a valid HTTP status code
    pub fn with_status(mut self, status: u16) -> Result<Self> {
        self.status =
            ::http::StatusCode::from_u16(status).map_err(|_| BindingError::InvalidStatus(status))?;
        Ok(self)
    }

    pub fn with_mimetype<S: Into<String>>(mut self, mimetype: S) -> Self {
        self.mimetype = mimetype.into();
        self
    }

    pub fn with_charset<S: Into<String>>(mut self, charset: S) -> Self {
        self.charset = charset.into();
        self
    }

    pub fn with_header<K: AsRef<str>, V: AsRef<str>>(mut self, name: K, value: V) -> Result<Self> {
        self.headers.insert(name, value)?;
        Ok(self)
    }

    /// The `Content-Type` value for this response, e.g. `text/plain; charset=utf-8`
    pub fn content_type(&self) -> String {
        if self.charset.is_empty() {
            self.mimetype.clone()
        } else {
            format!("{}; charset={}", self.mimetype, self.charset)
        }
    }
}

impl HttpResponse for Response {
    fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    fn mimetype(&self) -> &str {
        &self.mimetype
    }

    fn charset(&self) -> &str {
        &self.charset
    }

    fn headers(&self) -> &Headers {
        &self.headers
    }

    fn headers_mut(&mut self) -> &mut Headers {
        &mut self.headers
    }

    fn get_body(&self) -> Body {
        self.body.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn method_is_normalized_and_validated() {
        let req = Request::new("get", "https://example.com/").unwrap();
        assert_eq!(req.method(), "GET");

        let err = Request::new("GE T", "https://example.com/").unwrap_err();
        assert!(matches!(err, BindingError::InvalidMethod(_)));
        assert!(Request::new("", "https://example.com/").is_err());
    }

    #[test]
    fn params_are_parsed_from_the_url() {
        let url = "https://example.com/api?name=Jane+Doe&city=S%C3%A3o%20Paulo&flag#frag";
        let req = Request::new("GET", url).unwrap();
        assert_eq!(req.params().get("name").map(String::as_str), Some("Jane Doe"));
        assert_eq!(req.params().get("city").map(String::as_str), Some("São Paulo"));
        assert_eq!(req.params().get("flag").map(String::as_str), Some(""));
        assert_eq!(req.params().len(), 3);
    }

    #[test]
    fn url_without_query_has_no_params() {
        let req = Request::new("GET", "https://example.com/api").unwrap();
        assert!(req.params().is_empty());
    }

    #[test]
    fn get_body_is_repeatable() {
        let req = Request::new("POST", "/").unwrap().with_body("payload");
        assert_eq!(req.get_body(), req.get_body());
        assert_eq!(req.get_body(), "payload");
    }

    #[test]
    fn get_json_decodes_and_rejects() {
        let req = Request::new("POST", "/").unwrap().with_body(r#"{"a": 1}"#);
        assert_eq!(req.get_json().unwrap(), json!({"a": 1}));

        let bad = Request::new("POST", "/").unwrap().with_body("{not json");
        assert!(bad.get_json().unwrap_err().is_malformed_content());
    }

    #[test]
    fn typed_json_decoding() {
        #[derive(serde::Deserialize)]
        struct Greeting {
            name: String,
        }

        let req = Request::new("POST", "/").unwrap().with_body(r#"{"name": "world"}"#);
        let greeting: Greeting = req.json().unwrap();
        assert_eq!(greeting.name, "world");
    }

    #[test]
    fn response_defaults() {
        let resp = Response::text("OK");
        assert_eq!(resp.status_code(), 200);
        assert_eq!(resp.mimetype(), "text/plain");
        assert_eq!(resp.charset(), "utf-8");
        assert_eq!(resp.content_type(), "text/plain; charset=utf-8");
        assert_eq!(resp.get_body(), "OK");
    }

    #[test]
    fn json_response_body_is_serialized() {
        let resp = Response::json(&json!({"ok": true})).unwrap();
        assert_eq!(resp.mimetype(), "application/json");
        let decoded: serde_json::Value = serde_json::from_slice(&resp.get_body()).unwrap();
        assert_eq!(decoded, json!({"ok": true}));
    }

    #[test]
    fn status_must_be_valid() {
        assert_eq!(Response::empty(204).unwrap().status_code(), 204);
        assert!(matches!(Response::empty(42), Err(BindingError::InvalidStatus(42))));
        assert!(Response::text("x").with_status(1000).is_err());
    }

    #[test]
    fn headers_are_mutable_after_construction() {
        let mut resp = Response::text("OK");
        resp.headers_mut().insert("X-Test", "1").unwrap();
        assert_eq!(resp.headers().get("X-Test"), Some("1"));

        resp.headers_mut().remove("X-Test");
        assert!(!resp.headers().contains_key("X-Test"));
    }

    #[test]
    fn builders_reject_invalid_headers() {
        let req = Request::new("GET", "/").unwrap().with_header("Accept", "text/plain").unwrap();
        assert_eq!(req.headers().get("accept"), Some("text/plain"));

        let err = Request::new("GET", "/").unwrap().with_header("bad name\n", "x").unwrap_err();
        assert!(matches!(err, BindingError::InvalidHeaderName(_)));

        let err = Response::text("OK").with_header("X-Test", "a\r\nb").unwrap_err();
        assert!(matches!(err, BindingError::InvalidHeaderValue(_)));
    }
}
