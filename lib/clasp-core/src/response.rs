//! HTTP response as handed back by the transport.
//!
//! A [`Response`] is owned by a single call. Nothing in the pipeline mutates
//! one in place: [`Response::with_status`] derives a copy instead.

use bytes::Bytes;
use http::HeaderMap;

/// HTTP response with status, headers, and body.
///
/// Header lookups are case-insensitive.
#[derive(Debug, Clone)]
pub struct Response<B = Bytes> {
    status: u16,
    headers: HeaderMap,
    body: B,
}

impl<B> Response<B> {
    /// Creates a new response.
    #[must_use]
    pub fn new(status: u16, headers: HeaderMap, body: B) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Response headers.
    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Single header value by name, ignoring case.
    ///
    /// Values that are not visible ASCII are reported as absent.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// Response body.
    #[must_use]
    pub const fn body(&self) -> &B {
        &self.body
    }

    /// Status is 2xx.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

impl<B: Clone> Response<B> {
    /// Copy of this response with another status code, headers and body intact.
    #[must_use]
    pub fn with_status(&self, status: u16) -> Self {
        Self {
            status,
            headers: self.headers.clone(),
            body: self.body.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use http::header::CONTENT_TYPE;
    use http::HeaderValue;

    use super::*;

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    #[test]
    fn header_lookup_ignores_case() {
        let response = Response::new(200, json_headers(), Bytes::new());

        assert_eq!(response.header("Content-Type"), Some("application/json"));
        assert_eq!(response.header("content-type"), Some("application/json"));
        assert_eq!(response.header("CONTENT-TYPE"), Some("application/json"));
        assert_eq!(response.header("x-missing"), None);
    }

    #[test]
    fn status_ranges() {
        let response = Response::new(204, HeaderMap::new(), Bytes::new());
        assert!(response.is_success());

        let response = Response::new(300, HeaderMap::new(), Bytes::new());
        assert!(!response.is_success());

        let response = Response::new(199, HeaderMap::new(), Bytes::new());
        assert!(!response.is_success());
    }

    #[test]
    fn with_status_leaves_original_untouched() {
        let body = Bytes::from_static(br#"{"message":"boom"}"#);
        let original = Response::new(500, json_headers(), body.clone());

        let rewritten = original.with_status(200);

        assert_eq!(rewritten.status(), 200);
        assert_eq!(rewritten.body(), &body);
        assert_eq!(rewritten.header("content-type"), Some("application/json"));
        assert_eq!(original.status(), 500);
        assert_eq!(original.body(), &body);
    }
}
