//! Operation declarations.
//!
//! An operation is declared once, as a type implementing [`Operation`]. Its
//! [`OperationDescriptor`] is a `'static` constant describing the HTTP shape
//! of the call, shared read-only by every call and every thread. The typed
//! parts (what goes in, what comes out) live in the trait's associated types.
//!
//! ```
//! use clasp_core::{BodyKind, Json, Method, Operation, OperationDescriptor};
//!
//! struct ListTags;
//!
//! impl Operation for ListTags {
//!     type Input = ();
//!     type Output = Json<Vec<String>>;
//!
//!     const DESCRIPTOR: &'static OperationDescriptor =
//!         &OperationDescriptor::new("list_tags", Method::Get, "/tags")
//!             .response_body(BodyKind::Encoded);
//! }
//!
//! assert_eq!(ListTags::DESCRIPTOR.to_string(), "list_tags GET /tags");
//! ```

use std::fmt;

use bytes::Bytes;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{Codec, Error, Method, PathTemplate, Response, Result};

/// Whether a request or response carries a codec-encoded body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BodyKind {
    /// No body is sent, or the body is ignored.
    #[default]
    Empty,
    /// The body goes through the client's codec.
    Encoded,
}

/// Static description of one remote operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperationDescriptor {
    name: &'static str,
    method: Method,
    path: PathTemplate,
    headers: &'static [(&'static str, &'static str)],
    request_body: BodyKind,
    response_body: BodyKind,
}

impl OperationDescriptor {
    /// Describe an operation with no headers and no bodies.
    ///
    /// # Panics
    ///
    /// Panics if `path` does not start with `/`.
    #[must_use]
    pub const fn new(name: &'static str, method: Method, path: &'static str) -> Self {
        Self {
            name,
            method,
            path: PathTemplate::new(path),
            headers: &[],
            request_body: BodyKind::Empty,
            response_body: BodyKind::Empty,
        }
    }

    /// Headers sent on every call, as `(name, value)` pairs.
    #[must_use]
    pub const fn headers(mut self, headers: &'static [(&'static str, &'static str)]) -> Self {
        self.headers = headers;
        self
    }

    /// Declare whether the operation's input is encoded as the request body.
    #[must_use]
    pub const fn request_body(mut self, kind: BodyKind) -> Self {
        self.request_body = kind;
        self
    }

    /// Declare whether a success response body is decoded.
    #[must_use]
    pub const fn response_body(mut self, kind: BodyKind) -> Self {
        self.response_body = kind;
        self
    }

    /// Operation name, used in logs and generic error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Path relative to the base URL.
    #[must_use]
    pub const fn path(&self) -> PathTemplate {
        self.path
    }

    /// Declared headers.
    #[must_use]
    pub const fn declared_headers(&self) -> &'static [(&'static str, &'static str)] {
        self.headers
    }

    /// Request body kind.
    #[must_use]
    pub const fn request_body_kind(&self) -> BodyKind {
        self.request_body
    }

    /// Response body kind.
    #[must_use]
    pub const fn response_body_kind(&self) -> BodyKind {
        self.response_body
    }
}

impl fmt::Display for OperationDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.method, self.path)
    }
}

/// A declared remote operation.
pub trait Operation {
    /// Request payload. Use `()` for operations without a request body.
    type Input: Serialize + Send + Sync + ?Sized;

    /// What a success response turns into.
    type Output: FromResponse + Send;

    /// HTTP shape of the operation.
    const DESCRIPTOR: &'static OperationDescriptor;
}

// ============================================================================
// Success Outputs
// ============================================================================

/// Conversion of a success response into an operation output.
pub trait FromResponse: Sized {
    /// Build the output from a 2xx response.
    fn from_response<C: Codec>(codec: &C, response: &Response<Bytes>) -> Result<Self>;
}

/// No output: the body of a success response is ignored.
impl FromResponse for () {
    fn from_response<C: Codec>(_codec: &C, _response: &Response<Bytes>) -> Result<Self> {
        Ok(())
    }
}

/// Output decoded from the response body by the client's codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    /// Unwrap the decoded value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: DeserializeOwned> FromResponse for Json<T> {
    fn from_response<C: Codec>(codec: &C, response: &Response<Bytes>) -> Result<Self> {
        codec
            .decode(response)?
            .map(Json)
            .ok_or(Error::EmptyBody {
                status: response.status(),
            })
    }
}

/// Collection decoded by the client's codec. A success response with nothing
/// to decode (`204 No Content`, empty body) is the empty collection.
impl<T: DeserializeOwned> FromResponse for Vec<T> {
    fn from_response<C: Codec>(codec: &C, response: &Response<Bytes>) -> Result<Self> {
        Ok(codec.decode(response)?.unwrap_or_default())
    }
}
