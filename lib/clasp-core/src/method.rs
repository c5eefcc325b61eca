//! HTTP method types.

use derive_more::Display;

/// HTTP request method an operation is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Method {
    /// `GET` - read a resource or a collection.
    #[display("GET")]
    Get,
    /// `POST` - create a resource.
    #[display("POST")]
    Post,
    /// `PUT` - replace a resource.
    #[display("PUT")]
    Put,
    /// `PATCH` - partially update a resource.
    #[display("PATCH")]
    Patch,
    /// `DELETE` - remove a resource.
    #[display("DELETE")]
    Delete,
}

impl Method {
    /// Upper-case method token, as written on the request line.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Put => Self::PUT,
            Method::Patch => Self::PATCH,
            Method::Delete => Self::DELETE,
        }
    }
}
