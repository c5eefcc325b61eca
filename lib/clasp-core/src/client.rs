//! Transport trait.
//!
//! [`HttpClient`] is the seam between the binding and the network. The
//! `clasp` crate provides a hyper-based implementation; tests and custom
//! stacks can supply their own.

use std::future::Future;
use std::sync::Arc;

use bytes::Bytes;

use crate::{Request, Response, Result};

/// Core HTTP client trait.
///
/// An implementation executes one request and reports either the response,
/// whatever its status, or a transport failure. Status codes are never
/// turned into errors at this level.
pub trait HttpClient: Send + Sync {
    /// Execute an HTTP request and return the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be carried out:
    /// - Network errors
    /// - TLS errors
    /// - Timeouts
    /// - Invalid request
    fn execute(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<Response<Bytes>>> + Send;
}

impl<T: HttpClient> HttpClient for Arc<T> {
    fn execute(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<Response<Bytes>>> + Send {
        (**self).execute(request)
    }
}
