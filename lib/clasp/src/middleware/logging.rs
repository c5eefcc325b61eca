//! Request/response logging middleware.
//!
//! Events are emitted with `tracing` inside an `http_request` span. What
//! gets logged depends on the [`LogLevel`].

use std::borrow::Cow;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Instant;

use bytes::Bytes;
use tower::{Layer, Service};
use tracing::{Instrument, Level, info, span, warn};

use crate::{Error, Request, Response, Result};

/// How much of each exchange to log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Method, URL, status and elapsed time.
    #[default]
    Basic,
    /// [`LogLevel::Basic`] plus request and response headers.
    Headers,
    /// [`LogLevel::Headers`] plus request and response bodies.
    Full,
}

/// Layer that adds request/response logging.
///
/// # Example
///
/// ```ignore
/// use clasp::middleware::{LogLevel, LoggingLayer};
/// use tower::ServiceBuilder;
///
/// let service = ServiceBuilder::new()
///     .layer(LoggingLayer::new(LogLevel::Headers))
///     .service(client);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingLayer {
    level: LogLevel,
}

impl LoggingLayer {
    /// Create a logging layer at the given level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Level this layer logs at.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }
}

impl<S> Layer<S> for LoggingLayer {
    type Service = Logging<S>;

    fn layer(&self, inner: S) -> Self::Service {
        Logging {
            inner,
            level: self.level,
        }
    }
}

/// Service that logs requests and responses.
#[derive(Debug, Clone)]
pub struct Logging<S> {
    inner: S,
    level: LogLevel,
}

impl<S> Service<Request<Bytes>> for Logging<S>
where
    S: Service<Request<Bytes>, Response = Response<Bytes>, Error = Error> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response<Bytes>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<()>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<Bytes>) -> Self::Future {
        let method = request.method();
        let url = request.url().to_string();
        let level = self.level;

        let span = span!(Level::INFO, "http_request", %method, %url);

        let mut inner = self.inner.clone();
        Box::pin(
            async move {
                let start = Instant::now();

                match level {
                    LogLevel::Basic => info!("sending request"),
                    LogLevel::Headers => {
                        info!(headers = ?request.headers(), "sending request");
                    }
                    LogLevel::Full => info!(
                        headers = ?request.headers(),
                        body = %request.body().map_or(Cow::Borrowed(""), lossy),
                        "sending request"
                    ),
                }

                let result = inner.call(request).await;

                // Saturating conversion to u64 (truncates after ~584 million years)
                let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

                match &result {
                    Ok(response) => {
                        let status = response.status();
                        match level {
                            LogLevel::Basic => info!(status, elapsed_ms, "response received"),
                            LogLevel::Headers => info!(
                                status,
                                elapsed_ms,
                                headers = ?response.headers(),
                                "response received"
                            ),
                            LogLevel::Full => info!(
                                status,
                                elapsed_ms,
                                headers = ?response.headers(),
                                body = %lossy(response.body()),
                                "response received"
                            ),
                        }
                    }
                    Err(err) => {
                        warn!(error = %err, elapsed_ms, "request failed");
                    }
                }

                result
            }
            .instrument(span),
        )
    }
}

fn lossy(body: &Bytes) -> Cow<'_, str> {
    String::from_utf8_lossy(body)
}
