//! HTTP transport implementation using hyper-util.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use std::time::Duration;

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper_rustls::HttpsConnector;
use hyper_util::{
    client::legacy::{Client, connect::HttpConnector},
    rt::TokioExecutor,
};
use tower::Layer;
use tower::util::BoxCloneService;
use tower_service::Service;

use crate::{
    Error, Request, Response, Result,
    config::TransportConfig,
    connector::https_connector,
    middleware::{LogLevel, LoggingLayer},
};

// ============================================================================
// Type-Erased Service for Middleware Composition
// ============================================================================

/// Type-erased service for middleware composition.
pub type BoxedService = BoxCloneService<Request<Bytes>, Response<Bytes>, Error>;

/// Future type for Tower Service implementation.
pub type ServiceFuture = Pin<Box<dyn Future<Output = Result<Response<Bytes>>> + Send + 'static>>;

/// Thread-safe wrapper for `BoxedService`.
///
/// `BoxCloneService` is not `Sync`; the mutex is only held while cloning it.
#[derive(Clone)]
struct SyncService {
    inner: Arc<Mutex<BoxedService>>,
}

impl SyncService {
    fn new(service: BoxedService) -> Self {
        Self {
            inner: Arc::new(Mutex::new(service)),
        }
    }

    fn call(&self, request: Request<Bytes>) -> ServiceFuture {
        let mut service = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone();

        Box::pin(async move { service.call(request).await })
    }
}

// ============================================================================
// Raw Client
// ============================================================================

/// Raw HTTP client using hyper-util, below any middleware.
#[derive(Clone)]
struct RawHyperClient {
    inner: Client<HttpsConnector<HttpConnector>, Full<Bytes>>,
    config: TransportConfig,
}

impl RawHyperClient {
    fn new(config: TransportConfig) -> Self {
        let inner = Client::builder(TokioExecutor::new()).build(https_connector(&config));
        Self { inner, config }
    }

    fn build_hyper_request(request: Request<Bytes>) -> Result<http::Request<Full<Bytes>>> {
        let (method, url, headers, body) = request.into_parts();

        let mut builder = http::Request::builder()
            .method(http::Method::from(method))
            .uri(url.as_str());

        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        builder
            .body(body.map_or_else(Full::default, Full::new))
            .map_err(|e| Error::invalid_request(e.to_string()))
    }

    async fn execute(&self, request: Request<Bytes>) -> Result<Response<Bytes>> {
        let hyper_request = Self::build_hyper_request(request)?;

        let exchange = async {
            let response = self
                .inner
                .request(hyper_request)
                .await
                .map_err(Self::map_hyper_error)?;
            let (parts, body) = response.into_parts();
            let body = body
                .collect()
                .await
                .map_err(|e| Error::connection(e.to_string()))?
                .to_bytes();
            Ok(Response::new(parts.status.as_u16(), parts.headers, body))
        };

        tokio::time::timeout(self.config.timeout, exchange)
            .await
            .map_err(|_| Error::Timeout)?
    }

    #[allow(clippy::needless_pass_by_value)]
    fn map_hyper_error(err: hyper_util::client::legacy::Error) -> Error {
        let msg = err.to_string();

        if err.is_connect() {
            return Error::connection(msg);
        }

        if msg.contains("ssl") || msg.contains("tls") || msg.contains("certificate") {
            return Error::tls(msg);
        }

        Error::connection(msg)
    }
}

impl Service<Request<Bytes>> for RawHyperClient {
    type Response = Response<Bytes>;
    type Error = Error;
    type Future = ServiceFuture;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request<Bytes>) -> Self::Future {
        let client = self.clone();
        Box::pin(async move { client.execute(request).await })
    }
}

// ============================================================================
// Public Client
// ============================================================================

/// HTTP transport using hyper-util with TLS and middleware support.
///
/// Every status code is a successful exchange at this level; only network,
/// TLS and timeout failures are errors.
///
/// # Example
///
/// ```ignore
/// use clasp::HyperClient;
/// use clasp::middleware::LogLevel;
/// use std::time::Duration;
///
/// let client = HyperClient::builder()
///     .timeout(Duration::from_secs(5))
///     .with_logging(LogLevel::Basic)
///     .build();
/// ```
#[derive(Clone)]
pub struct HyperClient {
    service: SyncService,
    config: TransportConfig,
}

impl std::fmt::Debug for HyperClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl HyperClient {
    /// Create a new client with default timeouts and no middleware.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(TransportConfig::default())
    }

    /// Create a new client with custom timeouts and no middleware.
    #[must_use]
    pub fn with_config(config: TransportConfig) -> Self {
        Self {
            service: SyncService::new(BoxCloneService::new(RawHyperClient::new(config))),
            config,
        }
    }

    /// Create a new client builder.
    #[must_use]
    pub fn builder() -> HyperClientBuilder {
        HyperClientBuilder::default()
    }

    /// Get the transport configuration.
    #[must_use]
    pub const fn config(&self) -> &TransportConfig {
        &self.config
    }
}

impl Default for HyperClient {
    fn default() -> Self {
        Self::new()
    }
}

impl clasp_core::HttpClient for HyperClient {
    async fn execute(&self, request: Request<Bytes>) -> Result<Response<Bytes>> {
        self.service.call(request).await
    }
}

impl Service<Request<Bytes>> for HyperClient {
    type Response = Response<Bytes>;
    type Error = Error;
    type Future = ServiceFuture;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<()>> {
        // The wrapped service is polled when called
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request<Bytes>) -> Self::Future {
        self.service.call(request)
    }
}

/// Builder for [`HyperClient`].
///
/// # Example
///
/// ```ignore
/// use clasp::HyperClient;
/// use clasp::middleware::{LogLevel, LoggingLayer};
///
/// let client = HyperClient::builder()
///     .layer(LoggingLayer::new(LogLevel::Full))
///     .build();
/// ```
#[derive(Default)]
pub struct HyperClientBuilder {
    config: TransportConfig,
    layers: Vec<Arc<dyn Fn(BoxedService) -> BoxedService + Send + Sync>>,
}

impl std::fmt::Debug for HyperClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperClientBuilder")
            .field("config", &self.config)
            .field("layers_count", &self.layers.len())
            .finish()
    }
}

impl HyperClientBuilder {
    /// Replace all timeouts at once.
    #[must_use]
    pub const fn config(mut self, config: TransportConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the request timeout (applied at the connection level, not middleware).
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the connection timeout.
    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Add a Tower layer to the client.
    ///
    /// Layers are applied in order: first added = outermost (processes requests first).
    #[must_use]
    pub fn layer<L>(mut self, layer: L) -> Self
    where
        L: Layer<BoxedService> + Send + Sync + 'static,
        L::Service: Service<Request<Bytes>, Response = Response<Bytes>, Error = Error>
            + Clone
            + Send
            + 'static,
        <L::Service as Service<Request<Bytes>>>::Future: Send,
    {
        self.layers.push(Arc::new(move |service| {
            BoxCloneService::new(layer.layer(service))
        }));
        self
    }

    /// Add request/response logging.
    #[must_use]
    pub fn with_logging(self, level: LogLevel) -> Self {
        self.layer(LoggingLayer::new(level))
    }

    /// Build the client with all configured middleware.
    #[must_use]
    pub fn build(self) -> HyperClient {
        let mut service: BoxedService = BoxCloneService::new(RawHyperClient::new(self.config));

        // Wrap innermost first so the first added layer ends up outermost
        for layer_fn in self.layers.into_iter().rev() {
            service = layer_fn(service);
        }

        HyperClient {
            service: SyncService::new(service),
            config: self.config,
        }
    }
}
