//! Operation dispatcher.
//!
//! [`Client`] binds a transport, a base URL and a codec together and runs
//! declared [`Operation`]s through them. The transport can be shared between
//! several bindings (its connection pool and middleware with it).

use std::sync::Arc;

use bytes::Bytes;
use tracing::debug;
use url::Url;

use crate::{
    BodyKind, Classified, ClientConfig, Codec, ErrorNormalizer, FromResponse, HttpClient,
    HyperClient, JsonCodec, Operation, OperationDescriptor, Request, Result,
};

/// Client binding for declared operations.
///
/// # Example
///
/// ```ignore
/// use clasp::{Client, ClientConfig};
///
/// let config = ClientConfig::builder()
///     .base_url("http://localhost:3000")
///     .build()?;
/// let client = Client::connect(config);
/// let posts = client.invoke::<ListPosts>(&()).await?;
/// ```
#[derive(Debug)]
pub struct Client<T = HyperClient, C = JsonCodec> {
    transport: T,
    base_url: Url,
    codec: Arc<C>,
}

impl<T: Clone, C> Clone for Client<T, C> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            base_url: self.base_url.clone(),
            codec: Arc::clone(&self.codec),
        }
    }
}

impl<C> Client<HyperClient, C> {
    /// Create a client over a fresh hyper transport.
    ///
    /// Logging middleware is installed when the configuration sets a level.
    #[must_use]
    pub fn connect(config: ClientConfig<C>) -> Self {
        let mut builder = HyperClient::builder().config(config.transport);
        if let Some(level) = config.log_level {
            builder = builder.with_logging(level);
        }
        Self::new(builder.build(), config.base_url, config.codec)
    }
}

impl<T, C> Client<T, C> {
    /// Create a client over an existing transport.
    #[must_use]
    pub fn new(transport: T, base_url: Url, codec: C) -> Self {
        Self {
            transport,
            base_url,
            codec: Arc::new(codec),
        }
    }

    /// URL every operation path is appended to.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Codec shared by every call.
    #[must_use]
    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T, C> Client<T, C>
where
    T: HttpClient,
    C: Codec,
{
    /// Build the HTTP request for one call of `operation`.
    ///
    /// Declared headers win over the codec's defaults for `Content-Type` and
    /// `Accept`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be resolved or the input cannot be
    /// encoded.
    pub fn build_request<I>(
        &self,
        operation: &OperationDescriptor,
        input: &I,
    ) -> Result<Request<Bytes>>
    where
        I: serde::Serialize + ?Sized,
    {
        let url = operation.path().resolve(&self.base_url)?;

        let mut builder = Request::builder(operation.method(), url).headers(
            operation
                .declared_headers()
                .iter()
                .map(|(name, value)| ((*name).to_string(), (*value).to_string())),
        );

        if operation.request_body_kind() == BodyKind::Encoded {
            builder = builder
                .default_header("Content-Type", self.codec.media_type())
                .body(self.codec.encode(input)?);
        }
        if operation.response_body_kind() == BodyKind::Encoded {
            builder = builder.default_header("Accept", self.codec.media_type());
        }

        Ok(builder.build())
    }

    /// Run operation `O` with the given input.
    ///
    /// A 2xx response becomes the operation output. Any other status becomes
    /// [`Error::Application`](crate::Error::Application) when the body
    /// decodes as a client error, and
    /// [`Error::OpaqueRemote`](crate::Error::OpaqueRemote) otherwise.
    ///
    /// # Errors
    ///
    /// Returns the normalized remote error, a transport error, or a codec
    /// error if a success body cannot be decoded.
    pub async fn invoke<O: Operation>(&self, input: &O::Input) -> Result<O::Output> {
        let operation = O::DESCRIPTOR;
        let request = self.build_request(operation, input)?;

        debug!(operation = operation.name(), url = %request.url(), "invoking operation");
        let response = self.transport.execute(request).await?;

        match Classified::classify(response) {
            Classified::Success(response) => {
                debug!(
                    operation = operation.name(),
                    status = response.status(),
                    "operation succeeded"
                );
                O::Output::from_response(self.codec.as_ref(), &response)
            }
            Classified::Failure(response) => {
                let error = ErrorNormalizer::new(self.codec.as_ref()).normalize(operation, &response);
                debug!(operation = operation.name(), %error, "operation failed");
                Err(error)
            }
        }
    }
}
