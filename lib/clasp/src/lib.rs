//! Declarative HTTP client binding for Rust.
//!
//! Operations are declared once as types implementing [`Operation`] and run
//! through a [`Client`], which encodes the input, sends the request over a
//! [`HyperClient`] (or any other [`HttpClient`]), and turns the response
//! into either the typed output or a normalized [`Error`].
//!
//! # Example
//!
//! ```ignore
//! use clasp::prelude::*;
//!
//! #[derive(Debug, Deserialize)]
//! pub struct Tag {
//!     name: String,
//! }
//!
//! pub struct ListTags;
//!
//! impl Operation for ListTags {
//!     type Input = ();
//!     type Output = Json<Vec<Tag>>;
//!
//!     const DESCRIPTOR: &'static OperationDescriptor =
//!         &OperationDescriptor::new("list_tags", Method::Get, "/tags")
//!             .response_body(BodyKind::Encoded);
//! }
//!
//! let config = ClientConfig::builder().base_url("http://localhost:3000").build()?;
//! let client = Client::connect(config);
//! let Json(tags) = client.invoke::<ListTags>(&()).await?;
//! ```

mod client;
mod config;
mod connector;
mod dispatch;
pub mod middleware;
pub mod prelude;

// Re-export client types
pub use client::{BoxedService, HyperClient, HyperClientBuilder, ServiceFuture};
pub use config::{ClientConfig, ClientConfigBuilder, TransportConfig};
pub use dispatch::Client;

// Re-export tower for middleware composition
pub use tower;

// Re-export core types
pub use clasp_core::{
    APPLICATION_JSON, BodyKind, Classified, ClientError, Codec, DECODABLE_STATUS, Error,
    ErrorNormalizer, FromResponse, HttpClient, Json, JsonCodec, Method, Operation,
    OperationDescriptor, PathTemplate, Request, RequestBuilder, Response, Result, fallback,
    from_json, to_json,
};

// Re-export http types for status codes and headers
pub use clasp_core::{HeaderMap, StatusCode, header};

pub use url;
