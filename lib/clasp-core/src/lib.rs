//! Core types and traits for the clasp declarative HTTP client binding.
//!
//! A binding is a set of declared [`Operation`]s. Each call runs through the
//! same pipeline:
//!
//! 1. a [`Request`] is built from the operation's [`OperationDescriptor`],
//!    with the input encoded by the [`Codec`];
//! 2. an [`HttpClient`] executes it;
//! 3. the [`Response`] is [`Classified`] by status code;
//! 4. a success is turned into the operation output ([`FromResponse`]), a
//!    failure into an [`Error`] by the [`ErrorNormalizer`].
//!
//! This crate is transport-agnostic; the `clasp` crate provides the hyper
//! transport and the dispatcher.

mod classify;
mod client;
mod codec;
mod error;
mod method;
mod normalize;
mod operation;
mod path_template;
pub mod prelude;
mod request;
mod response;

pub use classify::Classified;
pub use client::HttpClient;
pub use codec::{APPLICATION_JSON, Codec, JsonCodec, from_json, to_json};
pub use error::{ClientError, Error, Result};
pub use method::Method;
pub use normalize::{DECODABLE_STATUS, ErrorNormalizer, fallback};
pub use operation::{BodyKind, FromResponse, Json, Operation, OperationDescriptor};
pub use path_template::PathTemplate;
pub use request::{Request, RequestBuilder};
pub use response::Response;

// Re-export http crate types for status codes and headers
pub use http::{HeaderMap, StatusCode, header};
