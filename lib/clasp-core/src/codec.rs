//! Body encoding and decoding.
//!
//! A [`Codec`] is the one serialization format a client speaks, used both
//! for request bodies and for success and error response bodies.
//!
//! Decoding is status-aware: a codec may answer `Ok(None)` for responses it
//! considers to carry no decodable content (non-2xx in particular). The
//! [`ErrorNormalizer`](crate::ErrorNormalizer) relies on
//! [`Codec::decodes_only_success`] to know whether it must present such a
//! codec with a 2xx copy of an error response.

use bytes::Bytes;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{Response, Result};

/// Media type of JSON bodies.
pub const APPLICATION_JSON: &str = "application/json";

/// Paired encode/decode capability for one serialization format.
///
/// Implementations must be shareable across concurrent calls.
pub trait Codec: Send + Sync + 'static {
    /// Media type sent as `Content-Type` and `Accept` when an operation does
    /// not declare its own.
    fn media_type(&self) -> &'static str;

    /// Encode a request body.
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Bytes>;

    /// Decode a response body.
    ///
    /// Returns `Ok(None)` when the response carries nothing to decode for
    /// this codec, and an error when the body does not parse as `T`.
    fn decode<T: DeserializeOwned>(&self, response: &Response<Bytes>) -> Result<Option<T>>;

    /// Whether [`Codec::decode`] yields `Ok(None)` for every non-2xx status.
    fn decodes_only_success(&self) -> bool {
        true
    }
}

/// JSON codec backed by `serde_json`.
///
/// Like most decoders it treats decoding as meaningful for 2xx responses
/// only: non-2xx statuses, `204 No Content` and empty bodies all decode to
/// `Ok(None)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn media_type(&self) -> &'static str {
        APPLICATION_JSON
    }

    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Bytes> {
        to_json(value)
    }

    fn decode<T: DeserializeOwned>(&self, response: &Response<Bytes>) -> Result<Option<T>> {
        if !response.is_success()
            || response.status() == http::StatusCode::NO_CONTENT.as_u16()
            || response.body().is_empty()
        {
            return Ok(None);
        }
        from_json(response.body()).map(Some)
    }
}

/// Serialize a value to JSON bytes.
///
/// # Example
///
/// ```
/// use clasp_core::to_json;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Post { title: String }
///
/// let bytes = to_json(&Post { title: "running goal".to_string() }).expect("serialize");
/// assert_eq!(bytes.as_ref(), br#"{"title":"running goal"}"#);
/// ```
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<Bytes> {
    serde_json::to_vec(value)
        .map(Bytes::from)
        .map_err(Into::into)
}

/// Deserialize JSON bytes with path-aware error messages.
///
/// The error names the exact field that failed (e.g. `[1].author`).
///
/// # Example
///
/// ```
/// use clasp_core::from_json;
/// use serde::Deserialize;
///
/// #[derive(Debug, PartialEq, Deserialize)]
/// struct Post { title: String }
///
/// let post: Post = from_json(br#"{"title":"t"}"#).expect("deserialize");
/// assert_eq!(post, Post { title: "t".to_string() });
/// ```
pub fn from_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        crate::Error::json_deserialization(e.path().to_string(), e.inner().to_string())
    })
}
