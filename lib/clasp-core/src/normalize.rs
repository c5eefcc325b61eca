//! Decoding of error responses.
//!
//! The client decodes error bodies with the same [`Codec`] it uses for
//! success bodies. Most codecs only decode 2xx responses and answer `Ok(None)`
//! otherwise, so the normalizer hands such a codec a copy of the failed
//! response whose status reads `200`. Whatever happens during that decode,
//! the caller sees the original status.

use bytes::Bytes;
use tracing::debug;

use crate::{ClientError, Codec, Error, OperationDescriptor, Response};

/// Status presented to a status-aware codec when decoding an error body.
pub const DECODABLE_STATUS: u16 = 200;

/// Turns failed responses into [`Error`] values.
///
/// The outcome is [`Error::Application`] when the body decodes as a
/// [`ClientError`], and [`Error::OpaqueRemote`] (see [`fallback`]) otherwise.
/// The normalizer never fails itself.
#[derive(Debug, Clone, Copy)]
pub struct ErrorNormalizer<'a, C> {
    codec: &'a C,
}

impl<'a, C: Codec> ErrorNormalizer<'a, C> {
    /// Normalizer decoding with `codec`.
    #[must_use]
    pub const fn new(codec: &'a C) -> Self {
        Self { codec }
    }

    /// Build the error for a response classified as a failure.
    #[must_use]
    pub fn normalize(&self, operation: &OperationDescriptor, response: &Response<Bytes>) -> Error {
        let status = response.status();
        let decoded = if self.codec.decodes_only_success() {
            self.codec
                .decode::<ClientError>(&response.with_status(DECODABLE_STATUS))
        } else {
            self.codec.decode::<ClientError>(response)
        };

        match decoded {
            Ok(Some(error)) => Error::application(status, error),
            Ok(None) => {
                debug!(operation = %operation, status, "error body is empty, using generic error");
                fallback(operation, status)
            }
            Err(err) => {
                debug!(
                    operation = %operation,
                    status,
                    error = %err,
                    "error body not decodable, using generic error"
                );
                fallback(operation, status)
            }
        }
    }
}

/// Generic error for a failed response whose body could not be decoded.
#[must_use]
pub fn fallback(operation: &OperationDescriptor, status: u16) -> Error {
    Error::opaque_remote(status, format!("{operation} failed with status {status}"))
}
