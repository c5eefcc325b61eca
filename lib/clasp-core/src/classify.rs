//! Success/failure classification of raw responses.

use bytes::Bytes;

use crate::Response;

/// A response after the success/failure decision.
///
/// The decision looks at the status code only and is taken once, when the
/// raw response comes back from the transport. Each variant owns the
/// untouched response, so later stages (which may derive copies with other
/// status codes) never re-derive it.
#[derive(Debug, Clone)]
pub enum Classified<B = Bytes> {
    /// Status in `200..300`: decode as the operation's output.
    Success(Response<B>),
    /// Any other status: decode as an error body.
    Failure(Response<B>),
}

impl<B> Classified<B> {
    /// Classify a raw response by status code.
    #[must_use]
    pub fn classify(response: Response<B>) -> Self {
        if response.is_success() {
            Self::Success(response)
        } else {
            Self::Failure(response)
        }
    }

    /// Returns `true` for [`Classified::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The classified response.
    #[must_use]
    pub const fn response(&self) -> &Response<B> {
        match self {
            Self::Success(response) | Self::Failure(response) => response,
        }
    }

    /// Consume into the classified response.
    #[must_use]
    pub fn into_response(self) -> Response<B> {
        match self {
            Self::Success(response) | Self::Failure(response) => response,
        }
    }
}
