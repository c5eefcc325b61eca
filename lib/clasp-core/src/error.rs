//! Error types for clasp.
//!
//! [`Error`] is the single failure type of every operation. Its variants fall
//! into four groups:
//!
//! - remote failures: [`Error::Application`] when a non-2xx body decoded into
//!   a [`ClientError`], [`Error::OpaqueRemote`] when it did not;
//! - transport failures, passed through untouched;
//! - encoding failures of the request body;
//! - decoding failures of a success body.

use std::fmt;

use derive_more::{Display, Error, From};
use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Serialize;

// ============================================================================
// Remote Error Body
// ============================================================================

/// Error payload sent by the remote side with a non-2xx status.
///
/// On the wire this is a JSON object carrying a `message` key. The key must
/// be present; a `null` value decodes to an explicit "no message" rather than
/// being folded into an empty string. Unknown keys are ignored.
///
/// ```
/// use clasp_core::ClientError;
///
/// let error: ClientError = serde_json::from_str(r#"{"message":"title too short"}"#).unwrap();
/// assert_eq!(error.message(), Some("title too short"));
///
/// let error: ClientError = serde_json::from_str(r#"{"message":null}"#).unwrap();
/// assert_eq!(error.message(), None);
///
/// assert!(serde_json::from_str::<ClientError>(r#"{"error":"nope"}"#).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ClientError {
    message: Option<String>,
}

impl ClientError {
    /// Error carrying a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// Error whose body explicitly carried no message.
    #[must_use]
    pub const fn without_message() -> Self {
        Self { message: None }
    }

    /// The remote-supplied message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => f.write_str(message),
            None => f.write_str("<no message>"),
        }
    }
}

impl<'de> Deserialize<'de> for ClientError {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ClientErrorVisitor;

        impl<'de> Visitor<'de> for ClientErrorVisitor {
            type Value = ClientError;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object with a `message` field")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<ClientError, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut message: Option<Option<String>> = None;
                while let Some(key) = map.next_key::<String>()? {
                    if key == "message" {
                        if message.is_some() {
                            return Err(de::Error::duplicate_field("message"));
                        }
                        message = Some(map.next_value()?);
                    } else {
                        map.next_value::<IgnoredAny>()?;
                    }
                }
                let message = message.ok_or_else(|| de::Error::missing_field("message"))?;
                Ok(ClientError { message })
            }
        }

        deserializer.deserialize_map(ClientErrorVisitor)
    }
}

// ============================================================================
// Error Type
// ============================================================================

/// Main error type for clasp operations.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// The remote side answered non-2xx with a decodable error body.
    #[display("remote error {status}: {error}")]
    #[from(skip)]
    Application {
        /// Status code of the original response.
        status: u16,
        /// Decoded error body.
        #[error(not(source))]
        error: ClientError,
    },

    /// The remote side answered non-2xx and the body did not decode as an error.
    #[display("HTTP error {status}: {message}")]
    #[from(skip)]
    OpaqueRemote {
        /// Status code of the original response.
        status: u16,
        /// Generic, status-derived description.
        message: String,
    },

    /// Network/connection errors.
    #[display("connection error: {_0}")]
    #[from(skip)]
    Connection(#[error(not(source))] String),

    /// TLS errors.
    #[display("TLS error: {_0}")]
    #[from(skip)]
    Tls(#[error(not(source))] String),

    /// Request timeout.
    #[display("request timeout")]
    #[from(skip)]
    Timeout,

    /// The request could not be assembled.
    #[display("invalid request: {_0}")]
    #[from(skip)]
    InvalidRequest(#[error(not(source))] String),

    /// URL parsing error.
    #[display("invalid URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),

    /// Local I/O failure outside any exchange, such as starting a runtime.
    #[display("I/O error: {_0}")]
    #[from]
    Io(std::io::Error),

    /// Request body encoding error.
    #[display("JSON serialization error: {_0}")]
    #[from]
    JsonSerialization(serde_json::Error),

    /// Success body decoding error with path context.
    #[display("JSON deserialization error at '{path}': {message}")]
    #[from(skip)]
    JsonDeserialization {
        /// JSON path to the error (e.g., "[0].title").
        path: String,
        /// Error message.
        message: String,
    },

    /// A success response carried nothing the codec could decode.
    #[display("empty response body (status {status})")]
    #[from(skip)]
    EmptyBody {
        /// Status code of the response.
        status: u16,
    },
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an application error from a decoded error body.
    #[must_use]
    pub const fn application(status: u16, error: ClientError) -> Self {
        Self::Application { status, error }
    }

    /// Create an opaque remote error from a status and a generic message.
    #[must_use]
    pub fn opaque_remote(status: u16, message: impl Into<String>) -> Self {
        Self::OpaqueRemote {
            status,
            message: message.into(),
        }
    }

    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a TLS error.
    #[must_use]
    pub fn tls(message: impl Into<String>) -> Self {
        Self::Tls(message.into())
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Create a JSON deserialization error with path context.
    #[must_use]
    pub fn json_deserialization(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::JsonDeserialization {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Status code of the remote failure, for [`Error::Application`] and
    /// [`Error::OpaqueRemote`].
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Application { status, .. } | Self::OpaqueRemote { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The decoded error body, if the remote side sent one.
    #[must_use]
    pub const fn client_error(&self) -> Option<&ClientError> {
        match self {
            Self::Application { error, .. } => Some(error),
            _ => None,
        }
    }

    /// The remote-supplied message, if the remote side sent one.
    #[must_use]
    pub fn remote_message(&self) -> Option<&str> {
        self.client_error().and_then(ClientError::message)
    }

    /// Returns `true` if this is an [`Error::Application`].
    #[must_use]
    pub const fn is_application(&self) -> bool {
        matches!(self, Self::Application { .. })
    }

    /// Returns `true` if this is an [`Error::OpaqueRemote`].
    #[must_use]
    pub const fn is_opaque_remote(&self) -> bool {
        matches!(self, Self::OpaqueRemote { .. })
    }

    /// Returns `true` if this is a timeout error.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Returns `true` if this is a connection error.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// Returns `true` if the remote failure has a 4xx status.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|s| (400..500).contains(&s))
    }

    /// Returns `true` if the remote failure has a 5xx status.
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| (500..600).contains(&s))
    }
}

#[cfg(test)]
mod tests {
    use assert2::check;

    use super::*;

    #[test]
    fn client_error_decodes_message() {
        let error: ClientError =
            serde_json::from_str(r#"{"message":"title too short","code":42}"#).expect("decode");
        assert_eq!(error, ClientError::new("title too short"));
    }

    #[test]
    fn client_error_null_message_is_explicit_none() {
        let error: ClientError = serde_json::from_str(r#"{"message":null}"#).expect("decode");
        assert_eq!(error, ClientError::without_message());
        assert_eq!(error.to_string(), "<no message>");
    }

    #[test]
    fn client_error_rejects_other_shapes() {
        for body in [
            r#""internal error""#,
            r#"["title too short"]"#,
            r"{}",
            r#"{"message":7}"#,
            r#"{"message":"a","message":"b"}"#,
            "null",
        ] {
            assert!(
                serde_json::from_str::<ClientError>(body).is_err(),
                "{body} should not decode"
            );
        }
    }

    #[test]
    fn error_display() {
        let err = Error::application(422, ClientError::new("title too short"));
        assert_eq!(err.to_string(), "remote error 422: title too short");

        let err = Error::opaque_remote(500, "create_post POST /posts failed with status 500");
        assert_eq!(
            err.to_string(),
            "HTTP error 500: create_post POST /posts failed with status 500"
        );

        let err = Error::EmptyBody { status: 200 };
        assert_eq!(err.to_string(), "empty response body (status 200)");

        let err = Error::json_deserialization("[0].title", "invalid type: integer `3`");
        assert_eq!(
            err.to_string(),
            "JSON deserialization error at '[0].title': invalid type: integer `3`"
        );
    }

    #[test]
    fn remote_accessors() {
        let err = Error::application(404, ClientError::new("no such post"));
        check!(err.status() == Some(404));
        check!(err.is_application());
        check!(err.is_client_error());
        check!(!err.is_server_error());
        check!(err.remote_message() == Some("no such post"));

        let err = Error::opaque_remote(503, "unavailable");
        check!(err.status() == Some(503));
        check!(err.is_opaque_remote());
        check!(err.is_server_error());
        check!(err.remote_message().is_none());
        check!(err.client_error().is_none());
    }

    #[test]
    fn transport_errors_have_no_status() {
        check!(Error::Timeout.status().is_none());
        check!(Error::Timeout.is_timeout());
        check!(Error::connection("refused").is_connection());
        check!(!Error::connection("refused").is_application());
    }

    #[test]
    fn local_io_failure_is_not_a_network_error() {
        let err = Error::from(std::io::Error::other("no reactor"));
        check!(matches!(err, Error::Io(_)));
        check!(!err.is_connection());
        check!(err.status().is_none());
        check!(err.to_string() == "I/O error: no reactor");
        check!(std::error::Error::source(&err).is_some());
    }
}
