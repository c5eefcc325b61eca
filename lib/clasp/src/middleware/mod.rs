//! Tower middleware layers for the clasp HTTP transport.
//!
//! Layers wrap the transport service. Layers are applied in the order they
//! are added to [`HyperClientBuilder`](crate::HyperClientBuilder): the first
//! added is the outermost and sees requests first.
//!
//! - [`LoggingLayer`] - logs requests/responses using `tracing`
//!
//! # Example
//!
//! ```ignore
//! use clasp::HyperClient;
//! use clasp::middleware::{LogLevel, LoggingLayer};
//!
//! let client = HyperClient::builder()
//!     .layer(LoggingLayer::new(LogLevel::Headers))
//!     .build();
//! ```

mod logging;

pub use logging::{LogLevel, Logging, LoggingLayer};

// Re-export tower types for convenience
pub use tower::{Layer, ServiceBuilder};
