//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types for easy glob
//! importing:
//!
//! ```ignore
//! use clasp::prelude::*;
//! ```

pub use crate::{
    BodyKind, Client, ClientConfig, ClientError, Codec, Error, HttpClient, HyperClient, Json,
    JsonCodec, Method, Operation, OperationDescriptor, Request, Response, Result, StatusCode,
};
pub use serde::{Deserialize, Serialize};
