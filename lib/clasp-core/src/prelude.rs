//! Prelude module for convenient imports.
//!
//! ```ignore
//! use clasp_core::prelude::*;
//! ```

pub use crate::{
    BodyKind, ClientError, Codec, Error, HttpClient, Json, JsonCodec, Method, Operation,
    OperationDescriptor, Request, Response, Result,
};
