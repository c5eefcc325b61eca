//! Blocking posts API client.
//!
//! Each call blocks the calling thread until the response arrived or the
//! transport failed. Must not be used from within an async runtime.

use clasp::{ClientConfig, JsonCodec, Result};
use tokio::runtime::{Builder, Runtime};

use crate::Post;

/// Blocking wrapper around [`crate::PostsClient`], driving it on its own
/// current-thread runtime.
#[derive(Debug)]
pub struct PostsClient<C = JsonCodec> {
    inner: crate::PostsClient<clasp::HyperClient, C>,
    runtime: Runtime,
}

impl<C: clasp::Codec> PostsClient<C> {
    /// Connect over a new hyper transport.
    ///
    /// # Errors
    ///
    /// Returns [`clasp::Error::Io`] if the runtime cannot be started.
    pub fn connect(config: ClientConfig<C>) -> Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self {
            inner: crate::PostsClient::connect(config),
            runtime,
        })
    }

    /// List every post.
    pub fn list(&self) -> Result<Vec<Post>> {
        self.runtime.block_on(self.inner.list())
    }

    /// Create a post. Its id, if any, is not sent.
    pub fn create(&self, post: &Post) -> Result<()> {
        self.runtime.block_on(self.inner.create(post))
    }
}
