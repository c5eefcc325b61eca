//! Asynchronous posts API client.

use clasp::{Client, ClientConfig, Codec, HttpClient, HyperClient, JsonCodec, Result};

use crate::Post;
use crate::operations::{CreatePost, ListPosts};

/// Asynchronous posts API client.
#[derive(Debug, Clone)]
pub struct PostsClient<T = HyperClient, C = JsonCodec> {
    client: Client<T, C>,
}

impl<C> PostsClient<HyperClient, C> {
    /// Connect over a new hyper transport.
    #[must_use]
    pub fn connect(config: ClientConfig<C>) -> Self {
        Self::new(Client::connect(config))
    }
}

impl<T, C> PostsClient<T, C> {
    /// Wrap an existing client binding.
    #[must_use]
    pub const fn new(client: Client<T, C>) -> Self {
        Self { client }
    }

    /// Underlying client binding.
    #[must_use]
    pub const fn inner(&self) -> &Client<T, C> {
        &self.client
    }
}

impl<T, C> PostsClient<T, C>
where
    T: HttpClient,
    C: Codec,
{
    /// List every post.
    pub async fn list(&self) -> Result<Vec<Post>> {
        self.client.invoke::<ListPosts>(&()).await
    }

    /// Create a post. Its id, if any, is not sent.
    pub async fn create(&self, post: &Post) -> Result<()> {
        if post.id.is_some() {
            let post = Post {
                id: None,
                ..post.clone()
            };
            return self.client.invoke::<CreatePost>(&post).await;
        }
        self.client.invoke::<CreatePost>(post).await
    }
}
