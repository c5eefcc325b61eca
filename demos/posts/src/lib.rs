//! Client binding for a posts REST API.
//!
//! The API exposes two operations:
//!
//! - `GET /posts` lists every post as a JSON array;
//! - `POST /posts` creates a post from a JSON `{title, author}` object and
//!   answers without a body.
//!
//! Failures carry a JSON `{message}` body, surfaced as
//! [`Error::Application`](clasp::Error::Application).
//!
//! ```ignore
//! use posts_client::{Post, PostsClient};
//!
//! let config = clasp::ClientConfig::builder()
//!     .base_url("http://localhost:3000")
//!     .build()?;
//! let client = PostsClient::connect(config);
//!
//! client.create(&Post::new("running goal", "Arun")).await?;
//! for post in client.list().await? {
//!     println!("{post}");
//! }
//! ```

pub mod blocking;
mod client;
pub mod operations;
mod post;

pub use client::PostsClient;
pub use post::Post;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
