//! Lists posts, then creates one.
//!
//! The server is read from `POSTS_BASE_URL` (default `http://localhost:3000`),
//! log filtering from `RUST_LOG`.

#![allow(clippy::print_stdout)]

use clasp::ClientConfig;
use clasp::middleware::LogLevel;
use posts_client::{DEFAULT_BASE_URL, Post, PostsClient};

#[tokio::main]
async fn main() -> clasp::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let base_url =
        std::env::var("POSTS_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let config = ClientConfig::builder()
        .base_url(base_url)
        .log_level(LogLevel::Basic)
        .build()?;
    tracing::info!(base_url = %config.base_url, "posts client starting");

    let client = PostsClient::connect(config);

    println!("Getting posts");
    for post in client.list().await? {
        println!("{post}");
    }

    println!("Creating post");
    client.create(&Post::new("running goal", "Arun")).await?;

    Ok(())
}
