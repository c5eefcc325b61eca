//! Declared operations of the posts API.

use clasp::{BodyKind, Method, Operation, OperationDescriptor};

use crate::Post;

/// `GET /posts`: every post. No content means no posts.
#[derive(Debug, Clone, Copy)]
pub struct ListPosts;

impl Operation for ListPosts {
    type Input = ();
    type Output = Vec<Post>;

    const DESCRIPTOR: &'static OperationDescriptor =
        &OperationDescriptor::new("list_posts", Method::Get, "/posts")
            .headers(&[("Accept", "application/json")])
            .response_body(BodyKind::Encoded);
}

/// `POST /posts`: create a post. The response body is ignored.
#[derive(Debug, Clone, Copy)]
pub struct CreatePost;

impl Operation for CreatePost {
    type Input = Post;
    type Output = ();

    const DESCRIPTOR: &'static OperationDescriptor =
        &OperationDescriptor::new("create_post", Method::Post, "/posts")
            .headers(&[("Content-Type", "application/json")])
            .request_body(BodyKind::Encoded);
}

/// Every operation of the API.
pub const OPERATIONS: &[&OperationDescriptor] = &[
    <ListPosts as Operation>::DESCRIPTOR,
    <CreatePost as Operation>::DESCRIPTOR,
];

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;

    #[test]
    fn registry() {
        let lines = OPERATIONS
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        assert_snapshot!(lines, @r"
        list_posts GET /posts
        create_post POST /posts
        ");
    }

    #[test]
    fn create_declares_json_body() {
        let descriptor = CreatePost::DESCRIPTOR;
        assert_eq!(descriptor.request_body_kind(), BodyKind::Encoded);
        assert_eq!(descriptor.response_body_kind(), BodyKind::Empty);
        assert_eq!(
            descriptor.declared_headers(),
            &[("Content-Type", "application/json")]
        );
    }
}
