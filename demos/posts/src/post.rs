//! The post resource.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A blog post.
///
/// Posts built client-side with [`Post::new`] have no id; the server assigns
/// one, and posts returned by a listing carry it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Post {
    /// Server-assigned identifier, omitted from creation requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Title.
    pub title: String,
    /// Author name.
    pub author: String,
}

impl Post {
    /// Post to be created, without an id.
    #[must_use]
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            author: author.into(),
        }
    }

    /// Whether both posts are the same server-side resource.
    ///
    /// Posts without an id are never the same resource as anything.
    #[must_use]
    pub fn same_resource(&self, other: &Self) -> bool {
        matches!((&self.id, &other.id), (Some(a), Some(b)) if a == b)
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Post{{id='{}', title='{}', author='{}'}}",
            self.id.as_deref().unwrap_or("null"),
            self.title,
            self.author
        )
    }
}
