//! Operation paths.

use url::Url;

use crate::{Error, Result};

/// Path an operation is bound to, relative to the client's base URL.
///
/// Templates must start with `/`; this is checked at construction, which
/// turns a malformed path in a `const` descriptor into a compile error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathTemplate(&'static str);

impl PathTemplate {
    /// Create a new path template.
    ///
    /// # Panics
    ///
    /// Panics if `template` does not start with `/`.
    #[must_use]
    pub const fn new(template: &'static str) -> Self {
        assert!(
            matches!(template.as_bytes().first(), Some(b'/')),
            "path template must start with '/'"
        );
        Self(template)
    }

    /// Get the template string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Append this path to `base`, keeping any path prefix and query `base`
    /// already has. The fragment is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] if `base` cannot carry a path
    /// (`mailto:`, `data:` and the like).
    pub fn resolve(&self, base: &Url) -> Result<Url> {
        if base.cannot_be_a_base() {
            return Err(Error::invalid_request(format!(
                "base URL cannot carry a path: {base}"
            )));
        }
        let mut url = base.clone();
        let prefix = base.path().trim_end_matches('/');
        url.set_path(&format!("{prefix}{}", self.0));
        url.set_fragment(None);
        Ok(url)
    }
}

impl std::fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

impl AsRef<str> for PathTemplate {
    fn as_ref(&self) -> &str {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POSTS: PathTemplate = PathTemplate::new("/posts");

    fn url(s: &str) -> Url {
        Url::parse(s).expect("valid URL")
    }

    #[test]
    fn resolves_against_bare_host() {
        let resolved = POSTS.resolve(&url("http://localhost:3000")).expect("resolve");
        assert_eq!(resolved.as_str(), "http://localhost:3000/posts");
    }

    #[test]
    fn keeps_base_path_prefix() {
        let resolved = POSTS
            .resolve(&url("https://blog.example.com/api/v1/"))
            .expect("resolve");
        assert_eq!(resolved.as_str(), "https://blog.example.com/api/v1/posts");
    }

    #[test]
    fn keeps_base_query_after_the_path() {
        let resolved = POSTS
            .resolve(&url("http://localhost:3000/api?key=v"))
            .expect("resolve");
        assert_eq!(resolved.as_str(), "http://localhost:3000/api/posts?key=v");
    }

    #[test]
    fn drops_base_fragment() {
        let resolved = POSTS
            .resolve(&url("http://localhost:3000/api/#top"))
            .expect("resolve");
        assert_eq!(resolved.as_str(), "http://localhost:3000/api/posts");
    }

    #[test]
    fn rejects_base_without_path() {
        let err = POSTS
            .resolve(&url("mailto:someone@example.com"))
            .expect_err("not a base");
        assert!(matches!(err, Error::InvalidRequest(_)));
    }

    #[test]
    fn display_is_template() {
        assert_eq!(POSTS.to_string(), "/posts");
        assert_eq!(POSTS.as_ref(), "/posts");
    }

    #[test]
    #[should_panic(expected = "path template must start with '/'")]
    fn rejects_relative_template() {
        let _ = PathTemplate::new("posts");
    }
}
