//! Error types for URL construction and accessor lookup.

use thiserror::Error;

/// Errors surfaced by [`ParsedUrl`](crate::url_model::ParsedUrl).
///
/// Everything not listed here degrades to an empty or absent value instead:
/// malformed query tokens, unparsable ports, empty connection strings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlError {
    /// The URL reference was empty after filtering, or its authority could not be split.
    #[error("invalid url input: {0}")]
    InvalidInput(String),

    /// The named accessor is not part of the exposed surface.
    #[error("no such attribute: {0}")]
    NoSuchAttribute(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            UrlError::NoSuchAttribute("hostname".into()).to_string(),
            "no such attribute: hostname"
        );
        assert_eq!(
            UrlError::InvalidInput("empty".into()).to_string(),
            "invalid url input: empty"
        );
    }
}
