//! Five-part split of a URL reference and its inverse.
//!
//! Splitting is purely lexical: no percent-decoding, no host validation beyond
//! balanced IPv6 brackets, no path normalization. Rendering a split value back
//! yields the same reference for anything that was not defaulted.

use crate::error::UrlError;

/// Schemes whose references carry an authority (`scheme://netloc/path`).
const USES_NETLOC: &[&str] = &[
    "", "ftp", "http", "gopher", "nntp", "telnet", "imap", "wais", "file", "mms", "https", "shttp",
    "snews", "prospero", "rtsp", "rtsps", "rtspu", "rsync", "svn", "svn+ssh", "sftp", "nfs", "git",
    "git+ssh", "ws", "wss", "itms-services",
];

/// Characters allowed after the first letter of a scheme.
fn is_scheme_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.'
}

/// The authoritative `(scheme, netloc, path, query, fragment)` record.
///
/// Empty strings stand for absent components.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitUrl {
    pub scheme: String,
    pub netloc: String,
    pub path: String,
    pub query: String,
    pub fragment: String,
}

impl SplitUrl {
    /// Splits `raw` into its five components.
    ///
    /// Leading control characters and spaces are stripped and embedded tab, CR
    /// and LF characters removed before splitting. When `allow_fragments` is
    /// false a `#` stays part of the path or query.
    pub fn split(raw: &str, allow_fragments: bool) -> Result<Self, UrlError> {
        let cleaned: String = raw
            .trim_start_matches(|c: char| c <= '\u{20}')
            .chars()
            .filter(|c| !matches!(c, '\t' | '\n' | '\r'))
            .collect();
        let mut rest = cleaned.as_str();
        let mut parts = SplitUrl::default();

        if let Some(i) = rest.find(':') {
            let candidate = &rest[..i];
            let mut chars = candidate.chars();
            let starts_alpha = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
            if starts_alpha && chars.all(is_scheme_char) {
                parts.scheme = candidate.to_ascii_lowercase();
                rest = &rest[i + 1..];
            }
        }

        if let Some(after) = rest.strip_prefix("//") {
            let end = after.find(['/', '?', '#']).unwrap_or(after.len());
            let netloc = &after[..end];
            if netloc.contains('[') != netloc.contains(']') {
                return Err(UrlError::InvalidInput(format!(
                    "unbalanced IPv6 brackets in authority [{netloc}]"
                )));
            }
            parts.netloc = netloc.to_string();
            rest = &after[end..];
        }

        if allow_fragments {
            if let Some((head, fragment)) = rest.split_once('#') {
                parts.fragment = fragment.to_string();
                rest = head;
            }
        }

        if let Some((head, query)) = rest.split_once('?') {
            parts.query = query.to_string();
            rest = head;
        }

        parts.path = rest.to_string();
        Ok(parts)
    }

    /// Whether the scheme uses an authority component.
    pub fn uses_netloc(&self) -> bool {
        USES_NETLOC.contains(&self.scheme.as_str())
    }

    /// Lowercased host from the authority, without user-info, brackets, or port.
    pub fn hostname(&self) -> Option<String> {
        let (host, _) = host_and_port(&self.netloc);
        if host.is_empty() {
            None
        } else {
            Some(host.to_ascii_lowercase())
        }
    }

    /// Port from the authority; absent when missing, non-numeric, or out of range.
    pub fn port(&self) -> Option<u16> {
        let (_, port) = host_and_port(&self.netloc);
        let port = port?;
        if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        port.parse().ok()
    }

    /// Renders the five components back into a reference.
    pub fn render(&self) -> String {
        let mut url = String::with_capacity(
            self.scheme.len() + self.netloc.len() + self.path.len() + self.query.len() + self.fragment.len() + 6,
        );

        if !self.scheme.is_empty() {
            url.push_str(&self.scheme);
            url.push(':');
        }

        if !self.netloc.is_empty() {
            url.push_str("//");
            url.push_str(&self.netloc);
            if !self.path.is_empty() && !self.path.starts_with('/') {
                url.push('/');
            }
        } else if self.path.starts_with("//")
            || (!self.scheme.is_empty()
                && self.uses_netloc()
                && (self.path.is_empty() || self.path.starts_with('/')))
        {
            url.push_str("//");
        }
        url.push_str(&self.path);

        if !self.query.is_empty() {
            url.push('?');
            url.push_str(&self.query);
        }
        if !self.fragment.is_empty() {
            url.push('#');
            url.push_str(&self.fragment);
        }
        url
    }
}

/// Splits an authority into `(host, port)`; the port is `None` when no `:` follows the host.
pub(crate) fn host_and_port(netloc: &str) -> (&str, Option<&str>) {
    let hostinfo = netloc.rsplit_once('@').map_or(netloc, |(_, h)| h);
    if let Some((_, bracketed)) = hostinfo.split_once('[') {
        let (host, tail) = bracketed.split_once(']').unwrap_or((bracketed, ""));
        let port = tail.split_once(':').map(|(_, p)| p);
        return (host, port);
    }
    match hostinfo.split_once(':') {
        Some((host, port)) => (host, Some(port)),
        None => (hostinfo, None),
    }
}
