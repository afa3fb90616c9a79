//! URL modeling with defaulting against a base context.
//!
//! A [`ParsedUrl`] holds one authoritative five-part record and derives every
//! view (`url`, `base`, `rel`, `filename`, ...) from it. Setters replace a
//! single component of that record.

mod path;
mod query;
mod split;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::UrlError;

pub use path::{basename, dirname, extension, join, normalize};
pub use query::ParsedQueryString;
pub use split::SplitUrl;

/// Schemes that may receive a default authority or base path.
const HIERARCHICAL_SCHEMES: &[&str] = &["http", "https", ""];

/// Names accepted by [`ParsedUrl::attr`].
pub const ATTRIBUTES: &[&str] = &[
    "scheme",
    "netloc",
    "domain",
    "port",
    "path",
    "qs",
    "fragment",
    "url",
    "base",
    "rel",
    "root_domain",
    "filepath",
    "filename",
    "fileext",
];

fn is_hierarchical(scheme: &str) -> bool {
    HIERARCHICAL_SCHEMES.contains(&scheme)
}

fn is_web_scheme(scheme: &str) -> bool {
    scheme == "http" || scheme == "https"
}

/// Defaults applied while constructing a [`ParsedUrl`] (optional `[defaults]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Scheme adopted when the reference has none but ends up with an authority.
    pub default_scheme: Option<String>,
    /// Authority adopted by hierarchical references that have none.
    pub default_netloc: Option<String>,
    /// Base directory relative paths are joined under.
    pub default_filepath: Option<String>,
    /// Split `#fragment` off the reference (default true).
    pub allow_fragments: bool,
    /// Keep `..` segments literal instead of collapsing them after joining.
    pub symlinks: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            default_scheme: None,
            default_netloc: None,
            default_filepath: None,
            allow_fragments: true,
            symlinks: false,
        }
    }
}

impl ParseOptions {
    pub fn default_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.default_scheme = Some(scheme.into());
        self
    }

    pub fn default_netloc(mut self, netloc: impl Into<String>) -> Self {
        self.default_netloc = Some(netloc.into());
        self
    }

    pub fn default_filepath(mut self, filepath: impl Into<String>) -> Self {
        self.default_filepath = Some(filepath.into());
        self
    }

    pub fn allow_fragments(mut self, allow: bool) -> Self {
        self.allow_fragments = allow;
        self
    }

    pub fn symlinks(mut self, symlinks: bool) -> Self {
        self.symlinks = symlinks;
        self
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// A URL reference with mutable components and derived read-only views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    original: String,
    parts: SplitUrl,
}

impl ParsedUrl {
    /// Parses `raw` with no defaults.
    pub fn parse(raw: &str) -> Result<Self, UrlError> {
        Self::with_options(raw, &ParseOptions::default())
    }

    /// Parses `raw` and applies `options` in order: scheme, authority, base path,
    /// then drops an `http`/`https` scheme left without an authority.
    ///
    /// Non-hierarchical references such as `mailto:` or `tel:` never receive a
    /// default authority or base path.
    pub fn with_options(raw: &str, options: &ParseOptions) -> Result<Self, UrlError> {
        let filtered = Self::url_filter(raw);
        if filtered.is_empty() {
            return Err(UrlError::InvalidInput(format!(
                "attempted to parse [{filtered}]; url must be a non-empty relative or absolute reference after filtering"
            )));
        }

        let mut parts = SplitUrl::split(filtered, options.allow_fragments)?;
        let default_scheme = non_empty(&options.default_scheme);
        let default_netloc = non_empty(&options.default_netloc);

        if let Some(scheme) = default_scheme {
            let gains_netloc = default_netloc.is_some() && is_hierarchical(scheme);
            if parts.scheme.is_empty() && (!parts.netloc.is_empty() || gains_netloc) {
                tracing::debug!(scheme, "adopting default scheme");
                parts.scheme = scheme.to_string();
            }
        }

        if let Some(netloc) = default_netloc {
            if parts.netloc.is_empty() && is_hierarchical(&parts.scheme) {
                tracing::debug!(netloc, "adopting default netloc");
                parts.netloc = netloc.to_string();
            }
        }

        if let Some(base) = non_empty(&options.default_filepath) {
            if !parts.path.starts_with(base) && is_hierarchical(&parts.scheme) {
                let joined = join_under(base, &parts.path, options.symlinks);
                tracing::debug!(base, from = %parts.path, to = %joined, "joined path under default filepath");
                parts.path = joined;
            }
        }

        if parts.netloc.is_empty() && is_web_scheme(&parts.scheme) {
            parts.scheme.clear();
        }

        Ok(Self {
            original: raw.to_string(),
            parts,
        })
    }

    /// Adjusts the raw input before any parsing; strips surrounding whitespace.
    pub fn url_filter(raw: &str) -> &str {
        raw.trim()
    }

    /// The string this instance was constructed from.
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn scheme(&self) -> &str {
        &self.parts.scheme
    }

    pub fn set_scheme(&mut self, scheme: impl Into<String>) {
        self.parts.scheme = scheme.into();
    }

    /// Authority, `host[:port]` plus any user-info.
    pub fn netloc(&self) -> &str {
        &self.parts.netloc
    }

    pub fn set_netloc(&mut self, netloc: impl Into<String>) {
        self.parts.netloc = netloc.into();
    }

    /// Lowercased host; `None` when there is no authority.
    pub fn domain(&self) -> Option<String> {
        self.parts.hostname()
    }

    /// Replaces the host, keeping the current port unless `domain` names its own.
    pub fn set_domain(&mut self, domain: &str) {
        let mut netloc = domain.to_string();
        if let Some(port) = self.parts.port() {
            let (_, new_port) = split::host_and_port(domain);
            if new_port.is_none() {
                netloc.push_str(&format!(":{port}"));
            }
        }
        self.parts.netloc = netloc;
    }

    pub fn port(&self) -> Option<u16> {
        self.parts.port()
    }

    pub fn path(&self) -> &str {
        &self.parts.path
    }

    pub fn set_path(&mut self, path: impl Into<String>) {
        self.parts.path = path.into();
    }

    /// Raw query string, without the `?`.
    pub fn qs(&self) -> &str {
        &self.parts.query
    }

    pub fn set_qs(&mut self, qs: impl Into<String>) {
        self.parts.query = qs.into();
    }

    pub fn fragment(&self) -> &str {
        &self.parts.fragment
    }

    pub fn set_fragment(&mut self, fragment: impl Into<String>) {
        self.parts.fragment = fragment.into();
    }

    /// Full rendering of the current components.
    pub fn url(&self) -> String {
        self.parts.render()
    }

    /// Rendering without query and fragment.
    pub fn base(&self) -> String {
        SplitUrl {
            query: String::new(),
            fragment: String::new(),
            ..self.parts.clone()
        }
        .render()
    }

    /// Rendering without scheme and authority; query and fragment are kept.
    pub fn rel(&self) -> String {
        SplitUrl {
            scheme: String::new(),
            netloc: String::new(),
            ..self.parts.clone()
        }
        .render()
    }

    /// Last two labels of the domain, or the whole domain when it has fewer.
    pub fn root_domain(&self) -> Option<String> {
        let domain = self.domain()?;
        let mut dots = domain.rmatch_indices('.').map(|(i, _)| i);
        match (dots.next(), dots.next()) {
            (Some(_), Some(second)) => Some(domain[second + 1..].to_string()),
            _ => Some(domain),
        }
    }

    /// Directory portion of the path.
    pub fn filepath(&self) -> &str {
        dirname(&self.parts.path)
    }

    pub fn filename(&self) -> &str {
        basename(&self.parts.path)
    }

    /// Extension of [`filename`](Self::filename), including the dot.
    pub fn fileext(&self) -> &str {
        extension(&self.parts.path)
    }

    /// Decoded view of the current query string.
    pub fn query(&self) -> ParsedQueryString {
        ParsedQueryString::new(&self.parts.query)
    }

    pub fn get_param(&self, key: &str) -> Option<String> {
        self.query().get(key).map(str::to_string)
    }

    /// Inserts or overwrites one parameter, leaving the others in place.
    pub fn set_param(&mut self, key: &str, value: impl fmt::Display) {
        let mut pqs = self.query();
        pqs.set(key, value);
        self.parts.query = pqs.to_string();
    }

    /// Removes one parameter; a missing key leaves the query re-serialized but otherwise unchanged.
    pub fn del_param(&mut self, key: &str) {
        let mut pqs = self.query();
        pqs.remove(key);
        self.parts.query = pqs.to_string();
    }

    /// Looks up an accessor by name.
    ///
    /// Only the names in [`ATTRIBUTES`] resolve; anything else, including the
    /// raw `hostname` of the underlying split, is [`UrlError::NoSuchAttribute`].
    pub fn attr(&self, name: &str) -> Result<Option<String>, UrlError> {
        let owned = |s: &str| Some(s.to_string());
        let value = match name {
            "scheme" => owned(self.scheme()),
            "netloc" => owned(self.netloc()),
            "domain" => self.domain(),
            "port" => self.port().map(|p| p.to_string()),
            "path" => owned(self.path()),
            "qs" => owned(self.qs()),
            "fragment" => owned(self.fragment()),
            "url" => Some(self.url()),
            "base" => Some(self.base()),
            "rel" => Some(self.rel()),
            "root_domain" => self.root_domain(),
            "filepath" => owned(self.filepath()),
            "filename" => owned(self.filename()),
            "fileext" => owned(self.fileext()),
            other => return Err(UrlError::NoSuchAttribute(other.to_string())),
        };
        Ok(value)
    }
}

/// Joins `path` under `base`, collapsing `..` unless `symlinks` is set.
///
/// A trailing separator on `path` survives the join, and a result that is just
/// the base directory always ends with one.
fn join_under(base: &str, path: &str, symlinks: bool) -> String {
    let mut joined = join(base, path);
    if !symlinks && joined.contains("..") {
        joined = normalize(&joined);
    }
    if path.ends_with('/') && !joined.ends_with('/') {
        joined.push('/');
    }
    let bare = base.trim_end_matches('/');
    if (joined == base || joined == bare) && !joined.ends_with('/') {
        joined.push('/');
    }
    joined
}

impl fmt::Display for ParsedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}

impl std::str::FromStr for ParsedUrl {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
