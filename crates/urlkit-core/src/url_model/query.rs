//! Query-string parameter model.

use std::fmt;

/// An ordered `key -> value` view of a raw query string.
///
/// Keys are unique and keep the position they were first seen at. Values are
/// kept raw (no percent-decoding) and may contain further `=` characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedQueryString {
    original: String,
    params: Vec<(String, String)>,
}

impl ParsedQueryString {
    /// Splits `raw` on `&`, then each token on its first `=`.
    ///
    /// Surrounding whitespace and a leading `?` are ignored. A token without
    /// `=` becomes a key with an empty value; tokens with an empty key are
    /// skipped. A repeated key keeps its first position and its last value.
    pub fn new(raw: &str) -> Self {
        let qs = raw.trim();
        let qs = qs.strip_prefix('?').unwrap_or(qs);

        let mut parsed = Self {
            original: raw.to_string(),
            params: Vec::new(),
        };
        for token in qs.split('&') {
            let (key, value) = token.split_once('=').unwrap_or((token, ""));
            if !key.is_empty() {
                parsed.set(key, value);
            }
        }
        parsed
    }

    /// The string this instance was built from, untouched.
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Overwrites `key` in place, or appends it when new.
    pub fn set(&mut self, key: &str, value: impl fmt::Display) {
        let value = value.to_string();
        match self.params.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value,
            None => self.params.push((key.to_string(), value)),
        }
    }

    /// Removes `key`, returning its value; absent keys are not an error.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let pos = self.params.iter().position(|(k, _)| k == key)?;
        Some(self.params.remove(pos).1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.params.iter().any(|(k, _)| k == key)
    }

    pub fn params(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl From<&str> for ParsedQueryString {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Renders `key=value` pairs joined by `&`, without a leading `?`.
impl fmt::Display for ParsedQueryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_extra_equals_in_values() {
        let raw = "id=1&b=2&x=1234=56&z=3";
        let qs = ParsedQueryString::new(raw);
        assert_eq!(qs.get("x"), Some("1234=56"));
        assert_eq!(qs.to_string(), raw);
    }

    #[test]
    fn tolerant_tokens() {
        let qs = ParsedQueryString::new(" ?a&&=skipped&b=&c=3 ");
        assert_eq!(qs.original(), " ?a&&=skipped&b=&c=3 ");
        assert_eq!(qs.get("a"), Some(""));
        assert_eq!(qs.get("b"), Some(""));
        assert_eq!(qs.get("c"), Some("3"));
        assert_eq!(qs.len(), 3);
        assert_eq!(qs.to_string(), "a=&b=&c=3");
    }

    #[test]
    fn empty_input_has_no_params() {
        let qs = ParsedQueryString::new("");
        assert!(qs.is_empty());
        assert_eq!(qs.to_string(), "");
    }

    #[test]
    fn repeated_key_keeps_first_position() {
        let qs = ParsedQueryString::new("a=1&b=2&a=3");
        let pairs: Vec<_> = qs.params().collect();
        assert_eq!(pairs, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn set_overwrites_in_place_and_appends_new() {
        let mut qs = ParsedQueryString::new("z=1&u=3");
        qs.set("v", 4);
        qs.set("u", "2");
        assert_eq!(qs.to_string(), "z=1&u=2&v=4");
    }

    #[test]
    fn remove_missing_key_is_noop() {
        let mut qs = ParsedQueryString::new("z=1&v=4");
        assert_eq!(qs.remove("nope"), None);
        assert_eq!(qs.remove("z").as_deref(), Some("1"));
        assert!(!qs.contains_key("z"));
        assert_eq!(qs.to_string(), "v=4");
    }
}
