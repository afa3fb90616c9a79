//! POSIX-style path helpers for URL paths.
//!
//! URL paths always use `/`, so these never consult the host platform's
//! separator rules.

/// Directory portion of `path`, with trailing slashes removed unless it is all slashes.
pub fn dirname(path: &str) -> &str {
    let head = match path.rfind('/') {
        Some(i) => &path[..=i],
        None => return "",
    };
    let trimmed = head.trim_end_matches('/');
    if trimmed.is_empty() {
        head
    } else {
        trimmed
    }
}

/// Final component of `path`; empty when `path` ends with `/`.
pub fn basename(path: &str) -> &str {
    path.rfind('/').map_or(path, |i| &path[i + 1..])
}

/// Extension of the final component, including the dot; leading dots do not start one.
pub fn extension(path: &str) -> &str {
    let name = basename(path);
    match name.rfind('.') {
        Some(dot) if name[..dot].chars().any(|c| c != '.') => &name[dot..],
        _ => "",
    }
}

/// Joins `rel` under `base` the way a pure filesystem path would.
///
/// An absolute `rel` replaces `base`. Empty and `.` segments are dropped and
/// the trailing separator is not kept; `..` segments are left as-is.
pub fn join(base: &str, rel: &str) -> String {
    let (root, segments): (&str, Vec<&str>) = if rel.starts_with('/') {
        ("/", segments_of(rel).collect())
    } else {
        let root = if base.starts_with('/') { "/" } else { "" };
        (root, segments_of(base).chain(segments_of(rel)).collect())
    };

    if segments.is_empty() {
        return if root.is_empty() { ".".to_string() } else { root.to_string() };
    }
    format!("{root}{}", segments.join("/"))
}

/// Collapses `.` and `..` segments lexically.
///
/// `..` directly under the root is dropped; leading `..` in a relative path is
/// kept. Exactly two leading slashes are preserved, as POSIX allows.
pub fn normalize(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }
    let root = if path.starts_with("//") && !path.starts_with("///") {
        "//"
    } else if path.starts_with('/') {
        "/"
    } else {
        ""
    };

    let mut out: Vec<&str> = Vec::new();
    for seg in segments_of(path) {
        if seg != ".." {
            out.push(seg);
        } else if out.last().is_some_and(|last| *last != "..") {
            out.pop();
        } else if root.is_empty() {
            out.push(seg);
        }
    }

    let joined = format!("{root}{}", out.join("/"));
    if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

fn segments_of(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty() && *s != ".")
}
