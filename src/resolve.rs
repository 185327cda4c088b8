//! Reference resolution per RFC 3986, Section 5.2.

use crate::error::{ResolveError, ResolveErrorKind};
use crate::Uri;

pub(crate) fn resolve(base: &Uri, reference: &Uri) -> Result<Uri, ResolveError> {
    if base.scheme.is_none() {
        return Err(ResolveError {
            kind: ResolveErrorKind::MissingBaseScheme,
        });
    }

    let mut target = Uri::default();
    if reference.scheme.is_some() {
        target.scheme = reference.scheme.clone();
        target.authority = reference.authority.clone();
        target.path = remove_dot_segments(&reference.path);
        target.query = reference.query.clone();
    } else if reference.authority.is_some() {
        target.scheme = base.scheme.clone();
        target.authority = reference.authority.clone();
        target.path = remove_dot_segments(&reference.path);
        target.query = reference.query.clone();
    } else {
        target.scheme = base.scheme.clone();
        target.authority = base.authority.clone();
        if reference.path.is_empty() {
            target.path = base.path.clone();
            target.query = if reference.query.is_some() {
                reference.query.clone()
            } else {
                base.query.clone()
            };
        } else {
            target.path = if reference.path.starts_with('/') {
                remove_dot_segments(&reference.path)
            } else {
                remove_dot_segments(&merge_paths(base, reference))
            };
            target.query = reference.query.clone();
        }
    }
    // The fragment always comes from the reference, set or not.
    target.fragment = reference.fragment.clone();
    Ok(target)
}

/// Merges a relative-path reference with the path of the base URI.
/// (RFC 3986, Section 5.2.3)
fn merge_paths(base: &Uri, reference: &Uri) -> String {
    if base.authority.is_some() && base.path.is_empty() {
        return format!("/{}", reference.path);
    }
    match base.path.rfind('/') {
        Some(i) => format!("{}{}", &base.path[..=i], reference.path),
        None => reference.path.clone(),
    }
}

/// Removes the "." and ".." segments from a path.
/// (RFC 3986, Section 5.2.4)
pub(crate) fn remove_dot_segments(path: &str) -> String {
    let mut input = path;
    let mut output = String::with_capacity(path.len());
    while !input.is_empty() {
        if let Some(rest) = input.strip_prefix("../") {
            input = rest;
        } else if let Some(rest) = input.strip_prefix("./") {
            input = rest;
        } else if input.starts_with("/./") {
            input = &input[2..];
        } else if input == "/." {
            input = "/";
        } else if input.starts_with("/../") {
            input = &input[3..];
            pop_last_segment(&mut output);
        } else if input == "/.." {
            input = "/";
            pop_last_segment(&mut output);
        } else if input == "." || input == ".." {
            break;
        } else {
            // Move the first segment, including its leading slash but
            // excluding the next one, from the input to the output.
            let first = if input.starts_with('/') { 1 } else { 0 };
            let end = match input[first..].find('/') {
                Some(i) => first + i,
                None => input.len(),
            };
            output.push_str(&input[..end]);
            input = &input[end..];
        }
    }
    output
}

/// Removes the last complete segment, and its preceding "/" if any,
/// from the output buffer.
fn pop_last_segment(output: &mut String) {
    match output.rfind('/') {
        Some(i) => output.truncate(i),
        None => output.clear(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_segments() {
        let cases = [
            ("", ""),
            ("/", "/"),
            (".", ""),
            ("..", ""),
            ("./g", "g"),
            ("../g", "g"),
            ("../../g", "g"),
            ("/./g", "/g"),
            ("/../g", "/g"),
            ("/.", "/"),
            ("/..", "/"),
            ("g.", "g."),
            (".g", ".g"),
            ("g..", "g.."),
            ("..g", "..g"),
            ("a/..", "/"),
            ("a/../", "/"),
            ("a/./b", "a/b"),
            ("mid/content=5/../6", "mid/6"),
            ("/a/b/c/./../../g", "/a/g"),
            ("/a/b/c/../../../../g", "/g"),
            ("a/b/c//../d", "a/b/c/d"),
        ];
        for (path, expected) in cases {
            assert_eq!(remove_dot_segments(path), expected, "path: {path:?}");
        }
    }

    #[test]
    fn dot_segments_idempotent() {
        let paths = [
            "/a/b/c/./../../g",
            "mid/content=5/../6",
            "../../..",
            "//a//../b",
            "a/.././..",
        ];
        for path in paths {
            let once = remove_dot_segments(path);
            assert_eq!(remove_dot_segments(&once), once, "path: {path:?}");
        }
    }

    #[test]
    fn merge() {
        let mut base = Uri::default();
        let mut reference = Uri::default();
        reference.path = "g".to_owned();

        base.path = "/b/c/d;p".to_owned();
        assert_eq!(merge_paths(&base, &reference), "/b/c/g");

        // A base with an authority and an empty path merges below root.
        base.authority = Some(Default::default());
        base.path = String::new();
        assert_eq!(merge_paths(&base, &reference), "/g");

        // A slashless base path contributes nothing.
        base.authority = None;
        base.path = "x".to_owned();
        assert_eq!(merge_paths(&base, &reference), "g");
    }
}
