//! Slash-delimited path helpers.
//!
//! These work on the string form of paths as they travel through the viewer
//! (tab ids, plugin result filenames), not on `std::path::Path`, so behavior is
//! identical on every platform.

/// Path segment separator.
pub const SEPARATOR: char = '/';

/// Returns the final segment of `path`.
///
/// Empty input and paths ending in a separator yield an empty string.
///
/// ```
/// use codeview_core::path::basename;
///
/// assert_eq!(basename("a/b/c.txt"), "c.txt");
/// assert_eq!(basename("/"), "");
/// ```
pub fn basename(path: &str) -> &str {
    match path.rfind(SEPARATOR) {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Returns `path` with its final segment removed.
///
/// A path without a separator has the current directory (`"."`) as parent,
/// and a top-level entry has the root (`"/"`).
pub fn dirname(path: &str) -> &str {
    match path.rfind(SEPARATOR) {
        Some(0) => "/",
        Some(idx) => &path[..idx],
        None => ".",
    }
}

/// Strips `base` from the front of `target` when `target` lives under it.
///
/// This is a prefix strip on segment boundaries, not a general relative-path
/// computation: no `..` segments are produced. When `base` is `None` or
/// empty, or `target` is not rooted at `base`, `target` is returned
/// unchanged. A base made only of separators is the filesystem root.
///
/// ```
/// use codeview_core::path::relative;
///
/// assert_eq!(relative(Some("/proj"), "/proj/src/x.ts"), "src/x.ts");
/// assert_eq!(relative(None, "/proj/x"), "/proj/x");
/// assert_eq!(relative(Some("/other"), "/proj/x"), "/proj/x");
/// ```
pub fn relative<'a>(base: Option<&str>, target: &'a str) -> &'a str {
    let Some(base) = base.filter(|b| !b.is_empty()) else {
        return target;
    };

    let base = base.trim_end_matches(SEPARATOR);
    if base.is_empty() {
        // Only an absolute target sits under the root.
        return target.strip_prefix(SEPARATOR).unwrap_or(target);
    }

    match target.strip_prefix(base) {
        Some("") => "",
        Some(rest) => rest.strip_prefix(SEPARATOR).unwrap_or(target),
        None => target,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basename() {
        assert_eq!(basename(""), "");
        assert_eq!(basename("/"), "");
        assert_eq!(basename("a/b/c.txt"), "c.txt");
        assert_eq!(basename("/proj/src/"), "");
        assert_eq!(basename("main.rs"), "main.rs");
        assert_eq!(basename("C:/work/notes:v2.md"), "notes:v2.md");
    }

    #[test]
    fn test_dirname() {
        assert_eq!(dirname("/proj/src/x.ts"), "/proj/src");
        assert_eq!(dirname("/proj"), "/");
        assert_eq!(dirname("x.ts"), ".");
        assert_eq!(dirname(""), ".");
        assert_eq!(dirname("a/b"), "a");
    }

    #[test]
    fn test_relative_strips_base() {
        assert_eq!(relative(Some("/proj"), "/proj/src/x.ts"), "src/x.ts");
        assert_eq!(relative(Some("/proj/"), "/proj/src/x.ts"), "src/x.ts");
        assert_eq!(relative(Some("/proj"), "/proj"), "");
    }

    #[test]
    fn test_relative_without_base() {
        assert_eq!(relative(None, "/proj/x"), "/proj/x");
        assert_eq!(relative(Some(""), "/a/b"), "/a/b");
        assert_eq!(relative(Some(""), "a/b"), "a/b");
    }

    #[test]
    fn test_relative_outside_base_is_unchanged() {
        assert_eq!(relative(Some("/proj"), "/projector/x.ts"), "/projector/x.ts");
        assert_eq!(relative(Some("/a/b"), "/a/c/d.ts"), "/a/c/d.ts");
        assert_eq!(relative(Some("/proj"), "src/x.ts"), "src/x.ts");
    }

    #[test]
    fn test_relative_root_base() {
        assert_eq!(relative(Some("/"), "/x.ts"), "x.ts");
        assert_eq!(relative(Some("//"), "/src/x.ts"), "src/x.ts");
    }
}
