//! Request path normalization.
//!
//! Turns raw request paths into stable route-table keys and into the path
//! component of canonical URLs.

const INDEX_HTML: &str = "/index.html";

/// Normalize a request path into a route-table key.
///
/// 1. An empty path becomes `/`
/// 2. `/` is returned unchanged
/// 3. Otherwise the trailing `/` is removed; a run such as `//` is removed
///    as a whole so the result is never left ending in `/`
///
/// Idempotent: normalizing an already normalized path returns it unchanged.
///
/// # Examples
///
/// ```
/// use herald_core::path::normalize_path;
///
/// assert_eq!(normalize_path("/about/"), "/about");
/// assert_eq!(normalize_path("/about"), "/about");
/// assert_eq!(normalize_path("/"), "/");
/// assert_eq!(normalize_path(""), "/");
/// ```
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }
    trimmed.to_string()
}

/// Drop any query string or fragment from a path.
///
/// # Examples
///
/// ```
/// use herald_core::path::strip_query;
///
/// assert_eq!(strip_query("/contact?ref=email"), "/contact");
/// assert_eq!(strip_query("/media#press"), "/media");
/// assert_eq!(strip_query("/about"), "/about");
/// ```
pub fn strip_query(path: &str) -> &str {
    match path.find(['?', '#']) {
        Some(idx) => &path[..idx],
        None => path,
    }
}

/// Replace a trailing `/index.html` (any letter case) with `/`.
///
/// # Examples
///
/// ```
/// use herald_core::path::collapse_index_html;
///
/// assert_eq!(collapse_index_html("/index.html"), "/");
/// assert_eq!(collapse_index_html("/about/INDEX.HTML"), "/about/");
/// assert_eq!(collapse_index_html("/about"), "/about");
/// ```
pub fn collapse_index_html(path: &str) -> String {
    let Some(split) = path.len().checked_sub(INDEX_HTML.len()) else {
        return path.to_string();
    };
    if !path.is_char_boundary(split) {
        return path.to_string();
    }
    let (head, tail) = path.split_at(split);
    if tail.eq_ignore_ascii_case(INDEX_HTML) {
        format!("{head}/")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // -------------------------------------------------------------------------
    // normalize_path tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_normalize_path_root_unchanged() {
        assert_eq!(normalize_path("/"), "/");
    }

    #[test]
    fn test_normalize_path_empty_is_root() {
        assert_eq!(normalize_path(""), "/");
    }

    #[test]
    fn test_normalize_path_strips_one_slash() {
        assert_eq!(normalize_path("/programs/education/"), "/programs/education");
    }

    #[test]
    fn test_normalize_path_slash_run() {
        assert_eq!(normalize_path("/about//"), "/about");
        assert_eq!(normalize_path("//"), "/");
    }

    #[test]
    fn test_normalize_path_leaves_plain_path() {
        assert_eq!(normalize_path("/contact"), "/contact");
    }

    // -------------------------------------------------------------------------
    // strip_query tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_strip_query_both_markers() {
        assert_eq!(strip_query("/a?b=1#c"), "/a");
        assert_eq!(strip_query("/a#c?b=1"), "/a");
    }

    #[test]
    fn test_strip_query_bare_marker() {
        assert_eq!(strip_query("/?"), "/");
    }

    // -------------------------------------------------------------------------
    // collapse_index_html tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_collapse_index_html_mixed_case() {
        assert_eq!(collapse_index_html("/impact/Index.Html"), "/impact/");
    }

    #[test]
    fn test_collapse_index_html_requires_slash() {
        assert_eq!(collapse_index_html("/myindex.html"), "/myindex.html");
    }

    #[test]
    fn test_collapse_index_html_short_and_multibyte() {
        assert_eq!(collapse_index_html("/a"), "/a");
        assert_eq!(collapse_index_html("/ñññññññññ"), "/ñññññññññ");
    }

    // -------------------------------------------------------------------------
    // properties
    // -------------------------------------------------------------------------

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent(p in "\\PC*") {
            let once = normalize_path(&p);
            prop_assert_eq!(normalize_path(&once), once);
        }

        #[test]
        fn prop_normalize_strips_one_trailing_slash(p in "(/[a-z0-9-]{1,8}){1,4}/") {
            prop_assert_eq!(normalize_path(&p), p[..p.len() - 1].to_string());
        }
    }
}
