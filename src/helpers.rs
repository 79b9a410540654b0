/// Split a query string into its non-empty `&`-separated segments.
/// A single leading `?` is ignored.
pub fn segments(query: &str) -> impl Iterator<Item = &str> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query.split('&').filter(|segment| !segment.is_empty())
}

/// Split a segment on its first `=`.
/// Returns (`key`, `value`); the value is `None` when there is no `=`.
/// Optimization: Uses SIMD-accelerated memchr for the '=' search
pub fn split_pair(segment: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'=', segment.as_bytes()).map_or((segment, None), |pos| {
        (&segment[..pos], Some(&segment[pos + 1..]))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat::Vec;

    #[test]
    fn test_segments() {
        let parts: Vec<&str> = segments("?a=1&&b=2&").collect();
        assert_eq!(parts, ["a=1", "b=2"]);
        assert_eq!(segments("").count(), 0);
        assert_eq!(segments("?").count(), 0);
    }

    #[test]
    fn test_split_pair() {
        assert_eq!(split_pair("page=2"), ("page", Some("2")));
        assert_eq!(split_pair("page="), ("page", Some("")));
        assert_eq!(split_pair("page"), ("page", None));
        assert_eq!(split_pair("=2"), ("", Some("2")));
        assert_eq!(split_pair("a=b=c"), ("a", Some("b=c")));
    }
}
