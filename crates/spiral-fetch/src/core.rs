//! Core layer: pure transformations.

/// Returns `true` if the HTTP status code is in the 2xx range.
///
/// # Examples
///
/// ```
/// use spiral_fetch::is_success;
///
/// assert!(is_success(200));
/// assert!(is_success(204));
/// assert!(!is_success(301));
/// assert!(!is_success(404));
/// ```
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_success_range_edges() {
        assert!(!is_success(199));
        assert!(is_success(200));
        assert!(is_success(299));
        assert!(!is_success(300));
    }

    #[test]
    fn test_is_success_common_codes() {
        for code in [200, 201, 202, 203, 204, 205, 206, 207, 208, 226] {
            assert!(is_success(code), "Code {} should be a success", code);
        }
        for code in [100, 101, 301, 302, 304, 400, 401, 403, 404, 429, 500, 502, 503, 504] {
            assert!(!is_success(code), "Code {} should NOT be a success", code);
        }
    }

    #[test]
    fn test_is_success_invalid_codes() {
        assert!(!is_success(0));
        assert!(!is_success(600));
        assert!(!is_success(u16::MAX));
    }
}
