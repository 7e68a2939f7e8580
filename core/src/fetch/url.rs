const HTTP_PREFIX: &str = "http://";
const HTTPS_PREFIX: &str = "https://";

/// Prefix `http://` unless the URL already carries an http(s) scheme.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if has_prefix_ignore_case(trimmed, HTTP_PREFIX) || has_prefix_ignore_case(trimmed, HTTPS_PREFIX)
    {
        trimmed.to_string()
    } else {
        format!("{HTTP_PREFIX}{trimmed}")
    }
}

fn has_prefix_ignore_case(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len()
        && s.is_char_boundary(prefix.len())
        && s[..prefix.len()].eq_ignore_ascii_case(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_host_gets_http() {
        assert_eq!(normalize_url("example.com"), "http://example.com");
        assert_eq!(normalize_url("  example.com/path?q=1 "), "http://example.com/path?q=1");
    }

    #[test]
    fn test_existing_scheme_is_kept() {
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
        assert_eq!(normalize_url("https://example.com"), "https://example.com");
        assert_eq!(normalize_url("HTTPS://Example.com"), "HTTPS://Example.com");
    }

    #[test]
    fn test_other_schemes_are_prefixed() {
        assert_eq!(normalize_url("ftp://example.com"), "http://ftp://example.com");
    }

    #[test]
    fn test_multibyte_input_does_not_panic() {
        assert_eq!(normalize_url("例子.中国"), "http://例子.中国");
    }
}
