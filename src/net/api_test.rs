use super::*;

// =============================================================
// normalize_url
// =============================================================

#[test]
fn bare_domain_gets_http_scheme() {
    assert_eq!(
        normalize_url("example.com").unwrap(),
        "http://example.com/"
    );
}

#[test]
fn existing_scheme_is_kept() {
    assert_eq!(
        normalize_url("https://example.com/login").unwrap(),
        "https://example.com/login"
    );
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    assert_eq!(
        normalize_url("  example.com  ").unwrap(),
        "http://example.com/"
    );
}

#[test]
fn empty_input_is_rejected_without_a_call() {
    assert_eq!(normalize_url(""), Err(ApiError::EmptyInput));
    assert_eq!(normalize_url("   "), Err(ApiError::EmptyInput));
}

#[test]
fn unparseable_input_is_invalid() {
    assert!(matches!(
        normalize_url("http://exa mple.com"),
        Err(ApiError::InvalidUrl(_))
    ));
    assert!(matches!(
        normalize_url("http://"),
        Err(ApiError::InvalidUrl(_))
    ));
}
