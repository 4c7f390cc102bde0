use super::*;

#[test]
fn normalize_base_url_defaults_when_unset() {
    assert_eq!(normalize_base_url(None), DEFAULT_API_BASE_URL);
}

#[test]
fn normalize_base_url_defaults_when_blank() {
    assert_eq!(normalize_base_url(Some("   ")), DEFAULT_API_BASE_URL);
}

#[test]
fn normalize_base_url_strips_trailing_slash() {
    assert_eq!(normalize_base_url(Some("https://bank.example.test/")), "https://bank.example.test");
}
