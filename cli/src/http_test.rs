use super::*;

#[test]
fn new_rejects_non_http_urls() {
    let err = HttpStore::new("ftp://example.com").expect_err("scheme");
    assert!(matches!(err, CliError::InvalidBaseUrl(url) if url == "ftp://example.com"));
}

#[test]
fn urls_join_without_double_slash() {
    let store = HttpStore::new("http://127.0.0.1:3000/").expect("store");
    assert_eq!(store.url("/healthz"), "http://127.0.0.1:3000/healthz");
    assert_eq!(store.reservation_url("abc"), "http://127.0.0.1:3000/api/reservas/abc");
}

#[test]
fn error_message_prefers_json_error_field() {
    assert_eq!(error_message(r#"{"error":"nope"}"#), "nope");
}

#[test]
fn error_message_falls_back_to_body_text() {
    assert_eq!(error_message("Invalid URL: bad uuid\n"), "Invalid URL: bad uuid");
    assert_eq!(error_message(""), "");
}
