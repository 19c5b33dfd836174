use super::*;

#[test]
fn join_api_with_empty_base_keeps_relative_path() {
    assert_eq!(join_api("", "/auth/login"), "/auth/login");
    assert_eq!(join_api("", "events"), "/events");
}

#[test]
fn join_api_strips_trailing_slash_from_base() {
    assert_eq!(join_api("http://localhost:8000/", "/auth/me"), "http://localhost:8000/auth/me");
    assert_eq!(join_api("http://localhost:8000///", "events"), "http://localhost:8000/events");
}

#[test]
fn join_api_inserts_missing_slash() {
    assert_eq!(join_api("https://api.example.test", "organizations"), "https://api.example.test/organizations");
}
