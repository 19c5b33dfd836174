use super::*;

#[test]
fn from_response_maps_gone_with_detail() {
    let err = ApiError::from_response(410, r#"{"detail":"Token expired"}"#, "fallback");
    assert_eq!(err, ApiError::Gone { message: "Token expired".to_owned() });
    assert_eq!(err.status(), Some(410));
}

#[test]
fn from_response_maps_not_found() {
    let err = ApiError::from_response(404, r#"{"detail":"Invalid token"}"#, "fallback");
    assert_eq!(err, ApiError::NotFound { message: "Invalid token".to_owned() });
}

#[test]
fn from_response_marks_401_and_403_as_auth_failures() {
    assert!(ApiError::from_response(401, r#"{"detail":"Invalid token"}"#, "x").is_auth_failure());
    assert!(ApiError::from_response(403, r#"{"detail":"Email not verified"}"#, "x").is_auth_failure());
    assert!(!ApiError::from_response(400, r#"{"detail":"Account already exists"}"#, "x").is_auth_failure());
}

#[test]
fn from_response_displays_backend_detail() {
    let err = ApiError::from_response(429, r#"{"detail":"Please wait before resending"}"#, "Resend failed");
    assert_eq!(err.to_string(), "Please wait before resending");
    assert_eq!(err.status(), Some(429));
}

#[test]
fn response_message_uses_fallback_for_json_without_detail() {
    assert_eq!(response_message(r#"{"error":"boom"}"#, "Failed to create organisation"), "Failed to create organisation");
}

#[test]
fn response_message_uses_fallback_for_empty_body() {
    assert_eq!(response_message("   ", "Login failed"), "Login failed");
}

#[test]
fn response_message_reads_first_validation_error() {
    let body = r#"{"detail":[{"loc":["body","name"],"msg":"field required","type":"value_error.missing"}]}"#;
    assert_eq!(response_message(body, "fallback"), "field required");
}

#[test]
fn response_message_truncates_raw_body() {
    let body = "x".repeat(400);
    let message = response_message(&body, "fallback");
    assert_eq!(message.chars().count(), RAW_BODY_LIMIT);
}

#[test]
fn response_message_keeps_short_raw_body() {
    assert_eq!(response_message("Internal Server Error", "fallback"), "Internal Server Error");
}

#[test]
fn network_error_has_fixed_copy() {
    assert_eq!(ApiError::Network.to_string(), NETWORK_MESSAGE);
    assert_eq!(ApiError::Network.status(), None);
}
