use crate::ClientError;
use crate::client::{validate_login_form, validate_signup_form};

#[test]
fn test_login_form_accepts_filled_fields() {
    assert!(validate_login_form("a@b.com", "secret").is_ok());
}

#[test]
fn test_login_form_rejects_blank_email() {
    let result = validate_login_form("   ", "secret");
    assert!(matches!(
        result,
        Err(ClientError::Validation { field: "email", .. })
    ));
}

#[test]
fn test_login_form_rejects_empty_password() {
    let result = validate_login_form("a@b.com", "");
    assert!(matches!(
        result,
        Err(ClientError::Validation {
            field: "password",
            ..
        })
    ));
}

#[test]
fn test_signup_form_requires_name() {
    let result = validate_signup_form("", "a@b.com", "secret");
    assert!(matches!(
        result,
        Err(ClientError::Validation { field: "name", .. })
    ));
}

#[test]
fn test_signup_form_rejects_short_password() {
    let result = validate_signup_form("Sam", "a@b.com", "12345");
    let err = result.unwrap_err();
    assert!(err.to_string().contains("at least 6 characters"));
}

#[test]
fn test_signup_form_accepts_minimum_length_password() {
    assert!(validate_signup_form("Sam", "a@b.com", "123456").is_ok());
}
