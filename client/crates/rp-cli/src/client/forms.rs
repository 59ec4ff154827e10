//! Client-side checks run before credentials leave the machine.

use crate::client::{CliClientResult, ClientError};

pub const MIN_PASSWORD_LENGTH: usize = 6;

pub fn validate_login_form(email: &str, password: &str) -> CliClientResult<()> {
    require("email", email)?;
    require("password", password)?;
    Ok(())
}

pub fn validate_signup_form(name: &str, email: &str, password: &str) -> CliClientResult<()> {
    require("name", name)?;
    require("email", email)?;
    require("password", password)?;

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ClientError::validation(
            "password",
            format!("must be at least {MIN_PASSWORD_LENGTH} characters"),
        ));
    }

    Ok(())
}

#[track_caller]
fn require(field: &'static str, value: &str) -> CliClientResult<()> {
    if value.trim().is_empty() {
        return Err(ClientError::validation(field, "cannot be empty"));
    }
    Ok(())
}
