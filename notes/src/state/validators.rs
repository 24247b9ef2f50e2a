use crate::state::{LoginFormState, SignupFormState};
use notes_auth::{is_valid_email, SigninRequest, SignupRequest};

pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const MISSING_PASSWORD: &str = "Please enter the password";
pub const MISSING_NAME: &str = "Please enter your name";

/// Validate the login form and build the sign-in request
///
/// Checks run in order and the first failure is returned.
pub fn validate_login(form: &LoginFormState) -> Result<SigninRequest, String> {
    validate_email(&form.email)?;
    validate_password(form.password.value())?;

    Ok(SigninRequest::new(&form.email, form.password.value()))
}

/// Validate the signup form and build the sign-up request
pub fn validate_signup(form: &SignupFormState) -> Result<SignupRequest, String> {
    if form.name.is_empty() {
        return Err(MISSING_NAME.to_string());
    }
    validate_email(&form.email)?;
    validate_password(form.password.value())?;

    Ok(SignupRequest::new(
        &form.name,
        &form.email,
        form.password.value(),
    ))
}

fn validate_email(email: &str) -> Result<(), String> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(INVALID_EMAIL.to_string())
    }
}

fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err(MISSING_PASSWORD.to_string());
    }
    Ok(())
}
