use serde::Deserialize;

use crate::error::AppError;

use super::shared::{looks_like_email, required};

/// Login form. Fields default to empty so a partial post is a failed login, not a 400.
#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Missing fields get the same generic rejection as wrong credentials.
pub fn validate_login_form(form: &LoginForm) -> Result<(), AppError> {
    if form.email.trim().is_empty() || form.password.is_empty() {
        return Err(AppError::InvalidCredentials);
    }
    Ok(())
}

#[derive(Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub password: String,
}

pub fn validate_register_form(form: &RegisterForm) -> Result<(), AppError> {
    let email = required(&form.email, "Email", "/register")?;
    if !looks_like_email(email) {
        return Err(AppError::validation(
            "Please enter a valid email address.",
            "/register",
        ));
    }
    if email.chars().count() > 100 {
        return Err(AppError::validation(
            "Email must be at most 100 characters.",
            "/register",
        ));
    }
    for (value, field) in [(&form.name, "First name"), (&form.last_name, "Last name")] {
        if required(value, field, "/register")?.chars().count() > 100 {
            return Err(AppError::validation(
                format!("{field} must be at most 100 characters."),
                "/register",
            ));
        }
    }
    if form.password.is_empty() {
        return Err(AppError::validation("Password is required.", "/register"));
    }
    Ok(())
}

#[derive(Deserialize)]
pub struct ForgotPasswordForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub new_password: String,
}

pub fn validate_forgot_password_form(form: &ForgotPasswordForm) -> Result<(), AppError> {
    required(&form.email, "Email", "/forgot_password")?;
    if form.new_password.is_empty() {
        return Err(AppError::validation(
            "New password is required.",
            "/forgot_password",
        ));
    }
    Ok(())
}
