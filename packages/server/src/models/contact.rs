use serde::Deserialize;

use crate::error::AppError;

use super::shared::{looks_like_email, required};

#[derive(Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

pub fn validate_contact_form(form: &ContactForm) -> Result<(), AppError> {
    required(&form.name, "Name", "/contact")?;
    let email = required(&form.email, "Email", "/contact")?;
    if !looks_like_email(email) {
        return Err(AppError::validation(
            "Please enter a valid email address.",
            "/contact",
        ));
    }
    let message = required(&form.message, "Message", "/contact")?;
    if message.chars().count() > 5000 {
        return Err(AppError::validation(
            "Message must be at most 5000 characters.",
            "/contact",
        ));
    }
    Ok(())
}
