use crate::error::AppError;

/// Trim a required text field, failing with a flash back to `back_to` when blank.
pub fn required<'a>(value: &'a str, field: &str, back_to: &str) -> Result<&'a str, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(
            format!("{field} is required."),
            back_to,
        ));
    }
    Ok(trimmed)
}

/// A deliberately loose shape check: one `@` with text on both sides and no whitespace.
pub fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

/// Parse an optional non-negative integer field; blank means zero.
pub fn non_negative_int(value: &str, field: &str, back_to: &str) -> Result<i32, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    match trimmed.parse::<i32>() {
        Ok(n) if n >= 0 => Ok(n),
        _ => Err(AppError::validation(
            format!("{field} must be a whole number of zero or more."),
            back_to,
        )),
    }
}
