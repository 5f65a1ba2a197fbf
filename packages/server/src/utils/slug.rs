use thiserror::Error;

const MAX_SLUG_LEN: usize = 150;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlugError {
    #[error("Slug cannot be empty")]
    Empty,
    #[error("Slug must be at most 150 characters")]
    TooLong,
    #[error("Slug may only contain lowercase letters, digits and single hyphens")]
    InvalidCharacters,
}

/// Derive a slug from a display name: lowercase ASCII alphanumerics joined by single hyphens.
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out.truncate(MAX_SLUG_LEN);
    out.trim_end_matches('-').to_string()
}

/// Validates a user-supplied slug.
pub fn validate_slug(slug: &str) -> Result<&str, SlugError> {
    let trimmed = slug.trim();

    if trimmed.is_empty() {
        return Err(SlugError::Empty);
    }

    if trimmed.len() > MAX_SLUG_LEN {
        return Err(SlugError::TooLong);
    }

    if !trimmed
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        || trimmed.starts_with('-')
        || trimmed.ends_with('-')
        || trimmed.contains("--")
    {
        return Err(SlugError::InvalidCharacters);
    }

    Ok(trimmed)
}
