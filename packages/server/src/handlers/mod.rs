pub mod admin;
pub mod booking;
pub mod contact;
pub mod health;
pub mod login;
pub mod park;

use axum::response::Html;
use axum_extra::extract::CookieJar;

use crate::error::AppError;
use crate::extractors::session::Identity;
use crate::utils::flash;
use crate::views::PageContext;

/// Consume the pending flash message and render a page with it.
pub(crate) fn render<F>(
    jar: CookieJar,
    identity: Option<&Identity>,
    page: F,
) -> (CookieJar, Html<String>)
where
    F: FnOnce(&PageContext<'_>) -> Html<String>,
{
    let (jar, message) = flash::take(jar);
    let ctx = PageContext::new(identity, message);
    (jar, page(&ctx))
}

/// Parse a numeric path id. Anything that is not an id names nothing, so it is a 404.
pub(crate) fn parse_id(raw: &str, not_found: &str) -> Result<i32, AppError> {
    raw.parse::<i32>()
        .map_err(|_| AppError::NotFound(not_found.to_string()))
}
