//! One-shot notices carried across a redirect in a cookie.
//!
//! The message is hex-encoded so any UTF-8 text survives cookie syntax.

use axum::http::{HeaderValue, header::SET_COOKIE};
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};

pub const FLASH_COOKIE: &str = "flash";

pub fn encode(message: &str) -> String {
    hex::encode(message.as_bytes())
}

pub fn decode(value: &str) -> Option<String> {
    let bytes = hex::decode(value).ok()?;
    String::from_utf8(bytes).ok()
}

pub fn cookie(message: &str) -> Cookie<'static> {
    Cookie::build((FLASH_COOKIE, encode(message)))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// A 303 redirect to `to` that leaves `message` for the next rendered page.
pub fn redirect(to: &str, message: &str) -> Response {
    let mut res = Redirect::to(to).into_response();
    match HeaderValue::from_str(&cookie(message).to_string()) {
        Ok(value) => {
            res.headers_mut().append(SET_COOKIE, value);
        }
        Err(e) => tracing::warn!("Dropping flash message: {}", e),
    }
    res
}

/// Read the pending flash message, if any, and clear it from the jar.
pub fn take(jar: CookieJar) -> (CookieJar, Option<String>) {
    let Some(value) = jar.get(FLASH_COOKIE).map(|c| c.value().to_owned()) else {
        return (jar, None);
    };
    let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/"));
    (jar, decode(&value))
}
