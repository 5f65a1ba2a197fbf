//! Server-rendered HTML. Every interpolated value goes through [`escape`].

pub mod admin;
pub mod pages;

use std::fmt::Write;

use axum::http::StatusCode;
use axum::response::Html;

use crate::extractors::session::Identity;

/// What every page needs besides its own content.
pub struct PageContext<'a> {
    pub identity: Option<&'a Identity>,
    pub flash: Option<String>,
}

impl<'a> PageContext<'a> {
    pub fn new(identity: Option<&'a Identity>, flash: Option<String>) -> Self {
        Self { identity, flash }
    }

    pub fn anonymous() -> Self {
        Self {
            identity: None,
            flash: None,
        }
    }
}

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap `body` in the site chrome: navigation for the current identity and the flash notice.
pub fn layout(ctx: &PageContext<'_>, title: &str, body: &str) -> Html<String> {
    let mut nav = String::from(r#"<a href="/">Parks</a> <a href="/contact">Contact</a>"#);
    match ctx.identity {
        Some(identity) => {
            nav.push_str(
                r#" <a href="/booking/new">Book tickets</a> <a href="/bookings">My bookings</a> <a href="/profile">Profile</a>"#,
            );
            if identity.is_admin() {
                nav.push_str(r#" <a href="/admin">Admin</a>"#);
            }
            nav.push_str(r#" <a href="/logout">Log out</a>"#);
        }
        None => nav.push_str(r#" <a href="/login">Log in</a> <a href="/register">Register</a>"#),
    }

    let mut html = String::new();
    let _ = writeln!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>{} | Park Booking</title></head>\n<body>\n<nav>{}</nav>",
        escape(title),
        nav
    );
    if let Some(flash) = &ctx.flash {
        let _ = writeln!(html, "<div class=\"flash\">{}</div>", escape(flash));
    }
    let _ = writeln!(
        html,
        "<main>\n<h1>{}</h1>\n{}\n</main>\n</body>\n</html>",
        escape(title),
        body
    );
    Html(html)
}

pub fn error_page(status: StatusCode, message: &str) -> Html<String> {
    let title = match status {
        StatusCode::NOT_FOUND => "Page not found",
        StatusCode::BAD_REQUEST => "Bad request",
        _ => "Something went wrong",
    };
    layout(
        &PageContext::anonymous(),
        title,
        &format!(
            "<p>{}</p>\n<p><a href=\"/\">Back to the parks</a></p>",
            escape(message)
        ),
    )
}
