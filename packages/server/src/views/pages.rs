use std::fmt::Write;

use axum::response::Html;

use crate::entity::{booking, park};
use crate::extractors::session::Identity;

use super::{PageContext, escape, layout};

pub fn index(ctx: &PageContext<'_>, parks: &[park::Model]) -> Html<String> {
    let mut body = String::new();
    if parks.is_empty() {
        body.push_str("<p>No parks yet.</p>");
    } else {
        body.push_str("<ul class=\"parks\">\n");
        for park in parks {
            let summary = if park.short_description.is_empty() {
                &park.description
            } else {
                &park.short_description
            };
            let _ = writeln!(
                body,
                "<li><a href=\"/parks/{}\">{}</a> ({}) {}</li>",
                park.id,
                escape(&park.name),
                escape(&park.location),
                escape(summary)
            );
        }
        body.push_str("</ul>");
    }
    layout(ctx, "Parks", &body)
}

pub fn park_detail(ctx: &PageContext<'_>, park: &park::Model) -> Html<String> {
    let mut body = String::new();
    let _ = writeln!(body, "<p class=\"location\">{}</p>", escape(&park.location));
    if !park.image_path.is_empty() {
        let _ = writeln!(
            body,
            "<img src=\"{}\" alt=\"{}\">",
            escape(&park.image_path),
            escape(&park.name)
        );
    }
    let _ = writeln!(body, "<p>{}</p>", escape(&park.description));

    body.push_str("<dl>\n");
    let facts = [
        ("Hours", park.hours.clone()),
        ("Difficulty", park.difficulty.clone()),
        ("Minimum age", non_zero(park.min_age, "")),
        ("Price", format!("{:.2}", park.price)),
        ("Typical wait", non_zero(park.wait_time, " min")),
        ("Height requirement", non_zero(park.height_requirement, " cm")),
    ];
    for (label, value) in facts {
        if !value.is_empty() {
            let _ = writeln!(body, "<dt>{}</dt><dd>{}</dd>", label, escape(&value));
        }
    }
    body.push_str("</dl>\n");

    if ctx.identity.is_some() {
        body.push_str(r#"<p><a href="/booking/new">Book tickets</a></p>"#);
    } else {
        body.push_str(r#"<p><a href="/login">Log in</a> to book tickets.</p>"#);
    }
    layout(ctx, &park.name, &body)
}

fn non_zero(value: i32, unit: &str) -> String {
    if value == 0 {
        String::new()
    } else {
        format!("{value}{unit}")
    }
}

pub fn login(ctx: &PageContext<'_>) -> Html<String> {
    layout(
        ctx,
        "Log in",
        r#"<form method="post" action="/login">
<label>Email <input type="email" name="email" required></label>
<label>Password <input type="password" name="password" required></label>
<button type="submit">Log in</button>
</form>
<p><a href="/forgot_password">Forgot your password?</a></p>"#,
    )
}

pub fn register(ctx: &PageContext<'_>) -> Html<String> {
    layout(
        ctx,
        "Register",
        r#"<form method="post" action="/register">
<label>Email <input type="email" name="email" required></label>
<label>First name <input type="text" name="name" required></label>
<label>Last name <input type="text" name="last_name" required></label>
<label>Password <input type="password" name="password" required></label>
<button type="submit">Create account</button>
</form>"#,
    )
}

pub fn forgot_password(ctx: &PageContext<'_>) -> Html<String> {
    layout(
        ctx,
        "Reset password",
        r#"<form method="post" action="/forgot_password">
<label>Email <input type="email" name="email" required></label>
<label>New password <input type="password" name="new_password" required></label>
<button type="submit">Update password</button>
</form>"#,
    )
}

pub fn profile(ctx: &PageContext<'_>, identity: &Identity, booking_count: usize) -> Html<String> {
    let body = format!(
        "<p>Welcome, {} {}!</p>\n<p>{}</p>\n<p>You have {} booking{}. <a href=\"/bookings\">View bookings</a></p>",
        escape(&identity.name),
        escape(&identity.last_name),
        escape(&identity.email),
        booking_count,
        if booking_count == 1 { "" } else { "s" }
    );
    layout(ctx, "Profile", &body)
}

pub fn bookings(ctx: &PageContext<'_>, rows: &[(booking::Model, String)]) -> Html<String> {
    let mut body = String::new();
    if rows.is_empty() {
        body.push_str(r#"<p>No bookings yet. <a href="/booking/new">Book tickets</a></p>"#);
    } else {
        body.push_str(
            "<table class=\"bookings\">\n<tr><th>Park</th><th>Date</th><th>Tickets</th><th>Health &amp; safety</th></tr>\n",
        );
        for (booking, park_name) in rows {
            let _ = writeln!(
                body,
                "<tr class=\"booking\"><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape(park_name),
                booking.date.format("%Y-%m-%d %H:%M"),
                booking.num_tickets,
                if booking.health_safety { "Acknowledged" } else { "Not acknowledged" }
            );
        }
        body.push_str("</table>");
    }
    layout(ctx, "My bookings", &body)
}

pub fn new_booking(ctx: &PageContext<'_>, parks: &[park::Model]) -> Html<String> {
    let mut options = String::new();
    for park in parks {
        let _ = writeln!(
            options,
            "<option value=\"{}\">{} ({})</option>",
            park.id,
            escape(&park.name),
            escape(&park.location)
        );
    }
    let body = format!(
        r#"<form method="post" action="/booking">
<label>Park <select name="park_id" required>
{options}</select></label>
<label>Date <input type="datetime-local" name="date" required></label>
<label>Tickets <input type="number" name="num_tickets" min="1" value="1"></label>
<label><input type="checkbox" name="health_safety"> I have read the health and safety guidance</label>
<button type="submit">Book</button>
</form>"#
    );
    layout(ctx, "Book tickets", &body)
}

pub fn contact(ctx: &PageContext<'_>) -> Html<String> {
    layout(
        ctx,
        "Contact us",
        r#"<form method="post" action="/contact">
<label>Name <input type="text" name="name" required></label>
<label>Email <input type="email" name="email" required></label>
<label>Message <textarea name="message" required></textarea></label>
<button type="submit">Send</button>
</form>"#,
    )
}
