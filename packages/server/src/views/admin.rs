use std::fmt::Write;

use axum::response::Html;

use crate::entity::{booking, message, park, role, user};

use super::{PageContext, escape, layout};

/// Row counts shown on the admin dashboard.
pub struct Counts {
    pub users: u64,
    pub parks: u64,
    pub bookings: u64,
    pub messages: u64,
}

pub fn dashboard(ctx: &PageContext<'_>, counts: &Counts) -> Html<String> {
    let body = format!(
        r#"<ul class="counts">
<li><a href="/admin/users">Users</a>: {}</li>
<li><a href="/admin/parks">Parks</a>: {}</li>
<li><a href="/admin/bookings">Bookings</a>: {}</li>
<li><a href="/admin/messages">Messages</a>: {}</li>
</ul>"#,
        counts.users, counts.parks, counts.bookings, counts.messages
    );
    layout(ctx, "Admin", &body)
}

pub fn users(
    ctx: &PageContext<'_>,
    rows: &[(user::Model, Option<String>)],
    roles: &[role::Model],
) -> Html<String> {
    let mut options = String::new();
    for role in roles {
        let _ = write!(
            options,
            "<option value=\"{0}\">{0}</option>",
            escape(&role.name)
        );
    }

    let mut body = String::from(
        "<table class=\"users\">\n<tr><th>ID</th><th>Name</th><th>Email</th><th>Role</th><th></th></tr>\n",
    );
    for (user, role_name) in rows {
        let _ = writeln!(
            body,
            "<tr><td>{}</td><td>{} {}</td><td>{}</td><td>{}</td><td><form method=\"post\" action=\"/admin/users/{}/role\"><select name=\"role\">{}</select><button type=\"submit\">Set role</button></form></td></tr>",
            user.id,
            escape(&user.name),
            escape(&user.last_name),
            escape(&user.email),
            escape(role_name.as_deref().unwrap_or("-")),
            user.id,
            options
        );
    }
    body.push_str("</table>");
    layout(ctx, "Users", &body)
}

pub fn parks(ctx: &PageContext<'_>, parks: &[park::Model]) -> Html<String> {
    let mut body = String::from(
        "<table class=\"parks\">\n<tr><th>ID</th><th>Name</th><th>Location</th><th>Slug</th><th></th></tr>\n",
    );
    for park in parks {
        let _ = writeln!(
            body,
            "<tr><td>{}</td><td><a href=\"/parks/{}\">{}</a></td><td>{}</td><td>{}</td><td><form method=\"post\" action=\"/admin/parks/{}/delete\"><button type=\"submit\">Delete</button></form></td></tr>",
            park.id,
            park.id,
            escape(&park.name),
            escape(&park.location),
            escape(&park.slug),
            park.id
        );
    }
    body.push_str(
        r#"</table>
<h2>Add a park</h2>
<form method="post" action="/admin/parks">
<label>Name <input type="text" name="name" required></label>
<label>Location <input type="text" name="location" required></label>
<label>Description <input type="text" name="description" required></label>
<label>Short description <input type="text" name="short_description"></label>
<label>Slug <input type="text" name="slug" placeholder="derived from name"></label>
<label>Image path <input type="text" name="image_path"></label>
<label>Folder <input type="text" name="folder"></label>
<label>Hours <input type="text" name="hours"></label>
<label>Difficulty <input type="text" name="difficulty"></label>
<label>Minimum age <input type="number" name="min_age" min="0"></label>
<label>Price <input type="number" name="price" min="0" step="0.01"></label>
<label>Wait time (min) <input type="number" name="wait_time" min="0"></label>
<label>Height requirement (cm) <input type="number" name="height_requirement" min="0"></label>
<button type="submit">Create</button>
</form>"#,
    );
    layout(ctx, "Manage parks", &body)
}

/// One line of the admin bookings table.
pub struct BookingRow {
    pub booking: booking::Model,
    pub user_email: String,
    pub park_name: String,
}

pub fn bookings(ctx: &PageContext<'_>, rows: &[BookingRow]) -> Html<String> {
    let mut body = String::from(
        "<table class=\"bookings\">\n<tr><th>ID</th><th>User</th><th>Park</th><th>Date</th><th>Tickets</th><th>H&amp;S</th></tr>\n",
    );
    for row in rows {
        let _ = writeln!(
            body,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            row.booking.id,
            escape(&row.user_email),
            escape(&row.park_name),
            row.booking.date.format("%Y-%m-%d %H:%M"),
            row.booking.num_tickets,
            if row.booking.health_safety { "yes" } else { "no" }
        );
    }
    body.push_str("</table>");
    layout(ctx, "All bookings", &body)
}

pub fn messages(ctx: &PageContext<'_>, messages: &[message::Model]) -> Html<String> {
    let mut body = String::new();
    if messages.is_empty() {
        body.push_str("<p>No messages.</p>");
    }
    for msg in messages {
        let _ = writeln!(
            body,
            "<article class=\"message\"><header>{} &lt;{}&gt; at {}</header><p>{}</p></article>",
            escape(&msg.name),
            escape(&msg.email),
            msg.created_at.format("%Y-%m-%d %H:%M UTC"),
            escape(&msg.message)
        );
    }
    layout(ctx, "Messages", &body)
}
