use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::park::index))
        .route("/parks/{id}", get(handlers::park::park_detail))
        .route("/health", get(handlers::health::health))
        .route(
            "/contact",
            get(handlers::contact::contact_page).post(handlers::contact::submit_contact),
        )
        .merge(auth_routes())
        .merge(booking_routes())
        .nest("/admin", admin_routes())
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/login",
            get(handlers::login::login_page).post(handlers::login::login),
        )
        .route(
            "/register",
            get(handlers::login::register_page).post(handlers::login::register),
        )
        .route(
            "/forgot_password",
            get(handlers::login::forgot_password_page).post(handlers::login::forgot_password),
        )
        .route("/logout", get(handlers::login::logout))
}

fn booking_routes() -> Router<AppState> {
    Router::new()
        .route("/profile", get(handlers::booking::profile))
        .route("/bookings", get(handlers::booking::list_bookings))
        .route("/booking/new", get(handlers::booking::new_booking))
        .route(
            "/booking",
            get(handlers::booking::booking_redirect).post(handlers::booking::create_booking),
        )
}

fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::admin::dashboard))
        .route("/users", get(handlers::admin::list_users))
        .route("/users/{id}/role", post(handlers::admin::set_user_role))
        .route(
            "/parks",
            get(handlers::admin::list_parks).post(handlers::admin::create_park),
        )
        .route("/parks/{id}/delete", post(handlers::admin::delete_park))
        .route("/bookings", get(handlers::admin::list_bookings))
        .route("/messages", get(handlers::admin::list_messages))
}
