use axum::{
    extract::State,
    response::{Html, Response},
};
use axum_extra::extract::CookieJar;
use sea_orm::*;
use tracing::instrument;

use crate::entity::message;
use crate::error::AppError;
use crate::extractors::form::AppForm;
use crate::extractors::session::Session;
use crate::models::contact::{ContactForm, validate_contact_form};
use crate::state::AppState;
use crate::utils::flash;
use crate::views::pages;

use super::render;

pub const MESSAGE_SENT: &str = "Thanks for your message!";

pub async fn contact_page(session: Session, jar: CookieJar) -> (CookieJar, Html<String>) {
    render(jar, session.identity(), pages::contact)
}

/// Store a contact-form message.
#[instrument(skip(state, form), fields(email = %form.email))]
pub async fn submit_contact(
    State(state): State<AppState>,
    AppForm(form): AppForm<ContactForm>,
) -> Result<Response, AppError> {
    validate_contact_form(&form)?;

    let new_message = message::ActiveModel {
        name: Set(form.name.trim().to_string()),
        email: Set(form.email.trim().to_string()),
        message: Set(form.message.trim().to_string()),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };
    let model = new_message.insert(&state.db).await?;

    tracing::info!(message_id = model.id, "Contact message stored");

    Ok(flash::redirect("/contact", MESSAGE_SENT))
}
