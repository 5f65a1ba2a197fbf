use axum::{
    extract::State,
    response::{Html, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use sea_orm::*;
use tracing::instrument;

use crate::entity::{role, user};
use crate::error::AppError;
use crate::extractors::form::AppForm;
use crate::extractors::session::{AuthUser, Session, clear_session, session_cookie};
use crate::models::auth::{
    ForgotPasswordForm, LoginForm, RegisterForm, validate_forgot_password_form,
    validate_login_form, validate_register_form,
};
use crate::state::AppState;
use crate::utils::{flash, hash, jwt, queries};
use crate::views::pages;

use super::render;

pub const REGISTERED_MESSAGE: &str = "Account created. Please log in.";
pub const PASSWORD_UPDATED_MESSAGE: &str = "Password successfully updated. You can now login.";

pub async fn login_page(session: Session, jar: CookieJar) -> (CookieJar, Html<String>) {
    render(jar, session.identity(), pages::login)
}

/// Authenticate and start a session.
#[instrument(skip(state, jar, form), fields(email = %form.email))]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    AppForm(form): AppForm<LoginForm>,
) -> Result<(CookieJar, Redirect), AppError> {
    validate_login_form(&form)?;

    let user = queries::find_user_by_email(&state.db, form.email.trim())
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    let is_valid = hash::verify_password(&form.password, &user.password)
        .map_err(|e| AppError::Internal(format!("Password verify error: {}", e)))?;

    if !is_valid {
        return Err(AppError::InvalidCredentials);
    }

    let auth = &state.config.auth;
    let token = jwt::sign(user.id, &user.email, &auth.session_secret, auth.session_ttl_hours)
        .map_err(|e| AppError::Internal(format!("Session sign error: {}", e)))?;

    tracing::info!(user_id = user.id, "User logged in");

    Ok((
        jar.add(session_cookie(token, auth.session_ttl_hours)),
        Redirect::to("/profile"),
    ))
}

pub async fn register_page(session: Session, jar: CookieJar) -> (CookieJar, Html<String>) {
    render(jar, session.identity(), pages::register)
}

/// Create an account with the default role. The new user still has to log in.
#[instrument(skip(state, form), fields(email = %form.email))]
pub async fn register(
    State(state): State<AppState>,
    AppForm(form): AppForm<RegisterForm>,
) -> Result<Response, AppError> {
    validate_register_form(&form)?;

    let email = form.email.trim();

    if queries::find_user_by_email(&state.db, email).await?.is_some() {
        return Err(AppError::EmailTaken);
    }

    let role_id = match queries::find_role_by_name(&state.db, role::DEFAULT_ROLE).await? {
        Some(role) => Some(role.id),
        None => {
            tracing::warn!(
                "Default role '{}' is missing; registering without a role",
                role::DEFAULT_ROLE
            );
            None
        }
    };

    let hash = hash::hash_password(&form.password)
        .map_err(|e| AppError::Internal(format!("Password hash error: {}", e)))?;

    let new_user = user::ActiveModel {
        name: Set(form.name.trim().to_string()),
        last_name: Set(form.last_name.trim().to_string()),
        email: Set(email.to_string()),
        password: Set(hash),
        role_id: Set(role_id),
        ..Default::default()
    };

    let user = new_user.insert(&state.db).await.map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            tracing::debug!("Registration race condition: unique constraint caught on insert");
            AppError::EmailTaken
        }
        _ => AppError::from(e),
    })?;

    tracing::info!(user_id = user.id, "Registered new user");

    Ok(flash::redirect("/login", REGISTERED_MESSAGE))
}

/// End the session and go home.
#[instrument(skip_all, fields(user_id = auth_user.0.user_id))]
pub async fn logout(auth_user: AuthUser, jar: CookieJar) -> (CookieJar, Redirect) {
    tracing::info!("User logged out");
    (clear_session(jar), Redirect::to("/"))
}

pub async fn forgot_password_page(session: Session, jar: CookieJar) -> (CookieJar, Html<String>) {
    render(jar, session.identity(), pages::forgot_password)
}

/// Overwrite the password for `email`.
///
/// Anyone who knows an address can reset it; there is no emailed token step.
#[instrument(skip(state, form), fields(email = %form.email))]
pub async fn forgot_password(
    State(state): State<AppState>,
    AppForm(form): AppForm<ForgotPasswordForm>,
) -> Result<Response, AppError> {
    validate_forgot_password_form(&form)?;

    let txn = state.db.begin().await?;

    let user = queries::find_user_by_email(&txn, form.email.trim())
        .await?
        .ok_or(AppError::EmailNotFound)?;
    let user_id = user.id;

    let hash = hash::hash_password(&form.new_password)
        .map_err(|e| AppError::Internal(format!("Password hash error: {}", e)))?;

    let mut active: user::ActiveModel = user.into();
    active.password = Set(hash);
    active.update(&txn).await?;

    txn.commit().await?;

    tracing::info!(user_id, "Password reset");

    Ok(flash::redirect("/login", PASSWORD_UPDATED_MESSAGE))
}
