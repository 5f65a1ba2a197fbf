use axum::{
    extract::State,
    response::{Html, Redirect},
};
use axum_extra::extract::CookieJar;
use sea_orm::*;
use tracing::instrument;

use crate::entity::{booking, park};
use crate::error::AppError;
use crate::extractors::form::AppForm;
use crate::extractors::session::AuthUser;
use crate::models::booking::{BookingForm, BookingFormError, parse_booking_form};
use crate::state::AppState;
use crate::utils::queries;
use crate::views::pages;

use super::render;

#[instrument(skip_all, fields(user_id = identity.user_id))]
pub async fn profile(
    AuthUser(identity): AuthUser,
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>), AppError> {
    let booking_count = booking::Entity::find()
        .filter(booking::Column::UserId.eq(identity.user_id))
        .count(&state.db)
        .await?;
    Ok(render(jar, Some(&identity), |ctx| {
        pages::profile(ctx, &identity, booking_count as usize)
    }))
}

/// The caller's own bookings.
#[instrument(skip_all, fields(user_id = identity.user_id))]
pub async fn list_bookings(
    AuthUser(identity): AuthUser,
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>), AppError> {
    let bookings = queries::bookings_for_user(&state.db, identity.user_id).await?;
    let rows = queries::with_park_names(&state.db, bookings).await?;
    Ok(render(jar, Some(&identity), |ctx| pages::bookings(ctx, &rows)))
}

#[instrument(skip_all, fields(user_id = identity.user_id))]
pub async fn new_booking(
    AuthUser(identity): AuthUser,
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>), AppError> {
    let parks = queries::all_parks(&state.db).await?;
    Ok(render(jar, Some(&identity), |ctx| {
        pages::new_booking(ctx, &parks)
    }))
}

/// `GET /booking` has nothing to show of its own.
pub async fn booking_redirect(_auth_user: AuthUser) -> Redirect {
    Redirect::to("/profile")
}

/// Book tickets for the caller, then return to the profile page.
#[instrument(skip(state, form), fields(user_id = identity.user_id))]
pub async fn create_booking(
    AuthUser(identity): AuthUser,
    State(state): State<AppState>,
    AppForm(form): AppForm<BookingForm>,
) -> Result<Redirect, AppError> {
    let new_booking = parse_booking_form(&form)?;

    if park::Entity::find_by_id(new_booking.park_id)
        .one(&state.db)
        .await?
        .is_none()
    {
        return Err(BookingFormError::InvalidPark.into());
    }

    let active = booking::ActiveModel {
        user_id: Set(identity.user_id),
        park_id: Set(new_booking.park_id),
        date: Set(new_booking.date),
        num_tickets: Set(new_booking.num_tickets),
        health_safety: Set(new_booking.health_safety),
        ..Default::default()
    };

    // The park can vanish between the check and the insert; the foreign key still holds.
    let model = active.insert(&state.db).await.map_err(|e| match e.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            AppError::from(BookingFormError::InvalidPark)
        }
        _ => AppError::from(e),
    })?;

    tracing::info!(
        booking_id = model.id,
        park_id = model.park_id,
        num_tickets = model.num_tickets,
        "Booking created"
    );

    Ok(Redirect::to("/profile"))
}
