use axum::{
    extract::{Path, State},
    response::{Html, Response},
};
use axum_extra::extract::CookieJar;
use sea_orm::*;
use tracing::instrument;

use crate::entity::{booking, message, park, role, user};
use crate::error::AppError;
use crate::extractors::form::AppForm;
use crate::extractors::session::AdminUser;
use crate::models::park::{CreateParkForm, RoleForm, parse_create_park_form};
use crate::state::AppState;
use crate::utils::{flash, queries};
use crate::views::admin::{self, BookingRow, Counts};

use super::{parse_id, render};

const ADMIN_USERS: &str = "/admin/users";
const ADMIN_PARKS: &str = "/admin/parks";

#[instrument(skip_all, fields(admin_id = identity.user_id))]
pub async fn dashboard(
    AdminUser(identity): AdminUser,
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>), AppError> {
    let counts = Counts {
        users: user::Entity::find().count(&state.db).await?,
        parks: park::Entity::find().count(&state.db).await?,
        bookings: booking::Entity::find().count(&state.db).await?,
        messages: message::Entity::find().count(&state.db).await?,
    };
    Ok(render(jar, Some(&identity), |ctx| admin::dashboard(ctx, &counts)))
}

#[instrument(skip_all, fields(admin_id = identity.user_id))]
pub async fn list_users(
    AdminUser(identity): AdminUser,
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>), AppError> {
    let users = user::Entity::find()
        .order_by_asc(user::Column::Id)
        .all(&state.db)
        .await?;
    let roles = role::Entity::find()
        .order_by_asc(role::Column::Id)
        .all(&state.db)
        .await?;

    let rows: Vec<(user::Model, Option<String>)> = users
        .into_iter()
        .map(|u| {
            let name = u
                .role_id
                .and_then(|id| roles.iter().find(|r| r.id == id))
                .map(|r| r.name.clone());
            (u, name)
        })
        .collect();

    Ok(render(jar, Some(&identity), |ctx| {
        admin::users(ctx, &rows, &roles)
    }))
}

/// Assign an existing role to a user.
#[instrument(skip(state, form), fields(admin_id = identity.user_id))]
pub async fn set_user_role(
    AdminUser(identity): AdminUser,
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    AppForm(form): AppForm<RoleForm>,
) -> Result<Response, AppError> {
    let user_id = parse_id(&user_id, "User not found")?;
    let role_name = form.role.trim();
    if role_name.is_empty() {
        return Err(AppError::validation("Role is required.", ADMIN_USERS));
    }

    let txn = state.db.begin().await?;

    let role = queries::find_role_by_name(&txn, role_name)
        .await?
        .ok_or_else(|| AppError::validation(format!("Unknown role '{role_name}'."), ADMIN_USERS))?;

    let target = user::Entity::find_by_id(user_id)
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    let email = target.email.clone();
    let mut active: user::ActiveModel = target.into();
    active.role_id = Set(Some(role.id));
    active.update(&txn).await?;

    txn.commit().await?;

    tracing::info!(user_id, role = %role.name, "User role updated");

    Ok(flash::redirect(
        ADMIN_USERS,
        &format!("{} is now {}.", email, role.name),
    ))
}

#[instrument(skip_all, fields(admin_id = identity.user_id))]
pub async fn list_parks(
    AdminUser(identity): AdminUser,
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>), AppError> {
    let parks = queries::all_parks(&state.db).await?;
    Ok(render(jar, Some(&identity), |ctx| admin::parks(ctx, &parks)))
}

#[instrument(skip(state, form), fields(admin_id = identity.user_id))]
pub async fn create_park(
    AdminUser(identity): AdminUser,
    State(state): State<AppState>,
    AppForm(form): AppForm<CreateParkForm>,
) -> Result<Response, AppError> {
    let new_park = parse_create_park_form(form)?;
    let slug = new_park.slug.clone();

    let model = new_park
        .into_active_model()
        .insert(&state.db)
        .await
        .map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => AppError::conflict(
                format!("A park with slug '{slug}' already exists."),
                ADMIN_PARKS,
            ),
            _ => AppError::from(e),
        })?;

    tracing::info!(park_id = model.id, slug = %model.slug, "Park created");

    Ok(flash::redirect(
        ADMIN_PARKS,
        &format!("Park '{}' created.", model.name),
    ))
}

/// Delete a park that nobody has booked.
#[instrument(skip(state), fields(admin_id = identity.user_id))]
pub async fn delete_park(
    AdminUser(identity): AdminUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&id, "Park not found")?;
    let park = queries::find_park(&state.db, id).await?;

    let in_use = booking::Entity::find()
        .filter(booking::Column::ParkId.eq(id))
        .count(&state.db)
        .await?;
    if in_use > 0 {
        return Err(AppError::conflict(
            format!("'{}' has {} booking(s) and cannot be deleted.", park.name, in_use),
            ADMIN_PARKS,
        ));
    }

    park::Entity::delete_by_id(id)
        .exec(&state.db)
        .await
        .map_err(|e| match e.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => AppError::conflict(
                format!("'{}' has bookings and cannot be deleted.", park.name),
                ADMIN_PARKS,
            ),
            _ => AppError::from(e),
        })?;

    tracing::info!(park_id = id, "Park deleted");

    Ok(flash::redirect(
        ADMIN_PARKS,
        &format!("Park '{}' deleted.", park.name),
    ))
}

/// Every booking, newest first, with the owning user and park resolved.
#[instrument(skip_all, fields(admin_id = identity.user_id))]
pub async fn list_bookings(
    AdminUser(identity): AdminUser,
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>), AppError> {
    let bookings = booking::Entity::find()
        .order_by_desc(booking::Column::Id)
        .all(&state.db)
        .await?;

    let mut user_ids: Vec<i32> = bookings.iter().map(|b| b.user_id).collect();
    user_ids.sort_unstable();
    user_ids.dedup();
    let users = user::Entity::find()
        .filter(user::Column::Id.is_in(user_ids))
        .all(&state.db)
        .await?;

    let rows: Vec<BookingRow> = queries::with_park_names(&state.db, bookings)
        .await?
        .into_iter()
        .map(|(booking, park_name)| BookingRow {
            user_email: users
                .iter()
                .find(|u| u.id == booking.user_id)
                .map(|u| u.email.clone())
                .unwrap_or_default(),
            booking,
            park_name,
        })
        .collect();

    Ok(render(jar, Some(&identity), |ctx| admin::bookings(ctx, &rows)))
}

#[instrument(skip_all, fields(admin_id = identity.user_id))]
pub async fn list_messages(
    AdminUser(identity): AdminUser,
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>), AppError> {
    let messages = message::Entity::find()
        .order_by_desc(message::Column::CreatedAt)
        .order_by_desc(message::Column::Id)
        .all(&state.db)
        .await?;
    Ok(render(jar, Some(&identity), |ctx| {
        admin::messages(ctx, &messages)
    }))
}
