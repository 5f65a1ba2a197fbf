//! Explicit lookups standing in for relationship traversal (`user.bookings`, `user.role`, ...).

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::entity::{booking, park, role, user};
use crate::error::AppError;

/// Look up a user by exact email.
pub async fn find_user_by_email<C: ConnectionTrait>(
    db: &C,
    email: &str,
) -> Result<Option<user::Model>, AppError> {
    Ok(user::Entity::find()
        .filter(user::Column::Email.eq(email))
        .one(db)
        .await?)
}

/// Resolve a role id to its name.
pub async fn role_name<C: ConnectionTrait>(
    db: &C,
    role_id: Option<i32>,
) -> Result<Option<String>, AppError> {
    let Some(role_id) = role_id else {
        return Ok(None);
    };
    Ok(role::Entity::find_by_id(role_id)
        .one(db)
        .await?
        .map(|r| r.name))
}

pub async fn find_role_by_name<C: ConnectionTrait>(
    db: &C,
    name: &str,
) -> Result<Option<role::Model>, AppError> {
    Ok(role::Entity::find()
        .filter(role::Column::Name.eq(name))
        .one(db)
        .await?)
}

/// Look up a park by ID, returning 404 if not found.
pub async fn find_park<C: ConnectionTrait>(db: &C, id: i32) -> Result<park::Model, AppError> {
    park::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Park not found".into()))
}

pub async fn all_parks<C: ConnectionTrait>(db: &C) -> Result<Vec<park::Model>, AppError> {
    Ok(park::Entity::find()
        .order_by_asc(park::Column::Id)
        .all(db)
        .await?)
}

/// Bookings owned by `user_id`, oldest first.
pub async fn bookings_for_user<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
) -> Result<Vec<booking::Model>, AppError> {
    Ok(booking::Entity::find()
        .filter(booking::Column::UserId.eq(user_id))
        .order_by_asc(booking::Column::Id)
        .all(db)
        .await?)
}

/// Pair each booking with its park's name. Parks are fetched in one query.
pub async fn with_park_names<C: ConnectionTrait>(
    db: &C,
    bookings: Vec<booking::Model>,
) -> Result<Vec<(booking::Model, String)>, AppError> {
    let mut park_ids: Vec<i32> = bookings.iter().map(|b| b.park_id).collect();
    park_ids.sort_unstable();
    park_ids.dedup();

    let parks = park::Entity::find()
        .filter(park::Column::Id.is_in(park_ids))
        .all(db)
        .await?;

    Ok(bookings
        .into_iter()
        .map(|b| {
            let name = parks
                .iter()
                .find(|p| p.id == b.park_id)
                .map(|p| p.name.clone())
                .unwrap_or_default();
            (b, name)
        })
        .collect())
}
