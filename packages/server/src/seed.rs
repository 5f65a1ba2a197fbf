use sea_orm::*;
use tracing::{info, warn};

use crate::config::AuthConfig;
use crate::entity::{park, role, user};
use crate::models::park::NewPark;
use crate::utils::hash::hash_password;

/// Roles seeded on startup.
const DEFAULT_ROLES: &[&str] = &[role::ADMIN_ROLE, role::DEFAULT_ROLE];

/// Insert the default roles, leaving existing rows alone.
pub async fn seed_roles<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    let mut inserted = 0u32;
    for &name in DEFAULT_ROLES {
        let model = role::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        };

        let result = role::Entity::insert(model)
            .on_conflict(
                sea_query::OnConflict::column(role::Column::Name)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(db)
            .await;

        match result {
            Ok(0) | Err(DbErr::RecordNotInserted) => {}
            Ok(_) => inserted += 1,
            Err(e) => return Err(e),
        }
    }

    if inserted > 0 {
        info!("Seeded {} new roles", inserted);
    }
    Ok(())
}

fn demo_parks() -> Vec<NewPark> {
    [
        ("PARK 1", "Dublin", "park-1-dublin"),
        ("PARK 2", "London", "park-2-london"),
        ("PARK 3", "Berlin", "park-3-berlin"),
    ]
    .into_iter()
    .map(|(name, location, slug)| NewPark {
        name: name.to_string(),
        location: location.to_string(),
        description: format!("{name} in {location}"),
        slug: slug.to_string(),
        ..Default::default()
    })
    .collect()
}

/// Populate the park catalogue, but only into an empty table.
pub async fn seed_parks<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    if park::Entity::find().count(db).await? > 0 {
        return Ok(());
    }

    let mut inserted = 0u32;
    for park in demo_parks() {
        park.into_active_model().insert(db).await?;
        inserted += 1;
    }

    info!("Seeded {} demo parks", inserted);
    Ok(())
}

/// Create the bootstrap administrator when `admin_email` and `admin_password`
/// are both configured.
///
/// An existing account with that email is only promoted when
/// `promote_existing_admin` is set; otherwise it is left alone with a warning.
pub async fn seed_admin<C: ConnectionTrait>(db: &C, auth: &AuthConfig) -> anyhow::Result<()> {
    let (Some(email), Some(password)) = (&auth.admin_email, &auth.admin_password) else {
        return Ok(());
    };
    if password.is_empty() {
        anyhow::bail!("refusing to seed admin '{}' with an empty password", email);
    }

    let admin_role = role::Entity::find()
        .filter(role::Column::Name.eq(role::ADMIN_ROLE))
        .one(db)
        .await?
        .ok_or_else(|| anyhow::anyhow!("role '{}' has not been seeded", role::ADMIN_ROLE))?;

    let existing = user::Entity::find()
        .filter(user::Column::Email.eq(email.as_str()))
        .one(db)
        .await?;

    match existing {
        Some(found) if found.role_id == Some(admin_role.id) => {}
        Some(found) if !auth.promote_existing_admin => {
            warn!(
                email = %email,
                user_id = found.id,
                "Admin email belongs to an existing non-admin account; not promoting it"
            );
        }
        Some(found) => {
            let mut active: user::ActiveModel = found.into();
            active.role_id = Set(Some(admin_role.id));
            active.update(db).await?;
            info!(email = %email, "Promoted existing user to admin");
        }
        None => {
            let admin = user::ActiveModel {
                email: Set(email.clone()),
                name: Set("Admin".to_string()),
                last_name: Set(String::new()),
                password: Set(hash_password(password)?),
                role_id: Set(Some(admin_role.id)),
                ..Default::default()
            };
            admin.insert(db).await?;
            info!(email = %email, "Seeded admin account");
        }
    }

    Ok(())
}
