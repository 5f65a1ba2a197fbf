use sea_orm::ActiveValue::Set;
use serde::Deserialize;

use crate::entity::park;
use crate::error::AppError;
use crate::utils::slug::{slugify, validate_slug};

use super::shared::{non_negative_int, required};

const ADMIN_PARKS: &str = "/admin/parks";

/// Park fields as the application supplies them. Everything but the first four defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewPark {
    pub name: String,
    pub location: String,
    pub description: String,
    pub slug: String,
    pub short_description: String,
    pub image_path: String,
    pub folder: String,
    pub hours: String,
    pub difficulty: String,
    pub min_age: i32,
    pub price: f64,
    pub wait_time: i32,
    pub height_requirement: i32,
}

impl NewPark {
    pub fn into_active_model(self) -> park::ActiveModel {
        park::ActiveModel {
            name: Set(self.name),
            location: Set(self.location),
            description: Set(self.description),
            short_description: Set(self.short_description),
            slug: Set(self.slug),
            image_path: Set(self.image_path),
            folder: Set(self.folder),
            hours: Set(self.hours),
            difficulty: Set(self.difficulty),
            min_age: Set(self.min_age),
            price: Set(self.price),
            wait_time: Set(self.wait_time),
            height_requirement: Set(self.height_requirement),
            ..Default::default()
        }
    }
}

/// Admin console form for creating a park.
#[derive(Deserialize, Default)]
#[serde(default)]
pub struct CreateParkForm {
    pub name: String,
    pub location: String,
    pub description: String,
    pub short_description: String,
    /// Derived from `name` when left blank.
    pub slug: String,
    pub image_path: String,
    pub folder: String,
    pub hours: String,
    pub difficulty: String,
    pub min_age: String,
    pub price: String,
    pub wait_time: String,
    pub height_requirement: String,
}

pub fn parse_create_park_form(form: CreateParkForm) -> Result<NewPark, AppError> {
    let name = required(&form.name, "Name", ADMIN_PARKS)?.to_string();
    let location = required(&form.location, "Location", ADMIN_PARKS)?.to_string();
    let description = required(&form.description, "Description", ADMIN_PARKS)?.to_string();
    if name.chars().count() > 150 || location.chars().count() > 150 {
        return Err(AppError::validation(
            "Name and location must be at most 150 characters.",
            ADMIN_PARKS,
        ));
    }

    let slug = if form.slug.trim().is_empty() {
        slugify(&name)
    } else {
        form.slug.trim().to_string()
    };
    let slug = validate_slug(&slug)
        .map_err(|e| AppError::validation(e.to_string(), ADMIN_PARKS))?
        .to_string();

    let price = match form.price.trim() {
        "" => 0.0,
        raw => match raw.parse::<f64>() {
            Ok(p) if p.is_finite() && p >= 0.0 => p,
            _ => {
                return Err(AppError::validation(
                    "Price must be a number of zero or more.",
                    ADMIN_PARKS,
                ));
            }
        },
    };

    Ok(NewPark {
        min_age: non_negative_int(&form.min_age, "Minimum age", ADMIN_PARKS)?,
        wait_time: non_negative_int(&form.wait_time, "Wait time", ADMIN_PARKS)?,
        height_requirement: non_negative_int(
            &form.height_requirement,
            "Height requirement",
            ADMIN_PARKS,
        )?,
        price,
        name,
        location,
        description,
        slug,
        short_description: form.short_description.trim().to_string(),
        image_path: form.image_path.trim().to_string(),
        folder: form.folder.trim().to_string(),
        hours: form.hours.trim().to_string(),
        difficulty: form.difficulty.trim().to_string(),
    })
}

/// Admin console form for changing a user's role.
#[derive(Deserialize)]
pub struct RoleForm {
    #[serde(default)]
    pub role: String,
}
