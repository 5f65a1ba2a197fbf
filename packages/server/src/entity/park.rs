use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "park")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,
    pub location: String,
    pub description: String,
    pub short_description: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub image_path: String,
    pub folder: String,
    /// Free-form opening hours, e.g. "10:00-18:00".
    pub hours: String,
    pub difficulty: String,
    pub min_age: i32,
    pub price: f64,
    /// Typical queue time in minutes.
    pub wait_time: i32,
    /// Minimum rider height in centimetres.
    pub height_requirement: i32,

    #[sea_orm(has_many)]
    pub bookings: HasMany<super::booking::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
