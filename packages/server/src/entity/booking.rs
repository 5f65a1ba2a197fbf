use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "booking")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub user_id: i32,
    #[sea_orm(belongs_to, from = "user_id", to = "id")]
    pub user: HasOne<super::user::Entity>,

    pub park_id: i32,
    #[sea_orm(belongs_to, from = "park_id", to = "id")]
    pub park: HasOne<super::park::Entity>,

    /// Visit date and time as entered, without a zone.
    pub date: DateTime,
    pub num_tickets: i32,
    pub health_safety: bool,
}

impl ActiveModelBehavior for ActiveModel {}
