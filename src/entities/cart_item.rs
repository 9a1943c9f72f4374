// ABOUTME: Cart row joining a user to a perfume with a quantity
// ABOUTME: One row per (user, perfume) pair; cascades away with either parent

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cart_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub perfume_id: i32,
    pub quantity: i32,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::perfume::Entity",
        from = "Column::PerfumeId",
        to = "super::perfume::Column::Id",
        on_delete = "Cascade"
    )]
    Perfume,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::perfume::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Perfume.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
