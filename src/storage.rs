// ABOUTME: SeaORM storage layer for users, the perfume catalog, and cart rows
// ABOUTME: Owns the database connection and runs migrations on startup

use sea_orm::{
    ActiveModelTrait, ColumnTrait, Database, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use sea_orm_migration::MigratorTrait;

use crate::entities::{CartItem, Perfume, User, cart_item, perfume, user};
use crate::migration::Migrator;

pub struct Storage {
    pub db: DatabaseConnection,
}

impl Storage {
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        let db = Database::connect(database_url).await?;
        Migrator::up(&db, None).await?;

        Ok(Self { db })
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<user::Model>, DbErr> {
        User::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
    }

    pub async fn list_perfumes(&self) -> Result<Vec<perfume::Model>, DbErr> {
        Perfume::find()
            .order_by_asc(perfume::Column::Id)
            .all(&self.db)
            .await
    }

    pub async fn find_perfume(&self, perfume_id: i32) -> Result<Option<perfume::Model>, DbErr> {
        Perfume::find_by_id(perfume_id).one(&self.db).await
    }

    pub async fn cart_items(
        &self,
        user_id: i32,
    ) -> Result<Vec<(cart_item::Model, Option<perfume::Model>)>, DbErr> {
        CartItem::find()
            .filter(cart_item::Column::UserId.eq(user_id))
            .find_also_related(Perfume)
            .order_by_asc(cart_item::Column::Id)
            .all(&self.db)
            .await
    }

    /// Creates the cart row for the (user, perfume) pair, or bumps its quantity
    /// when one already exists. Callers validate `quantity >= 1`.
    pub async fn add_to_cart(
        &self,
        user_id: i32,
        perfume_id: i32,
        quantity: i32,
    ) -> Result<cart_item::Model, DbErr> {
        let existing = CartItem::find()
            .filter(cart_item::Column::UserId.eq(user_id))
            .filter(cart_item::Column::PerfumeId.eq(perfume_id))
            .one(&self.db)
            .await?;

        match existing {
            Some(item) => {
                let new_quantity = item.quantity + quantity;
                let mut item: cart_item::ActiveModel = item.into();
                item.quantity = Set(new_quantity);
                item.update(&self.db).await
            }
            None => {
                let item = cart_item::ActiveModel {
                    user_id: Set(user_id),
                    perfume_id: Set(perfume_id),
                    quantity: Set(quantity),
                    created_at: Set(chrono::Utc::now().timestamp()),
                    ..Default::default()
                };
                item.insert(&self.db).await
            }
        }
    }

    /// Deletes a single cart row, scoped to the owning user. Returns the number
    /// of rows removed so handlers can 404 on a miss.
    pub async fn remove_cart_item(&self, user_id: i32, item_id: i32) -> Result<u64, DbErr> {
        let result = CartItem::delete_many()
            .filter(cart_item::Column::Id.eq(item_id))
            .filter(cart_item::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn clear_cart(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = CartItem::delete_many()
            .filter(cart_item::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
