// ABOUTME: Initial migration to create users, perfumes, and cart_items tables
// ABOUTME: Cart rows cascade away with their user or perfume and are unique per pair

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(ColumnDef::new(Users::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .big_integer()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Perfumes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Perfumes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Perfumes::Name).string().not_null())
                    .col(ColumnDef::new(Perfumes::Brand).string().not_null())
                    .col(ColumnDef::new(Perfumes::Description).text().not_null())
                    .col(ColumnDef::new(Perfumes::Price).double().not_null())
                    .col(ColumnDef::new(Perfumes::ImageUrl).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CartItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CartItems::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CartItems::UserId).integer().not_null())
                    .col(ColumnDef::new(CartItems::PerfumeId).integer().not_null())
                    .col(ColumnDef::new(CartItems::Quantity).integer().not_null().default(1))
                    .col(
                        ColumnDef::new(CartItems::CreatedAt)
                            .big_integer()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_items_user_id")
                            .from(CartItems::Table, CartItems::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_items_perfume_id")
                            .from(CartItems::Table, CartItems::PerfumeId)
                            .to(Perfumes::Table, Perfumes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .name("idx_cart_items_user_perfume_unique")
                            .table(CartItems::Table)
                            .col(CartItems::UserId)
                            .col(CartItems::PerfumeId)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CartItems::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Perfumes::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Users {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum Perfumes {
    Table,
    Id,
    Name,
    Brand,
    Description,
    Price,
    ImageUrl,
}

#[derive(DeriveIden)]
pub enum CartItems {
    Table,
    Id,
    UserId,
    PerfumeId,
    Quantity,
    CreatedAt,
}
