// ABOUTME: Seed migration inserting the demo user and the six-perfume catalog
// ABOUTME: The demo password is hashed with Argon2 at migration time

use sea_orm_migration::prelude::*;

use super::m20240601_000001_create_initial_tables::{Perfumes, Users};

const DEMO_NAME: &str = "Cliente Demo";
const DEMO_EMAIL: &str = "cliente@perfumes.com";
const DEMO_PASSWORD: &str = "password123";

const CATALOG: &[(&str, &str, &str, f64, &str)] = &[
    (
        "Essence Bloom",
        "AromaLux",
        "Fragancia floral con notas de jazmin y vainilla. Perfecta para el dia a dia.",
        59.99,
        "/images/perfume1.jpg",
    ),
    (
        "Ocean Whisper",
        "BlueWave",
        "Aroma fresco con matices marinos y citricos. Ideal para el verano.",
        69.99,
        "/images/perfume2.jpg",
    ),
    (
        "Mystic Amber",
        "GoldenAura",
        "Fragancia calida con notas de ambar y especias orientales.",
        79.99,
        "/images/perfume3.jpg",
    ),
    (
        "Rose Garden",
        "FloralEssence",
        "Delicada mezcla de rosas frescas y peonias. Elegancia pura.",
        89.99,
        "/images/perfume4.jpg",
    ),
    (
        "Night Velvet",
        "LuxeNoir",
        "Fragancia intensa con notas de pachuli y vainilla negra.",
        99.99,
        "/images/perfume5.jpg",
    ),
    (
        "Citrus Breeze",
        "FreshAir",
        "Explosion de citricos con toques de bergamota y limon.",
        54.99,
        "/images/perfume6.jpg",
    ),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let password_hash = crate::auth::hash_password(DEMO_PASSWORD)
            .map_err(|err| DbErr::Custom(err.to_string()))?;

        let insert_user = Query::insert()
            .into_table(Users::Table)
            .columns([
                Users::Name,
                Users::Email,
                Users::PasswordHash,
                Users::CreatedAt,
            ])
            .values_panic([
                DEMO_NAME.into(),
                DEMO_EMAIL.into(),
                password_hash.into(),
                chrono::Utc::now().timestamp().into(),
            ])
            .to_owned();
        manager.exec_stmt(insert_user).await?;

        let mut insert_perfumes = Query::insert()
            .into_table(Perfumes::Table)
            .columns([
                Perfumes::Name,
                Perfumes::Brand,
                Perfumes::Description,
                Perfumes::Price,
                Perfumes::ImageUrl,
            ])
            .to_owned();
        for (name, brand, description, price, image_url) in CATALOG {
            insert_perfumes.values_panic([
                (*name).into(),
                (*brand).into(),
                (*description).into(),
                (*price).into(),
                (*image_url).into(),
            ]);
        }
        manager.exec_stmt(insert_perfumes).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete_user = Query::delete()
            .from_table(Users::Table)
            .and_where(Expr::col(Users::Email).eq(DEMO_EMAIL))
            .to_owned();
        manager.exec_stmt(delete_user).await?;

        let delete_perfumes = Query::delete().from_table(Perfumes::Table).to_owned();
        manager.exec_stmt(delete_perfumes).await?;

        Ok(())
    }
}
