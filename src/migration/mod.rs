// ABOUTME: SeaORM migration module for database schema management
// ABOUTME: Creates the shop schema and seeds the demo user and catalog

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_initial_tables::Migration),
            Box::new(m20240601_000002_seed_demo_data::Migration),
        ]
    }
}

pub mod m20240601_000001_create_initial_tables;
pub mod m20240601_000002_seed_demo_data;
