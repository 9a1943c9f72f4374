// ABOUTME: SeaORM entities module for database models and relationships
// ABOUTME: Exports entity definitions for users, perfumes, and cart items

pub mod cart_item;
pub mod perfume;
pub mod user;

pub use cart_item::Entity as CartItem;
pub use perfume::Entity as Perfume;
pub use user::Entity as User;
