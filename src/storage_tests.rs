// ABOUTME: Tests for the storage layer over an in-memory SQLite database
// ABOUTME: Covers seeded data, cart create-or-increment, scoped deletes, and cascades

#[cfg(test)]
mod tests {
    use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

    use crate::entities::{CartItem, User, cart_item, user};
    use crate::storage::Storage;

    async fn create_test_storage() -> Storage {
        // In-memory database; migrations (including the demo seed) run in new()
        Storage::new("sqlite::memory:").await.unwrap()
    }

    async fn seeded_user(storage: &Storage) -> user::Model {
        storage
            .find_user_by_email("cliente@perfumes.com")
            .await
            .unwrap()
            .unwrap()
    }

    async fn insert_user(storage: &Storage, email: &str) -> user::Model {
        user::ActiveModel {
            name: Set("Other User".to_string()),
            email: Set(email.to_string()),
            password_hash: Set("unused".to_string()),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        }
        .insert(&storage.db)
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn seed_creates_demo_user_and_catalog() {
        let storage = create_test_storage().await;

        let user = seeded_user(&storage).await;
        assert_eq!(user.name, "Cliente Demo");
        assert!(user.password_hash.starts_with("$argon2"));

        let perfumes = storage.list_perfumes().await.unwrap();
        assert_eq!(perfumes.len(), 6);
        assert_eq!(perfumes[0].name, "Essence Bloom");
        assert_eq!(perfumes[0].price, 59.99);
    }

    #[tokio::test]
    async fn unknown_email_returns_none() {
        let storage = create_test_storage().await;

        let user = storage.find_user_by_email("nobody@perfumes.com").await.unwrap();
        assert!(user.is_none());
    }

    #[tokio::test]
    async fn add_to_cart_creates_then_increments() {
        let storage = create_test_storage().await;
        let user = seeded_user(&storage).await;

        let item = storage.add_to_cart(user.id, 1, 1).await.unwrap();
        assert_eq!(item.quantity, 1);

        let item = storage.add_to_cart(user.id, 1, 2).await.unwrap();
        assert_eq!(item.quantity, 3);

        // Still a single row for the pair
        let rows = storage.cart_items(user.id).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].0.quantity, 3);
    }

    #[tokio::test]
    async fn cart_items_join_their_perfume() {
        let storage = create_test_storage().await;
        let user = seeded_user(&storage).await;

        storage.add_to_cart(user.id, 2, 1).await.unwrap();
        storage.add_to_cart(user.id, 3, 2).await.unwrap();

        let rows = storage.cart_items(user.id).await.unwrap();
        assert_eq!(rows.len(), 2);
        for (item, perfume) in &rows {
            let perfume = perfume.as_ref().unwrap();
            assert_eq!(perfume.id, item.perfume_id);
        }
    }

    #[tokio::test]
    async fn remove_is_scoped_to_the_owning_user() {
        let storage = create_test_storage().await;
        let owner = seeded_user(&storage).await;
        let other = insert_user(&storage, "other@perfumes.com").await;

        let item = storage.add_to_cart(owner.id, 1, 1).await.unwrap();

        let deleted = storage.remove_cart_item(other.id, item.id).await.unwrap();
        assert_eq!(deleted, 0);

        let deleted = storage.remove_cart_item(owner.id, item.id).await.unwrap();
        assert_eq!(deleted, 1);

        let deleted = storage.remove_cart_item(owner.id, item.id).await.unwrap();
        assert_eq!(deleted, 0);
    }

    #[tokio::test]
    async fn clear_cart_removes_all_rows_for_the_user() {
        let storage = create_test_storage().await;
        let owner = seeded_user(&storage).await;
        let other = insert_user(&storage, "other@perfumes.com").await;

        storage.add_to_cart(owner.id, 1, 1).await.unwrap();
        storage.add_to_cart(owner.id, 2, 1).await.unwrap();
        storage.add_to_cart(other.id, 1, 1).await.unwrap();

        let cleared = storage.clear_cart(owner.id).await.unwrap();
        assert_eq!(cleared, 2);

        assert!(storage.cart_items(owner.id).await.unwrap().is_empty());
        assert_eq!(storage.cart_items(other.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn deleting_a_user_cascades_to_cart_rows() {
        let storage = create_test_storage().await;
        let user = insert_user(&storage, "doomed@perfumes.com").await;

        storage.add_to_cart(user.id, 1, 1).await.unwrap();
        storage.add_to_cart(user.id, 2, 1).await.unwrap();

        User::delete_by_id(user.id).exec(&storage.db).await.unwrap();

        let remaining = CartItem::find()
            .filter(cart_item::Column::UserId.eq(user.id))
            .all(&storage.db)
            .await
            .unwrap();
        assert!(remaining.is_empty());
    }
}
