use wr_core::UserProfile;
use wr_db::UserRepository;

use sqlx::SqlitePool;
use uuid::Uuid;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    wr_db::connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

/// Inserts a profile so foreign keys on `user_id` resolve
pub async fn create_test_user(pool: &SqlitePool) -> Uuid {
    let suffix = Uuid::new_v4();
    let profile = UserProfile::new(
        format!("auth-{suffix}"),
        "Test".to_string(),
        "User".to_string(),
        format!("test-{suffix}@example.com"),
    );

    UserRepository::new(pool.clone())
        .create(&profile)
        .await
        .expect("Failed to create test user");

    profile.id
}
