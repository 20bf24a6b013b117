use crate::repositories::columns::parse_uuid;
use crate::{DbError, Result as DbErrorResult};

use wr_core::{SubscriptionPlan, UserProfile};

use std::str::FromStr;

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const TABLE: &str = "users";

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, profile: &UserProfile) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO users (id, auth_user_id, name, last_name, plan, email, created_at)
              VALUES (?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(profile.id.to_string())
        .bind(&profile.auth_user_id)
        .bind(&profile.name)
        .bind(&profile.last_name)
        .bind(profile.plan.as_str())
        .bind(&profile.email)
        .bind(Utc::now().timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<UserProfile>> {
        let row = sqlx::query(
            r#"
              SELECT id, auth_user_id, name, last_name, plan, email
              FROM users
              WHERE id = ?
              "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_user).transpose()
    }

    /// Looks a profile up by the identity provider's subject
    pub async fn find_by_auth_user_id(
        &self,
        auth_user_id: &str,
    ) -> DbErrorResult<Option<UserProfile>> {
        let row = sqlx::query(
            r#"
              SELECT id, auth_user_id, name, last_name, plan, email
              FROM users
              WHERE auth_user_id = ?
              "#,
        )
        .bind(auth_user_id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_user).transpose()
    }

    /// Inserts `profile` unless its `auth_user_id` is already known, then
    /// returns whichever row is stored.
    pub async fn ensure(&self, profile: &UserProfile) -> DbErrorResult<UserProfile> {
        sqlx::query(
            r#"
              INSERT INTO users (id, auth_user_id, name, last_name, plan, email, created_at)
              VALUES (?, ?, ?, ?, ?, ?, ?)
              ON CONFLICT(auth_user_id) DO NOTHING
              "#,
        )
        .bind(profile.id.to_string())
        .bind(&profile.auth_user_id)
        .bind(&profile.name)
        .bind(&profile.last_name)
        .bind(profile.plan.as_str())
        .bind(&profile.email)
        .bind(Utc::now().timestamp())
        .execute(&self.pool)
        .await?;

        self.find_by_auth_user_id(&profile.auth_user_id)
            .await?
            .ok_or_else(|| DbError::decode(TABLE, "profile vanished after insert"))
    }

    /// Sets the stored plan. Returns false when no profile has that id.
    pub async fn update_plan(&self, id: Uuid, plan: SubscriptionPlan) -> DbErrorResult<bool> {
        let result = sqlx::query("UPDATE users SET plan = ? WHERE id = ?")
            .bind(plan.as_str())
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn map_user(row: &SqliteRow) -> DbErrorResult<UserProfile> {
    let id: String = row.try_get("id")?;
    let plan: String = row.try_get("plan")?;

    Ok(UserProfile {
        id: parse_uuid(TABLE, &id)?,
        auth_user_id: row.try_get("auth_user_id")?,
        name: row.try_get("name")?,
        last_name: row.try_get("last_name")?,
        plan: SubscriptionPlan::from_str(&plan)
            .map_err(|_| DbError::decode(TABLE, format!("unknown plan '{plan}'")))?,
        email: row.try_get("email")?,
    })
}
